fn main() {
    buildspace::app::cli::run();
}
