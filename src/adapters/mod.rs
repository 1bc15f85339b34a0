pub mod builder_command;
pub mod filesystem;

pub use builder_command::CommandBuilder;
