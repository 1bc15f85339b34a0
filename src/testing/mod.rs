pub mod fake_builder;

pub use fake_builder::FakeBuilder;
