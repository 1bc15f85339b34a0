mod builder;

pub use builder::BuilderPort;
