pub mod kv;
pub mod parse;

pub use kv::{KeyValue, parse_key_values, render_key_values};
pub use parse::{ConfigFileContent, DIR_KEY, parse_config_content, render_config_content};
