pub mod toml_config;

pub use toml_config::{ClientConfig, DEFAULT_API_URL};
