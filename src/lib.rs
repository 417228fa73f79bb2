pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod requests;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::{credentials::Credentials, toml_config::TomlConfig, ClientSettings};
pub use core::{client::AlphaStreamClient, paging::collect_pages};
pub use domain::ports::{ApiRequest, Executor};
pub use utils::error::{AlphaStreamError, Result};
