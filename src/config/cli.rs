use super::credentials::{Credentials, API_TOKEN_ENV, CLIENT_ID_ENV};
use super::toml_config::TomlConfig;
use super::{ClientSettings, DEFAULT_BASE_URL};
use crate::core::ConfigProvider;
use crate::domain::model::AssetClass;
use crate::utils::error::{AlphaStreamError, Result};
use crate::utils::validation::{validate_positive_number, validate_url, Validate};
use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use std::time::Duration;

const DEFAULT_TIMEOUT_SECONDS: u64 = 30;
const DEFAULT_RETRY_ATTEMPTS: u32 = 2;
const DEFAULT_RETRY_DELAY_SECONDS: u64 = 1;

#[derive(Clone, Parser)]
#[command(name = "alphastream")]
#[command(about = "Query and manage alphas on the AlphaStream marketplace")]
pub struct CliConfig {
    #[arg(long, help = "TOML config file; flags that differ from their defaults override it")]
    pub config: Option<String>,

    #[arg(long, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    #[arg(long, env = CLIENT_ID_ENV)]
    pub client_id: Option<String>,

    #[arg(long, env = API_TOKEN_ENV, hide_env_values = true)]
    pub api_token: Option<String>,

    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECONDS)]
    pub timeout_seconds: u64,

    #[arg(long, default_value_t = DEFAULT_RETRY_ATTEMPTS)]
    pub retry_attempts: u32,

    #[arg(long, default_value_t = DEFAULT_RETRY_DELAY_SECONDS)]
    pub retry_delay_seconds: u64,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Show one alpha
    Alpha { id: String },

    /// List the insights of an alpha
    Insights {
        id: String,
        #[arg(long, default_value_t = 0)]
        start: usize,
        #[arg(long, help = "Follow pages until the end")]
        all: bool,
    },

    /// List ask and bid prices of an alpha
    Prices {
        id: String,
        #[arg(long, default_value_t = 0)]
        start: usize,
        #[arg(long)]
        all: bool,
    },

    /// List runtime errors of an alpha
    Errors {
        id: String,
        #[arg(long, default_value_t = 0)]
        start: usize,
        #[arg(long)]
        all: bool,
    },

    /// List the ids of all visible alphas
    List,

    /// Show one author
    Author { id: String },

    /// Search alphas by author, asset class, symbol and score ranges
    SearchAlphas {
        #[arg(long)]
        author: Option<String>,
        #[arg(long = "asset-class", value_delimiter = ',')]
        asset_classes: Vec<AssetClass>,
        #[arg(long = "symbol", value_delimiter = ',')]
        symbols: Vec<String>,
        #[arg(long = "include-tag", value_delimiter = ',')]
        include_tags: Vec<String>,
        #[arg(long = "exclude-tag", value_delimiter = ',')]
        exclude_tags: Vec<String>,
        #[arg(long)]
        min_accuracy: Option<f64>,
        #[arg(long)]
        max_accuracy: Option<f64>,
        #[arg(long)]
        min_sharpe: Option<f64>,
        #[arg(long)]
        max_sharpe: Option<f64>,
        #[arg(long)]
        min_uniqueness: Option<f64>,
        #[arg(long)]
        max_uniqueness: Option<f64>,
        #[arg(long)]
        max_shared_fee: Option<Decimal>,
        #[arg(long)]
        max_exclusive_fee: Option<Decimal>,
        #[arg(long)]
        all: bool,
    },

    /// Search authors by biography, language, location and activity
    SearchAuthors {
        #[arg(long)]
        biography: Option<String>,
        #[arg(long = "language", value_delimiter = ',')]
        languages: Vec<String>,
        #[arg(long)]
        location: Option<String>,
        #[arg(long)]
        min_alphas_listed: Option<i64>,
        #[arg(long)]
        min_projects: Option<i64>,
        #[arg(long)]
        min_forum_comments: Option<i64>,
        #[arg(long, help = "Only authors who logged in within this many days")]
        active_within_days: Option<i64>,
        #[arg(long)]
        all: bool,
    },

    /// Subscribe to an alpha
    Subscribe {
        id: String,
        #[arg(long, help = "Request an exclusive license instead of a shared one")]
        exclusive: bool,
    },

    /// Cancel a subscription
    Unsubscribe { id: String },

    /// Start a conversation with the author of an alpha
    Converse {
        id: String,
        #[arg(long)]
        from: String,
        #[arg(long)]
        subject: String,
        #[arg(long)]
        message: String,
        #[arg(long)]
        cc: Option<String>,
    },

    /// Place a bid on an alpha
    Bid {
        id: String,
        #[arg(long)]
        shared: Option<Decimal>,
        #[arg(long)]
        exclusive: Option<Decimal>,
        #[arg(long, default_value_t = 24)]
        valid_for_hours: i64,
    },
}

/// Logger options after merging `--verbose` / `--log-json` with `[logging]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LogSettings {
    pub verbose: bool,
    pub json: bool,
}

impl CliConfig {
    /// 讀取並驗證 `--config` 指定的 TOML 檔
    pub fn load_file(&self) -> Result<Option<TomlConfig>> {
        match &self.config {
            Some(path) => {
                let file = TomlConfig::from_file(path)?;
                file.validate()?;
                Ok(Some(file))
            }
            None => Ok(None),
        }
    }

    /// 命令列旗標與 `[logging]` 任一開啟即生效
    pub fn log_settings(&self, file: Option<&TomlConfig>) -> LogSettings {
        LogSettings {
            verbose: self.verbose || file.is_some_and(TomlConfig::verbose),
            json: self.log_json || file.is_some_and(TomlConfig::json_logs),
        }
    }

    pub fn resolve(&self) -> Result<ClientSettings> {
        let file = self.load_file()?;
        self.resolve_with(file.as_ref())
    }

    /// 合併 TOML 檔與命令列參數；命令列上與預設值不同的參數優先
    pub fn resolve_with(&self, file: Option<&TomlConfig>) -> Result<ClientSettings> {
        let mut settings = match file {
            Some(file) => ClientSettings {
                base_url: file.base_url().to_string(),
                credentials: file.credentials(),
                timeout: file.timeout(),
                retry_attempts: file.retry_attempts(),
                retry_delay: file.retry_delay(),
                user_agent: file.user_agent().to_string(),
            },
            None => ClientSettings::default(),
        };

        let from_file = file.is_some();
        if !from_file || self.base_url != DEFAULT_BASE_URL {
            settings.base_url = self.base_url.clone();
        }
        if !from_file || self.timeout_seconds != DEFAULT_TIMEOUT_SECONDS {
            settings.timeout = Duration::from_secs(self.timeout_seconds);
        }
        if !from_file || self.retry_attempts != DEFAULT_RETRY_ATTEMPTS {
            settings.retry_attempts = self.retry_attempts;
        }
        if !from_file || self.retry_delay_seconds != DEFAULT_RETRY_DELAY_SECONDS {
            settings.retry_delay = Duration::from_secs(self.retry_delay_seconds);
        }

        match (&self.client_id, &self.api_token) {
            (Some(client_id), Some(api_token)) => {
                settings.credentials = Some(Credentials::new(client_id, api_token));
            }
            (Some(_), None) => {
                return Err(AlphaStreamError::MissingConfigError {
                    field: "--api-token".to_string(),
                })
            }
            (None, Some(_)) => {
                return Err(AlphaStreamError::MissingConfigError {
                    field: "--client-id".to_string(),
                })
            }
            (None, None) => {}
        }

        settings.validate()?;
        Ok(settings)
    }
}

impl std::fmt::Debug for CliConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CliConfig")
            .field("config", &self.config)
            .field("base_url", &self.base_url)
            .field("client_id", &self.client_id)
            .field("api_token", &self.api_token.as_ref().map(|_| "<redacted>"))
            .field("timeout_seconds", &self.timeout_seconds)
            .field("retry_attempts", &self.retry_attempts)
            .field("retry_delay_seconds", &self.retry_delay_seconds)
            .field("verbose", &self.verbose)
            .field("log_json", &self.log_json)
            .field("command", &self.command)
            .finish()
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("--base-url", &self.base_url)?;
        validate_positive_number("--timeout-seconds", self.timeout_seconds, 1)
    }
}
