//! Handles settings for the application.
//!
//! Sources, lowest precedence first: built-in defaults, `settings.toml`
//! (or `--config`), `TAXLEDGER_*` environment variables, command line flags.
use clap::Parser;
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

const DEFAULT_CONFIG_PATH: &str = "settings";

#[derive(Debug, Deserialize)]
pub struct App {
    pub level: String,
}

#[derive(Debug, Deserialize)]
pub struct Server {
    pub bind: String,
    pub port: u16,
    pub database_url: String,
}

#[derive(Debug, Deserialize)]
pub struct Advice {
    pub base_url: String,
    pub api_key: Option<String>,
    pub model: String,
    pub max_prompt_entries: usize,
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub app: App,
    pub server: Server,
    pub advice: Advice,
}

#[derive(Debug, Default, Parser)]
#[command(name = "taxledger", version)]
pub struct Args {
    /// Optional config file path (TOML).
    #[arg(long)]
    config: Option<String>,
    /// Override the listen address.
    #[arg(long)]
    bind: Option<String>,
    /// Override the listen port.
    #[arg(long)]
    port: Option<u16>,
    /// Override the database URL (e.g. sqlite:./taxledger.db?mode=rwc).
    #[arg(long, env = "DATABASE_URL")]
    database_url: Option<String>,
    /// API key of the completion service.
    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
    api_key: Option<String>,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        Self::load(Args::parse())
    }

    pub fn load(args: Args) -> Result<Self, ConfigError> {
        let config_path = args.config.as_deref().unwrap_or(DEFAULT_CONFIG_PATH);

        Config::builder()
            .set_default("app.level", "info")?
            .set_default("server.bind", "127.0.0.1")?
            .set_default("server.port", 8000)?
            .set_default("server.database_url", "sqlite:./taxledger.db?mode=rwc")?
            .set_default("advice.base_url", "https://api.openai.com/v1")?
            .set_default("advice.model", "gpt-4o-mini")?
            .set_default(
                "advice.max_prompt_entries",
                advisor::DEFAULT_MAX_PROMPT_ENTRIES as i64,
            )?
            .add_source(File::with_name(config_path).required(false))
            .add_source(
                Environment::with_prefix("TAXLEDGER")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_override_option("server.bind", args.bind)?
            .set_override_option("server.port", args.port.map(i64::from))?
            .set_override_option("server.database_url", args.database_url)?
            .set_override_option("advice.api_key", args.api_key)?
            .build()?
            .try_deserialize()
    }
}
