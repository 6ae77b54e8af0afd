use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use lettre::message::Mailbox;
use portfolio_contact::ContactConfig;
use portfolio_notification::{EmailConfig, Provider};
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub contact: ContactConfig,
    #[serde(default)]
    pub email: EmailConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. `RESEND_API_KEY`
    /// 2. Environment variables (PORTFOLIO__SERVER__PORT, etc.)
    /// 3. Config file specified by path
    /// 4. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        builder = builder
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?
            .set_default("contact.from", "Portfolio Contact <onboarding@resend.dev>")?
            .set_default("contact.to", "o.ifeoluwah@gmail.com")?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        // Optional, ignored if missing
        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("PORTFOLIO")
                .separator("__")
                .try_parsing(true),
        );

        if let Ok(api_key) = env::var("RESEND_API_KEY") {
            builder = builder.set_override("email.api_key", api_key)?;
        }

        builder.build()?.try_deserialize()
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.server.port == 0 {
            return Err("Server port must be greater than 0".to_string());
        }

        match self.email.provider {
            Provider::Resend if self.email.api_key.is_empty() => {
                return Err("Resend API key is required (set RESEND_API_KEY)".to_string());
            }
            Provider::Smtp if self.email.smtp_host.is_empty() => {
                return Err("SMTP host is required when email provider is smtp".to_string());
            }
            _ => {}
        }

        if let Err(err) = self.contact.to.parse::<Mailbox>() {
            return Err(format!(
                "Contact recipient is not a valid mailbox: {} ({err})",
                self.contact.to
            ));
        }

        if let Err(err) = self.contact.from.parse::<Mailbox>() {
            return Err(format!(
                "Contact sender is not a valid mailbox: {} ({err})",
                self.contact.from
            ));
        }

        Ok(())
    }
}
