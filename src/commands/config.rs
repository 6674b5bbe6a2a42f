use crate::config::{config_file_path, load_config_from, save_config_to, WorkshopConfig};
use crate::error::{Error, Result};
use clap::Subcommand;
use std::path::Path;

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show config file path
    Path,
    /// Print the effective configuration (token redacted)
    Show,
    /// Update one or more configuration values
    Set {
        /// Base URL of the workshop API
        #[arg(long)]
        api_url: Option<String>,
        /// Bearer token; pass an empty string to clear it
        #[arg(long)]
        token: Option<String>,
        /// Request timeout in seconds
        #[arg(long)]
        timeout: Option<u64>,
    },
}

pub fn handle(cmd: ConfigCommands) -> Result<()> {
    let file = config_file_path()?;
    match cmd {
        ConfigCommands::Path => println!("{}", file.display()),
        ConfigCommands::Show => {
            let cfg = load_config_from(&file)?;
            println!("{}", show(&cfg)?);
        }
        ConfigCommands::Set {
            api_url,
            token,
            timeout,
        } => {
            apply_set(&file, api_url, token, timeout)?;
            println!("Configuration saved to {}", file.display());
        }
    }
    Ok(())
}

fn show(cfg: &WorkshopConfig) -> Result<String> {
    let mut redacted = cfg.clone();
    if redacted.token.is_some() {
        redacted.token = Some("********".to_string());
    }
    Ok(toml::to_string_pretty(&redacted)?)
}

fn apply_set(
    file: &Path,
    api_url: Option<String>,
    token: Option<String>,
    timeout: Option<u64>,
) -> Result<WorkshopConfig> {
    if api_url.is_none() && token.is_none() && timeout.is_none() {
        return Err(Error::Invalid(
            "Nothing to set; pass --api-url, --token or --timeout".to_string(),
        ));
    }

    let mut cfg = load_config_from(file)?;
    if let Some(url) = api_url {
        let url = url.trim().to_string();
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(Error::Invalid(format!(
                "API URL '{}' must start with http:// or https://",
                url
            )));
        }
        cfg.api_url = url;
    }
    if let Some(token) = token {
        cfg.token = Some(token).filter(|t| !t.is_empty());
    }
    if let Some(timeout) = timeout {
        if timeout == 0 {
            return Err(Error::Invalid("Timeout must be at least 1 second".to_string()));
        }
        cfg.request_timeout_secs = timeout;
    }

    save_config_to(file, &cfg)?;
    Ok(cfg)
}
