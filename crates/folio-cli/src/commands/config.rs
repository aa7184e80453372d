//! Configuration check commands.

use clap::{Args, Subcommand};

use crate::output;
use folio_core::error::AppError;
use folio_database::connection::mask_password;

/// Arguments for config commands
#[derive(Debug, Args)]
pub struct ConfigArgs {
    /// Config subcommand
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Config subcommands
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Load and validate the configuration without starting anything
    Validate,
}

/// Execute config commands
pub async fn execute(args: &ConfigArgs, env: &str) -> Result<(), AppError> {
    match &args.command {
        ConfigCommand::Validate => {
            let config = super::load_config(env)
                .map_err(|e| AppError::configuration(format!("Configuration invalid: {e}")))?;

            output::print_success(&format!("Configuration for '{env}' is valid"));
            output::print_kv("Server", &config.server.bind_address());
            output::print_kv("Database", &mask_password(&config.database.url));
            output::print_kv("CORS origins", &config.server.cors.origins().join(", "));
            output::print_kv(
                "Access token TTL",
                &format!("{} min", config.auth.access_ttl_minutes),
            );
            output::print_kv(
                "Refresh token TTL",
                &format!("{} days", config.auth.refresh_ttl_days),
            );
            output::print_kv(
                "Bootstrap endpoint",
                if config.auth.bootstrap_enabled { "enabled" } else { "disabled" },
            );
        }
    }

    Ok(())
}
