//! Admin account management commands.

use clap::{Args, Subcommand};

use folio_core::error::AppError;

use crate::output::{self, AdminRow, OutputFormat};

/// Arguments for admin commands
#[derive(Debug, Args)]
pub struct AdminArgs {
    /// Admin subcommand
    #[command(subcommand)]
    pub command: AdminCommand,
}

/// Admin subcommands
#[derive(Debug, Subcommand)]
pub enum AdminCommand {
    /// Create a new admin account
    Create {
        /// Login email (will prompt if not provided)
        #[arg(short, long)]
        email: Option<String>,
        /// Display name
        #[arg(short, long)]
        username: Option<String>,
        /// Password (will prompt if not provided)
        #[arg(short, long)]
        password: Option<String>,
    },
    /// Reset an admin's password without the current one
    ResetPassword {
        /// Login email of the admin
        #[arg(short, long)]
        email: String,
        /// New password (will prompt if not provided)
        #[arg(short, long)]
        password: Option<String>,
    },
    /// Show an admin account
    Show {
        /// Login email of the admin
        email: String,
    },
}

/// Execute admin commands
pub async fn execute(args: &AdminArgs, env: &str, format: OutputFormat) -> Result<(), AppError> {
    let config = super::load_config(env)?;
    if config.database.is_memory() {
        output::print_warning("In-memory store configured; changes will not persist.");
    }
    let credentials = super::open_credentials(&config).await?;

    match &args.command {
        AdminCommand::Create {
            email,
            username,
            password,
        } => {
            let email = match email {
                Some(e) => e.clone(),
                None => dialoguer::Input::new()
                    .with_prompt("Admin email")
                    .interact_text()
                    .map_err(|e| AppError::internal(format!("Input error: {e}")))?,
            };

            let password = match password {
                Some(p) => p.clone(),
                None => prompt_password("Admin password")?,
            };

            let admin = credentials
                .create_admin(&email, &password, username.clone())
                .await?;

            output::print_success(&format!(
                "Admin '{}' created (id: {})",
                admin.email, admin.id
            ));
        }
        AdminCommand::ResetPassword { email, password } => {
            let password = match password {
                Some(p) => p.clone(),
                None => prompt_password("New password")?,
            };

            let admin = credentials.reset_password(email, &password).await?;
            output::print_success(&format!("Password reset for admin '{}'", admin.email));
        }
        AdminCommand::Show { email } => {
            let admin = credentials
                .find_admin_by_email(email)
                .await?
                .ok_or_else(|| AppError::not_found(format!("Admin '{email}' not found")))?;
            output::print_list(&[AdminRow::from(&admin)], format);
        }
    }

    Ok(())
}

fn prompt_password(prompt: &str) -> Result<String, AppError> {
    dialoguer::Password::new()
        .with_prompt(prompt)
        .with_confirmation("Confirm password", "Passwords do not match")
        .interact()
        .map_err(|e| AppError::internal(format!("Input error: {e}")))
}
