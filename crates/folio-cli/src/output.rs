//! Table and JSON output formatting for CLI commands.

use serde::Serialize;
use tabled::{Table, Tabled};

use folio_entity::admin::Admin;

/// Output format selection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table
    #[default]
    Table,
    /// JSON output
    Json,
}

/// One admin, flattened for display. Never carries the hash.
#[derive(Debug, Serialize, Tabled)]
pub struct AdminRow {
    /// Admin ID.
    #[tabled(rename = "ID")]
    pub id: String,
    /// Login email.
    #[tabled(rename = "Email")]
    pub email: String,
    /// Display name.
    #[tabled(rename = "Username")]
    pub username: String,
    /// Creation time.
    #[tabled(rename = "Created")]
    pub created_at: String,
    /// Last update time.
    #[tabled(rename = "Updated")]
    pub updated_at: String,
}

impl From<&Admin> for AdminRow {
    fn from(admin: &Admin) -> Self {
        Self {
            id: admin.id.to_string(),
            email: admin.email.clone(),
            username: admin.username.clone().unwrap_or_default(),
            created_at: admin.created_at.format("%Y-%m-%d %H:%M:%S").to_string(),
            updated_at: admin.updated_at.format("%Y-%m-%d %H:%M:%S").to_string(),
        }
    }
}

/// Print a list of items in the selected format
pub fn print_list<T: Serialize + Tabled>(items: &[T], format: OutputFormat) {
    match format {
        OutputFormat::Table => {
            if items.is_empty() {
                println!("No results found.");
            } else {
                println!("{}", Table::new(items));
            }
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(items).unwrap_or_else(|_| "[]".to_string());
            println!("{json}");
        }
    }
}

/// Print a success message
pub fn print_success(msg: &str) {
    println!("✓ {msg}");
}

/// Print a warning message
pub fn print_warning(msg: &str) {
    println!("⚠ {msg}");
}

/// Print an error message
pub fn print_error(msg: &str) {
    eprintln!("✗ {msg}");
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:<24} {}", format!("{key}:"), value);
}
