pub mod edit;
pub mod init;
pub mod list;
pub mod load;
pub mod show;

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};

use crate::error::Result;
use crate::settings::{load_settings, Settings};

pub(crate) fn parse_iso_date(raw: &str) -> std::result::Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| format!("expected YYYY-MM-DD, got '{raw}'"))
}

#[derive(Parser)]
#[command(
    name = "debt-loader",
    version,
    about = "Validate a semicolon-delimited customer debt file and load it into the deudas table."
)]
pub struct Cli {
    /// Debt file to load (default: deuda_clientes.txt)
    #[arg(long, global = true, env = "DEBT_LOADER_FILE")]
    pub file: Option<PathBuf>,

    /// SQLite database holding the deudas table (default: deudas_clientes.db)
    #[arg(long, global = true, env = "DEBT_LOADER_DB")]
    pub db: Option<PathBuf>,

    /// Settings file (default: ~/.config/debt-loader/settings.json if present)
    #[arg(long, global = true, env = "DEBT_LOADER_CONFIG")]
    pub config: Option<PathBuf>,

    /// More diagnostics on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only report errors on stderr
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Defaults, then the settings file, then env/flags.
    pub fn settings(&self) -> Result<Settings> {
        let settings = load_settings(self.config.as_deref())?;
        Ok(settings.with_overrides(self.file.clone(), self.db.clone()))
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Validate the debt file and insert every record in one transaction (default).
    Load {
        /// Validate only; do not touch the database
        #[arg(long = "dry-run")]
        dry_run: bool,
    },
    /// Create the deudas table if it does not exist.
    Init,
    /// List stored debts.
    List {
        /// Only debts of this client (id_cliente)
        #[arg(long)]
        cliente: Option<String>,
        /// Only debts due on this date: YYYY-MM-DD
        #[arg(long, value_parser = parse_iso_date)]
        vence: Option<NaiveDate>,
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },
    /// Show one debt by id_deuda.
    Show {
        /// Debt id
        id_deuda: String,
    },
    /// Insert one debt given as a line of the input file.
    Add {
        /// id_cliente;nombre;correo;monto_deuda;id_deuda;fecha_vencimiento
        record: String,
    },
    /// Replace the debt whose id_deuda matches the given line.
    Update {
        /// id_cliente;nombre;correo;monto_deuda;id_deuda;fecha_vencimiento
        record: String,
    },
    /// Delete one debt by id_deuda.
    Delete {
        /// Debt id
        id_deuda: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table
    Table,
    /// JSON array
    Json,
    /// Semicolon-delimited, same layout as the input file
    Source,
}
