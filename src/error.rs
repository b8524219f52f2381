use std::path::PathBuf;

use thiserror::Error;

pub const EXIT_OK: i32 = 0;
pub const EXIT_INPUT: i32 = 1;
pub const EXIT_FORMAT: i32 = 2;
pub const EXIT_DB: i32 = 3;
pub const EXIT_USAGE: i32 = 64;
pub const EXIT_CONFIG: i32 = 78;

/// The rule a single input line broke.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FormatError {
    #[error("incorrect field count (expected 6, found {found})")]
    FieldCount { found: usize },

    #[error("monto_deuda is not numeric")]
    AmountNotNumeric,

    #[error("invalid fecha_vencimiento (use DD-MM-YYYY)")]
    InvalidDueDate,

    #[error("id_cliente or id_deuda is empty")]
    EmptyId,
}

#[derive(Error, Debug)]
pub enum DebtError {
    #[error("input file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("line {line}: {kind}")]
    Format { line: usize, kind: FormatError },

    #[error("invalid record: {0}")]
    InvalidRecord(FormatError),

    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Settings error: {0}")]
    Settings(String),

    #[error("Debt not found: {0}")]
    NotFound(String),
}

impl DebtError {
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::FileNotFound(_) | Self::Io(_) | Self::Csv(_) | Self::NotFound(_) => EXIT_INPUT,
            Self::Format { .. } | Self::InvalidRecord(_) => EXIT_FORMAT,
            Self::Db(_) => EXIT_DB,
            Self::Settings(_) => EXIT_CONFIG,
        }
    }

    /// Console prefix for the error line, one per failure class.
    pub fn label(&self) -> &'static str {
        match self {
            Self::FileNotFound(_) | Self::Io(_) | Self::Csv(_) | Self::NotFound(_) => "ERROR",
            Self::Format { .. } | Self::InvalidRecord(_) => "FORMAT ERROR",
            Self::Db(_) => "DB ERROR",
            Self::Settings(_) => "CONFIG ERROR",
        }
    }
}

pub type Result<T> = std::result::Result<T, DebtError>;
