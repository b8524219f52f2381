use chrono::NaiveDate;
use serde::Serialize;

/// One validated input line, in `deudas` column order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DebtRecord {
    pub debt_id: String,
    pub client_id: String,
    pub client_name: String,
    pub email: String,
    pub amount: f64,
    pub due_date: NaiveDate,
}

/// A non-blank, trimmed line of the input file.
#[derive(Debug, Clone, PartialEq)]
pub struct RawLine {
    /// Physical 1-based line number in the source file.
    pub number: usize,
    pub text: String,
}
