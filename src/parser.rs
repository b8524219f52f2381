use chrono::NaiveDate;

use crate::error::{DebtError, FormatError, Result};
use crate::models::{DebtRecord, RawLine};

pub const DELIMITER: char = ';';
pub const FIELD_COUNT: usize = 6;
pub const DUE_DATE_FORMAT: &str = "%d-%m-%Y";

// Input column positions:
// id_cliente;nombre;correo;monto_deuda;id_deuda;fecha_vencimiento
const COL_CLIENT_ID: usize = 0;
const COL_NAME: usize = 1;
const COL_EMAIL: usize = 2;
const COL_AMOUNT: usize = 3;
const COL_DEBT_ID: usize = 4;
const COL_DUE_DATE: usize = 5;

pub fn parse_amount(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Day and month may be unpadded; the year must be exactly four digits.
pub fn parse_due_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    let (_, year) = raw.rsplit_once('-')?;
    if year.len() != 4 || !year.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    NaiveDate::parse_from_str(raw, DUE_DATE_FORMAT).ok()
}

/// Validate one line and reorder it into a [`DebtRecord`].
///
/// Checks run in a fixed order and the first failure is reported: field
/// count, amount, due date, then the two ids.
pub fn parse_line(line: &RawLine) -> std::result::Result<DebtRecord, FormatError> {
    let fields: Vec<&str> = line.text.split(DELIMITER).map(str::trim).collect();
    if fields.len() != FIELD_COUNT {
        return Err(FormatError::FieldCount { found: fields.len() });
    }

    let amount = parse_amount(fields[COL_AMOUNT]).ok_or(FormatError::AmountNotNumeric)?;
    let due_date = parse_due_date(fields[COL_DUE_DATE]).ok_or(FormatError::InvalidDueDate)?;

    let client_id = fields[COL_CLIENT_ID];
    let debt_id = fields[COL_DEBT_ID];
    if client_id.is_empty() || debt_id.is_empty() {
        return Err(FormatError::EmptyId);
    }

    Ok(DebtRecord {
        debt_id: debt_id.to_string(),
        client_id: client_id.to_string(),
        client_name: fields[COL_NAME].to_string(),
        email: fields[COL_EMAIL].to_string(),
        amount,
        due_date,
    })
}

/// Validate a single record given outside the input file (e.g. on the command line).
pub fn parse_record(text: &str) -> Result<DebtRecord> {
    let line = RawLine {
        number: 1,
        text: text.trim().to_string(),
    };
    parse_line(&line).map_err(DebtError::InvalidRecord)
}

/// Parse every line, stopping at the first one that fails.
pub fn parse_all(lines: &[RawLine]) -> Result<Vec<DebtRecord>> {
    lines
        .iter()
        .map(|line| {
            parse_line(line).map_err(|kind| DebtError::Format {
                line: line.number,
                kind,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(number: usize, text: &str) -> RawLine {
        RawLine { number, text: text.to_string() }
    }

    #[test]
    fn test_parse_line_reorders_fields() {
        let rec = parse_line(&raw(1, "C1;Ana;ana@x.com;100.00;D1;31-12-2024")).unwrap();
        assert_eq!(
            rec,
            DebtRecord {
                debt_id: "D1".into(),
                client_id: "C1".into(),
                client_name: "Ana".into(),
                email: "ana@x.com".into(),
                amount: 100.0,
                due_date: NaiveDate::from_ymd_opt(2024, 12, 31).unwrap(),
            }
        );
    }

    #[test]
    fn test_field_count_too_few_and_too_many() {
        assert_eq!(
            parse_line(&raw(1, "C1;Ana;ana@x.com;100.00;D1")),
            Err(FormatError::FieldCount { found: 5 })
        );
        assert_eq!(
            parse_line(&raw(1, "C1;Ana;ana@x.com;100.00;D1;31-12-2024;extra")),
            Err(FormatError::FieldCount { found: 7 })
        );
    }

    #[test]
    fn test_amount_not_numeric() {
        assert_eq!(
            parse_line(&raw(1, "C1;Ana;ana@x.com;abc;D1;31-12-2024")),
            Err(FormatError::AmountNotNumeric)
        );
        assert_eq!(
            parse_line(&raw(1, "C1;Ana;ana@x.com;;D1;31-12-2024")),
            Err(FormatError::AmountNotNumeric)
        );
        assert_eq!(
            parse_line(&raw(1, "C1;Ana;ana@x.com;1,500.00;D1;31-12-2024")),
            Err(FormatError::AmountNotNumeric)
        );
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("150.50"), Some(150.5));
        assert_eq!(parse_amount(" -20 "), Some(-20.0));
        assert_eq!(parse_amount("1e3"), Some(1000.0));
        assert_eq!(parse_amount("NaN"), None);
        assert_eq!(parse_amount("inf"), None);
        assert_eq!(parse_amount("$10"), None);
        assert_eq!(parse_amount("1_000"), None);
    }

    #[test]
    fn test_invalid_due_date() {
        for bad in [
            "2024-12-31",
            "31/12/2024",
            "31-02-2024",
            "32-01-2024",
            "31-12-24",
            "31-12-20245",
            "31-12-+024",
            "",
            "mañana",
        ] {
            let line = format!("C1;Ana;ana@x.com;100;D1;{bad}");
            assert_eq!(
                parse_line(&raw(1, &line)),
                Err(FormatError::InvalidDueDate),
                "accepted {bad:?}"
            );
        }
    }

    #[test]
    fn test_parse_due_date_short_year_rejected() {
        assert_eq!(parse_due_date("31-12-24"), None);
        assert_eq!(parse_due_date("1-1-0024"), NaiveDate::from_ymd_opt(24, 1, 1));
    }

    #[test]
    fn test_parse_due_date_unpadded_day_and_month() {
        assert_eq!(parse_due_date("1-1-2024"), NaiveDate::from_ymd_opt(2024, 1, 1));
        assert_eq!(parse_due_date(" 9-03-2025 "), NaiveDate::from_ymd_opt(2025, 3, 9));
    }

    #[test]
    fn test_parse_due_date_leap_year() {
        assert_eq!(parse_due_date("29-02-2024"), NaiveDate::from_ymd_opt(2024, 2, 29));
        assert_eq!(parse_due_date("29-02-2023"), None);
    }

    #[test]
    fn test_empty_ids() {
        assert_eq!(
            parse_line(&raw(1, ";Ana;ana@x.com;100;D1;31-12-2024")),
            Err(FormatError::EmptyId)
        );
        assert_eq!(
            parse_line(&raw(1, "C1;Ana;ana@x.com;100;   ;31-12-2024")),
            Err(FormatError::EmptyId)
        );
    }

    #[test]
    fn test_amount_checked_before_ids() {
        assert_eq!(
            parse_line(&raw(1, ";Ana;ana@x.com;abc;;31-12-2024")),
            Err(FormatError::AmountNotNumeric)
        );
    }

    #[test]
    fn test_name_and_email_are_free_text() {
        let rec = parse_line(&raw(1, "C9;;not-an-email;0;D9;01-01-2030")).unwrap();
        assert_eq!(rec.client_name, "");
        assert_eq!(rec.email, "not-an-email");
        assert_eq!(rec.amount, 0.0);
    }

    #[test]
    fn test_parse_all_stops_at_first_bad_line() {
        let lines = vec![
            raw(1, "C1;Ana;ana@x.com;100.00;D1;31-12-2024"),
            raw(3, "C2;Luis;luis@x.com;abc;D2;31-12-2024"),
            raw(4, "C3;Eva;eva@x.com;5;D3"),
        ];
        match parse_all(&lines).unwrap_err() {
            DebtError::Format { line, kind } => {
                assert_eq!(line, 3);
                assert_eq!(kind, FormatError::AmountNotNumeric);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_parse_record_uses_line_rules() {
        let rec = parse_record(" C1;Ana;ana@x.com;10;D1;01-02-2025 ").unwrap();
        assert_eq!(rec.debt_id, "D1");
        assert!(matches!(
            parse_record("C1;Ana;ana@x.com;10;D1;01-02-25"),
            Err(DebtError::InvalidRecord(FormatError::InvalidDueDate))
        ));
    }

    #[test]
    fn test_parse_all_preserves_order() {
        let lines = vec![
            raw(1, "C1;Ana;ana@x.com;100.00;D1;31-12-2024"),
            raw(2, "C2;Luis;luis@x.com;20.5;D2;01-06-2025"),
        ];
        let records = parse_all(&lines).unwrap();
        let ids: Vec<&str> = records.iter().map(|r| r.debt_id.as_str()).collect();
        assert_eq!(ids, ["D1", "D2"]);
    }
}
