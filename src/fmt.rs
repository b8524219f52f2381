/// Format an amount with thousands separators and two decimals: 1,234.56
pub fn amount(val: f64) -> String {
    let cents = format!("{:.2}", val.abs());
    let (int_part, dec_part) = cents.split_once('.').unwrap_or((cents.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    let sign = if val < 0.0 && cents != "0.00" { "-" } else { "" };
    format!("{sign}{grouped}.{dec_part}")
}

/// Dates are shown the way the input file writes them.
pub fn due_date(date: chrono::NaiveDate) -> String {
    date.format(crate::parser::DUE_DATE_FORMAT).to_string()
}
