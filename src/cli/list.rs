use std::io::Write;

use colored::Colorize;
use comfy_table::{Cell, CellAlignment, Table};

use crate::cli::OutputFormat;
use crate::db::get_existing_connection;
use crate::error::{DebtError, Result};
use crate::fmt::{amount, due_date};
use crate::models::DebtRecord;
use crate::reports::{list_debts, DebtFilter, DebtListing};
use crate::settings::Settings;

pub fn run(settings: &Settings, filter: DebtFilter, format: OutputFormat) -> Result<()> {
    let conn = get_existing_connection(&settings.database)?;
    let listing = list_debts(&conn, &filter)?;

    match format {
        OutputFormat::Table => println!("{}", format_table(&listing)),
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&listing.debts)
                .map_err(|e| DebtError::Io(e.into()))?;
            println!("{json}");
        }
        OutputFormat::Source => {
            let stdout = std::io::stdout();
            write_source(stdout.lock(), &listing.debts)?;
        }
    }
    Ok(())
}

fn format_table(listing: &DebtListing) -> String {
    if listing.debts.is_empty() {
        return "No debts match the given filters.".to_string();
    }

    let mut table = Table::new();
    table.set_header(vec!["id_deuda", "id_cliente", "Nombre", "Correo", "Monto", "Vencimiento"]);
    for d in &listing.debts {
        table.add_row(vec![
            Cell::new(&d.debt_id),
            Cell::new(&d.client_id),
            Cell::new(&d.client_name),
            Cell::new(&d.email),
            Cell::new(amount(d.amount)).set_alignment(CellAlignment::Right),
            Cell::new(due_date(d.due_date)),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL".bold()),
        Cell::new(""),
        Cell::new(""),
        Cell::new(""),
        Cell::new(amount(listing.total_amount)).set_alignment(CellAlignment::Right),
        Cell::new(format!("{} debts", listing.debts.len())),
    ]);
    format!("Deudas\n{table}")
}

/// Write debts back out in the input file layout, so a dump can be reloaded.
pub fn write_source<W: Write>(out: W, debts: &[DebtRecord]) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new()
        .delimiter(b';')
        .has_headers(false)
        .from_writer(out);
    for d in debts {
        let monto = d.amount.to_string();
        let fecha = due_date(d.due_date);
        wtr.write_record([
            d.client_id.as_str(),
            d.client_name.as_str(),
            d.email.as_str(),
            monto.as_str(),
            d.debt_id.as_str(),
            fecha.as_str(),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}
