use comfy_table::{Cell, Table};

use crate::db::get_existing_connection;
use crate::error::Result;
use crate::fmt::{amount, due_date};
use crate::reports::get_debt;
use crate::settings::Settings;

pub fn run(settings: &Settings, debt_id: &str) -> Result<()> {
    let conn = get_existing_connection(&settings.database)?;
    let debt = get_debt(&conn, debt_id)?;

    let mut table = Table::new();
    table.add_row(vec![Cell::new("id_deuda"), Cell::new(&debt.debt_id)]);
    table.add_row(vec![Cell::new("id_cliente"), Cell::new(&debt.client_id)]);
    table.add_row(vec![Cell::new("nombre_cliente"), Cell::new(&debt.client_name)]);
    table.add_row(vec![Cell::new("correo"), Cell::new(&debt.email)]);
    table.add_row(vec![Cell::new("monto_deuda"), Cell::new(amount(debt.amount))]);
    table.add_row(vec![Cell::new("fecha_vencimiento"), Cell::new(due_date(debt.due_date))]);
    println!("{table}");
    Ok(())
}
