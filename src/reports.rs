use chrono::NaiveDate;
use rusqlite::{params, Connection, OptionalExtension, Row};

use crate::error::{DebtError, Result};
use crate::models::DebtRecord;

/// Optional filters for listing stored debts.
#[derive(Debug, Clone, Default)]
pub struct DebtFilter {
    pub client_id: Option<String>,
    pub due_date: Option<NaiveDate>,
}

pub struct DebtListing {
    pub debts: Vec<DebtRecord>,
    pub total_amount: f64,
}

const SELECT_COLUMNS: &str =
    "SELECT id_deuda, id_cliente, nombre_cliente, correo, monto_deuda, fecha_vencimiento FROM deudas";

fn row_to_record(row: &Row<'_>) -> rusqlite::Result<DebtRecord> {
    Ok(DebtRecord {
        debt_id: row.get(0)?,
        client_id: row.get(1)?,
        client_name: row.get(2)?,
        email: row.get(3)?,
        amount: row.get(4)?,
        due_date: row.get(5)?,
    })
}

pub fn list_debts(conn: &Connection, filter: &DebtFilter) -> Result<DebtListing> {
    let mut clauses = Vec::new();
    let mut params: Vec<Box<dyn rusqlite::types::ToSql>> = Vec::new();
    if let Some(client) = &filter.client_id {
        params.push(Box::new(client.clone()));
        clauses.push(format!("id_cliente = ?{}", params.len()));
    }
    if let Some(date) = filter.due_date {
        params.push(Box::new(date));
        clauses.push(format!("fecha_vencimiento = ?{}", params.len()));
    }
    let where_clause = if clauses.is_empty() {
        String::new()
    } else {
        format!(" WHERE {}", clauses.join(" AND "))
    };

    let sql = format!("{SELECT_COLUMNS}{where_clause} ORDER BY fecha_vencimiento, id_deuda");
    let param_values: Vec<&dyn rusqlite::types::ToSql> = params.iter().map(|p| p.as_ref()).collect();
    let mut stmt = conn.prepare(&sql)?;
    let debts = stmt
        .query_map(param_values.as_slice(), row_to_record)?
        .collect::<std::result::Result<Vec<_>, _>>()?;

    let total_amount = debts.iter().map(|d| d.amount).sum();
    Ok(DebtListing { debts, total_amount })
}

pub fn get_debt(conn: &Connection, debt_id: &str) -> Result<DebtRecord> {
    conn.query_row(&format!("{SELECT_COLUMNS} WHERE id_deuda = ?1"), [debt_id], row_to_record)
        .optional()?
        .ok_or_else(|| DebtError::NotFound(debt_id.to_string()))
}

// ---------------------------------------------------------------------------
// Single-record writes
// ---------------------------------------------------------------------------

pub fn insert_debt(conn: &Connection, debt: &DebtRecord) -> Result<()> {
    conn.execute(
        "INSERT INTO deudas (id_deuda, id_cliente, nombre_cliente, correo, monto_deuda, fecha_vencimiento) \
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![debt.debt_id, debt.client_id, debt.client_name, debt.email, debt.amount, debt.due_date],
    )?;
    Ok(())
}

/// Replace every column of the debt with the same `id_deuda`.
pub fn update_debt(conn: &Connection, debt: &DebtRecord) -> Result<()> {
    let changed = conn.execute(
        "UPDATE deudas SET id_cliente = ?2, nombre_cliente = ?3, correo = ?4, monto_deuda = ?5, \
         fecha_vencimiento = ?6 WHERE id_deuda = ?1",
        params![debt.debt_id, debt.client_id, debt.client_name, debt.email, debt.amount, debt.due_date],
    )?;
    if changed == 0 {
        return Err(DebtError::NotFound(debt.debt_id.clone()));
    }
    Ok(())
}

pub fn delete_debt(conn: &Connection, debt_id: &str) -> Result<()> {
    let changed = conn.execute("DELETE FROM deudas WHERE id_deuda = ?1", [debt_id])?;
    if changed == 0 {
        return Err(DebtError::NotFound(debt_id.to_string()));
    }
    Ok(())
}
