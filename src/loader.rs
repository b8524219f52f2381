use rusqlite::{params, Connection, Transaction};
use tracing::{debug, info, warn};

use crate::error::Result;
use crate::models::DebtRecord;

const INSERT_SQL: &str = "INSERT INTO deudas \
    (id_deuda, id_cliente, nombre_cliente, correo, monto_deuda, fecha_vencimiento) \
    VALUES (?1, ?2, ?3, ?4, ?5, ?6)";

fn insert_all(tx: &Transaction<'_>, records: &[DebtRecord]) -> Result<usize> {
    let mut stmt = tx.prepare(INSERT_SQL)?;
    for rec in records {
        stmt.execute(params![
            rec.debt_id,
            rec.client_id,
            rec.client_name,
            rec.email,
            rec.amount,
            rec.due_date,
        ])?;
    }
    Ok(records.len())
}

/// Insert every record in one transaction.
///
/// Either all rows are committed or the transaction is rolled back and the
/// driver error is returned; nothing is written on failure.
pub fn load_records(conn: &mut Connection, records: &[DebtRecord]) -> Result<usize> {
    let tx = conn.transaction()?;
    match insert_all(&tx, records) {
        Ok(inserted) => {
            tx.commit()?;
            info!(inserted, "batch committed");
            Ok(inserted)
        }
        Err(e) => {
            debug!(error = %e, "batch insert failed, rolling back");
            if let Err(rb) = tx.rollback() {
                warn!(error = %rb, "rollback failed");
            }
            Err(e)
        }
    }
}
