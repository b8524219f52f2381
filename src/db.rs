use std::path::Path;

use rusqlite::{Connection, OpenFlags};
use tracing::debug;

use crate::error::Result;

pub const TABLE: &str = "deudas";

pub const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS deudas (
    id_deuda TEXT PRIMARY KEY,
    id_cliente TEXT NOT NULL,
    nombre_cliente TEXT NOT NULL,
    correo TEXT NOT NULL,
    monto_deuda REAL NOT NULL,
    fecha_vencimiento TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_deudas_cliente ON deudas (id_cliente);
CREATE INDEX IF NOT EXISTS idx_deudas_vencimiento ON deudas (fecha_vencimiento);
";

const CONNECTION_PRAGMAS: &str = "PRAGMA journal_mode=WAL;";

pub fn get_connection(db_path: &Path) -> Result<Connection> {
    debug!(path = %db_path.display(), "opening database");
    let conn = Connection::open(db_path)?;
    conn.execute_batch(CONNECTION_PRAGMAS)?;
    Ok(conn)
}

/// Open a database that must already exist; never creates the file.
pub fn get_existing_connection(db_path: &Path) -> Result<Connection> {
    debug!(path = %db_path.display(), "opening existing database");
    let conn = Connection::open_with_flags(
        db_path,
        OpenFlags::SQLITE_OPEN_READ_WRITE | OpenFlags::SQLITE_OPEN_URI | OpenFlags::SQLITE_OPEN_NO_MUTEX,
    )?;
    conn.execute_batch(CONNECTION_PRAGMAS)?;
    Ok(conn)
}

pub fn init_db(conn: &Connection) -> Result<()> {
    conn.execute_batch(SCHEMA)?;
    Ok(())
}

pub fn table_exists(conn: &Connection) -> Result<bool> {
    let mut stmt = conn.prepare("SELECT 1 FROM sqlite_master WHERE type='table' AND name = ?1")?;
    Ok(stmt.exists([TABLE])?)
}

#[cfg(test)]
pub(crate) fn test_db() -> (tempfile::TempDir, Connection) {
    let dir = tempfile::tempdir().unwrap();
    let conn = get_connection(&dir.path().join("test.db")).unwrap();
    init_db(&conn).unwrap();
    (dir, conn)
}
