use crate::db::{get_connection, init_db, table_exists};
use crate::error::Result;
use crate::settings::Settings;

pub fn run(settings: &Settings) -> Result<()> {
    if let Some(parent) = settings.database.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let conn = get_connection(&settings.database)?;
    if table_exists(&conn)? {
        println!("Table deudas already present in {}", settings.database.display());
        return Ok(());
    }
    init_db(&conn)?;
    println!("Initialized table deudas in {}", settings.database.display());
    Ok(())
}
