use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind};
use std::path::Path;

use tracing::debug;

use crate::error::{DebtError, Result};
use crate::models::RawLine;

/// Read the debt file into trimmed, non-blank lines in file order.
///
/// Blank lines are dropped but still counted, so `RawLine::number` is the
/// line an editor would show.
pub fn read_lines(path: &Path) -> Result<Vec<RawLine>> {
    let file = File::open(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => DebtError::FileNotFound(path.to_path_buf()),
        _ => DebtError::Io(e),
    })?;

    let mut lines = Vec::new();
    for (idx, line) in BufReader::new(file).lines().enumerate() {
        let line = line?;
        let text = line.trim();
        if text.is_empty() {
            continue;
        }
        lines.push(RawLine {
            number: idx + 1,
            text: text.to_string(),
        });
    }

    debug!(path = %path.display(), lines = lines.len(), "read input file");
    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_file(dir: &Path, content: &str) -> std::path::PathBuf {
        let path = dir.join("deuda_clientes.txt");
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_missing_file_is_file_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_lines(&dir.path().join("nope.txt")).unwrap_err();
        assert!(matches!(err, DebtError::FileNotFound(_)));
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_reads_lines_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(
            dir.path(),
            "C1;Ana;ana@x.com;100.00;D1;31-12-2024\nC2;Luis;luis@x.com;50;D2;01-01-2025\n",
        );
        let lines = read_lines(&path).unwrap();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].text, "C1;Ana;ana@x.com;100.00;D1;31-12-2024");
        assert_eq!(lines[1].text, "C2;Luis;luis@x.com;50;D2;01-01-2025");
    }

    #[test]
    fn test_blank_lines_dropped_and_physical_numbers_kept() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(
            dir.path(),
            "\nC1;Ana;ana@x.com;100.00;D1;31-12-2024\n   \n\r\nC2;Luis;luis@x.com;50;D2;01-01-2025\n\n",
        );
        let lines = read_lines(&path).unwrap();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].number, 2);
        assert_eq!(lines[1].number, 5);
    }

    #[test]
    fn test_lines_are_trimmed() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(dir.path(), "  C1;Ana;ana@x.com;100.00;D1;31-12-2024  \r\n");
        let lines = read_lines(&path).unwrap();
        assert_eq!(lines[0].text, "C1;Ana;ana@x.com;100.00;D1;31-12-2024");
    }

    #[test]
    fn test_empty_file_yields_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(dir.path(), "");
        assert!(read_lines(&path).unwrap().is_empty());
    }
}
