use std::io::Write;
use tempfile::NamedTempFile;

/// Writes an op script (header + rows) to a temp file for CLI tests.
pub fn write_script(rows: &[&str]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "op, caller, amount, to").unwrap();
    for row in rows {
        writeln!(file, "{}", row).unwrap();
    }
    file
}
