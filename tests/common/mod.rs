use assert_cmd::cargo_bin;
use std::io::Write;
use tempfile::NamedTempFile;

/// Builds a command for the binary with the given stdin script.
pub fn session(script: &str) -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::new(cargo_bin!("vendmach"));
    cmd.write_stdin(script.to_string());
    cmd
}

/// Writes a stock CSV with a header and the given `(name, price, stock)` rows.
#[allow(dead_code)]
pub fn stock_file(rows: &[(&str, u32, u32)]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "name, price, stock").unwrap();
    for (name, price, stock) in rows {
        writeln!(file, "{name}, {price}, {stock}").unwrap();
    }
    file
}
