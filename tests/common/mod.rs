#![allow(dead_code)]

use mortgage_calc::domain::loan::LoanParameters;
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output};

pub fn loan(house_price: i64, down_payment_flat: i64, down_payment_pct: f64) -> LoanParameters {
    LoanParameters {
        house_price,
        down_payment_flat,
        down_payment_pct,
        ..LoanParameters::default()
    }
}

pub fn write_temp_ini(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

pub fn binary() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_mortgage"))
}

/// Runs the binary with a clean environment for config and log settings.
pub fn run_binary(args: &[&str]) -> Output {
    Command::new(binary())
        .args(args)
        .env_remove("MORTGAGE_CONFIG")
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to spawn mortgage binary")
}

pub fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}
