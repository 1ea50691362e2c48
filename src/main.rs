use clap::Parser;
use mortgage_calc::cli::{run, Cli};

fn main() -> std::process::ExitCode {
    run(Cli::parse())
}
