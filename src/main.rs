use clap::Parser;
use decitrader::cli::{run, Cli};

fn main() -> std::process::ExitCode {
    run(Cli::parse())
}
