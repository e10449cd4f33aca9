use clap::Parser;
use sigscan::cli::{run, Cli};

fn main() -> std::process::ExitCode {
    run(Cli::parse())
}
