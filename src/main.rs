//! CLI entry point for perfect maze generation

use clap::Parser;
use mazeforge::io::cli::{Cli, MazeRunner};

fn main() -> mazeforge::Result<()> {
    let cli = Cli::parse();
    env_logger::Builder::new()
        .filter_level(cli.log_level())
        .parse_default_env()
        .init();

    let mut runner = MazeRunner::new(cli);
    runner.process()
}
