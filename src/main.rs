//! CLI entry point for greedy strip reassembly

use clap::Parser;
use unshred::io::cli::{Cli, Reassembler};
use unshred::io::logger::{init_with_level, level_for};

fn main() -> unshred::Result<()> {
    let cli = Cli::parse();
    // A logger installed by an embedding process takes precedence
    let _ = init_with_level(level_for(cli.verbose, cli.quiet));
    let mut reassembler = Reassembler::new(cli);
    reassembler.process().map(|_| ())
}
