use clap::Parser;

/// The functional surface is a bare interactive session, so the parser
/// carries no options or positionals. It still supplies the conventional
/// `--help`/`--version` and rejects stray arguments with a usage error.
#[derive(Parser)]
#[command(name = "jeonse")]
#[command(version)]
#[command(about = "Computes the monthly interest on a jeonse lease deposit.")]
pub struct CommandLine {}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
