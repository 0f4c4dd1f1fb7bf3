mod commands;
mod session;
mod terminal;

use commands::CommandLine;
use terminal::logging;

fn main() -> anyhow::Result<()> {
    CommandLine::parse_args();

    logging::init();

    session::run()
}
