mod commands;
mod terminal;

use commands::{CommandLine, scan};
use terminal::logging;
use tracing::error;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init_logging();

    let cfg = match commands.to_config() {
        Ok(cfg) => cfg,
        Err(err) => {
            error!("{err}");
            std::process::exit(commands::exit_code(&err));
        }
    };

    scan::scan(&cfg).await
}
