mod commands;
mod terminal;

use commands::{CommandLine, Commands, area, kinds, onboard, roles};
use solid_common::config::Config;
use terminal::{logging, print};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init_logging();

    let cfg: Config = commands.config();
    print::banner(cfg.no_banner, cfg.quiet);

    let result = match commands.command {
        Commands::Area { shapes } => area::area(&shapes, &cfg),
        Commands::Kinds => kinds::kinds(&cfg),
        Commands::Onboard { name, email } => onboard::onboard(&name, &email, &cfg).await,
        Commands::Roles => roles::roles(&cfg),
    };

    print::end_of_program(cfg.quiet);
    result
}
