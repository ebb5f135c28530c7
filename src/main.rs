use clap::Parser;

use chronos_timemap::cli::{Cli, Commands, RenderArgs};
use chronos_timemap::commands::{run_config, run_init, run_render};
use chronos_timemap::logging::init_logging;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    let exit_code = match &cli.command {
        None => run_render(&RenderArgs::default(), &cli),
        Some(Commands::Render(args)) => run_render(args, &cli),
        Some(Commands::Init(args)) => run_init(args),
        Some(Commands::Config(args)) => run_config(args, &cli),
    };

    std::process::exit(exit_code);
}
