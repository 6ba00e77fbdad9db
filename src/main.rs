use clap::Parser;
use tracing_subscriber::EnvFilter;

use course_planner::cli::{self, Commands};

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("course_planner=debug,info")
    } else {
        EnvFilter::new("course_planner=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    match cli.command.unwrap_or(Commands::Menu) {
        Commands::Menu => {
            cli::menu::run(&cli.catalog)?;
        }
        Commands::List => {
            cli::catalog::run_list(&cli.catalog, cli.format, cli.verbose)?;
        }
        Commands::Show(args) => {
            cli::catalog::run_show(args, &cli.catalog, cli.format, cli.verbose)?;
        }
    }

    Ok(())
}
