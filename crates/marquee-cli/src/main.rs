//! CLI entry point - the composition root.
//!
//! Command dispatch routes to handlers which delegate to `MovieService`.

use clap::{CommandFactory, Parser};
use marquee_cli::{Cli, CliConfig, CliError, Commands, bootstrap, handlers};
use marquee_core::SearchCriteria;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables before clap reads them
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_logging(cli.verbose);

    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    let config = CliConfig {
        data_file: cli.data,
        reviews_file: cli.reviews,
    };

    if let Err(err) = run(command, &config).await {
        if let Some(cli_err) = err.downcast_ref::<CliError>() {
            eprintln!("Error: {cli_err}");
            std::process::exit(cli_err.exit_code());
        }
        return Err(err);
    }
    Ok(())
}

/// Log to stderr so `search --json` output stays machine-readable.
fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(command: Commands, config: &CliConfig) -> anyhow::Result<()> {
    match command {
        Commands::Serve {
            host,
            port,
            allow_origin,
        } => handlers::serve::execute(config, host, port, allow_origin).await,
        Commands::Search {
            name,
            id,
            genre,
            json,
        } => {
            let ctx = bootstrap(config);
            handlers::search::execute(&ctx, &SearchCriteria::new(name, id, genre), json)
        }
        Commands::Genres => handlers::genres::execute(&bootstrap(config)),
        Commands::Show { id } => handlers::show::execute(&bootstrap(config), id).await,
    }
}
