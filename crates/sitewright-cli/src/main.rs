//! Sitewright CLI entry point.
//!
//! Binary name: `swright`
//!
//! Parses CLI arguments, loads configuration for the workspace directory,
//! then dispatches to the appropriate command handler.

mod cli;
mod state;

use clap::Parser;
use clap_complete::generate;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands, DocTarget};
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up tracing based on verbosity
    let filter = match cli.verbose {
        0 if cli.quiet => "error",
        0 => "warn",
        1 => "info,sitewright=debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .init();

    // Shell completions don't need app state
    if let Commands::Completions { shell } = &cli.command {
        let mut cmd = <Cli as clap::CommandFactory>::command();
        generate(*shell, &mut cmd, "swright", &mut std::io::stdout());
        return Ok(());
    }

    // A local .env may carry ANTHROPIC_API_KEY
    dotenvy::dotenv().ok();

    let state = AppState::init(cli.workspace.clone()).await?;

    match cli.command {
        Commands::Sitemap {
            name,
            description,
            layout,
            force,
        } => {
            cli::sitemap::generate_sitemap(&state, name, description, layout, force, cli.json)
                .await?;
        }

        Commands::Brand {
            name,
            description,
            logo,
            colors,
            force,
        } => {
            cli::brand::generate_brand(&state, name, description, logo, colors, force, cli.json)
                .await?;
        }

        Commands::Build {
            input,
            sitemap,
            brand,
            out,
        } => {
            cli::build::build_site(&state, &input, sitemap, brand, out, cli.json).await?;
        }

        Commands::Generate {
            name,
            description,
            layout,
            logo,
            colors,
            out,
        } => {
            cli::generate::generate_all(&state, name, description, layout, logo, colors, out, cli.json)
                .await?;
        }

        Commands::Edit { target, edits } => match target {
            DocTarget::Sitemap => cli::edit::edit_sitemap(&state, &edits, cli.json).await?,
            DocTarget::Brand => cli::edit::edit_brand(&state, &edits, cli.json).await?,
        },

        Commands::Show { target } => match target {
            DocTarget::Sitemap => cli::show::show_sitemap(&state, cli.json).await?,
            DocTarget::Brand => cli::show::show_brand(&state, cli.json).await?,
        },

        Commands::Completions { .. } => unreachable!("handled above"),
    }

    Ok(())
}
