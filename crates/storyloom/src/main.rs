//! Storyloom CLI binary.
//!
//! This binary provides command-line access to Storyloom:
//! - Serve the book form over HTTP
//! - Generate one book as JSON
//! - Render a single scene
//! - List the art-style catalog

use clap::Parser;
use storyloom_core::StoryloomConfig;

mod cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use cli::{Cli, Commands, handle_generate, handle_illustrate, handle_serve, handle_styles};

    let _ = dotenvy::dotenv();

    // Parse command-line arguments
    let cli = Cli::parse();

    // Loaded before logging is up so span export can carry the backend models
    let config = StoryloomConfig::from_file(&cli.config)?;

    #[cfg(feature = "observability")]
    let provider = storyloom::observability::init_observability_with_config(
        storyloom::observability::ObservabilityConfig::default()
            .with_verbose(cli.verbose)
            .with_json_logs(cli.json_logs)
            .with_backends(&config),
    )?;
    #[cfg(not(feature = "observability"))]
    storyloom::telemetry::init_console_telemetry(cli.verbose, cli.json_logs)?;

    tracing::info!(
        config = %cli.config.display(),
        text_model = %config.ollama().model(),
        image_model = %config.stable_diffusion().default_model(),
        "Starting storyloom"
    );

    // Execute the requested command
    let result = match cli.command {
        Commands::Serve { addr } => handle_serve(config, addr).await,

        Commands::Generate {
            description,
            genre,
            style,
            reference,
            output,
        } => {
            handle_generate(
                config,
                cli::GenerateArgs {
                    description,
                    genre,
                    style,
                    reference,
                    output,
                },
            )
            .await
        }

        Commands::Illustrate {
            reference,
            steps,
            output,
        } => handle_illustrate(config, reference, steps, output).await,

        Commands::Styles => {
            handle_styles(&config);
            Ok(())
        }
    };

    #[cfg(feature = "observability")]
    storyloom::observability::shutdown_observability(provider);

    result?;
    Ok(())
}
