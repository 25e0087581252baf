//! CLI command definitions.

use clap::{Parser, Subcommand};
use std::net::SocketAddr;
use std::path::PathBuf;
use storyloom_core::DEFAULT_CONFIG_FILE;

/// Storyloom - illustrated book generator
#[derive(Parser, Debug)]
#[command(name = "storyloom")]
#[command(about = "Generate illustrated books with Ollama and Stable Diffusion", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Path to the JSON configuration file
    #[arg(long, global = true, env = "STORYLOOM_CONFIG", default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub json_logs: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Serve the book form over HTTP
    Serve {
        /// Address to listen on
        #[arg(long, env = "STORYLOOM_ADDR", default_value = "127.0.0.1:8501")]
        addr: SocketAddr,
    },

    /// Generate one illustrated book and print it as JSON
    Generate {
        /// Book concept
        #[arg(long, short)]
        description: String,

        /// Genre from the art-style catalog
        #[arg(long, short)]
        genre: Option<String>,

        /// Custom style name from the art-style catalog
        #[arg(long, short)]
        style: Option<String>,

        /// Reference image (png, jpg or jpeg) to take the art style from
        #[arg(long, short)]
        reference: Option<PathBuf>,

        /// Write the book JSON here instead of stdout
        #[arg(long, short)]
        output: Option<PathBuf>,
    },

    /// Render a single scene in the inferred art style
    Illustrate {
        /// Reference image to take the art style from
        #[arg(long, short)]
        reference: Option<PathBuf>,

        /// Sampling steps (defaults to the configured value)
        #[arg(long)]
        steps: Option<u32>,

        /// PNG output path
        #[arg(long, short, default_value = "generated_illustration.png")]
        output: PathBuf,
    },

    /// List the genres and custom styles in the catalog
    Styles,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generate_parses_selections() {
        let cli = Cli::try_parse_from([
            "storyloom",
            "--config",
            "books.json",
            "generate",
            "--description",
            "A young programmer's journey",
            "--genre",
            "scifi",
        ])
        .unwrap();

        assert_eq!(cli.config, PathBuf::from("books.json"));
        match cli.command {
            Commands::Generate {
                description,
                genre,
                style,
                ..
            } => {
                assert_eq!(description, "A young programmer's journey");
                assert_eq!(genre.as_deref(), Some("scifi"));
                assert!(style.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn illustrate_defaults_output_file() {
        let cli = Cli::try_parse_from(["storyloom", "illustrate", "-v"]).unwrap();
        assert!(cli.verbose);
        match cli.command {
            Commands::Illustrate { output, steps, .. } => {
                assert_eq!(output, PathBuf::from("generated_illustration.png"));
                assert!(steps.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn serve_rejects_bad_address() {
        assert!(Cli::try_parse_from(["storyloom", "serve", "--addr", "nowhere"]).is_err());
    }
}
