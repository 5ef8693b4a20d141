use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use testgen::cli;

#[derive(Parser)]
#[command(name = "testgen", version)]
#[command(about = "Generate unit-test skeletons for classes", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate test files for classes described in a JSON manifest
    Generate {
        /// Path to the class manifest ({"classes": [...]})
        manifest: String,

        /// Canonical name of a class to generate (repeatable). All classes if omitted.
        #[arg(short = 'c', long = "class")]
        classes: Vec<String>,

        /// Stub variants per public method (default: from config)
        #[arg(short = 'n', long)]
        variants: Option<usize>,

        /// Project base directory (default: from config, ".")
        #[arg(long)]
        base_path: Option<String>,

        /// Test source root relative to the base directory (e.g., "src/test/java")
        #[arg(short = 'o', long)]
        output_root: Option<String>,

        /// Extension of generated files (e.g., "java")
        #[arg(long)]
        extension: Option<String>,

        /// Path to config file (defaults to ./testgen.toml or ~/.config/testgen/config.toml)
        #[arg(long)]
        config: Option<String>,

        /// Print generated files instead of writing them
        #[arg(long)]
        dry_run: bool,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            manifest,
            classes,
            variants,
            base_path,
            output_root,
            extension,
            config,
            dry_run,
        } => {
            cli::generate::run(
                manifest,
                classes,
                variants,
                base_path,
                output_root,
                extension,
                config,
                dry_run,
            )?;
        }
    }

    Ok(())
}
