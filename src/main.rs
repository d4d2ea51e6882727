use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

/// Generate the analytics event enum and wire envelope from a tracking schema.
///
/// Reads an OpenAPI-style schema document, filters the entries that declare
/// tracking events, and renders two Rust source files implementing the
/// analytics wire codec.
#[derive(Parser)]
#[command(name = "analytics-event-gen", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate event enum and envelope sources from a schema document.
    ///
    /// Run after the payload DTO generation and cleanup passes, so that
    /// every payload type the generated enum references still exists.
    Generate {
        /// Path to the tracking schema document.
        #[arg(long, default_value = "events.yaml", env = "TRACKING_SCHEMA_PATH")]
        schema: PathBuf,

        /// Output directory for generated sources.
        #[arg(long, default_value = ".")]
        output_dir: PathBuf,

        /// Name of the generated event enumeration.
        #[arg(long, default_value = "Events")]
        enum_name: String,

        /// Suppress non-error output.
        #[arg(long, short)]
        quiet: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("error: {e}");

        // Print cause chain.
        let mut source = std::error::Error::source(&e);
        while let Some(cause) = source {
            eprintln!("  caused by: {cause}");
            source = std::error::Error::source(cause);
        }

        process::exit(1);
    }
}

fn run(cli: Cli) -> analytics_event_gen::error::Result<()> {
    match cli.command {
        Commands::Generate {
            schema,
            output_dir,
            enum_name,
            quiet,
        } => {
            if !quiet {
                eprintln!("Loading schema from {}", schema.display());
            }
            let document = analytics_event_gen::schema::load_schema(&schema)?;
            let events = analytics_event_gen::schema::event_descriptors(&document);
            let with_payload = events
                .iter()
                .filter(|e| e.payload_type_name.is_some())
                .count();

            if !quiet {
                eprintln!(
                    "Parsed {} events ({} with payloads) from {} schema entries",
                    events.len(),
                    with_payload,
                    document.components.schemas.len()
                );
            }

            let artifacts = analytics_event_gen::codegen::generate(&events, &enum_name);
            analytics_event_gen::codegen::write_artifacts(&artifacts, &output_dir)?;

            if !quiet {
                for artifact in &artifacts {
                    eprintln!("Wrote {}", output_dir.join(&artifact.file_name).display());
                }
                eprintln!("Done.");
            }
        }
    }

    Ok(())
}
