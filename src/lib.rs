//! Rectlabel: bounding-box label exporter.
//!
//! Rectlabel turns a frozen snapshot of annotation state (images with
//! rectangular boxes and class labels) into the on-disk label formats that
//! object-detection training pipelines consume: YOLO label files, Pascal
//! VOC XML and a flat CSV. Per-image formats are packed into a zip archive;
//! the CSV is a single text blob.
//!
//! # Modules
//!
//! - [`project`]: Snapshot types and the dimension-lookup seam
//! - [`export`]: Per-format serializers, batch assembly and the dispatcher
//! - [`error`]: Error types for rectlabel operations

pub mod error;
pub mod export;
pub mod project;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use error::ExportError;

/// The rectlabel CLI application.
#[derive(Parser)]
#[command(name = "rectlabel")]
#[command(version, author, about)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Export a project's labels into a training format.
    Export(ExportArgs),
}

/// Arguments for the export subcommand.
#[derive(clap::Args)]
struct ExportArgs {
    /// Project document to export (JSON).
    input: PathBuf,

    /// Output format ('yolo', 'voc', or 'csv').
    #[arg(long)]
    format: String,

    /// Directory to write the artifact into.
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,
}

/// Run the rectlabel CLI.
///
/// This is the main entry point for the CLI, called from `main.rs`.
pub fn run() -> Result<(), ExportError> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Export(args)) => run_export(args),
        None => {
            println!("rectlabel {}", env!("CARGO_PKG_VERSION"));
            println!();
            println!("Bounding-box label exporter.");
            println!();
            println!("Run 'rectlabel --help' for usage information.");
            Ok(())
        }
    }
}

/// Execute the export subcommand.
fn run_export(args: ExportArgs) -> Result<(), ExportError> {
    let (snapshot, dimensions) = project::io_json::read_project_json(&args.input)?;
    let mut sink = export::DirectorySink::new(&args.out_dir);

    match export::export_named(&snapshot, &dimensions, &mut sink, &args.format)? {
        export::ExportOutcome::Saved { file_name, images } => {
            println!(
                "Wrote {} ({} image(s) with labels)",
                args.out_dir.join(file_name).display(),
                images
            );
            Ok(())
        }
        export::ExportOutcome::Unsupported => {
            eprintln!(
                "Warning: unsupported export format '{}' (supported: yolo, voc, csv); nothing was exported",
                args.format
            );
            Ok(())
        }
    }
}
