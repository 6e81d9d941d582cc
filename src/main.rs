use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

// Use the library modules
use zipget::commands;

#[derive(Parser)]
#[clap(name = "zipget")]
#[clap(about = "Download zip archives over HTTP and extract them locally")]
#[clap(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Download a file without extracting it
    Download {
        /// URL to download from
        url: String,
        /// Local filename to save as (default: last segment of the URL)
        #[clap(short, long)]
        output: Option<String>,
        /// Suppress the progress bar
        #[clap(short, long)]
        quiet: bool,
    },
    /// Extract a local zip archive
    Extract {
        /// Path to the zip archive
        archive: PathBuf,
        /// Directory to extract into
        #[clap(short, long, default_value = ".")]
        dest: PathBuf,
        /// Delete the archive after successful extraction
        #[clap(long)]
        cleanup: bool,
    },
    /// Download a zip archive and extract it in one step
    Fetch {
        /// URL to download from
        url: String,
        /// Local filename to save as (default: last segment of the URL)
        #[clap(short, long)]
        output: Option<String>,
        /// Directory to extract into
        #[clap(short, long, default_value = ".")]
        dest: PathBuf,
        /// Delete the downloaded archive after successful extraction
        #[clap(long)]
        cleanup: bool,
        /// Suppress the progress bar
        #[clap(short, long)]
        quiet: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Download { url, output, quiet } => {
            commands::download::download_archive(&url, output.as_deref(), quiet).map(|_| ())
        }
        Commands::Extract {
            archive,
            dest,
            cleanup,
        } => commands::extract::extract_archive(&archive, &dest, cleanup).map(|_| ()),
        Commands::Fetch {
            url,
            output,
            dest,
            cleanup,
            quiet,
        } => commands::fetch::fetch_archive(&url, output.as_deref(), &dest, cleanup, quiet)
            .map(|_| ()),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }

    Ok(())
}
