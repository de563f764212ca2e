use std::path::PathBuf;
use anyhow::Result;
use clap::{Parser, Subcommand};

use file_station::FileStation;
use settings::{sources, FileSource, Format, LoadOptions, ProcessEnv, SettingsManager};

/// File Station UI settings tool
#[derive(Parser)]
#[command(name = "file-station", version, about = "File Station UI settings")]
struct Cli {
    /// Settings override document; defaults to the user configuration
    /// directory when a document exists there
    #[arg(long, global = true)]
    settings: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Prints a summary of the resolved settings record
    Show,
    /// Prints the resolved settings record for external tooling
    Dump {
        /// Output format
        #[arg(long, default_value = "json")]
        format: Format,
    },
    /// Validates a settings document without installing it
    Check {
        /// Document to validate
        file: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    FileStation::init_logging()?;

    match cli.command {
        Command::Show => {
            let station = FileStation::new(load_options(cli.settings))?;
            print_summary(&station);
        }
        Command::Dump { format } => {
            let station = FileStation::new(load_options(cli.settings))?;
            println!("{}", format.render(&station.settings())?);
        }
        Command::Check { file } => {
            let overrides = FileSource::new(&file).load()?;
            SettingsManager::from_overrides(&overrides, &ProcessEnv)?;
            println!("{} is a valid settings document", file.display());
        }
    }

    Ok(())
}

fn load_options(path: Option<PathBuf>) -> LoadOptions {
    match path {
        Some(path) => LoadOptions::new().with_override_file(path),
        None => match sources::default_document_path() {
            Some(path) if path.exists() => LoadOptions::new().with_override_file(path),
            _ => LoadOptions::new(),
        },
    }
}

fn print_summary(station: &FileStation) {
    let settings = station.settings();

    println!("File Station UI settings");
    println!("  Files per page: {}", settings.file_per_page);
    println!("  Upload limit: {} MB", settings.max_file_size);
    println!("  Thumbnail size: {} px", settings.default_picture_size);
    println!("  Image spacing: {} px", settings.image_spacing);
    println!("  Forward controls: {}", settings.forward_location);
    println!(
        "  Right menu: {} px wide, {} px margin",
        settings.right_menu.width, settings.right_menu.margin
    );
    println!(
        "  Workspace folders: {}, {}, {}, {}",
        settings.selected_path,
        settings.not_selected_path,
        settings.unclassified_path,
        settings.delete_default_folder
    );
    println!(
        "  Keycloak account console: {}",
        settings.change_pwd_uri.as_deref().unwrap_or("disabled")
    );
    println!(
        "  Keycloak management console: {}",
        settings.kc_management_uri.as_deref().unwrap_or("disabled")
    );
}
