use anyhow::Result;
use discograph_fetch::{config, Config};

/// Configuration subcommands.
#[derive(Debug, clap::Subcommand)]
pub enum ConfigAction {
    /// Create the config file with commented defaults
    Init,
    /// Show the current effective configuration
    Show,
    /// Print the config file path
    Path,
}

pub fn run(action: ConfigAction) -> Result<()> {
    match action {
        ConfigAction::Init => init_config(),
        ConfigAction::Show => show_config(),
        ConfigAction::Path => show_path(),
    }
}

/// Initialize config file with defaults.
fn init_config() -> Result<()> {
    let created = config::ensure_config_file()?;
    let config_path = config::config_file_path();

    if created {
        println!("✓ Created config file: {}", config_path.display());
        println!("\nEdit this file to configure discograph.");
    } else {
        println!("Config file already exists: {}", config_path.display());
    }

    Ok(())
}

/// Show the current effective configuration.
fn show_config() -> Result<()> {
    let config = Config::load()?;

    println!("Current Configuration");
    println!("=====================\n");

    println!("Config file: {}", config::config_file_path().display());

    let exists = config::config_file_path().exists();
    println!(
        "File exists: {}\n",
        if exists { "yes" } else { "no (using defaults)" }
    );

    println!("Settings:");
    println!("  api_base_url: {}", config.api_base_url);
    println!("  artist_name: {}", config.artist_name);
    println!("  tidal_artist_url: {}", config.tidal_artist_url);

    println!("\nPriority: CLI args > ENV vars (DISCO_*) > Config file > Defaults");

    Ok(())
}

/// Show the config file path.
fn show_path() -> Result<()> {
    println!("{}", config::config_file_path().display());
    Ok(())
}
