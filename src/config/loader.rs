// Configuration file loading and creation

use super::types::Config;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Get the path to the configuration file
pub fn get_config_path() -> PathBuf {
    let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("carrom-arcade");

    // Create config directory if it doesn't exist
    fs::create_dir_all(&path).ok();

    path.push("config.toml");
    path
}

/// Load configuration from file, or create default if it doesn't exist
pub fn load_config() -> Result<Config, io::Error> {
    let config_path = get_config_path();

    if config_path.exists() {
        let contents = fs::read_to_string(&config_path)?;
        Ok(parse_config(&contents))
    } else {
        create_default_config(&config_path)?;
        Ok(Config::default())
    }
}

/// Parse config text, falling back to defaults on a malformed file
pub fn parse_config(contents: &str) -> Config {
    match toml::from_str(contents) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!(error = %e, "failed to parse config file, using defaults");
            Config::default()
        }
    }
}

/// Create a default configuration file with helpful comments
pub fn create_default_config(path: &Path) -> Result<(), io::Error> {
    let config = Config::default();
    let toml_string =
        toml::to_string_pretty(&config).map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;

    // Add helpful header comments
    let commented_toml = format!(
        "# Carrom Arcade Configuration File\n\
         # Edit this file to customize game behavior\n\
         # After editing, restart the game for changes to take effect\n\
         #\n\
         # Key binding format: Use \"Up\", \"Down\", \"Left\", \"Right\", \"Enter\", \"Esc\", \"Space\"\n\
         #                     or single characters like \"Q\", \"R\", etc.\n\
         #\n\
         # Colors: RGB values from 0-255\n\
         #\n\
         # AI difficulties: \"easy\", \"medium\", \"hard\"\n\n\
         {}",
        toml_string
    );

    fs::write(path, commented_toml)?;
    tracing::info!(path = %path.display(), "created default config file");
    Ok(())
}
