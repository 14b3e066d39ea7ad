// Flappy high score: a single integer in a plain text file

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::config::FlappyConfig;

/// Where the high score lives: the configured path, or the data directory
pub fn high_score_path(config: &FlappyConfig) -> PathBuf {
    if let Some(ref path) = config.high_score_path {
        return PathBuf::from(path);
    }

    let mut path = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("carrom-arcade");
    path.push("highscore.txt");
    path
}

/// Read the stored score. A missing or unreadable file counts as 0.
pub fn load_high_score(path: &Path) -> u32 {
    match fs::read_to_string(path) {
        Ok(contents) => contents.trim().parse().unwrap_or_else(|e| {
            tracing::warn!(path = %path.display(), error = %e, "high score file is not a number, starting from 0");
            0
        }),
        Err(e) => {
            if e.kind() != io::ErrorKind::NotFound {
                tracing::warn!(path = %path.display(), error = %e, "could not read high score");
            }
            0
        }
    }
}

/// Overwrite the stored score, creating the parent directory if needed
pub fn save_high_score(path: &Path, score: u32) -> Result<(), io::Error> {
    if let Some(dir) = path.parent() {
        if !dir.as_os_str().is_empty() {
            fs::create_dir_all(dir)?;
        }
    }
    fs::write(path, score.to_string())?;
    tracing::info!(path = %path.display(), score, "saved high score");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_missing_file_reads_zero() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("highscore.txt");
        assert_eq!(load_high_score(&path), 0);
    }

    #[test]
    fn test_garbage_reads_zero() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"lots").unwrap();

        assert_eq!(load_high_score(file.path()), 0);
    }

    #[test]
    fn test_save_creates_directory_and_loads_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("deeper").join("highscore.txt");

        save_high_score(&path, 17).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "17");
        assert_eq!(load_high_score(&path), 17);
    }

    #[test]
    fn test_surrounding_whitespace_is_ignored() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b" 42\n").unwrap();

        assert_eq!(load_high_score(file.path()), 42);
    }

    #[test]
    fn test_configured_path_wins() {
        let config = FlappyConfig {
            high_score_path: Some("/tmp/elsewhere/score.txt".to_string()),
        };
        assert_eq!(
            high_score_path(&config),
            PathBuf::from("/tmp/elsewhere/score.txt")
        );
        assert!(high_score_path(&FlappyConfig::default()).ends_with("carrom-arcade/highscore.txt"));
    }
}
