use crate::article::Article;
use crate::output::{OutputError, OutputResult};
use chrono::{DateTime, Local};
use std::fs;
use std::path::{Path, PathBuf};

/// Builds the output file name for a run: `articles_YYYYMMDD_HHMMSS.json`
pub fn output_filename(timestamp: &DateTime<Local>) -> String {
    format!("articles_{}.json", timestamp.format("%Y%m%d_%H%M%S"))
}

/// Writes `articles` to `path` as a 2-space indented JSON array
///
/// The file is written in one call and left readable by everyone and
/// writable by its owner.
pub fn write_articles(articles: &[Article], path: &Path) -> OutputResult<()> {
    let json = serde_json::to_string_pretty(articles)?;

    let io_err = |source: std::io::Error| OutputError::Io {
        path: path.to_path_buf(),
        source,
    };

    fs::write(path, json).map_err(io_err)?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(0o644)).map_err(io_err)?;
    }

    Ok(())
}

/// Saves `articles` into `directory` under a timestamped file name
///
/// Creates `directory` if it does not exist yet.
///
/// # Returns
///
/// * `Ok(PathBuf)` - Path of the written file
/// * `Err(OutputError)` - Serialization or filesystem failure
pub fn save_articles(articles: &[Article], directory: &Path) -> OutputResult<PathBuf> {
    fs::create_dir_all(directory).map_err(|source| OutputError::Io {
        path: directory.to_path_buf(),
        source,
    })?;

    let path = directory.join(output_filename(&Local::now()));
    tracing::debug!("Writing {} articles to {}", articles.len(), path.display());
    write_articles(articles, &path)?;

    Ok(path)
}
