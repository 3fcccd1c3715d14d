// ShowBill - app/showfile.rs
//
// Resolves which show definition to present: an explicit file from the
// CLI, a show.toml in the platform config directory, or the built-in
// show. User files that fail validation are reported and the built-in
// show is used instead (non-fatal).

use crate::core::model::Showcase;
use crate::core::showcase;
use crate::util::constants;
use crate::util::error::ShowError;
use std::path::Path;

/// Load the showcase to present.
///
/// Resolution order: `cli_file` > `<config_dir>/show.toml` > built-in.
/// Returns the showcase and any non-fatal errors encountered along the
/// way (an invalid override file degrades to the built-in show).
pub fn load_showcase(
    cli_file: Option<&Path>,
    config_dir: &Path,
) -> (Result<Showcase, ShowError>, Vec<ShowError>) {
    let mut errors = Vec::new();

    if let Some(path) = cli_file {
        match load_show_file(path) {
            Ok(showcase) => {
                tracing::info!(file = %path.display(), title = %showcase.show.title, "Loaded show file from CLI");
                return (Ok(showcase), errors);
            }
            Err(e) => {
                tracing::warn!(file = %path.display(), error = %e, "CLI show file rejected; falling back");
                errors.push(e);
            }
        }
    }

    let user_file = config_dir.join(constants::SHOW_FILE_NAME);
    if user_file.is_file() {
        match load_show_file(&user_file) {
            Ok(showcase) => {
                tracing::info!(file = %user_file.display(), title = %showcase.show.title, "Loaded user show file");
                return (Ok(showcase), errors);
            }
            Err(e) => {
                tracing::warn!(file = %user_file.display(), error = %e, "User show file rejected; falling back");
                errors.push(e);
            }
        }
    }

    (showcase::load_builtin_show(), errors)
}

/// Load and validate a single show definition file.
///
/// The size is checked before reading so an oversized file is rejected
/// without allocating its content.
pub fn load_show_file(path: &Path) -> Result<Showcase, ShowError> {
    let metadata = std::fs::metadata(path).map_err(|e| ShowError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    if metadata.len() > constants::MAX_SHOW_FILE_SIZE {
        return Err(ShowError::FileTooLarge {
            path: path.to_path_buf(),
            size: metadata.len(),
            max_size: constants::MAX_SHOW_FILE_SIZE,
        });
    }

    let content = std::fs::read_to_string(path).map_err(|e| ShowError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    showcase::parse_show_toml(&content, path).and_then(showcase::validate)
}
