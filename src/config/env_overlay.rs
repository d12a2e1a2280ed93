use std::path::Path;

use tracing::debug;

/// Merge a local `.env` file into the process environment.
///
/// Searches the working directory and its ancestors, following
/// `dotenvy::dotenv`. Variables already set in the process environment are
/// left untouched, so externally-provided values always win. A missing file
/// is a no-op; a malformed one propagates the parser error unmodified.
pub fn load_environment_overlay() -> Result<(), dotenvy::Error> {
    match dotenvy::dotenv() {
        Ok(path) => {
            debug!("environment overlay applied from {}", path.display());
            Ok(())
        }
        Err(error) if error.not_found() => {
            debug!("no .env file found, using process environment as-is");
            Ok(())
        }
        Err(error) => Err(error),
    }
}

/// Same contract as [`load_environment_overlay`], reading from an explicit
/// path instead of searching for one.
pub fn load_environment_overlay_from(path: impl AsRef<Path>) -> Result<(), dotenvy::Error> {
    let path = path.as_ref();
    match dotenvy::from_path(path) {
        Ok(()) => {
            debug!("environment overlay applied from {}", path.display());
            Ok(())
        }
        Err(error) if error.not_found() => {
            debug!("no .env file at {}, using process environment as-is", path.display());
            Ok(())
        }
        Err(error) => Err(error),
    }
}
