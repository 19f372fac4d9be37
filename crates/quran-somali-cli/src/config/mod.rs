//! Configuration loading and resolution.

use std::path::PathBuf;

/// Environment variable naming the directory that holds the dataset files.
pub const DATA_DIR_ENV: &str = "QURAN_SOMALI_DIR";

/// Resolve the dataset directory.
///
/// Order: explicit flag, `QURAN_SOMALI_DIR`, `./data` if present, then the
/// current directory.
pub fn resolve_data_dir(explicit: Option<&str>) -> PathBuf {
    if let Some(path) = explicit {
        return PathBuf::from(path);
    }

    if let Ok(env_path) = std::env::var(DATA_DIR_ENV) {
        if !env_path.is_empty() {
            return PathBuf::from(env_path);
        }
    }

    let cwd_data = PathBuf::from("data");
    if cwd_data.is_dir() {
        return cwd_data;
    }

    PathBuf::from(".")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_path_wins() {
        assert_eq!(resolve_data_dir(Some("/srv/quran")), PathBuf::from("/srv/quran"));
    }
}
