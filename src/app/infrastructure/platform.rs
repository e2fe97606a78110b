use std::path::PathBuf;

/// Directory the Save dialog opens in when nothing was used before.
///
/// Falls back from the user's documents folder to the home directory and
/// finally to the working directory.
pub fn default_save_directory() -> PathBuf {
    dirs::document_dir()
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Directory holding `settings.json`.
pub fn config_directory() -> PathBuf {
    let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("paperflow");
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_directory_is_app_specific() {
        assert!(config_directory().ends_with("paperflow"));
    }

    #[test]
    fn test_default_save_directory_not_empty() {
        assert!(!default_save_directory().as_os_str().is_empty());
    }
}
