use std::path::Path;

/// Extract filename from a file path
///
/// Returns the filename component of a path, or "Unknown" if it can't be extracted.
pub fn extract_filename(path: &str) -> String {
    Path::new(path)
        .file_name()
        .and_then(|n| n.to_str())
        .filter(|s| !s.is_empty() && *s != ".")
        .map(|s| s.to_string())
        .unwrap_or_else(|| "Unknown".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_filename() {
        assert_eq!(extract_filename("/home/user/notes.pflow"), "notes.pflow");
        assert_eq!(extract_filename("report.txt"), "report.txt");
        assert_eq!(extract_filename("/"), "Unknown");
        assert_eq!(extract_filename(""), "Unknown");
    }
}
