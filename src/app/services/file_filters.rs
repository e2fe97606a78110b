/// Filter for the Open dialog.
///
/// FLTK format: "Description\tPattern\nDescription2\tPattern2".
/// FLTK automatically adds "All Files (*)" option, so we don't include it.
pub fn open_filter() -> String {
    [
        "PaperFlow Files\t*.pflow",
        "Text Files\t*.txt",
        "HTML Files\t*.{html,htm}",
    ]
    .join("\n")
}

/// Filter for the Save dialog. Same formats as Open; the extension picks
/// how the document is written.
pub fn save_filter() -> String {
    open_filter()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_filter_format() {
        let filter = open_filter();
        assert_eq!(filter.lines().count(), 3);
        assert!(filter.lines().all(|line| line.contains('\t')));
        assert!(filter.contains("*.pflow"));
        assert!(filter.contains("*.txt"));
        assert!(filter.contains("*.{html,htm}"));
    }

    #[test]
    fn test_no_unsupported_formats_advertised() {
        assert!(!open_filter().contains("docx"));
        assert!(!save_filter().contains("docx"));
    }
}
