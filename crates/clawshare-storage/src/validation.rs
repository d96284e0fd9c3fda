//! File type allow-list.

/// Extensions (lowercase, with the leading dot) that may be shared.
pub const ALLOWED_EXTENSIONS: [&str; 16] = [
    ".pdf", ".doc", ".docx", ".xls", ".xlsx", ".ppt", ".pptx", ".jpg", ".jpeg", ".png", ".gif",
    ".webp", ".txt", ".csv", ".json", ".md",
];

/// Return the lowercased last extension of `file_name`, dot included.
///
/// Names without a `.` have no extension.
pub fn extension_of(file_name: &str) -> Option<String> {
    file_name
        .rfind('.')
        .map(|idx| file_name[idx..].to_ascii_lowercase())
}

/// Check whether `file_name` carries an allowed extension.
///
/// Only the last extension counts, so `archive.tar.pdf` is allowed and
/// `report.pdf.exe` is not.
pub fn is_allowed_type(file_name: &str) -> bool {
    extension_of(file_name).is_some_and(|ext| ALLOWED_EXTENSIONS.contains(&ext.as_str()))
}
