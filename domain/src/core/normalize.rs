//! Normalization rules behind the catalog's duplicate checks.
//!
//! Questions compare equal when they differ only in case, whitespace, or a
//! trailing question mark. Labels and attraction names compare equal when
//! they differ only in case or whitespace.

/// Comparison key for a question: lowercased, all whitespace removed, one
/// trailing `?` stripped.
pub fn question_key(question: &str) -> String {
    let folded = label_key(question);
    match folded.strip_suffix('?') {
        Some(stripped) => stripped.to_string(),
        None => folded,
    }
}

/// Comparison key for a label or attraction name: lowercased, all
/// whitespace removed.
pub fn label_key(label: &str) -> String {
    label
        .chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(|c| c.to_lowercase())
        .collect()
}

/// Capitalize a label: first character uppercased, the rest lowercased.
///
/// This is the stored form of vocabulary entries; the exact input is kept
/// apart from this case adjustment.
pub fn capitalize(label: &str) -> String {
    let mut chars = label.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(|c| c.to_lowercase()))
            .collect(),
        None => String::new(),
    }
}
