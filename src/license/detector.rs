/// Index of the first line containing `marker`, if any.
pub fn marker_line_index(content: &str, marker: &str) -> Option<usize> {
    content.lines().position(|line| line.contains(marker))
}

/// Whether any line of `content` contains `marker`.
pub fn contains_marker(content: &str, marker: &str) -> bool {
    marker_line_index(content, marker).is_some()
}
