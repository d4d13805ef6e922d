pub fn trim_trailing_slashes(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

/// Shortens `text` to at most `max` chars for single-line previews.
pub fn preview(text: &str, max: usize) -> String {
    let single_line = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if single_line.chars().count() <= max {
        return single_line;
    }
    let mut cut: String = single_line.chars().take(max.saturating_sub(3)).collect();
    cut.push_str("...");
    cut
}
