//! Number formatting used in interpretation text

/// Proportion as a percentage with one decimal (`0.05` → `"5.0%"`)
pub fn format_pct(value: f64) -> String {
    format!("{:.1}%", value * 100.0)
}

/// Two-decimal rendering (`2.6667` → `"2.67"`)
pub fn format_dec(value: f64) -> String {
    format!("{:.2}", value)
}

/// Cut `text` to at most `width` characters, ending a cut with `…`
///
/// Keeps rows of the boxed summaries inside their border.
pub fn fit(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let mut out: String = text.chars().take(width.saturating_sub(1)).collect();
    out.push('…');
    out
}
