use unicode_width::UnicodeWidthStr;

/// Pads `s` with trailing spaces to `width` terminal columns. CJK labels are
/// two columns per character, so byte or char counts would misalign them.
pub fn pad_to_width(s: &str, width: usize) -> String {
    let current = s.width();
    if current >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - current))
    }
}

pub fn max_width<'a>(items: impl IntoIterator<Item = &'a str>) -> usize {
    items.into_iter().map(|s| s.width()).max().unwrap_or(0)
}
