// SPDX-License-Identifier: GPL-3.0-only

use unicode_segmentation::UnicodeSegmentation;

/// Shortens `value` to at most `max` user-perceived characters, adding an ellipsis when cut
pub fn ellipsize(value: &str, max: usize) -> String {
    let graphemes: Vec<&str> = value.graphemes(true).collect();
    if graphemes.len() <= max {
        return value.to_string();
    }

    let mut shortened: String = graphemes[..max.saturating_sub(1)].concat();
    shortened.push('…');
    shortened
}

/// Keeps the first `max` user-perceived characters
pub fn truncate_graphemes(value: &str, max: usize) -> String {
    value.graphemes(true).take(max).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ellipsize_keeps_short_values() {
        assert_eq!(ellipsize("Suite", 10), "Suite");
        assert_eq!(ellipsize("Deluxe Sea View Room", 10), "Deluxe Se…");
    }

    #[test]
    fn truncation_respects_graphemes() {
        assert_eq!(truncate_graphemes("Cañón", 3), "Cañ");
        assert_eq!(truncate_graphemes("e\u{301}te\u{301}", 1), "e\u{301}");
    }
}
