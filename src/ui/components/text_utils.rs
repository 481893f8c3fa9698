use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const ELLIPSIS: char = '…';

/// Fits `text` into `max_width` terminal columns, marking a cut with `…`.
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let budget = max_width - 1;
    let mut used = 0;
    let mut out = String::new();
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(ch);
    }
    out.push(ELLIPSIS);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("running", 10, "running")]
    #[case("running", 7, "running")]
    #[case("unavailable", 6, "unava…")]
    #[case("abc", 1, "…")]
    #[case("abc", 0, "")]
    fn truncates_ascii(#[case] text: &str, #[case] width: usize, #[case] expected: &str) {
        assert_eq!(truncate_to_width(text, width), expected);
    }

    #[test]
    fn wide_characters_are_not_split() {
        // each ideograph takes two columns
        assert_eq!(truncate_to_width("実例テーブル", 6), "実例…");
    }
}
