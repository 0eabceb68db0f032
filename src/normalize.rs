//! Raw-response cleanup: emphasis-marker removal and whitespace
//! canonicalization. Total over all inputs; empty in, empty out.

use std::sync::LazyLock;

use regex::Regex;

static TRAILING_WS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^\S\n]+\n").unwrap());
static BLANK_RUN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n{3,}").unwrap());

/// Strip generator formatting noise and canonicalize whitespace.
///
/// Double-emphasis markers go before single ones so `**bold**` never
/// leaves stray `*` inside words. Trailing spaces are trimmed per line,
/// runs of three or more line breaks collapse to one paragraph separator,
/// and trailing blank lines are dropped. Idempotent.
pub fn clean(raw: &str) -> String {
    let text = raw.replace("**", "");
    let text = text.replace('*', "");
    let text = TRAILING_WS_RE.replace_all(&text, "\n");
    let text = BLANK_RUN_RE.replace_all(&text, "\n\n");
    text.trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_emphasis_markers() {
        assert_eq!(clean("**Rice** is *ideal* here"), "Rice is ideal here");
    }

    #[test]
    fn trims_trailing_spaces_per_line() {
        assert_eq!(clean("first line   \nsecond line\t\nthird"), "first line\nsecond line\nthird");
    }

    #[test]
    fn collapses_blank_runs_to_one_separator() {
        assert_eq!(clean("para one\n\n\n\npara two"), "para one\n\npara two");
    }

    #[test]
    fn keeps_single_paragraph_breaks() {
        assert_eq!(clean("para one\n\npara two"), "para one\n\npara two");
    }

    #[test]
    fn drops_trailing_blank_lines() {
        assert_eq!(clean("advice\n\n\n"), "advice");
    }

    #[test]
    fn empty_in_empty_out() {
        assert_eq!(clean(""), "");
        assert_eq!(clean("***"), "");
    }

    #[test]
    fn idempotent() {
        let messy = "**Plan**  \n\n\n\n* Rice: *good*\n\nDone.   ";
        let once = clean(messy);
        assert_eq!(clean(&once), once);
    }
}
