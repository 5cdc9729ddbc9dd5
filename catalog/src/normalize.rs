use std::sync::LazyLock;

use regex::Regex;

static STRIP: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^A-Za-z0-9 ]").unwrap());
static COLLAPSE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r" +").unwrap());

/// Canonical lookup form of a venue name.
///
/// Source names disagree on punctuation and capitalization ("Boardwalk
/// Joe's" vs "Boardwalk Joes"), so every alias-table key, location-index
/// key, and query name goes through this one function. Idempotent, never
/// fails, empty input yields empty output.
pub fn normalize(input: &str) -> String {
    let stripped = STRIP.replace_all(input, "");
    let collapsed = COLLAPSE.replace_all(&stripped, " ");
    collapsed.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::normalize;

    #[test]
    fn test_basic() {
        assert_eq!(normalize("Boardwalk Joe's"), "boardwalk joes");
        assert_eq!(normalize("Flame Tree BBQ - Lunch/Dinner"), "flame tree bbq lunchdinner");
        assert_eq!(normalize("ALOHA ISLE"), "aloha isle");
    }

    #[test]
    fn test_collapses_and_trims() {
        assert_eq!(normalize("  Casey's   Corner  "), "caseys corner");
        assert_eq!(normalize("a\tb\nc"), "abc");
    }

    #[test]
    fn test_punctuation_only() {
        assert_eq!(normalize("!@#$%^&*()"), "");
        assert_eq!(normalize("---"), "");
    }

    #[test]
    fn test_empty() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("     "), "");
    }

    #[test]
    fn test_idempotent() {
        for name in ["Boardwalk Joe's", "  PIZZA  planet! ", "", "l'Artisan des Glaces"] {
            let once = normalize(name);
            assert_eq!(normalize(&once), once);
        }
    }
}
