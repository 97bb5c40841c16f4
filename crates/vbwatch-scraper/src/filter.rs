//! Pre-extraction filtering of known non-mission fragments.

/// Fragments containing any of these phrases are promotional noise, not
/// missions. Matching is case-sensitive substring containment; add new
/// phrases here without touching the extraction logic.
const SKIP_PHRASES: &[&str] = &["Use code \"iFeral\""];

/// Returns `true` when `fragment` should be skipped before extraction.
#[must_use]
pub fn is_skipped(fragment: &str) -> bool {
    SKIP_PHRASES.iter().any(|phrase| fragment.contains(phrase))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn promotional_fragment_is_skipped() {
        assert!(is_skipped("Use code \"iFeral\" in the item shop!"));
    }

    #[test]
    fn mission_fragment_is_kept() {
        assert!(!is_skipped("500 80PL Defend in Stonewood"));
    }

    #[test]
    fn match_is_case_sensitive() {
        assert!(!is_skipped("use code \"iferal\" in the item shop!"));
    }
}
