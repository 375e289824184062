//! Text normalization and word-bounded phrase search.

/// Lowercases, trims, and collapses runs of whitespace to single spaces.
pub fn normalize(text: &str) -> String {
    text.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Finds the first occurrence of `phrase` in `haystack` that sits on word
/// boundaries, returning its byte offset.
///
/// Both arguments are expected to be normalized already. A boundary is the
/// start or end of the text or any character that is not alphanumeric.
pub fn find_phrase(haystack: &str, phrase: &str) -> Option<usize> {
    find_phrases(haystack, phrase).into_iter().next()
}

/// Byte offsets of every word-bounded occurrence of `phrase`, in order.
pub fn find_phrases(haystack: &str, phrase: &str) -> Vec<usize> {
    let mut found = Vec::new();
    if phrase.is_empty() {
        return found;
    }
    let mut from = 0;
    while let Some(rel) = haystack[from..].find(phrase) {
        let start = from + rel;
        let end = start + phrase.len();
        let before_ok = haystack[..start]
            .chars()
            .next_back()
            .map_or(true, |c| !c.is_alphanumeric());
        let after_ok = haystack[end..]
            .chars()
            .next()
            .map_or(true, |c| !c.is_alphanumeric());
        if before_ok && after_ok {
            found.push(start);
        }
        // Advance past the first character of this candidate.
        from = start
            + haystack[start..]
                .chars()
                .next()
                .map_or(1, char::len_utf8);
    }
    found
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_lowercases_and_collapses_whitespace() {
        assert_eq!(normalize("  Best   Headphones\tFOR gym "), "best headphones for gym");
    }

    #[test]
    fn normalize_empty_is_empty() {
        assert_eq!(normalize("   "), "");
    }

    #[test]
    fn find_phrase_respects_word_boundaries() {
        assert_eq!(find_phrase("fitness tracker", "fit"), None);
        assert_eq!(find_phrase("a good fit", "fit"), Some(7));
    }

    #[test]
    fn find_phrase_skips_embedded_matches() {
        assert_eq!(find_phrase("workout after work", "work"), Some(14));
    }

    #[test]
    fn find_phrase_treats_punctuation_as_boundary() {
        assert_eq!(find_phrase("laptop, lightweight", "laptop"), Some(0));
        assert_eq!(find_phrase("(anc)", "anc"), Some(1));
    }

    #[test]
    fn find_phrases_lists_every_bounded_occurrence() {
        assert_eq!(find_phrases("work, homework, work", "work"), vec![0, 16]);
        assert!(find_phrases("anything", "").is_empty());
    }

    #[test]
    fn find_phrase_handles_multibyte_text() {
        assert_eq!(find_phrase("₹4000 phone", "phone"), Some("₹4000 ".len()));
    }

    #[test]
    fn find_phrase_multiword() {
        assert_eq!(find_phrase("a gaming laptop", "gaming laptop"), Some(2));
    }
}
