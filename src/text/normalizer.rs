use crate::config::DEFAULT_IGNORED_CHARS;

/// Strips the default ignore set and lowercases the result.
///
/// Ignored characters are removed, not replaced, so `"hi,there"` becomes
/// `"hithere"`. Whitespace is kept as-is.
pub fn normalize(text: &str) -> String {
    normalize_with(text, &DEFAULT_IGNORED_CHARS)
}

pub fn normalize_with(text: &str, ignored: &[char]) -> String {
    let stripped: String = text.chars().filter(|c| !ignored.contains(c)).collect();
    stripped.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLES: [&str; 8] = [
        "",
        "Hello, World!",
        "hi,there",
        "Wait -- what?! \"Really\"; yes: no.",
        "ÉCOLE Straße 42",
        "  Leading\tand trailing  ",
        ",?.!-;:\"",
        "İstanbul",
    ];

    #[test]
    fn hello_world() {
        assert_eq!(normalize("Hello, World!"), "hello world");
    }

    #[test]
    fn empty_stays_empty() {
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn only_ignored_chars_yields_empty() {
        assert_eq!(normalize(",?.!-;:\""), "");
    }

    #[test]
    fn removal_merges_adjacent_words() {
        assert_eq!(normalize("hi,there"), "hithere");
        assert_eq!(normalize("well-known"), "wellknown");
    }

    #[test]
    fn whitespace_preserved() {
        assert_eq!(normalize("  A\tB  "), "  a\tb  ");
    }

    #[test]
    fn other_punctuation_digits_and_accents_pass_through() {
        assert_eq!(normalize("It's 42% ÉTÉ's (x)"), "it's 42% été's (x)");
    }

    #[test]
    fn idempotent() {
        for s in SAMPLES {
            let once = normalize(s);
            assert_eq!(normalize(&once), once, "input {s:?}");
        }
    }

    #[test]
    fn no_ignored_char_survives() {
        for s in SAMPLES {
            let out = normalize(s);
            assert!(
                !out.chars().any(|c| DEFAULT_IGNORED_CHARS.contains(&c)),
                "input {s:?} -> {out:?}"
            );
        }
    }

    #[test]
    fn no_uppercase_survives() {
        for s in SAMPLES {
            let out = normalize(s);
            assert!(!out.chars().any(char::is_uppercase), "input {s:?} -> {out:?}");
        }
    }

    #[test]
    fn custom_ignore_set() {
        assert_eq!(normalize_with("A'B,C", &['\'']), "ab,c");
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn normalize_is_idempotent(s in any::<String>()) {
                let once = normalize(&s);
                prop_assert_eq!(normalize(&once), once);
            }

            #[test]
            fn normalize_leaves_no_ignored_char(s in any::<String>()) {
                let out = normalize(&s);
                prop_assert!(!out.chars().any(|c| DEFAULT_IGNORED_CHARS.contains(&c)));
            }

            #[test]
            fn normalize_leaves_nothing_to_lowercase(s in any::<String>()) {
                // uppercase code points without a lowercase mapping pass through
                let out = normalize(&s);
                prop_assert!(out.chars().all(|c| c.to_lowercase().eq(std::iter::once(c))));
            }

            #[test]
            fn normalize_leaves_no_uppercase_letter(s in "[A-Za-zÀ-ÖØ-Þ ,?.!;:\"-]{0,40}") {
                let out = normalize(&s);
                prop_assert!(!out.chars().any(char::is_uppercase));
                for c in s.chars().filter(|c| !DEFAULT_IGNORED_CHARS.contains(c)) {
                    let lower: String = c.to_lowercase().collect();
                    prop_assert!(out.contains(&lower));
                }
            }
        }
    }
}
