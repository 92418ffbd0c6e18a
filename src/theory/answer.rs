//! Free-text answer normalization
//!
//! Rules:
//! - Quit sentinel: first non-space character is 'q' (any case)
//! - Count answers: leading digit 0-7, then the family word (spaces ignored)
//! - Accidental letters: comma/space separated, first letter of each token
//! - Scale answers: comma/space separated tokens, compared by position
//!
//! Malformed input is always treated as a wrong answer, never a parse fault.

/// True if the learner asked to leave the program. No quizzed answer
/// starts with 'q', so the first character is enough.
pub fn is_quit(input: &str) -> bool {
    matches!(input.trim_start().chars().next(), Some('q') | Some('Q'))
}

/// A parsed "how many accidentals" answer
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CountAnswer {
    pub count: u8,
    /// Whatever followed the digit, lowercased with spaces removed
    pub sign: String,
}

/// Parse an answer like "2 flats" or "2flats". The first character must
/// be a digit between 0 and 7 inclusive; anything else is `None`.
pub fn parse_count(input: &str) -> Option<CountAnswer> {
    let trimmed = input.trim();
    let mut chars = trimmed.chars();
    let count = chars.next()?.to_digit(10)? as u8;
    if count > 7 {
        return None;
    }
    let sign = chars
        .as_str()
        .chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect();
    Some(CountAnswer { count, sign })
}

/// Collapse an accidental-letters answer to one lowercase letter per
/// token: "f c" and "F, C" both become "fc". A single token is kept
/// whole, so the run "fc" also works while "f" alone stays "f".
pub fn normalize_letters(input: &str) -> String {
    let tokens: Vec<&str> = split_tokens(input);
    match tokens.len() {
        0 => String::new(),
        1 => tokens[0].to_lowercase(),
        _ => tokens
            .iter()
            .filter_map(|t| t.chars().next())
            .flat_map(char::to_lowercase)
            .collect(),
    }
}

/// Split a scale answer into its note tokens
pub fn note_tokens(input: &str) -> Vec<String> {
    split_tokens(input).into_iter().map(|t| t.to_string()).collect()
}

/// Positional, case-insensitive comparison against the expected
/// spelling. A length mismatch in either direction is a no-match.
pub fn matches_scale(submitted: &[String], expected: &[&str]) -> bool {
    submitted.len() == expected.len()
        && submitted
            .iter()
            .zip(expected)
            .all(|(got, want)| got.eq_ignore_ascii_case(want))
}

/// Normalize a staff-stage answer: the key name with whitespace removed
pub fn key_name(input: &str) -> String {
    input.chars().filter(|c| !c.is_whitespace()).collect()
}

fn split_tokens(input: &str) -> Vec<&str> {
    input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|t| !t.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quit_sentinel() {
        assert!(is_quit("q"));
        assert!(is_quit("  Quit"));
        assert!(!is_quit("2 flats"));
        assert!(!is_quit(""));
    }

    #[test]
    fn count_parsing() {
        assert_eq!(
            parse_count("2 flats"),
            Some(CountAnswer {
                count: 2,
                sign: "flats".into()
            })
        );
        assert_eq!(
            parse_count("2flats"),
            Some(CountAnswer {
                count: 2,
                sign: "flats".into()
            })
        );
        assert_eq!(
            parse_count("0"),
            Some(CountAnswer {
                count: 0,
                sign: String::new()
            })
        );
        assert_eq!(parse_count("eight flats"), None);
        assert_eq!(parse_count("8 flats"), None);
        assert_eq!(parse_count(""), None);
    }

    #[test]
    fn count_sign_is_lowercased() {
        let parsed = parse_count("3 Sharps").unwrap();
        assert_eq!(parsed.sign, "sharps");
    }

    #[test]
    fn letters_both_order_variants_for_key_d() {
        // Key D has sharps "fc"
        assert_eq!(normalize_letters("f c"), "fc");
        assert_eq!(normalize_letters("fc"), "fc");
        assert_eq!(normalize_letters("F, C"), "fc");
        assert_ne!(normalize_letters("f"), "fc");
    }

    #[test]
    fn letters_take_first_letter_of_words() {
        assert_eq!(normalize_letters("f sharp, c sharp"), "fscs");
        assert_eq!(normalize_letters(""), "");
    }

    #[test]
    fn scale_matching_is_positional() {
        let expected = ["d", "fis", "a", "cis", "d"];
        let ok = note_tokens("d fis a cis d");
        assert!(matches_scale(&ok, &expected));
        let cased = note_tokens("D, Fis, A, Cis, D");
        assert!(matches_scale(&cased, &expected));
        let wrong = note_tokens("d f a c d");
        assert!(!matches_scale(&wrong, &expected));
    }

    #[test]
    fn scale_length_mismatch_fails() {
        let expected = ["d", "fis", "a", "cis", "d"];
        assert!(!matches_scale(&note_tokens("d fis a cis"), &expected));
        assert!(!matches_scale(&note_tokens("d fis a cis d d"), &expected));
        assert!(!matches_scale(&note_tokens(""), &expected));
    }

    #[test]
    fn staff_answer_strips_spaces() {
        assert_eq!(key_name(" F # "), "F#");
    }
}
