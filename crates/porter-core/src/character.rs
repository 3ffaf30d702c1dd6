// Character classification for English stemming.
//
// The engine classifies characters positionally (a 'y' may be a vowel or
// a consonant depending on what precedes it); the letter-level predicates
// here are the position-independent building blocks. Anything that is not
// a literal vowel counts as a consonant, including digits and punctuation.

/// English vowel letters (lowercase): a e i o u.
const ENGLISH_VOWELS: &[char] = &['a', 'e', 'i', 'o', 'u'];

/// Check whether a character is a literal English vowel.
///
/// `y` is deliberately not included: its vowel-ness depends on position
/// and is decided by the engine's buffer-level classifier.
pub fn is_vowel_letter(c: char) -> bool {
    ENGLISH_VOWELS.contains(&c)
}

/// Check whether a character may be part of a word for tokenization
/// purposes. Used by callers that split running text into words before
/// stemming; the engine itself accepts any character.
pub fn is_word_char(c: char) -> bool {
    c.is_alphabetic()
}

/// Convert a character to its simple lowercase equivalent.
///
/// Uses Rust's built-in Unicode case mapping. For characters with
/// multi-character lowercase expansions, returns only the first character
/// (one-to-one mapping). Callers are responsible for lowercasing words
/// before handing them to the engine.
pub fn simple_lower(c: char) -> char {
    let mut iter = c.to_lowercase();
    iter.next().unwrap_or(c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vowels_are_vowels() {
        for c in ['a', 'e', 'i', 'o', 'u'] {
            assert!(is_vowel_letter(c), "{c} should be a vowel");
        }
    }

    #[test]
    fn y_is_not_a_literal_vowel() {
        assert!(!is_vowel_letter('y'));
    }

    #[test]
    fn consonants_digits_punctuation_are_not_vowels() {
        assert!(!is_vowel_letter('b'));
        assert!(!is_vowel_letter('z'));
        assert!(!is_vowel_letter('7'));
        assert!(!is_vowel_letter('-'));
    }

    #[test]
    fn word_chars_are_alphabetic() {
        assert!(is_word_char('a'));
        assert!(is_word_char('Z'));
        assert!(!is_word_char('3'));
        assert!(!is_word_char('\''));
        assert!(!is_word_char(' '));
    }

    #[test]
    fn simple_lower_basic_latin() {
        assert_eq!(simple_lower('A'), 'a');
        assert_eq!(simple_lower('Z'), 'z');
        assert_eq!(simple_lower('a'), 'a');
    }

    #[test]
    fn simple_lower_leaves_non_letters_alone() {
        assert_eq!(simple_lower('7'), '7');
        assert_eq!(simple_lower('-'), '-');
    }
}
