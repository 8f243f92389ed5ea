use crate::sequence::Sequence;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyMatch {
    /// The key matched; carries the normalized character.
    Advance(char),
    Mismatch { expected: char, got: char },
    /// Nothing left to match at this position.
    Ignored,
}

/// Uppercase form of `key`, or None when it uppercases to more than one char (e.g. `ß` -> `SS`).
pub fn normalize(key: char) -> Option<char> {
    let mut upper = key.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

/// Compares one keystroke with the expected character at `idx`.
pub fn match_key(sequence: &Sequence, idx: usize, key: char) -> KeyMatch {
    let Some(expected) = sequence.get(idx) else {
        return KeyMatch::Ignored;
    };

    match normalize(key) {
        Some(got) if got == expected => KeyMatch::Advance(got),
        Some(got) => KeyMatch::Mismatch { expected, got },
        None => KeyMatch::Mismatch { expected, got: key },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seq(s: &str) -> Sequence {
        Sequence::try_from(s).unwrap()
    }

    #[test]
    fn test_match_is_case_insensitive() {
        let s = seq("QWE");

        assert_eq!(match_key(&s, 0, 'q'), KeyMatch::Advance('Q'));
        assert_eq!(match_key(&s, 0, 'Q'), KeyMatch::Advance('Q'));
        assert_eq!(match_key(&s, 2, 'e'), KeyMatch::Advance('E'));
    }

    #[test]
    fn test_mismatch_reports_both_chars() {
        let s = seq("QWE");

        assert_eq!(
            match_key(&s, 1, 'x'),
            KeyMatch::Mismatch {
                expected: 'W',
                got: 'X'
            }
        );
    }

    #[test]
    fn test_non_letters_mismatch() {
        let s = seq("A");

        assert_eq!(
            match_key(&s, 0, '1'),
            KeyMatch::Mismatch {
                expected: 'A',
                got: '1'
            }
        );
        assert_eq!(
            match_key(&s, 0, ' '),
            KeyMatch::Mismatch {
                expected: 'A',
                got: ' '
            }
        );
    }

    #[test]
    fn test_multi_char_uppercase_is_a_mismatch() {
        let s = seq("S");

        assert_eq!(normalize('ß'), None);
        assert_eq!(
            match_key(&s, 0, 'ß'),
            KeyMatch::Mismatch {
                expected: 'S',
                got: 'ß'
            }
        );
    }

    #[test]
    fn test_single_char_uppercase_follows_unicode() {
        // long s uppercases to exactly "S"
        assert_eq!(normalize('ſ'), Some('S'));
        assert_eq!(match_key(&seq("S"), 0, 'ſ'), KeyMatch::Advance('S'));
    }

    #[test]
    fn test_past_the_end_is_ignored() {
        let s = seq("AB");

        assert_eq!(match_key(&s, 2, 'a'), KeyMatch::Ignored);
        assert_eq!(match_key(&Sequence::default(), 0, 'a'), KeyMatch::Ignored);
    }
}
