// Character classes like \d or \S.
// All of these are ASCII-only: bytes above 0x7F never belong to a class.

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum CharacterClassType {
    Digits,
    Spaces,
    Words,
}

impl CharacterClassType {
    /// Decode the letter following a `\`.
    /// \return the class and whether it is positive (lowercase), or None if
    /// \p letter names no class.
    #[inline]
    pub fn from_escape(letter: u8) -> Option<(CharacterClassType, bool)> {
        match letter {
            b'd' => Some((CharacterClassType::Digits, true)),
            b'D' => Some((CharacterClassType::Digits, false)),
            b's' => Some((CharacterClassType::Spaces, true)),
            b'S' => Some((CharacterClassType::Spaces, false)),
            b'w' => Some((CharacterClassType::Words, true)),
            b'W' => Some((CharacterClassType::Words, false)),
            _ => None,
        }
    }

    #[inline]
    pub fn contains(self, c: u8) -> bool {
        match self {
            CharacterClassType::Digits => is_digit(c),
            CharacterClassType::Spaces => is_space(c),
            CharacterClassType::Words => is_word_char(c),
        }
    }
}

/// \return whether \p letter is one of `dDsSwW`.
#[inline]
pub fn is_class_escape(letter: u8) -> bool {
    CharacterClassType::from_escape(letter).is_some()
}

#[inline]
pub fn is_digit(c: u8) -> bool {
    c.is_ascii_digit()
}

/// Space, tab, line feed, carriage return, vertical tab, form feed.
#[inline]
pub fn is_space(c: u8) -> bool {
    matches!(c, b' ' | b'\t' | b'\n' | b'\r' | 0x0B | 0x0C)
}

#[inline]
pub fn is_word_char(c: u8) -> bool {
    c.is_ascii_alphanumeric() || c == b'_'
}

/// Test \p c against the class named by the escape letter \p letter.
/// Uppercase letters invert the lowercase result.
#[inline]
pub fn matches_escape(letter: u8, c: u8) -> Option<bool> {
    let (ct, positive) = CharacterClassType::from_escape(letter)?;
    Some(ct.contains(c) == positive)
}
