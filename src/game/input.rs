//! Keys accepted by the board
//!
//! On-screen and physical keyboards both map to the same three keys.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Letter(char),
    Enter,
    Backspace,
}

impl Key {
    /// Parse a key name: "Enter", "Backspace", "←", or a single letter
    ///
    /// Letters are normalized to uppercase. Anything else is `None`.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "Enter" | "enter" | "\n" | "\r" => Some(Self::Enter),
            "Backspace" | "backspace" | "←" => Some(Self::Backspace),
            _ => {
                let mut chars = name.chars();
                match (chars.next(), chars.next()) {
                    (Some(ch), None) if ch.is_ascii_alphabetic() => {
                        Some(Self::Letter(ch.to_ascii_uppercase()))
                    }
                    _ => None,
                }
            }
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Letter(ch) => write!(f, "{ch}"),
            Self::Enter => f.write_str("Enter"),
            Self::Backspace => f.write_str("←"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_named_keys() {
        assert_eq!(Key::from_name("Enter"), Some(Key::Enter));
        assert_eq!(Key::from_name("Backspace"), Some(Key::Backspace));
        assert_eq!(Key::from_name("←"), Some(Key::Backspace));
    }

    #[test]
    fn letters_are_uppercased() {
        assert_eq!(Key::from_name("q"), Some(Key::Letter('Q')));
        assert_eq!(Key::from_name("Z"), Some(Key::Letter('Z')));
    }

    #[test]
    fn rejects_other_keys() {
        assert_eq!(Key::from_name("1"), None);
        assert_eq!(Key::from_name("ab"), None);
        assert_eq!(Key::from_name(""), None);
        assert_eq!(Key::from_name("é"), None);
    }
}
