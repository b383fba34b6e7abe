//! Directional classification
//!
//! Collapses the Unicode bidirectional category of each character into the
//! three-way model the label pipeline works with. Only the strong RTL and
//! LTR categories count as directional; digits, punctuation, whitespace and
//! marks are all neutral here.

use unicode_bidi::{BidiClass, bidi_class};

/// Direction class of a character or run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Right-to-left (bidi categories R, AL, RLE, RLO)
    Rtl,
    /// Left-to-right (bidi categories L, LRE, LRO)
    Ltr,
    /// Everything else
    Neutral,
}

impl Direction {
    /// Classify a character from its Unicode bidirectional category
    pub fn of(c: char) -> Self {
        match bidi_class(c) {
            BidiClass::R | BidiClass::AL | BidiClass::RLE | BidiClass::RLO => Direction::Rtl,
            BidiClass::L | BidiClass::LRE | BidiClass::LRO => Direction::Ltr,
            _ => Direction::Neutral,
        }
    }

    /// Check if right-to-left
    pub fn is_rtl(self) -> bool {
        matches!(self, Direction::Rtl)
    }

    /// Check if left-to-right
    pub fn is_ltr(self) -> bool {
        matches!(self, Direction::Ltr)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latin_is_ltr() {
        assert_eq!(Direction::of('A'), Direction::Ltr);
        assert_eq!(Direction::of('z'), Direction::Ltr);
    }

    #[test]
    fn test_arabic_is_rtl() {
        // Arabic letters carry category AL
        assert_eq!(Direction::of('\u{0628}'), Direction::Rtl); // beh
        assert_eq!(Direction::of('\u{06CC}'), Direction::Rtl); // farsi yeh
    }

    #[test]
    fn test_hebrew_is_rtl() {
        // Hebrew letters carry category R
        assert_eq!(Direction::of('\u{05D0}'), Direction::Rtl); // alef
    }

    #[test]
    fn test_directional_overrides_are_strong() {
        assert_eq!(Direction::of('\u{202B}'), Direction::Rtl); // RLE
        assert_eq!(Direction::of('\u{202E}'), Direction::Rtl); // RLO
        assert_eq!(Direction::of('\u{202A}'), Direction::Ltr); // LRE
        assert_eq!(Direction::of('\u{202D}'), Direction::Ltr); // LRO
    }

    #[test]
    fn test_weak_and_neutral_categories() {
        assert_eq!(Direction::of(' '), Direction::Neutral);
        assert_eq!(Direction::of('7'), Direction::Neutral); // EN
        assert_eq!(Direction::of('\u{0660}'), Direction::Neutral); // AN, arabic-indic digit
        assert_eq!(Direction::of('('), Direction::Neutral);
        assert_eq!(Direction::of(','), Direction::Neutral);
        assert_eq!(Direction::of('\u{064B}'), Direction::Neutral); // NSM, fathatan
    }

    #[test]
    fn test_predicates() {
        assert!(Direction::Rtl.is_rtl());
        assert!(!Direction::Rtl.is_ltr());
        assert!(Direction::Ltr.is_ltr());
        assert!(!Direction::Neutral.is_rtl());
        assert!(!Direction::Neutral.is_ltr());
    }
}
