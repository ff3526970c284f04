//! Unicode character classes required by the policy.

use std::fmt;

use unicode_properties::{GeneralCategory, UnicodeGeneralCategory};

/// A character class the policy requires at least one of.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    Uppercase,
    Lowercase,
    Digit,
}

impl CharClass {
    /// All required classes, in evaluation order.
    pub const ALL: [CharClass; 3] = [CharClass::Uppercase, CharClass::Lowercase, CharClass::Digit];

    /// Returns `true` if `c` belongs to this class.
    ///
    /// Case follows the Unicode `Uppercase`/`Lowercase` properties, so `Ñ` and
    /// `ñ` count. Digits are General Category `Nd` only: `٣` and `１` count,
    /// `①` and `²` do not.
    #[inline]
    pub fn matches(self, c: char) -> bool {
        match self {
            CharClass::Uppercase => c.is_uppercase(),
            CharClass::Lowercase => c.is_lowercase(),
            CharClass::Digit => is_decimal_digit(c),
        }
    }

    fn bit(self) -> u8 {
        match self {
            CharClass::Uppercase => 0b001,
            CharClass::Lowercase => 0b010,
            CharClass::Digit => 0b100,
        }
    }
}

impl fmt::Display for CharClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CharClass::Uppercase => "uppercase letter",
            CharClass::Lowercase => "lowercase letter",
            CharClass::Digit => "digit",
        };
        f.write_str(name)
    }
}

/// Returns `true` for characters of General Category `Nd`.
#[inline]
pub fn is_decimal_digit(c: char) -> bool {
    c.is_ascii_digit() || c.general_category() == GeneralCategory::DecimalNumber
}

/// Set of classes seen while scanning a candidate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct ClassSet(u8);

impl ClassSet {
    const FULL: u8 = 0b111;

    pub(crate) fn insert_char(&mut self, c: char) {
        for class in CharClass::ALL {
            if class.matches(c) {
                self.0 |= class.bit();
            }
        }
    }

    pub(crate) fn contains(self, class: CharClass) -> bool {
        self.0 & class.bit() != 0
    }

    pub(crate) fn is_full(self) -> bool {
        self.0 == Self::FULL
    }
}
