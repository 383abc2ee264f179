// crates/domain/src/classification.rs
use serde::{Deserialize, Serialize};

use crate::value_objects::Symbol;

/// 集計対象とする文字クラス
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CharClass {
    /// Nothing is counted.
    None,
    /// ASCII letters, folded to uppercase.
    #[default]
    Alpha,
    /// ASCII digits.
    Digit,
    /// Everything that is not an ASCII letter or digit.
    Symbol,
    /// Letters (uppercased) and digits.
    AlphaNumeric,
    /// Every eligible byte, letters uppercased.
    Ascii,
}

impl CharClass {
    pub const ALL: [Self; 6] = [
        Self::None,
        Self::Alpha,
        Self::Digit,
        Self::Symbol,
        Self::AlphaNumeric,
        Self::Ascii,
    ];

    /// Returns the canonical byte for `byte` under this class, ignoring any screen.
    #[inline]
    pub const fn canonicalize(self, byte: u8) -> Option<u8> {
        match self {
            Self::None => None,
            Self::Alpha if byte.is_ascii_alphabetic() => Some(byte.to_ascii_uppercase()),
            Self::Digit if byte.is_ascii_digit() => Some(byte),
            Self::Symbol if !byte.is_ascii_alphanumeric() => Some(byte),
            Self::AlphaNumeric if byte.is_ascii_alphanumeric() => Some(byte.to_ascii_uppercase()),
            Self::Ascii => Some(byte.to_ascii_uppercase()),
            _ => None,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Alpha => "alpha",
            Self::Digit => "digit",
            Self::Symbol => "symbol",
            Self::AlphaNumeric => "alpha-numeric",
            Self::Ascii => "ascii",
        }
    }
}

/// Byte pre-filter applied before any class logic.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ByteScreen {
    /// Accepts bytes whose distance from `'0'` lies in `[0, 127)`, i.e. `0x30..=0xAE`.
    ///
    /// Space and the punctuation below `'0'` never pass, for any class.
    /// Kept as the default so reports stay comparable with earlier releases.
    #[default]
    Legacy,
    /// Accepts every 7-bit byte, `0x00..=0x7F`.
    SevenBit,
}

impl ByteScreen {
    #[inline]
    pub const fn admits(self, byte: u8) -> bool {
        match self {
            Self::Legacy => {
                let offset = byte as i16 - b'0' as i16;
                offset >= 0 && offset < 127
            }
            Self::SevenBit => byte.is_ascii(),
        }
    }
}

/// Decides whether a raw byte is counted and under which canonical form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClassificationPolicy {
    class: CharClass,
    screen: ByteScreen,
}

impl ClassificationPolicy {
    pub const fn new(class: CharClass, screen: ByteScreen) -> Self {
        Self { class, screen }
    }

    /// Policy with the legacy screen.
    pub const fn legacy(class: CharClass) -> Self {
        Self::new(class, ByteScreen::Legacy)
    }

    pub const fn class(&self) -> CharClass {
        self.class
    }

    pub const fn screen(&self) -> ByteScreen {
        self.screen
    }

    /// `None` rejects the byte; `Some` carries the form to count.
    #[inline]
    pub const fn canonical(&self, byte: u8) -> Option<Symbol> {
        if !self.screen.admits(byte) {
            return None;
        }
        match self.class.canonicalize(byte) {
            Some(b) => Some(Symbol::new(b)),
            None => None,
        }
    }

    #[inline]
    pub const fn accepts(&self, byte: u8) -> bool {
        self.canonical(byte).is_some()
    }
}
