// crates/shared-kernel/src/value_objects/symbol.rs
use std::fmt;

use serde::{Serialize, Serializer};

/// A single-byte character key after canonicalization.
///
/// Ordering is by byte value. Display and serialization keep printable ASCII
/// as-is and escape everything else (`\n`, `\t`, `\x7f`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Symbol(u8);

impl Symbol {
    #[inline]
    pub const fn new(byte: u8) -> Self {
        Self(byte)
    }

    #[inline]
    pub const fn byte(self) -> u8 {
        self.0
    }

    #[inline]
    pub const fn is_printable(self) -> bool {
        self.0.is_ascii_graphic() || self.0 == b' '
    }
}

impl From<u8> for Symbol {
    fn from(byte: u8) -> Self {
        Self::new(byte)
    }
}

impl From<Symbol> for u8 {
    fn from(symbol: Symbol) -> Self {
        symbol.0
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            // A bare space reads as an empty cell.
            b' ' => f.pad("' '"),
            byte if self.is_printable() => f.pad(char::from(byte).encode_utf8(&mut [0; 4])),
            byte => f.pad(&byte.escape_ascii().to_string()),
        }
    }
}

impl Serialize for Symbol {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.is_printable() {
            serializer.serialize_str(&char::from(self.0).to_string())
        } else {
            serializer.serialize_str(&self.0.escape_ascii().to_string())
        }
    }
}
