// tests/common/mod.rs
//! 共通テストユーティリティ

pub mod temp;

#[allow(unused_imports)]
pub use temp::TempWorkspace;

/// Path of the built binary under test.
#[allow(dead_code)]
pub fn bin() -> &'static str {
    env!("CARGO_BIN_EXE_char_freq")
}
