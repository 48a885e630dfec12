//! # Obfuscation Codec
//!
//! Passwords are stored shifted: every character's code point is moved up by
//! [`SHIFT`] on the way in and back down on the way out.
//!
//! **This is not encryption.** Anyone holding the stored form can recover the
//! plaintext by shifting back. It only keeps the stored value from being the
//! literal password.
//!
//! ## Range Limits
//!
//! A Rust `char` is a Unicode scalar value, so a shifted code point must stay
//! below `U+10FFFF` and outside the surrogate block `U+D800..=U+DFFF`. Text that
//! would leave that range is rejected with [`CodecError::OutOfRange`] instead of
//! wrapping. For any text `encode` accepts, `decode(encode(x)) == x`.

use thiserror::Error;

/// Number of code points each character is shifted by.
pub const SHIFT: u32 = 5;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    #[error("character {ch:?} at position {position} cannot be shifted")]
    OutOfRange { ch: char, position: usize },
}

/// Reversible character-shift obfuscation. Not a security boundary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ObfuscationCodec;

impl ObfuscationCodec {
    pub fn new() -> Self {
        Self
    }

    pub fn encode(&self, text: &str) -> Result<String, CodecError> {
        shift_all(text, |cp| cp.checked_add(SHIFT))
    }

    pub fn decode(&self, text: &str) -> Result<String, CodecError> {
        shift_all(text, |cp| cp.checked_sub(SHIFT))
    }
}

fn shift_all(text: &str, shift: impl Fn(u32) -> Option<u32>) -> Result<String, CodecError> {
    text.chars()
        .enumerate()
        .map(|(position, ch)| {
            shift(ch as u32)
                .and_then(char::from_u32)
                .ok_or(CodecError::OutOfRange { ch, position })
        })
        .collect()
}
