use std::fmt;

use serde::{Deserialize, Serialize};

pub const WORD_BITS: usize = 8;

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum CodecError {
    #[error("word `{0}` is not exactly 8 binary digits")]
    MalformedWord(String),
}

/// One machine word: a 4-bit opcode followed by a 4-bit operand field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Word(pub u8);

impl Word {
    pub fn pack(opcode: u8, operand: u8) -> Self {
        Word((opcode & 0x0F) << 4 | (operand & 0x0F))
    }

    pub fn opcode(self) -> u8 {
        self.0 >> 4
    }

    pub fn operand(self) -> u8 {
        self.0 & 0x0F
    }

    /// Eight binary digits, opcode field first.
    pub fn bits(self) -> String {
        format!("{:08b}", self.0)
    }

    /// Two uppercase hex digits, zero-padded.
    pub fn hex(self) -> String {
        format!("{:02X}", self.0)
    }

    /// Parse an 8-digit binary string as produced by [`Word::bits`].
    pub fn from_bits(bits: &str) -> Result<Self, CodecError> {
        if bits.len() != WORD_BITS || !bits.bytes().all(|b| b == b'0' || b == b'1') {
            return Err(CodecError::MalformedWord(bits.to_string()));
        }
        u8::from_str_radix(bits, 2)
            .map(Word)
            .map_err(|_| CodecError::MalformedWord(bits.to_string()))
    }

    /// Parse the two-digit hex rendering back into a word.
    pub fn from_hex(hex: &str) -> Result<Self, CodecError> {
        if hex.len() != 2 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(CodecError::MalformedWord(hex.to_string()));
        }
        u8::from_str_radix(hex, 16)
            .map(Word)
            .map_err(|_| CodecError::MalformedWord(hex.to_string()))
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02X}", self.0)
    }
}
