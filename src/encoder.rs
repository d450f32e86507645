use crate::codec::Word;
use crate::instructions::{InstructionSet, OperandFormat};
use crate::parser::{InstrRecord, SymbolTable};

/// Fatal translation failures; any of these aborts the whole program.
#[derive(thiserror::Error, Debug)]
pub enum AsmError {
    #[error("unknown mnemonic `{mnemonic}` at address {address}")]
    UnknownMnemonic { mnemonic: String, address: u8 },
    #[error("unresolved register `{name}` in {mnemonic} at address {address}")]
    UnresolvedRegister {
        name: String,
        mnemonic: String,
        address: u8,
    },
    #[error("unresolved port `{name}` in {mnemonic} at address {address}")]
    UnresolvedPort {
        name: String,
        mnemonic: String,
        address: u8,
    },
    #[error("immediate `{value}` in {mnemonic} at address {address} must be two binary digits (e.g. 00b, 11b)")]
    MalformedImmediate {
        value: String,
        mnemonic: String,
        address: u8,
    },
    #[error("undefined label `{label}` in {mnemonic} at address {address}")]
    UndefinedLabel {
        label: String,
        mnemonic: String,
        address: u8,
    },
    /// Unreachable with a consistent descriptor table; kept so table
    /// extensions have a reportable kind.
    #[error("unsupported operand format {format:?} for {mnemonic}")]
    UnsupportedFormat {
        format: OperandFormat,
        mnemonic: String,
    },
}

/// Encodes one record at a time against an injected instruction set and the
/// completed symbol table. Purely functional; holds no state of its own.
pub struct Encoder<'a> {
    isa: &'a InstructionSet,
}

impl<'a> Encoder<'a> {
    pub fn new(isa: &'a InstructionSet) -> Self {
        Self { isa }
    }

    pub fn encode(&self, rec: &InstrRecord, symbols: &SymbolTable) -> Result<Word, AsmError> {
        let desc = self
            .isa
            .lookup(&rec.mnemonic)
            .ok_or_else(|| AsmError::UnknownMnemonic {
                mnemonic: rec.mnemonic.clone(),
                address: rec.address,
            })?;

        let operand = match desc.format {
            OperandFormat::None => 0b0000,
            OperandFormat::RegPort => {
                let (reg, port) = split_pair(&rec.operands);
                (self.register(reg, rec)? << 2) | self.port(port, rec)?
            }
            OperandFormat::RegReg => {
                let (dest, src) = split_pair(&rec.operands);
                (self.register(dest, rec)? << 2) | self.register(src, rec)?
            }
            OperandFormat::RegImm2 => {
                let (reg, imm) = split_pair(&rec.operands);
                (self.register(reg, rec)? << 2) | immediate2(imm, rec)?
            }
            OperandFormat::Reg => self.register(&rec.operands, rec)? << 2,
            OperandFormat::Address => {
                let addr = symbols.get(rec.operands.as_str()).ok_or_else(|| {
                    AsmError::UndefinedLabel {
                        label: rec.operands.clone(),
                        mnemonic: rec.mnemonic.clone(),
                        address: rec.address,
                    }
                })?;
                addr & 0x0F
            }
        };

        Ok(Word::pack(desc.opcode, operand))
    }

    fn register(&self, name: &str, rec: &InstrRecord) -> Result<u8, AsmError> {
        self.isa
            .register(name)
            .ok_or_else(|| AsmError::UnresolvedRegister {
                name: name.to_string(),
                mnemonic: rec.mnemonic.clone(),
                address: rec.address,
            })
    }

    fn port(&self, name: &str, rec: &InstrRecord) -> Result<u8, AsmError> {
        self.isa.port(name).ok_or_else(|| AsmError::UnresolvedPort {
            name: name.to_string(),
            mnemonic: rec.mnemonic.clone(),
            address: rec.address,
        })
    }
}

// A missing comma leaves the right half empty, which then fails resolution
// with the matching error kind.
fn split_pair(operands: &str) -> (&str, &str) {
    operands.split_once(',').unwrap_or((operands, ""))
}

/// Exactly two binary digits, with an optional trailing `b` radix marker.
fn immediate2(text: &str, rec: &InstrRecord) -> Result<u8, AsmError> {
    let malformed = || AsmError::MalformedImmediate {
        value: text.to_string(),
        mnemonic: rec.mnemonic.clone(),
        address: rec.address,
    };
    let digits = text.strip_suffix('b').unwrap_or(text);
    if digits.len() != 2 || !digits.bytes().all(|b| b == b'0' || b == b'1') {
        return Err(malformed());
    }
    u8::from_str_radix(digits, 2).map_err(|_| malformed())
}
