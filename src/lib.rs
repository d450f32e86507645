pub mod assembler;
pub mod codec;
pub mod encoder;
pub mod instructions;
pub mod parser;

pub mod isa {
    pub mod pico; // the 4-bit-PC demo machine
}

pub use assembler::{assemble, Assembly, Notice, ADDRESS_SPACE};
pub use codec::{CodecError, Word};
pub use encoder::{AsmError, Encoder};
pub use instructions::{InstrDesc, InstructionSet, OperandFormat};
pub use parser::{InstrRecord, SymbolTable};
