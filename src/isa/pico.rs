use crate::instructions::{InstrDesc, InstructionSet, OperandFormat};

/// The demo machine: 4-bit program counter, 8-bit words, four general
/// registers and four 2-bit-addressed I/O ports.
pub const TABLE: &[InstrDesc] = &[
    InstrDesc {
        mnemonic: "NOP",
        opcode: 0b0000,
        format: OperandFormat::None,
    },
    InstrDesc {
        mnemonic: "HLT",
        opcode: 0b0001,
        format: OperandFormat::None,
    },
    InstrDesc {
        mnemonic: "IN",
        opcode: 0b0010,
        format: OperandFormat::RegPort,
    },
    InstrDesc {
        mnemonic: "OUT",
        opcode: 0b0011,
        format: OperandFormat::RegPort,
    },
    InstrDesc {
        mnemonic: "MOV",
        opcode: 0b0100,
        format: OperandFormat::RegReg,
    },
    InstrDesc {
        mnemonic: "LDI",
        opcode: 0b0101,
        format: OperandFormat::RegImm2,
    },
    InstrDesc {
        mnemonic: "ADD",
        opcode: 0b0110,
        format: OperandFormat::RegReg,
    },
    InstrDesc {
        mnemonic: "SUB",
        opcode: 0b0111,
        format: OperandFormat::RegReg,
    },
    InstrDesc {
        mnemonic: "DEC",
        opcode: 0b1000,
        format: OperandFormat::Reg,
    },
    InstrDesc {
        mnemonic: "JMP",
        opcode: 0b1001,
        format: OperandFormat::Address,
    },
    InstrDesc {
        mnemonic: "JZ",
        opcode: 0b1010,
        format: OperandFormat::Address,
    },
];

pub const REGISTERS: &[(&str, u8)] = &[
    ("R0", 0b00),
    ("R1", 0b01),
    ("R2", 0b10),
    ("R3", 0b11),
];

// Only four ports fit the 2-bit port field of IN/OUT; the last two are
// placeholders in the demo board.
pub const PORTS: &[(&str, u8)] = &[
    ("LIGHT_PORT", 0b00),
    ("MOTION_PORT", 0b01),
    ("DUMMY_PORT_A", 0b10),
    ("DUMMY_PORT_B", 0b11),
];

pub fn instruction_set() -> InstructionSet {
    InstructionSet::new(TABLE, REGISTERS, PORTS)
}
