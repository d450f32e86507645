use serde::{Deserialize, Serialize};

/// How an instruction's operand text maps onto the 4-bit operand field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OperandFormat {
    None,
    RegPort,
    RegReg,
    RegImm2,
    Reg,
    Address,
}

#[derive(Debug, Clone, Copy)]
pub struct InstrDesc {
    pub mnemonic: &'static str,
    pub opcode: u8, // low 4 bits only
    pub format: OperandFormat,
}

/// Immutable instruction-set description handed to the encoder.
///
/// Built once at startup (see `isa::pico`) and shared read-only; tests can
/// construct alternative sets the same way.
#[derive(Debug, Clone)]
pub struct InstructionSet {
    instructions: &'static [InstrDesc],
    registers: &'static [(&'static str, u8)],
    ports: &'static [(&'static str, u8)],
}

impl InstructionSet {
    pub fn new(
        instructions: &'static [InstrDesc],
        registers: &'static [(&'static str, u8)],
        ports: &'static [(&'static str, u8)],
    ) -> Self {
        Self {
            instructions,
            registers,
            ports,
        }
    }

    pub fn lookup(&self, mnemonic: &str) -> Option<&InstrDesc> {
        self.instructions.iter().find(|d| d.mnemonic == mnemonic)
    }

    /// 2-bit code for a register name.
    pub fn register(&self, name: &str) -> Option<u8> {
        self.registers
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, code)| *code)
    }

    /// 2-bit code for a port name.
    pub fn port(&self, name: &str) -> Option<u8> {
        self.ports
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, code)| *code)
    }
}
