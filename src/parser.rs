use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

pub const COMMENT: char = ';';
pub const DIRECTIVE: &str = ".EQU";
pub const LABEL_DELIM: char = ':';
pub const IMMEDIATE_MARKER: char = '#';

/// Label name -> 4-bit address, fully built before encoding starts.
pub type SymbolTable = BTreeMap<String, u8>;

/// One instruction line after stripping; `address` is the position in
/// program order and doubles as the runtime address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstrRecord {
    pub address: u8,
    pub mnemonic: String,
    /// Operand text with internal whitespace and `#` markers removed.
    pub operands: String,
}

/// A label bound twice; the later binding wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Redefinition {
    pub label: String,
    pub old: u8,
    pub new: u8,
}

#[derive(Debug, Clone, Default)]
pub struct Parsed {
    pub records: Vec<InstrRecord>,
    pub symbols: SymbolTable,
    pub redefined: Vec<Redefinition>,
}

/// Single left-to-right pass over the source: skips blank, comment and
/// directive lines, binds labels to the current address as they appear,
/// and emits one record per instruction line.
pub fn parse(source: &str) -> Parsed {
    let mut parsed = Parsed::default();
    let mut address: u8 = 0;

    for raw in source.lines() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with(COMMENT) || line.starts_with(DIRECTIVE) {
            continue;
        }

        let line = match line.split_once(COMMENT) {
            Some((code, _)) => code.trim(),
            None => line,
        };

        let line = match line.split_once(LABEL_DELIM) {
            Some((label, rest)) => {
                let label = label.trim().to_string();
                if let Some(&old) = parsed.symbols.get(&label) {
                    warn!(label = %label, old, new = address, "label redefined");
                    parsed.redefined.push(Redefinition {
                        label: label.clone(),
                        old,
                        new: address,
                    });
                }
                parsed.symbols.insert(label, address);
                rest.trim()
            }
            None => line,
        };
        if line.is_empty() {
            // pure label line
            continue;
        }

        let (mnemonic, operands) = match line.split_once(char::is_whitespace) {
            Some((m, rest)) => (m, rest),
            None => (line, ""),
        };
        let record = InstrRecord {
            address,
            mnemonic: mnemonic.to_ascii_uppercase(),
            operands: operands
                .chars()
                .filter(|c| !c.is_whitespace() && *c != IMMEDIATE_MARKER)
                .collect(),
        };
        debug!(address = record.address, mnemonic = %record.mnemonic, operands = %record.operands, "parsed");
        parsed.records.push(record);
        address = address.wrapping_add(1);
    }

    parsed
}
