use serde::Serialize;
use tracing::{debug, warn};

use crate::codec::Word;
use crate::encoder::{AsmError, Encoder};
use crate::instructions::InstructionSet;
use crate::parser::{self, SymbolTable};

/// Number of addresses reachable by the 4-bit program counter.
pub const ADDRESS_SPACE: usize = 16;

/// Non-fatal advisories; the assembled words are still returned in full.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Notice {
    /// The program assembled past what the program counter can reach.
    AddressSpaceExceeded { len: usize },
    /// A label was bound twice; the later address wins.
    LabelRedefined { label: String, old: u8, new: u8 },
}

#[derive(Debug, Clone, Serialize)]
pub struct Assembly {
    /// Ordered machine words; the index is the runtime address.
    pub words: Vec<Word>,
    pub symbols: SymbolTable,
    pub notices: Vec<Notice>,
}

impl Assembly {
    pub fn hex_words(&self) -> Vec<String> {
        self.words.iter().map(|w| w.hex()).collect()
    }
}

/// Run the whole pipeline: parse, then encode every record against the
/// completed symbol table. Fail-fast: the first encoding error aborts with
/// no partial output.
pub fn assemble(isa: &InstructionSet, source: &str) -> Result<Assembly, AsmError> {
    let parsed = parser::parse(source);

    let mut notices: Vec<Notice> = parsed
        .redefined
        .iter()
        .map(|r| Notice::LabelRedefined {
            label: r.label.clone(),
            old: r.old,
            new: r.new,
        })
        .collect();

    let encoder = Encoder::new(isa);
    let mut words = Vec::with_capacity(parsed.records.len());
    for record in &parsed.records {
        let word = encoder.encode(record, &parsed.symbols)?;
        debug!(address = record.address, mnemonic = %record.mnemonic, word = %word, "encoded");
        words.push(word);
    }

    // Post-condition check; advisory so over-long programs stay inspectable.
    if words.len() > ADDRESS_SPACE {
        warn!(len = words.len(), "program exceeds the 4-bit address space");
        notices.push(Notice::AddressSpaceExceeded { len: words.len() });
    }

    Ok(Assembly {
        words,
        symbols: parsed.symbols,
        notices,
    })
}
