use serde::Serialize;

use pc4_rs::{Assembly, Word};

pub const ROM_HEADER: &str = "v2.0 raw";

/// Render words as a Logisim `v2.0 raw` ROM file, one hex byte per line.
pub fn render_v2_raw(words: &[Word]) -> String {
    let mut out = String::from(ROM_HEADER);
    out.push('\n');
    for word in words {
        out.push_str(&word.hex());
        out.push('\n');
    }
    out
}

/// One listing row: address and word, both in their textual forms.
#[derive(Debug, Clone, Serialize)]
pub struct Row {
    pub address: String, // 4 binary digits
    pub bits: String,    // 8 binary digits
    pub hex: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Listing {
    pub rows: Vec<Row>,
}

pub fn listing(assembly: &Assembly) -> Listing {
    let rows = assembly
        .words
        .iter()
        .enumerate()
        .map(|(addr, word)| Row {
            address: format!("{addr:04b}"),
            bits: word.bits(),
            hex: word.hex(),
        })
        .collect();
    Listing { rows }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_header_and_one_byte_per_line() {
        let words = vec![Word(0x50), Word(0x30), Word(0xA6)];
        assert_eq!(render_v2_raw(&words), "v2.0 raw\n50\n30\nA6\n");
    }

    #[test]
    fn empty_program_is_just_the_header() {
        assert_eq!(render_v2_raw(&[]), "v2.0 raw\n");
    }
}
