use pc4_rs::encoder::AsmError;
use pc4_rs::{assemble, isa::pico, Notice};

const MOTION: &str = include_str!("../sample/motion.asm");

#[test]
fn motion_demo_assembles() {
    let isa = pico::instruction_set();
    let assembly = assemble(&isa, MOTION).unwrap();

    assert_eq!(
        assembly.hex_words(),
        vec![
            "50", "30", "25", "41", "70", "A2", "59", "51", "30", "88", "AC", "99", "50", "30",
            "90",
        ]
    );
    assert_eq!(assembly.symbols.get("START"), Some(&0));
    assert_eq!(assembly.symbols.get("WAIT_MOTION"), Some(&2));
    assert_eq!(assembly.symbols.get("LIGHT_OFF"), Some(&12));
    assert!(assembly.notices.is_empty());
}

#[test]
fn single_line_vectors() {
    let isa = pico::instruction_set();

    let assembly = assemble(&isa, "LDI R0,#00b\n").unwrap();
    assert_eq!(assembly.hex_words(), vec!["50"]);

    let assembly = assemble(&isa, "TARGET: NOP\nNOP\nNOP\nNOP\nNOP\nNOP\nJZ TARGET\n").unwrap();
    // JZ back to address 0 sits at address 6; forward case below
    assert_eq!(assembly.words[6].hex(), "A0");

    let assembly = assemble(&isa, "JZ TARGET\nNOP\nNOP\nNOP\nNOP\nNOP\nTARGET: HLT\n").unwrap();
    assert_eq!(assembly.words[0].hex(), "A6");
}

#[test]
fn sixteen_words_fit_the_address_space() {
    let isa = pico::instruction_set();
    let assembly = assemble(&isa, &"NOP\n".repeat(16)).unwrap();
    assert_eq!(assembly.words.len(), 16);
    assert!(assembly.notices.is_empty());
}

#[test]
fn seventeen_words_raise_the_advisory_but_keep_the_words() {
    let isa = pico::instruction_set();
    let assembly = assemble(&isa, &"NOP\n".repeat(17)).unwrap();
    assert_eq!(assembly.words.len(), 17);
    assert_eq!(
        assembly.notices,
        vec![Notice::AddressSpaceExceeded { len: 17 }]
    );
}

#[test]
fn redefined_label_is_surfaced_and_last_wins() {
    let isa = pico::instruction_set();
    let assembly = assemble(&isa, "X: NOP\nX: NOP\nJMP X\n").unwrap();
    // last binding (address 1) wins: 1001 0001
    assert_eq!(assembly.words[2].hex(), "91");
    assert_eq!(
        assembly.notices,
        vec![Notice::LabelRedefined {
            label: "X".to_string(),
            old: 0,
            new: 1,
        }]
    );
}

#[test]
fn errors_abort_with_no_partial_output() {
    let isa = pico::instruction_set();
    let result = assemble(&isa, "NOP\nFOO R0\nHLT\n");
    assert!(matches!(
        result,
        Err(AsmError::UnknownMnemonic { mnemonic, address }) if mnemonic == "FOO" && address == 1
    ));
}
