use pc4_rs::parser::{parse, Redefinition};

#[test]
fn address_counts_records_not_lines() {
    let parsed = parse("NOP\n\n; just a comment\n.EQU LIGHT_PORT, 00b\nHLT\n");
    let addrs: Vec<u8> = parsed.records.iter().map(|r| r.address).collect();
    assert_eq!(addrs, vec![0, 1]);
}

#[test]
fn label_binds_to_current_address() {
    let parsed = parse("NOP\nLOOP: DEC R2\nJMP LOOP\n");
    assert_eq!(parsed.symbols.get("LOOP"), Some(&1));
    assert_eq!(parsed.records.len(), 3);
}

#[test]
fn pure_label_line_emits_no_record() {
    let parsed = parse("START:\nNOP\n");
    assert_eq!(parsed.symbols.get("START"), Some(&0));
    assert_eq!(parsed.records.len(), 1);
    assert_eq!(parsed.records[0].mnemonic, "NOP");
}

#[test]
fn label_may_be_referenced_before_definition() {
    // The table is complete before encoding; the parser just records both.
    let parsed = parse("JMP END\nNOP\nEND: HLT\n");
    assert_eq!(parsed.symbols.get("END"), Some(&2));
    assert_eq!(parsed.records[0].operands, "END");
}

#[test]
fn inline_comments_are_stripped() {
    let parsed = parse("LDI R0, #00b ; light off\n");
    assert_eq!(parsed.records[0].operands, "R0,00b");
}

#[test]
fn operands_lose_whitespace_and_immediate_marker() {
    let parsed = parse("LDI  R1 ,  #11b\n");
    assert_eq!(parsed.records[0].mnemonic, "LDI");
    assert_eq!(parsed.records[0].operands, "R1,11b");
}

#[test]
fn mnemonic_is_upper_cased() {
    let parsed = parse("nop\nhlt\n");
    let names: Vec<&str> = parsed.records.iter().map(|r| r.mnemonic.as_str()).collect();
    assert_eq!(names, vec!["NOP", "HLT"]);
}

#[test]
fn directive_lines_do_not_consume_addresses() {
    let parsed = parse(".EQU LIGHT_PORT, 00b\nA: NOP\n.EQU MOTION_PORT, 01b\nB: NOP\n");
    assert_eq!(parsed.symbols.get("A"), Some(&0));
    assert_eq!(parsed.symbols.get("B"), Some(&1));
}

#[test]
fn label_redefinition_keeps_last_and_reports() {
    let parsed = parse("X: NOP\nX: HLT\n");
    assert_eq!(parsed.symbols.get("X"), Some(&1));
    assert_eq!(
        parsed.redefined,
        vec![Redefinition {
            label: "X".to_string(),
            old: 0,
            new: 1,
        }]
    );
}
