use ledger_lens::format::{format_address, format_hash, format_magnitude, CellDisplay, EMPTY_CELL};
use ledger_lens::ledger::CellValue;

#[test]
fn test_format_magnitude_examples() {
    assert_eq!(format_magnitude(1500.0), "1.50K");
    assert_eq!(format_magnitude(2_500_000.0), "2.50M");
    assert_eq!(format_magnitude(0.0), "0");
}

#[test]
fn test_format_address_examples() {
    assert_eq!(format_address("0xABCDEF1234567890", 6, 4), "0xABCD...7890");
    assert_eq!(format_address("0x1234AB", 6, 4), "0x1234AB");
}

#[test]
fn test_format_hash_missing_cell() {
    assert_eq!(format_hash(&CellValue::Missing, 10), EMPTY_CELL);
}

#[test]
fn test_cell_display_modes() {
    let hash = CellValue::from("0xaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaabbbb");

    let abbreviated = CellDisplay::new(false, 4).format("Tx Hash", &hash);
    assert_eq!(abbreviated, "0xaa...bbbb");

    let full = CellDisplay::new(true, 4).format("Tx Hash", &hash);
    assert_eq!(full, "0xaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaabbbb");
}
