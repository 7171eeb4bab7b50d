use super::*;

#[test]
fn format_amount_pads_minor_units() {
    assert_eq!(format_amount(1_245_075), "12450.75 RON");
    assert_eq!(format_amount(5), "0.05 RON");
    assert_eq!(format_amount(0), "0.00 RON");
}

#[test]
fn format_amount_keeps_sign() {
    assert_eq!(format_amount(-5_999), "-59.99 RON");
    assert_eq!(format_amount(i64::MIN), "-92233720368547758.08 RON");
}
