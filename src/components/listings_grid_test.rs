use super::*;

fn listing(currency: &str, price: f64) -> Listing {
    Listing {
        id: 1,
        title: "Offer".to_owned(),
        issuer: "Acme Bank".to_owned(),
        price,
        currency: currency.to_owned(),
        benefits: vec![],
        image: String::new(),
        featured: false,
        is_new: false,
        category: "membership".to_owned(),
    }
}

// =============================================================
// Currency symbol lookup
// =============================================================

#[test]
fn known_codes_map_to_symbols() {
    assert_eq!(currency_symbol("INR"), "\u{20b9}");
    assert_eq!(currency_symbol("USD"), "$");
    assert_eq!(currency_symbol("EUR"), "\u{20ac}");
    assert_eq!(currency_symbol("GBP"), "\u{a3}");
    assert_eq!(currency_symbol("JPY"), "\u{a5}");
    assert_eq!(currency_symbol("CNY"), "\u{a5}");
    assert_eq!(currency_symbol("AUD"), "A$");
    assert_eq!(currency_symbol("CAD"), "C$");
    assert_eq!(currency_symbol("CHF"), "CHF");
    assert_eq!(currency_symbol("SGD"), "S$");
}

#[test]
fn unrecognized_code_falls_back_to_itself() {
    assert_eq!(currency_symbol("XYZ"), "XYZ");
}

// =============================================================
// Price labels
// =============================================================

#[test]
fn price_label_prefixes_symbol() {
    assert_eq!(price_label(&listing("USD", 120.0)), "$120");
}

#[test]
fn price_label_shows_raw_code_for_unknown_currency() {
    assert_eq!(price_label(&listing("XYZ", 120.0)), "XYZ120");
}

#[test]
fn price_label_defaults_blank_currency_to_inr() {
    assert_eq!(price_label(&listing("", 99.0)), "\u{20b9}99");
}
