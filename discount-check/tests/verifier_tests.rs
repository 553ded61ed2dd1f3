use common::error::Error;
use discount_check::scenarios;
use discount_check::{CouponCatalog, DiscountVerifier, TotalsReader, TotalsText};
use money_parser::{MoneyConfig, MoneyParser, SeparatorStyle};
use rust_decimal_macros::dec;

fn reader() -> TotalsReader {
    TotalsReader::new(MoneyParser::with_config(MoneyConfig::new("£", SeparatorStyle::CommaDecimal)))
}

#[test]
fn test_scraped_totals_before_and_after_coupon() {
    let reader = reader();
    let verifier = DiscountVerifier::default();

    let before = reader.read(&TotalsText::new("£33.95", None, "£3.25", "Total: £37.20"));
    assert!(!before.has_discount());
    assert!(!verifier.verify(&before, 25).discount_ok);

    let after = reader.read(&TotalsText::new(
        "£33.95",
        Some("-£8.49 [Remove]".to_string()),
        "£3.25",
        "Total: £28.71",
    ));
    let check = verifier.verify(&after, 25);
    assert!(check.passed());
    assert_eq!(check.expected.discount, dec!(8.49));
    assert_eq!(check.expected.total, dec!(28.71));
}

#[test]
fn test_scenarios_run_against_observed_totals() {
    let reader = reader();
    let verifier = DiscountVerifier::default();
    let catalog = CouponCatalog::new();

    // Polo at £33.95, Sunglasses at £90.00, flat £3.25 shipping
    let observed = [
        TotalsText::new("£33.95", Some("-£8.49".to_string()), "£3.25", "£28.71"),
        TotalsText::new("£90.00", Some("-£13.50".to_string()), "£3.25", "£79.75"),
    ];

    for (scenario, text) in scenarios::default_discount_scenarios().iter().zip(observed.iter()) {
        let totals = reader.read(text);
        let check = verifier
            .verify_coupon(&totals, &scenario.coupon, &catalog)
            .unwrap();
        assert!(check.passed(), "{} failed: {:?}", scenario.id(), check);
        assert_eq!(check.expected.percent, scenario.expected_discount_percent);
    }
}

#[test]
fn test_strict_read_propagates_as_parse_error() {
    let reader = reader();
    let result: common::error::Result<_> = reader
        .try_read(&TotalsText::new("", None, "£3.25", "£3.25"))
        .map_err(Error::from);
    match result {
        Err(Error::Parse(msg)) => assert!(msg.contains("subtotal")),
        other => panic!("expected parse error, got {:?}", other),
    }
}

#[test]
fn test_load_scenarios_from_json() {
    let json = r#"[
        {
            "user": { "username": "shopper@example.com", "password": "secret" },
            "product": { "name": "Hoodie" },
            "coupon": "EDGEWORDS",
            "billing": {
                "first_name": "Ada",
                "last_name": "Lovelace",
                "address1": "1 High St",
                "city": "London",
                "county": "Greater London",
                "postcode": "N1 1AA",
                "phone": "07000000000"
            },
            "expected_discount_percent": 15
        }
    ]"#;

    let loaded = scenarios::load(json.as_bytes()).unwrap();
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].id(), "Hoodie-EDGEWORDS");
    assert_eq!(loaded[0].billing.address2, "");
    scenarios::validate(&loaded, &CouponCatalog::new()).unwrap();
}

#[test]
fn test_load_file_missing() {
    let err = scenarios::load_file("/definitely/not/here.json").unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}
