use duocalc::util::{
    display::truncate_for_display,
    roman::{MAX_ROMAN, RomanError, RomanGrammar, decode, decode_lookup, encode},
};

#[test]
fn encode_then_decode_is_identity() {
    for n in 1..=MAX_ROMAN {
        let numeral = encode(n).unwrap();
        assert_eq!(decode(&numeral), Ok(n), "{n} encoded as {numeral}");
    }
}

#[test]
fn small_numerals_agree_across_grammars() {
    for numeral in ["I", "II", "III", "IV", "V", "VI", "VII", "VIII", "IX", "X"] {
        let value = decode(numeral).unwrap();
        assert_eq!(decode_lookup(numeral), Ok(value));
        assert_eq!(encode(value).unwrap(), numeral);
    }
}

#[test]
fn decode_known_values() {
    assert_eq!(decode("XIV"), Ok(14));
    assert_eq!(decode("XL"), Ok(40));
    assert_eq!(decode("XC"), Ok(90));
    assert_eq!(decode("CD"), Ok(400));
    assert_eq!(decode("MMMCMXCIX"), Ok(3999));
    assert_eq!(decode("MMXXVI"), Ok(2026));
}

#[test]
fn decode_rejects_malformed_tokens() {
    for token in ["", "IIII", "VV", "IL", "IC", "XM", "MMMM", "VX", "DD", "CMC", "IXI", "A"] {
        assert_eq!(decode(token),
                   Err(RomanError::Invalid(token.to_string())),
                   "{token} should be rejected");
    }
}

#[test]
fn lookup_rejects_larger_values() {
    assert!(decode_lookup("XI").is_err());
    assert!(RomanGrammar::Lookup.decode("XL").is_err());
    assert_eq!(RomanGrammar::Subtractive.decode("XL"), Ok(40));
}

#[test]
fn encode_rejects_values_without_representation() {
    assert_eq!(encode(0), Err(RomanError::NonPositive(0)));
    assert_eq!(encode(-7), Err(RomanError::NonPositive(-7)));
    assert_eq!(encode(4000), Err(RomanError::TooLarge(4000)));
}

#[test]
fn long_results_are_cut_for_display() {
    let long = "ab".repeat(25);
    let shown = truncate_for_display(&long, 40);
    assert_eq!(shown.chars().count(), 43);
    assert!(shown.ends_with("..."));

    assert_eq!(truncate_for_display(&"x".repeat(40), 40), "x".repeat(40));
}
