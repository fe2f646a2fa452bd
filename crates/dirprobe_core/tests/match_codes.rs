use dirprobe_core::{ConfigError, MatchCodeSet, DEFAULT_MATCH_CODES};

#[test]
fn default_set_is_the_documented_six() {
    let set = MatchCodeSet::default();
    assert_eq!(set.codes(), &DEFAULT_MATCH_CODES);
    for code in DEFAULT_MATCH_CODES {
        assert!(set.contains(code));
    }
    assert!(!set.contains(404));
    assert!(!set.contains(500));
}

#[test]
fn display_joins_with_comma_space() {
    assert_eq!(MatchCodeSet::default().to_string(), "200, 301, 302, 401, 403, 429");
}

#[test]
fn parses_a_comma_separated_override() {
    let set: MatchCodeSet = "200, 418,503".parse().unwrap();
    assert_eq!(set.codes(), &[200, 418, 503]);
}

#[test]
fn parse_drops_duplicates_but_keeps_order() {
    let set: MatchCodeSet = "301,200,301".parse().unwrap();
    assert_eq!(set.codes(), &[301, 200]);
}

#[test]
fn parse_rejects_non_numeric_tokens() {
    let err = "200,teapot".parse::<MatchCodeSet>().unwrap_err();
    assert!(matches!(err, ConfigError::InvalidMatchCodes { .. }));
}

#[test]
fn parse_rejects_an_empty_list() {
    let err = " , ".parse::<MatchCodeSet>().unwrap_err();
    assert!(matches!(err, ConfigError::InvalidMatchCodes { .. }));
}
