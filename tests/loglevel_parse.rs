use jellylink::config::types::{LogLevel, Mode};
use std::str::FromStr;

#[test]
fn parse_common_levels_case_insensitive() {
    assert_eq!(LogLevel::parse("quiet"), Some(LogLevel::Quiet));
    assert_eq!(LogLevel::parse("QUIET"), Some(LogLevel::Quiet));
    assert_eq!(LogLevel::parse("error"), Some(LogLevel::Quiet));

    assert_eq!(LogLevel::parse("normal"), Some(LogLevel::Normal));
    assert_eq!(LogLevel::parse(" Normal "), Some(LogLevel::Normal));

    assert_eq!(LogLevel::parse("info"), Some(LogLevel::Info));
    assert_eq!(LogLevel::parse("verbose"), Some(LogLevel::Info));

    assert_eq!(LogLevel::parse("debug"), Some(LogLevel::Debug));
    assert_eq!(LogLevel::parse("trace"), Some(LogLevel::Debug));
}

#[test]
fn display_roundtrips_with_fromstr() {
    for lvl in [LogLevel::Quiet, LogLevel::Normal, LogLevel::Info, LogLevel::Debug] {
        let s = lvl.to_string();
        let parsed = LogLevel::from_str(&s).expect("from_str should parse display string");
        assert_eq!(parsed, lvl, "roundtrip failed for {s}");
    }
}

#[test]
fn fromstr_invalid_is_err() {
    assert!(LogLevel::from_str("loud").is_err());
    assert!(LogLevel::from_str("").is_err());
}

#[test]
fn mode_accepts_aliases() {
    assert_eq!(Mode::parse("Movies"), Some(Mode::Movies));
    assert_eq!(Mode::parse("movie"), Some(Mode::Movies));
    assert_eq!(Mode::parse("shows"), Some(Mode::Series));
    assert_eq!(Mode::parse("photos"), Some(Mode::Pictures));
    assert_eq!(Mode::parse("music"), None);
    for m in [Mode::Movies, Mode::Series, Mode::Pictures] {
        assert_eq!(Mode::from_str(&m.to_string()).unwrap(), m);
    }
    assert!(Mode::from_str("music").unwrap_err().contains("music"));
}
