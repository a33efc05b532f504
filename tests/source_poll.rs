// tests/source_poll.rs
use chrono::{DateTime, Duration, TimeZone, Utc};

use tcg_sentinel::{Source, SourceKind, ValidationError};

fn at(secs: i64) -> DateTime<Utc> {
    Utc.timestamp_opt(secs, 0).unwrap()
}

fn source(interval: i64) -> Source {
    Source::new(
        "pokemon_events_ie",
        "event_list",
        "https://events.example/ie",
        "pokemon_event_locator",
        interval,
    )
    .unwrap()
}

#[test]
fn valid_inputs_round_trip() {
    for kind in SourceKind::ALL {
        for interval in [60, 61, 300, 86_400] {
            let s = Source::new("n", kind.as_str(), "https://u", "pk", interval)
                .unwrap()
                .with_tags(vec!["a".into(), "b".into()])
                .with_enabled(false)
                .with_description(Some("d".into()));
            assert_eq!(s.name(), "n");
            assert_eq!(s.kind(), kind);
            assert_eq!(s.url(), "https://u");
            assert_eq!(s.parser_key(), "pk");
            assert_eq!(s.poll_interval() as i64, interval);
            assert_eq!(s.tags(), ["a", "b"]);
            assert!(!s.enabled());
            assert_eq!(s.description(), Some("d"));
        }
    }
}

#[test]
fn invalid_inputs_fail_validation() {
    let cases = [
        ("", "event_list", "https://u", 300),
        ("n", "event_list", "", 300),
        ("n", "event", "https://u", 300),
        ("n", "event_list", "https://u", 59),
    ];
    for (name, kind, url, interval) in cases {
        let res: Result<Source, ValidationError> = Source::new(name, kind, url, "pk", interval);
        assert!(res.is_err(), "{name:?} {kind:?} {url:?} {interval}");
    }
}

#[test]
fn disabled_never_due() {
    let s = source(300).with_enabled(false);
    assert!(!s.should_poll(None, at(0)));
    assert!(!s.should_poll(Some(at(0)), at(i32::MAX as i64)));
}

#[test]
fn never_polled_always_due() {
    assert!(source(86_400).should_poll(None, at(1)));
}

#[test]
fn boundary_is_inclusive() {
    let s = source(300);
    assert!(s.should_poll(Some(at(1000)), at(1300)));
    assert!(!s.should_poll(Some(at(1000)), at(1299)));
}

#[test]
fn sub_second_precision_counts() {
    let s = source(300);
    let last = at(1000);
    assert!(!s.should_poll(Some(last), last + Duration::milliseconds(299_999)));
    assert!(s.should_poll(Some(last), last + Duration::milliseconds(300_000)));
}
