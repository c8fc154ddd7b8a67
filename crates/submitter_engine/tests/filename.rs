use chrono::{DateTime, TimeZone, Utc};
use pretty_assertions::assert_eq;
use submitter_engine::{sanitize_user_name, submission_filename, utc_timestamp};

fn fixed_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 1, 9, 30, 0).unwrap()
}

#[test]
fn sanitizes_apostrophes_spaces_and_case() {
    assert_eq!(sanitize_user_name("Mary O'Brien"), "mary_obrien");
    assert_eq!(sanitize_user_name("Jean-Luc Picard"), "jean_luc_picard");
}

#[test]
fn sanitize_replaces_path_separators() {
    assert_eq!(sanitize_user_name("a/b\\c:d"), "a_b_c_d");
}

#[test]
fn sanitize_is_idempotent() {
    for name in ["Mary O'Brien", "Jean-Luc Picard", "ALICE", "x y-z'w", "Ünïcödé Nåme"] {
        let once = sanitize_user_name(name);
        assert_eq!(sanitize_user_name(&once), once, "input {name:?}");
    }
}

#[test]
fn timestamp_is_utc_iso8601_and_round_trips() {
    let at = fixed_time();
    let text = utc_timestamp(at);

    assert_eq!(text, "2024-05-01T09:30:00.000000Z");
    let parsed = DateTime::parse_from_rfc3339(&text).unwrap();
    assert_eq!(parsed.with_timezone(&Utc), at);
}

#[test]
fn timestamps_sort_lexically_in_time_order() {
    let earlier = utc_timestamp(fixed_time());
    let later = utc_timestamp(Utc.with_ymd_and_hms(2024, 11, 20, 1, 0, 0).unwrap());
    assert!(earlier < later);
}

#[test]
fn filename_joins_parts_and_forces_txt() {
    let name = submission_filename(fixed_time(), "Mary O'Brien", "hw1.py");
    assert_eq!(name, "2024-05-01T09:30:00.000000Z__mary_obrien__hw1.py.txt");
}
