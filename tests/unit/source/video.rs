use super::*;

#[test]
fn parse_rate_handles_rationals_and_plain_numbers() {
    assert_eq!(parse_rate("30/1"), Some(30.0));
    assert_eq!(parse_rate("25"), Some(25.0));
    let ntsc = parse_rate("30000/1001").unwrap();
    assert!((ntsc - 29.97).abs() < 0.001);
    assert_eq!(parse_rate("0/0"), None);
    assert_eq!(parse_rate("abc"), None);
}

#[test]
fn frame_count_prefers_stored_nb_frames() {
    let n = resolve_frame_count(Some("120"), Some("4.0"), Some("25/1")).unwrap();
    assert_eq!(n, FrameCount::exact(120));
}

#[test]
fn frame_count_falls_back_to_duration_times_rate() {
    let n = resolve_frame_count(Some("N/A"), Some("2.5"), Some("30/1")).unwrap();
    assert_eq!(n.as_f64(), 75.0);

    let n = resolve_frame_count(None, Some("1.001"), Some("30000/1001")).unwrap();
    assert!((n.as_f64() - 30.0).abs() < 1e-9);

    let n = resolve_frame_count(Some("0"), Some("0.5"), Some("24")).unwrap();
    assert_eq!(n.as_f64(), 12.0);
}

#[test]
fn frame_count_is_unknown_without_duration_or_rate() {
    assert!(resolve_frame_count(None, None, Some("30/1")).is_none());
    assert!(resolve_frame_count(None, Some("3.0"), None).is_none());
    assert!(resolve_frame_count(None, Some("0"), Some("30/1")).is_none());
}

#[test]
fn open_missing_file_fails_cleanly() {
    let err = VideoSource::open(Path::new("target/unit_video/definitely_missing.mp4"))
        .unwrap_err();
    assert!(matches!(err, SlitError::Source(_)));
}
