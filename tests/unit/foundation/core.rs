use super::*;

#[test]
fn frame_count_rejects_zero_negative_and_nan() {
    assert!(FrameCount::exact(0).checked_divisor().is_err());
    assert!(FrameCount::estimated(-3.0).checked_divisor().is_err());
    assert!(FrameCount::estimated(f64::NAN).checked_divisor().is_err());
    assert!(FrameCount::estimated(f64::INFINITY).checked_divisor().is_err());
    assert_eq!(FrameCount::estimated(29.97).checked_divisor().unwrap(), 29.97);
}

#[test]
fn frame_count_emptiness_and_wholeness() {
    assert!(FrameCount::exact(0).is_empty());
    assert!(FrameCount::estimated(f64::NAN).is_empty());
    assert!(!FrameCount::exact(1).is_empty());
    assert!(FrameCount::exact(12).is_whole());
    assert!(!FrameCount::estimated(12.5).is_whole());
}

#[test]
fn strip_layout_column_len() {
    let layout = StripLayout {
        height: 10,
        channels: 3,
    };
    assert_eq!(layout.column_len(), 30);
}

#[test]
fn frame_index_next_saturates() {
    assert_eq!(FrameIndex(4).next(), FrameIndex(5));
    assert_eq!(FrameIndex(u64::MAX).next(), FrameIndex(u64::MAX));
}
