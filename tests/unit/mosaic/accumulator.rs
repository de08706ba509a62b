use super::*;

/// 3-channel frame whose pixel at `(x, y)` is `[x, y, tag]`.
fn coord_frame(width: u32, height: u32, tag: u8) -> Frame {
    let mut data = Vec::with_capacity((width * height * 3) as usize);
    for y in 0..height {
        for x in 0..width {
            data.extend_from_slice(&[x as u8, y as u8, tag]);
        }
    }
    Frame::new(width, height, 3, data).unwrap()
}

#[test]
fn new_mosaic_is_unseeded_and_empty() {
    let m = Mosaic::new();
    assert!(m.is_empty());
    assert_eq!(m.width(), 0);
    assert_eq!(m.height(), 0);
    assert_eq!(m.channels(), 0);
    assert!(m.layout().is_none());
    assert!(m.to_row_major().is_empty());
}

#[test]
fn append_copies_requested_columns_in_order() {
    let mut m = Mosaic::new();
    let f0 = coord_frame(8, 4, 0);
    let f1 = coord_frame(8, 4, 1);

    assert_eq!(m.append(&f0, SliceSpec { left: 0, right: 2 }).unwrap(), 2);
    assert_eq!(m.append(&f1, SliceSpec { left: 5, right: 8 }).unwrap(), 3);

    assert_eq!(m.width(), 5);
    assert_eq!(m.height(), 4);
    assert_eq!(m.channels(), 3);
    assert_eq!(m.pixel(0, 0), &[0, 0, 0]);
    assert_eq!(m.pixel(1, 3), &[1, 3, 0]);
    assert_eq!(m.pixel(2, 0), &[5, 0, 1]);
    assert_eq!(m.pixel(4, 2), &[7, 2, 1]);
}

#[test]
fn to_row_major_matches_pixel_access() {
    let mut m = Mosaic::new();
    m.append(&coord_frame(6, 3, 9), SliceSpec { left: 1, right: 4 })
        .unwrap();
    let rows = m.to_row_major();
    assert_eq!(rows.len(), 3 * 3 * 3);
    for y in 0..3u32 {
        for x in 0..3u32 {
            let off = ((y * 3 + x) * 3) as usize;
            assert_eq!(&rows[off..off + 3], m.pixel(x, y));
        }
    }
}

#[test]
fn bounds_past_the_right_edge_are_truncated() {
    let mut m = Mosaic::new();
    let f = coord_frame(10, 2, 0);
    assert_eq!(m.append(&f, SliceSpec { left: 8, right: 14 }).unwrap(), 2);
    assert_eq!(m.append(&f, SliceSpec { left: 12, right: 13 }).unwrap(), 0);
    assert_eq!(m.width(), 2);
    assert_eq!(m.pixel(1, 1), &[9, 1, 0]);
}

#[test]
fn first_frame_seeds_layout_even_when_strip_is_empty() {
    let mut m = Mosaic::new();
    let f = coord_frame(4, 5, 0);
    m.append(&f, SliceSpec { left: 9, right: 10 }).unwrap();
    assert!(m.is_empty());
    assert_eq!(m.height(), 5);
    assert_eq!(m.channels(), 3);
}

#[test]
fn height_mismatch_is_fatal() {
    let mut m = Mosaic::new();
    m.append(&coord_frame(4, 4, 0), SliceSpec { left: 0, right: 1 })
        .unwrap();
    let err = m
        .append(&coord_frame(4, 3, 1), SliceSpec { left: 1, right: 2 })
        .unwrap_err();
    assert!(matches!(
        err,
        SlitError::DimensionMismatch {
            expected_height: 4,
            got_height: 3,
            ..
        }
    ));
    assert_eq!(m.width(), 1);
}

#[test]
fn channel_mismatch_is_fatal() {
    let mut m = Mosaic::new();
    m.append(&coord_frame(4, 4, 0), SliceSpec { left: 0, right: 1 })
        .unwrap();
    let rgba = Frame::filled(4, 4, &[1, 2, 3, 4]).unwrap();
    let err = m.append(&rgba, SliceSpec { left: 0, right: 1 }).unwrap_err();
    assert!(matches!(
        err,
        SlitError::DimensionMismatch {
            expected_channels: 3,
            got_channels: 4,
            ..
        }
    ));
}

#[test]
fn differing_widths_with_same_height_are_accepted() {
    let mut m = Mosaic::new();
    m.append(&coord_frame(4, 2, 0), SliceSpec { left: 0, right: 2 })
        .unwrap();
    m.append(&coord_frame(9, 2, 0), SliceSpec { left: 7, right: 9 })
        .unwrap();
    assert_eq!(m.width(), 4);
}

#[test]
fn frame_new_rejects_bad_buffers() {
    assert!(Frame::new(2, 2, 3, vec![0; 11]).is_err());
    assert!(Frame::new(2, 2, 0, vec![]).is_err());
    assert!(Frame::new(2, 2, 5, vec![0; 20]).is_err());
    let f = Frame::filled(3, 2, &[7, 8]).unwrap();
    assert_eq!(f.channels, 2);
    assert_eq!(f.pixel(2, 1), &[7, 8]);
}

#[test]
#[should_panic(expected = "column 0 out of range")]
fn column_on_empty_mosaic_panics() {
    Mosaic::new().column(0);
}

#[test]
#[should_panic(expected = "column 2 out of range")]
fn pixel_past_the_right_edge_panics() {
    let mut m = Mosaic::new();
    m.append(&coord_frame(4, 2, 0), SliceSpec { left: 0, right: 2 })
        .unwrap();
    m.pixel(2, 0);
}

#[test]
#[should_panic(expected = "row 2 out of range")]
fn pixel_below_the_bottom_edge_panics() {
    let mut m = Mosaic::new();
    m.append(&coord_frame(4, 2, 0), SliceSpec { left: 0, right: 2 })
        .unwrap();
    m.pixel(0, 2);
}

#[test]
#[should_panic(expected = "pixel (3, 0) out of range")]
fn frame_pixel_does_not_wrap_into_the_next_row() {
    coord_frame(3, 2, 0).pixel(3, 0);
}
