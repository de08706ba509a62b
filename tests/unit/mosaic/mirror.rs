use super::*;
use crate::config::options::MirrorMode;
use crate::geometry::slice::SliceSpec;
use crate::mosaic::frame::Frame;

fn striped(width: u32) -> Mosaic {
    let mut data = Vec::new();
    for y in 0..2u32 {
        for x in 0..width {
            data.extend_from_slice(&[x as u8 * 10, y as u8]);
        }
    }
    let frame = Frame::new(width, 2, 2, data).unwrap();
    let mut m = Mosaic::new();
    m.append(
        &frame,
        SliceSpec {
            left: 0,
            right: u64::from(width),
        },
    )
    .unwrap();
    m
}

#[test]
fn none_leaves_the_mosaic_untouched() {
    let m = striped(5);
    let out = finish_mirror(m.clone(), &SliceConfig::default()).unwrap();
    assert_eq!(out, m);
}

#[test]
fn half_and_full_both_append_an_exact_flip() {
    for mode in [MirrorMode::Half, MirrorMode::Full] {
        let cfg = SliceConfig::builder().mirror(mode).build().unwrap();
        let m = striped(5);
        let out = finish_mirror(m.clone(), &cfg).unwrap();
        assert_eq!(out.width(), 10);
        assert_eq!(out.height(), 2);
        for x in 0..5u32 {
            for y in 0..2u32 {
                assert_eq!(out.pixel(x, y), m.pixel(x, y));
                assert_eq!(out.pixel(9 - x, y), m.pixel(x, y));
            }
        }
    }
}

#[test]
fn mirroring_an_empty_mosaic_is_a_no_op() {
    let cfg = SliceConfig::builder().mirror(MirrorMode::Full).build().unwrap();
    let out = finish_mirror(Mosaic::new(), &cfg).unwrap();
    assert!(out.is_empty());
}
