use std::path::PathBuf;

use super::*;
use crate::config::options::MirrorMode;

#[test]
fn baseline_name_is_prefix_and_source() {
    let origin = SourceOrigin::Stills(PathBuf::from("frames"));
    assert_eq!(output_name(&origin, &SliceConfig::default()), "SFTL_frames");
}

#[test]
fn options_are_appended_in_fixed_order() {
    let origin = SourceOrigin::Video(PathBuf::from("clips/car.avi"));
    let cfg = SliceConfig::builder()
        .fixed_width(true)
        .stretch(2.0)
        .mirror(MirrorMode::Half)
        .slice_location(0.75)
        .build()
        .unwrap();
    assert_eq!(
        output_name(&origin, &cfg),
        "SFTL_car.avi_slice=0.75_half-mirror_stretch=2_fixed-width"
    );
}

#[test]
fn unset_options_are_omitted() {
    let origin = SourceOrigin::Remote {
        url: "https://youtu.be/DmYK479EpQc".to_string(),
        file: PathBuf::from("downloads/DmYK479EpQc.mp4"),
    };
    let cfg = SliceConfig::builder()
        .mirror(MirrorMode::Full)
        .stretch(0.5)
        .build()
        .unwrap();
    assert_eq!(
        output_name(&origin, &cfg),
        "SFTL_DmYK479EpQc.mp4_full-mirror_stretch=0.5"
    );
}

#[test]
fn empty_memory_label_is_skipped() {
    let origin = SourceOrigin::Memory(String::new());
    let cfg = SliceConfig::builder().slice_location(0.0).build().unwrap();
    assert_eq!(output_name(&origin, &cfg), "SFTL_slice=0");
}
