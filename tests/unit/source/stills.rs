use std::io::Cursor;

use super::*;

fn fixture_dir(name: &str) -> PathBuf {
    let dir = PathBuf::from("target").join("unit_stills").join(name);
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

fn write_rgb_still(dir: &Path, index: u64, width: u32, height: u32, value: u8) {
    let data = vec![value; (width * height * 3) as usize];
    image::save_buffer_with_format(
        dir.join(still_file_name(index)),
        &data,
        width,
        height,
        image::ColorType::Rgb8,
        image::ImageFormat::Png,
    )
    .unwrap();
}

#[test]
fn still_names_are_zero_padded_to_four_digits() {
    assert_eq!(still_file_name(0), "frame_0000.png");
    assert_eq!(still_file_name(42), "frame_0042.png");
    assert_eq!(still_file_name(12345), "frame_12345.png");
}

#[test]
fn reads_numbered_stills_in_order() {
    let dir = fixture_dir("in_order");
    for i in 0..3 {
        write_rgb_still(&dir, i, 4, 2, i as u8 * 50);
    }
    std::fs::create_dir_all(dir.join("not_counted")).unwrap();

    let mut src = StillsSource::open(&dir).unwrap();
    assert_eq!(src.frame_count(), FrameCount::exact(3));
    assert_eq!(src.origin(), &SourceOrigin::Stills(dir.clone()));
    for i in 0..3u8 {
        let f = src.next_frame().unwrap().unwrap();
        assert_eq!((f.width, f.height, f.channels), (4, 2, 3));
        assert_eq!(f.data[0], i * 50);
    }
    assert!(src.next_frame().unwrap().is_none());
}

#[test]
fn missing_numbered_still_is_a_source_error() {
    let dir = fixture_dir("gap");
    write_rgb_still(&dir, 0, 2, 2, 1);
    write_rgb_still(&dir, 2, 2, 2, 1);

    let mut src = StillsSource::open(&dir).unwrap();
    assert!(src.next_frame().unwrap().is_some());
    let err = src.next_frame().unwrap_err();
    assert!(matches!(err, SlitError::Source(_)));
}

#[test]
fn missing_directory_fails_to_open() {
    let dir = PathBuf::from("target").join("unit_stills").join("does_not_exist");
    let _ = std::fs::remove_dir_all(&dir);
    assert!(StillsSource::open(&dir).is_err());
}

#[test]
fn decode_keeps_8bit_layouts_and_converts_others() {
    let luma = image::GrayImage::from_raw(2, 1, vec![10, 20]).unwrap();
    let mut buf = Vec::new();
    DynamicImage::ImageLuma8(luma)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .unwrap();
    let f = decode_still(&buf).unwrap();
    assert_eq!((f.width, f.height, f.channels), (2, 1, 1));
    assert_eq!(f.data, vec![10, 20]);

    let wide = image::ImageBuffer::<image::Rgb<u16>, Vec<u16>>::from_raw(1, 1, vec![0, 65535, 0])
        .unwrap();
    let f = frame_from_image(DynamicImage::ImageRgb16(wide)).unwrap();
    assert_eq!(f.channels, 3);
    assert_eq!(f.data, vec![0, 255, 0]);

    assert!(decode_still(b"not an image").is_err());
}
