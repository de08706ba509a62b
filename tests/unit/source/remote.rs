use super::*;

#[test]
fn resolved_path_is_first_non_empty_line() {
    assert_eq!(
        parse_resolved_path("\n  downloads/abc.mp4  \nextra\n"),
        Some(PathBuf::from("downloads/abc.mp4"))
    );
    assert_eq!(parse_resolved_path("   \n\n"), None);
}

#[test]
fn output_template_lives_in_download_dir() {
    let t = output_template(Path::new("dl"));
    assert_eq!(t, Path::new("dl").join("%(id)s.%(ext)s"));
}

#[test]
fn new_keeps_url_and_directory() {
    let r = RemoteVideo::new("https://example.com/watch?v=x", "downloads");
    assert_eq!(r.url, "https://example.com/watch?v=x");
    assert_eq!(r.download_dir, PathBuf::from("downloads"));
}
