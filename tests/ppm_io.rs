use pixcanvas::ppm;

#[test]
fn write_then_read_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("gradient.png");

    let (w, h) = (4usize, 3usize);
    let mut buf = vec![0u8; w * h * 3];
    for y in 0..h {
        for x in 0..w {
            let p = (y * w + x) * 3;
            buf[p] = (x * 60) as u8;
            buf[p + 1] = (y * 80) as u8;
            buf[p + 2] = 200;
        }
    }
    ppm::write_file(&buf, w, h, &path).unwrap();

    let (data, rw, rh) = ppm::read_file(&path).unwrap();
    assert_eq!((rw, rh), (w, h));
    assert_eq!(data, buf);
}

#[test]
fn img_diff_detects_differences() {
    let dir = tempfile::tempdir().unwrap();
    let a = dir.path().join("a.png");
    let b = dir.path().join("b.png");

    let buf1 = vec![10u8; 2 * 2 * 3];
    let mut buf2 = buf1.clone();
    buf2[5] = 99;
    ppm::write_file(&buf1, 2, 2, &a).unwrap();
    ppm::write_file(&buf2, 2, 2, &b).unwrap();

    assert!(ppm::img_diff(&a, &a).unwrap());
    assert!(!ppm::img_diff(&a, &b).unwrap());
}
