use pixcanvas::Canvas;
use pixcanvas::Gray8;
use pixcanvas::Rgb8;

fn gray_at(buf: &[u8], stride: usize, x: usize, y: usize) -> u8 {
    buf[y * stride + x]
}

#[test]
fn horizontal_line_covers_capsule() {
    let (w, h) = (16, 16);
    let mut buf = vec![0u8; w * h];
    {
        let mut canvas = Canvas::<Gray8>::new(&mut buf, w, h, w as i64).unwrap();
        canvas
            .draw_line(2.0, 8.0, 14.0, 8.0, 2.0, &[255], true)
            .unwrap();
    }
    // stroke spans y in [7,9): rows 7 and 8 fully covered
    assert_eq!(gray_at(&buf, 16, 8, 7), 255);
    assert_eq!(gray_at(&buf, 16, 8, 8), 255);
    // rows outside the capsule untouched
    assert_eq!(gray_at(&buf, 16, 8, 6), 0);
    assert_eq!(gray_at(&buf, 16, 8, 9), 0);
    assert_eq!(gray_at(&buf, 16, 8, 12), 0);
}

#[test]
fn pixels_far_from_line_unchanged() {
    let (w, h) = (32, 32);
    let mut buf = vec![7u8; w * h * 3];
    {
        let mut canvas = Canvas::<Rgb8>::new(&mut buf, w, h, (w * 3) as i64).unwrap();
        canvas
            .draw_line(4.0, 8.0, 28.0, 8.0, 2.0, &[250, 10, 10], true)
            .unwrap();
    }
    for y in 12..32 {
        for x in 0..32 {
            let p = y * w * 3 + x * 3;
            assert_eq!(&buf[p..p + 3], &[7, 7, 7], "pixel ({},{})", x, y);
        }
    }
}

#[test]
fn zero_length_line_draws_square_dot() {
    let (w, h) = (16, 16);
    let mut buf = vec![0u8; w * h];
    {
        let mut canvas = Canvas::<Gray8>::new(&mut buf, w, h, w as i64).unwrap();
        canvas
            .draw_line(8.0, 8.0, 8.0, 8.0, 4.0, &[255], true)
            .unwrap();
    }
    // square cap dot: half width 2 around (8,8)
    assert_eq!(gray_at(&buf, 16, 8, 8), 255);
    assert_eq!(gray_at(&buf, 16, 6, 6), 255);
    assert_eq!(gray_at(&buf, 16, 9, 9), 255);
    assert_eq!(gray_at(&buf, 16, 5, 5), 0);
    assert_eq!(gray_at(&buf, 16, 11, 11), 0);
}

#[test]
fn aliased_rendering_is_binary() {
    let (w, h) = (16, 16);
    let mut buf = vec![0u8; w * h];
    {
        let mut canvas = Canvas::<Gray8>::new(&mut buf, w, h, w as i64).unwrap();
        canvas
            .draw_line(2.3, 2.7, 13.1, 9.4, 1.5, &[255], false)
            .unwrap();
    }
    assert!(buf.iter().any(|&v| v == 255));
    assert!(buf.iter().all(|&v| v == 0 || v == 255));
}

#[test]
fn antialiased_rendering_has_fractional_edges() {
    let (w, h) = (16, 16);
    let mut buf = vec![0u8; w * h];
    {
        let mut canvas = Canvas::<Gray8>::new(&mut buf, w, h, w as i64).unwrap();
        canvas
            .draw_line(2.3, 2.7, 13.1, 9.4, 1.5, &[255], true)
            .unwrap();
    }
    assert!(buf.iter().any(|&v| v > 0 && v < 255));
}

#[test]
fn rgba_line_blends_semi_transparent_color() {
    let (w, h) = (16, 16);
    let mut buf = vec![0u8; w * h * 4];
    // opaque black background
    for p in buf.chunks_exact_mut(4) {
        p[3] = 255;
    }
    {
        let mut canvas = pixcanvas::CanvasRgba32::new(&mut buf, w, h, (w * 4) as i64).unwrap();
        canvas
            .draw_line(2.0, 8.0, 14.0, 8.0, 2.0, &[255, 255, 255, 128], true)
            .unwrap();
    }
    let p = (7 * w + 8) * 4;
    // half-alpha white over black lands near mid gray, fully opaque
    assert!((i32::from(buf[p]) - 128).abs() <= 1);
    assert_eq!(buf[p + 3], 255);
}

#[test]
fn aliased_call_does_not_leak_into_next() {
    let (w, h) = (16, 16);
    let mut buf = vec![0u8; w * h];
    {
        let mut canvas = Canvas::<Gray8>::new(&mut buf, w, h, w as i64).unwrap();
        canvas
            .draw_line(2.3, 2.7, 13.1, 4.4, 1.5, &[255], false)
            .unwrap();
        // second call is anti-aliased again in a fresh region
        canvas
            .draw_line(2.3, 10.7, 13.1, 12.4, 1.5, &[255], true)
            .unwrap();
    }
    let lower: Vec<u8> = (9..16).flat_map(|y| buf[y * 16..(y + 1) * 16].to_vec()).collect();
    assert!(lower.iter().any(|&v| v > 0 && v < 255));
}
