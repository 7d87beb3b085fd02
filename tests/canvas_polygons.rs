use pixcanvas::Canvas;
use pixcanvas::CanvasGray8;
use pixcanvas::CanvasRgb24;
use pixcanvas::Gray8;
use pixcanvas::Rgb8;

fn rgb_at(buf: &[u8], stride: usize, x: usize, y: usize) -> [u8; 3] {
    let p = y * stride + x * 3;
    [buf[p], buf[p + 1], buf[p + 2]]
}

const SQUARE: [f64; 8] = [4.0, 4.0, 12.0, 4.0, 12.0, 12.0, 4.0, 12.0];

#[test]
fn fill_sets_interior_leaves_exterior() {
    let (w, h) = (16, 16);
    let mut buf = vec![0u8; w * h * 3];
    {
        let mut canvas = CanvasRgb24::new(&mut buf, w, h, (w * 3) as i64).unwrap();
        canvas
            .draw_polygon(&SQUARE, false, 1.0, &[0, 0, 0], true, &[0, 255, 0], true)
            .unwrap();
    }
    assert_eq!(rgb_at(&buf, 48, 8, 8), [0, 255, 0]);
    assert_eq!(rgb_at(&buf, 48, 5, 10), [0, 255, 0]);
    assert_eq!(rgb_at(&buf, 48, 2, 2), [0, 0, 0]);
    assert_eq!(rgb_at(&buf, 48, 14, 14), [0, 0, 0]);
}

#[test]
fn outline_renders_on_top_of_fill() {
    let (w, h) = (16, 16);
    let mut buf = vec![0u8; w * h * 3];
    {
        let mut canvas = Canvas::<Rgb8>::new(&mut buf, w, h, (w * 3) as i64).unwrap();
        canvas
            .draw_polygon(&SQUARE, true, 2.0, &[0, 0, 255], true, &[255, 0, 0], false)
            .unwrap();
    }
    // boundary pixel: stroke of width 2 centered on x = 4 covers [3,5)
    assert_eq!(rgb_at(&buf, 48, 4, 8), [0, 0, 255]);
    assert_eq!(rgb_at(&buf, 48, 3, 8), [0, 0, 255]);
    // interior stays filled
    assert_eq!(rgb_at(&buf, 48, 8, 8), [255, 0, 0]);
    // exterior clear of both
    assert_eq!(rgb_at(&buf, 48, 1, 8), [0, 0, 0]);
}

#[test]
fn two_points_outline_capsule_without_fill() {
    let (w, h) = (16, 16);
    let mut buf = vec![0u8; w * h];
    {
        let mut canvas = Canvas::<Gray8>::new(&mut buf, w, h, w as i64).unwrap();
        canvas
            .draw_polygon(
                &[4.0, 8.0, 12.0, 8.0],
                true,
                2.0,
                &[200],
                true,
                &[90],
                false,
            )
            .unwrap();
    }
    // the outline degrades to a capsule along the segment
    assert_eq!(buf[7 * 16 + 8], 200);
    assert_eq!(buf[8 * 16 + 8], 200);
    // no fill is produced for fewer than 3 points
    assert!(buf.iter().all(|&v| v != 90));
    assert_eq!(buf[2 * 16 + 8], 0);
}

#[test]
fn single_point_outline_draws_dot() {
    let (w, h) = (16, 16);
    let mut buf = vec![0u8; w * h];
    {
        let mut canvas = CanvasGray8::new(&mut buf, w, h, w as i64).unwrap();
        canvas
            .draw_polygon(&[8.0, 8.0], true, 4.0, &[200], false, &[0], false)
            .unwrap();
    }
    assert_eq!(buf[8 * 16 + 8], 200);
    assert_eq!(buf[2 * 16 + 2], 0);
}

#[test]
fn coverage_does_not_leak_between_polygons() {
    let (w, h) = (16, 16);
    let mut buf = vec![0u8; w * h];
    {
        let mut canvas = Canvas::<Gray8>::new(&mut buf, w, h, w as i64).unwrap();
        canvas
            .draw_polygon(
                &[2.0, 2.0, 6.0, 2.0, 6.0, 6.0, 2.0, 6.0],
                false,
                1.0,
                &[0],
                true,
                &[100],
                true,
            )
            .unwrap();
        canvas
            .draw_polygon(
                &[10.0, 10.0, 14.0, 10.0, 14.0, 14.0, 10.0, 14.0],
                false,
                1.0,
                &[0],
                true,
                &[200],
                true,
            )
            .unwrap();
    }
    // the second draw repaints nothing from the first
    assert_eq!(buf[4 * 16 + 4], 100);
    assert_eq!(buf[12 * 16 + 12], 200);
    assert_eq!(buf[8 * 16 + 8], 0);
}

#[test]
fn self_intersecting_fill_uses_even_odd() {
    // bowtie: the crossing region is covered twice and cancels
    let (w, h) = (16, 16);
    let mut buf = vec![0u8; w * h];
    {
        let mut canvas = Canvas::<Gray8>::new(&mut buf, w, h, w as i64).unwrap();
        canvas
            .draw_polygon(
                &[2.0, 2.0, 14.0, 14.0, 14.0, 2.0, 2.0, 14.0],
                false,
                1.0,
                &[0],
                true,
                &[255],
                false,
            )
            .unwrap();
    }
    // lobes are filled
    assert_eq!(buf[8 * 16 + 3], 255);
    assert_eq!(buf[8 * 16 + 12], 255);
}
