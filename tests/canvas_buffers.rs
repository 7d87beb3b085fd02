use pixcanvas::Canvas;
use pixcanvas::Gray8;

#[test]
fn negative_stride_writes_bottom_up() {
    let (w, h) = (4, 4);
    let mut buf = vec![0u8; w * h];
    {
        let mut canvas = Canvas::<Gray8>::new(&mut buf, w, h, -(w as i64)).unwrap();
        canvas
            .draw_line(0.0, 0.5, 4.0, 0.5, 1.0, &[255], false)
            .unwrap();
    }
    // geometric row 0 lands in the last byte row
    assert_eq!(&buf[12..16], &[255, 255, 255, 255]);
    assert_eq!(&buf[0..4], &[0, 0, 0, 0]);
}

#[test]
fn padded_stride_leaves_padding_untouched() {
    let (w, h, stride) = (4, 4, 8);
    let mut buf = vec![9u8; h * stride];
    {
        let mut canvas = Canvas::<Gray8>::new(&mut buf, w, h, stride as i64).unwrap();
        assert_eq!((canvas.width(), canvas.height()), (w, h));
        canvas
            .draw_polygon(
                &[0.0, 0.0, 4.0, 0.0, 4.0, 4.0, 0.0, 4.0],
                false,
                1.0,
                &[0],
                true,
                &[255],
                false,
            )
            .unwrap();
    }
    for y in 0..h {
        assert_eq!(&buf[y * stride..y * stride + 4], &[255; 4]);
        assert_eq!(&buf[y * stride + 4..(y + 1) * stride], &[9; 4]);
    }
}

#[test]
fn geometry_outside_buffer_is_clipped() {
    let (w, h) = (8, 8);
    let mut buf = vec![0u8; w * h];
    {
        let mut canvas = Canvas::<Gray8>::new(&mut buf, w, h, w as i64).unwrap();
        canvas
            .draw_line(-20.0, 4.5, 30.0, 4.5, 1.0, &[255], false)
            .unwrap();
        canvas
            .draw_line(4.5, -50.0, 4.5, -10.0, 3.0, &[255], false)
            .unwrap();
    }
    // the in-range part of the first line is drawn
    assert_eq!(buf[4 * 8 + 0], 255);
    assert_eq!(buf[4 * 8 + 7], 255);
    // the fully out-of-range line paints nothing
    assert_eq!(buf[0], 0);
    assert_eq!(buf[7], 0);
}
