//! Reading and writing of image files for tests and debugging
//!
//! Not part of the drawing API. Wraps the `image` crate for RGB buffers
//! in any format it can decode, PPM and PNG included.

use std::path::Path;

/// Read an image file into a raw RGB buffer
pub fn read_file<P: AsRef<Path>>(filename: P) -> Result<(Vec<u8>, usize, usize), image::ImageError> {
    let img = image::open(filename)?.to_rgb8();
    let (w, h) = img.dimensions();
    let buf = img.into_raw();
    Ok((buf, w as usize, h as usize))
}

/// Write a raw RGB buffer to an image file, format chosen by extension
pub fn write_file<P: AsRef<Path>>(
    buf: &[u8],
    width: usize,
    height: usize,
    filename: P,
) -> Result<(), image::ImageError> {
    image::save_buffer(
        filename,
        buf,
        width as u32,
        height as u32,
        image::ColorType::Rgb8,
    )
}

/// Compare two image files pixel by pixel
pub fn img_diff<P: AsRef<Path>>(f1: P, f2: P) -> Result<bool, image::ImageError> {
    let (d1, w1, h1) = read_file(f1)?;
    let (d2, w2, h2) = read_file(f2)?;
    if w1 != w2 || h1 != h2 {
        return Ok(false);
    }
    let mut flag = true;
    for (i, (v1, v2)) in d1.iter().zip(d2.iter()).enumerate() {
        if v1 != v2 {
            println!("{} [{},{},{}]: {} {}", i, (i / 3) % w1, (i / 3) / w1, i % 3, v1, v2);
            flag = false;
        }
    }
    Ok(flag)
}
