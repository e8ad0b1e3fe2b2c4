//! Pixel format conversion helpers for presentation adapters.

use crate::core::data::colour::Colour;
use crate::core::data::pixel_buffer::{BYTES_PER_PIXEL, PixelBuffer};
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;
use std::error::Error;
use std::fmt;

const RGBA_BYTES_PER_PIXEL: usize = 4;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BlitError {
    /// `rect` does not lie inside a `frame_width` x `frame_height` frame.
    OutsideFrame {
        rect: PixelRect,
        frame_width: u32,
        frame_height: u32,
    },
    /// The source image is not the size of the rect it is drawn into.
    SizeMismatch {
        rect: PixelRect,
        image_width: u32,
        image_height: u32,
    },
}

impl fmt::Display for BlitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutsideFrame {
                rect,
                frame_width,
                frame_height,
            } => write!(
                f,
                "rect at ({}, {}) of {}x{} does not fit a {}x{} frame",
                rect.top_left().x,
                rect.top_left().y,
                rect.width(),
                rect.height(),
                frame_width,
                frame_height
            ),
            Self::SizeMismatch {
                rect,
                image_width,
                image_height,
            } => write!(
                f,
                "{}x{} image cannot fill a {}x{} rect",
                image_width,
                image_height,
                rect.width(),
                rect.height()
            ),
        }
    }
}

impl Error for BlitError {}

/// Copies RGB pixel data to RGBA format, setting alpha to 255.
///
/// # Arguments
/// * `src` - Source buffer with RGB data (3 bytes per pixel)
/// * `dst` - Destination buffer for RGBA data (4 bytes per pixel)
///
/// # Panics
/// Panics if buffer sizes don't match (dst.len() must equal src.len() / 3 * 4)
/// or if `src` is not a multiple of 3.
pub fn copy_rgb_to_rgba(src: &[u8], dst: &mut [u8]) {
    assert!(
        src.len() % BYTES_PER_PIXEL == 0,
        "src length {} is not a multiple of 3",
        src.len()
    );
    let expected_dst_len = (src.len() / BYTES_PER_PIXEL) * RGBA_BYTES_PER_PIXEL;
    assert_eq!(
        dst.len(),
        expected_dst_len,
        "dst length {} does not match expected {}",
        dst.len(),
        expected_dst_len
    );

    for (src_pixel, dst_pixel) in src
        .chunks_exact(BYTES_PER_PIXEL)
        .zip(dst.chunks_exact_mut(RGBA_BYTES_PER_PIXEL))
    {
        dst_pixel[0] = src_pixel[0];
        dst_pixel[1] = src_pixel[1];
        dst_pixel[2] = src_pixel[2];
        dst_pixel[3] = 255;
    }
}

fn check_fits(rect: PixelRect, frame: &[u8], frame_width: u32) -> Result<(), BlitError> {
    let frame_height = (frame.len() / RGBA_BYTES_PER_PIXEL)
        .checked_div(frame_width as usize)
        .unwrap_or(0) as u32;
    let top_left = rect.top_left();
    let bottom_right = rect.bottom_right();

    if top_left.x < 0
        || top_left.y < 0
        || bottom_right.x as u32 >= frame_width
        || bottom_right.y as u32 >= frame_height
    {
        return Err(BlitError::OutsideFrame {
            rect,
            frame_width,
            frame_height,
        });
    }

    Ok(())
}

/// Byte range of row `row` of `rect` inside an RGBA frame.
fn row_span(rect: PixelRect, frame_width: u32, row: u32) -> std::ops::Range<usize> {
    let top_left = rect.top_left();
    let y = top_left.y as usize + row as usize;
    let start = (y * frame_width as usize + top_left.x as usize) * RGBA_BYTES_PER_PIXEL;

    start..start + rect.width() as usize * RGBA_BYTES_PER_PIXEL
}

/// Paints `rect` of an RGBA frame `frame_width` pixels wide with one colour.
pub fn fill_rect_rgba(
    frame: &mut [u8],
    frame_width: u32,
    rect: PixelRect,
    colour: Colour,
) -> Result<(), BlitError> {
    check_fits(rect, frame, frame_width)?;

    for row in 0..rect.height() {
        for pixel in frame[row_span(rect, frame_width, row)].chunks_exact_mut(RGBA_BYTES_PER_PIXEL) {
            pixel.copy_from_slice(&[colour.r, colour.g, colour.b, 255]);
        }
    }

    Ok(())
}

/// Draws an RGB image into `rect` of an RGBA frame, row by row.
pub fn blit_rgb_into_rgba(
    image: &PixelBuffer,
    frame: &mut [u8],
    frame_width: u32,
    rect: PixelRect,
) -> Result<(), BlitError> {
    if image.width() != rect.width() || image.height() != rect.height() {
        return Err(BlitError::SizeMismatch {
            rect,
            image_width: image.width(),
            image_height: image.height(),
        });
    }

    check_fits(rect, frame, frame_width)?;

    let src_stride = image.width() as usize * BYTES_PER_PIXEL;

    for (row, src_row) in image.buffer().chunks_exact(src_stride).enumerate() {
        copy_rgb_to_rgba(src_row, &mut frame[row_span(rect, frame_width, row as u32)]);
    }

    Ok(())
}

/// Draws a `width`-pixel border along the inside edge of `rect`.
pub fn stroke_rect_rgba(
    frame: &mut [u8],
    frame_width: u32,
    rect: PixelRect,
    width: u32,
    colour: Colour,
) -> Result<(), BlitError> {
    if width == 0 {
        return Ok(());
    }

    let Point { x: left, y: top } = rect.top_left();
    let horizontal = width.min(rect.height());
    let vertical = width.min(rect.width());
    let bottom = top + (rect.height() - horizontal) as i32;
    let right = left + (rect.width() - vertical) as i32;

    let mut edges = vec![
        (Point { x: left, y: top }, rect.width(), horizontal),
        (Point { x: left, y: bottom }, rect.width(), horizontal),
    ];

    let side_height = rect.height().saturating_sub(2 * horizontal);
    if side_height > 0 {
        let side_top = top + horizontal as i32;
        edges.push((Point { x: left, y: side_top }, vertical, side_height));
        edges.push((Point { x: right, y: side_top }, vertical, side_height));
    }

    for (origin, edge_width, edge_height) in edges {
        // sizes are at least one pixel, so the rect is always valid
        if let Ok(edge) = PixelRect::from_origin_and_size(origin, edge_width, edge_height) {
            fill_rect_rgba(frame, frame_width, edge, colour)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(x: i32, y: i32, width: u32, height: u32) -> PixelRect {
        PixelRect::from_origin_and_size(Point { x, y }, width, height).unwrap()
    }

    fn pixel_at(frame: &[u8], frame_width: u32, x: u32, y: u32) -> [u8; 4] {
        let index = ((y * frame_width + x) * 4) as usize;
        [frame[index], frame[index + 1], frame[index + 2], frame[index + 3]]
    }

    #[test]
    fn test_copy_rgb_to_rgba_known_values() {
        let src = vec![
            255, 0, 0, // red
            0, 255, 0, // green
            0, 0, 255, // blue
            255, 255, 255, // white
        ];
        let mut dst = vec![0; (src.len() / 3) * 4];

        copy_rgb_to_rgba(&src, &mut dst);

        assert_eq!(
            dst,
            vec![
                255, 0, 0, 255, 0, 255, 0, 255, 0, 0, 255, 255, 255, 255, 255, 255
            ]
        );
    }

    #[test]
    fn test_copy_rgb_to_rgba_empty_buffers() {
        let src: Vec<u8> = vec![];
        let mut dst: Vec<u8> = vec![];

        copy_rgb_to_rgba(&src, &mut dst);

        assert!(dst.is_empty());
    }

    #[test]
    fn test_fill_rect_only_touches_rect() {
        let mut frame = vec![0; 4 * 4 * 4];

        fill_rect_rgba(&mut frame, 4, rect(1, 1, 2, 2), Colour::BLUE).unwrap();

        assert_eq!(pixel_at(&frame, 4, 1, 1), [0, 0, 255, 255]);
        assert_eq!(pixel_at(&frame, 4, 2, 2), [0, 0, 255, 255]);
        assert_eq!(pixel_at(&frame, 4, 0, 0), [0, 0, 0, 0]);
        assert_eq!(pixel_at(&frame, 4, 3, 1), [0, 0, 0, 0]);
        assert_eq!(pixel_at(&frame, 4, 1, 3), [0, 0, 0, 0]);
    }

    #[test]
    fn test_fill_rect_outside_frame_fails() {
        let mut frame = vec![0; 4 * 4 * 4];

        assert_eq!(
            fill_rect_rgba(&mut frame, 4, rect(3, 0, 2, 2), Colour::WHITE),
            Err(BlitError::OutsideFrame {
                rect: rect(3, 0, 2, 2),
                frame_width: 4,
                frame_height: 4
            })
        );
    }

    #[test]
    fn test_blit_places_image_rows_at_offset() {
        let image = PixelBuffer::from_data(
            2,
            2,
            vec![
                1, 2, 3, 4, 5, 6, // row 0
                7, 8, 9, 10, 11, 12, // row 1
            ],
        )
        .unwrap();
        let mut frame = vec![0; 5 * 3 * 4];

        blit_rgb_into_rgba(&image, &mut frame, 5, rect(2, 1, 2, 2)).unwrap();

        assert_eq!(pixel_at(&frame, 5, 2, 1), [1, 2, 3, 255]);
        assert_eq!(pixel_at(&frame, 5, 3, 1), [4, 5, 6, 255]);
        assert_eq!(pixel_at(&frame, 5, 2, 2), [7, 8, 9, 255]);
        assert_eq!(pixel_at(&frame, 5, 3, 2), [10, 11, 12, 255]);
        assert_eq!(pixel_at(&frame, 5, 4, 1), [0, 0, 0, 0]);
        assert_eq!(pixel_at(&frame, 5, 1, 2), [0, 0, 0, 0]);
    }

    #[test]
    fn test_blit_rejects_mismatched_image() {
        let image = PixelBuffer::new(3, 2);
        let mut frame = vec![0; 5 * 3 * 4];

        assert!(matches!(
            blit_rgb_into_rgba(&image, &mut frame, 5, rect(0, 0, 2, 2)),
            Err(BlitError::SizeMismatch {
                image_width: 3,
                image_height: 2,
                ..
            })
        ));
    }

    #[test]
    fn test_stroke_rect_draws_border_and_leaves_inside() {
        let mut frame = vec![0; 6 * 6 * 4];

        stroke_rect_rgba(&mut frame, 6, rect(0, 0, 6, 6), 2, Colour::WHITE).unwrap();

        for (x, y) in [(0, 0), (1, 1), (5, 5), (4, 2), (2, 4), (0, 3)] {
            assert_eq!(pixel_at(&frame, 6, x, y), [255, 255, 255, 255], "({x}, {y})");
        }
        for (x, y) in [(2, 2), (3, 3), (2, 3), (3, 2)] {
            assert_eq!(pixel_at(&frame, 6, x, y), [0, 0, 0, 0], "({x}, {y})");
        }
    }
}
