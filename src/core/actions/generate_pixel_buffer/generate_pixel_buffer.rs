use crate::core::actions::cancellation::{CancelToken, Cancelled, NeverCancel};
use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::data::pixel_buffer::{BYTES_PER_PIXEL, PixelBuffer, PixelBufferData, PixelBufferError};
use std::error::Error;
use std::fmt;

type ColourMapFailure = Box<dyn Error + Send + Sync>;

#[derive(Debug)]
pub enum GeneratePixelBufferError {
    ColourMap(ColourMapFailure),
    PixelBuffer(PixelBufferError),
}

#[derive(Debug)]
pub enum GeneratePixelBufferCancelableError {
    Cancelled(Cancelled),
    ColourMap(ColourMapFailure),
    PixelBuffer(PixelBufferError),
}

impl From<Cancelled> for GeneratePixelBufferCancelableError {
    fn from(c: Cancelled) -> Self {
        Self::Cancelled(c)
    }
}

impl fmt::Display for GeneratePixelBufferCancelableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cancelled(c) => write!(f, "{}", c),
            Self::ColourMap(err) => write!(f, "colour map error: {}", err),
            Self::PixelBuffer(err) => write!(f, "pixel buffer error: {}", err),
        }
    }
}

impl Error for GeneratePixelBufferCancelableError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Cancelled(c) => Some(c),
            Self::ColourMap(err) => Some(err.as_ref()),
            Self::PixelBuffer(err) => Some(err),
        }
    }
}

impl fmt::Display for GeneratePixelBufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ColourMap(err) => write!(f, "colour map error: {}", err),
            Self::PixelBuffer(err) => write!(f, "pixel buffer error: {}", err),
        }
    }
}

impl Error for GeneratePixelBufferError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::ColourMap(err) => Some(err.as_ref()),
            Self::PixelBuffer(err) => Some(err),
        }
    }
}

impl From<PixelBufferError> for GeneratePixelBufferError {
    fn from(err: PixelBufferError) -> Self {
        Self::PixelBuffer(err)
    }
}

/// Maps row-major sample values to colours and packs them into a pixel buffer.
///
/// For cancel-aware generation, use [`generate_pixel_buffer_cancelable`].
pub fn generate_pixel_buffer<T, CMap: ColourMap<T>>(
    input: Vec<T>,
    mapper: &CMap,
    width: u32,
    height: u32,
) -> Result<PixelBuffer, GeneratePixelBufferError> {
    generate_pixel_buffer_cancelable(input, mapper, width, height, &NeverCancel).map_err(|e| match e {
        GeneratePixelBufferCancelableError::ColourMap(err) => GeneratePixelBufferError::ColourMap(err),
        GeneratePixelBufferCancelableError::PixelBuffer(err) => {
            GeneratePixelBufferError::PixelBuffer(err)
        }
        GeneratePixelBufferCancelableError::Cancelled(_) => {
            unreachable!("NeverCancel token should never signal cancellation")
        }
    })
}

/// Generates a pixel buffer with cancellation support.
///
/// Streams RGB bytes into a buffer preallocated for `width * height` pixels,
/// polling `cancel` as it goes.
///
/// Returns [`GeneratePixelBufferCancelableError::Cancelled`] if cancellation
/// was requested, which should be handled as expected control flow (not an
/// error to display).
pub fn generate_pixel_buffer_cancelable<T, CMap, C>(
    input: Vec<T>,
    mapper: &CMap,
    width: u32,
    height: u32,
    cancel: &C,
) -> Result<PixelBuffer, GeneratePixelBufferCancelableError>
where
    CMap: ColourMap<T>,
    C: CancelToken,
{
    let buffer_size = width as usize * height as usize * BYTES_PER_PIXEL;
    let mut buffer: PixelBufferData = Vec::with_capacity(buffer_size);

    for (i, value) in input.into_iter().enumerate() {
        cancel.check_at(i)?;

        let Colour { r, g, b } = mapper
            .map(value)
            .map_err(GeneratePixelBufferCancelableError::ColourMap)?;

        buffer.extend_from_slice(&[r, g, b]);
    }

    PixelBuffer::from_data(width, height, buffer).map_err(GeneratePixelBufferCancelableError::PixelBuffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::colour_mapping::hsb_rainbow::HsbRainbow;
    use std::sync::atomic::{AtomicBool, Ordering};

    #[derive(Debug)]
    struct StubColourMapSuccess {}

    impl ColourMap<u8> for StubColourMapSuccess {
        fn map(&self, value: u8) -> Result<Colour, ColourMapFailure> {
            Ok(Colour {
                r: value,
                g: value,
                b: value,
            })
        }

        fn display_name(&self) -> &str {
            "Stub Success"
        }
    }

    #[derive(Debug)]
    struct StubColourMapFailure {}

    impl ColourMap<u8> for StubColourMapFailure {
        fn map(&self, _: u8) -> Result<Colour, ColourMapFailure> {
            Err("StubColourMapError".into())
        }

        fn display_name(&self) -> &str {
            "Stub Failure"
        }
    }

    #[test]
    fn test_generates_pixel_buffer_correctly() {
        let input: Vec<u8> = vec![1, 2, 3, 4, 5, 6];
        let mapper = StubColourMapSuccess {};
        let expected_buffer: PixelBufferData =
            vec![1, 1, 1, 2, 2, 2, 3, 3, 3, 4, 4, 4, 5, 5, 5, 6, 6, 6];

        let results = generate_pixel_buffer(input, &mapper, 3, 2).unwrap();

        assert_eq!(results.buffer(), &expected_buffer);
        assert_eq!(results.width(), 3);
        assert_eq!(results.height(), 2);
    }

    #[test]
    fn test_propagates_colour_map_failure() {
        let input: Vec<u8> = vec![1, 2, 3, 4, 5, 6];
        let mapper = StubColourMapFailure {};

        let results = generate_pixel_buffer(input, &mapper, 3, 2);

        assert!(matches!(results, Err(GeneratePixelBufferError::ColourMap(_))));
    }

    #[test]
    fn test_input_size_mismatch_returns_err() {
        let input: Vec<u8> = vec![1, 2, 3, 4, 5, 6];
        let mapper = StubColourMapSuccess {};

        let results = generate_pixel_buffer(input, &mapper, 2, 2);

        assert!(matches!(
            results,
            Err(GeneratePixelBufferError::PixelBuffer(
                PixelBufferError::BoundsMismatch {
                    expected_size: 12,
                    buffer_size: 18
                }
            ))
        ));
    }

    #[test]
    fn test_interior_iterations_become_black() {
        let mapper = HsbRainbow::new(10);

        let results = generate_pixel_buffer(vec![10, 0], &mapper, 2, 1).unwrap();

        assert_eq!(results.buffer(), &vec![0, 0, 0, 255, 0, 0]);
    }

    #[test]
    fn test_cancelable_returns_cancelled_when_token_is_cancelled() {
        let input: Vec<u8> = vec![1, 2, 3, 4, 5, 6];
        let mapper = StubColourMapSuccess {};
        let cancelled = AtomicBool::new(true);
        let cancel_token = || cancelled.load(Ordering::Relaxed);

        let result = generate_pixel_buffer_cancelable(input, &mapper, 3, 2, &cancel_token);

        assert!(matches!(
            result,
            Err(GeneratePixelBufferCancelableError::Cancelled(_))
        ));
    }

    #[test]
    fn test_cancelable_propagates_colour_map_failure() {
        let input: Vec<u8> = vec![1, 2, 3, 4, 5, 6];
        let mapper = StubColourMapFailure {};

        let result = generate_pixel_buffer_cancelable(input, &mapper, 3, 2, &NeverCancel);

        assert!(matches!(
            result,
            Err(GeneratePixelBufferCancelableError::ColourMap(_))
        ));
    }

    #[test]
    fn test_cancelable_error_displays_cancelled() {
        let err = GeneratePixelBufferCancelableError::Cancelled(Cancelled);
        assert_eq!(format!("{}", err), "render cancelled");
    }

    #[test]
    fn test_cancelable_error_displays_colour_map_error() {
        let err = GeneratePixelBufferCancelableError::ColourMap("StubColourMapError".into());
        assert_eq!(format!("{}", err), "colour map error: StubColourMapError");
    }
}
