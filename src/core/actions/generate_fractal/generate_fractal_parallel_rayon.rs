use rayon::prelude::*;

use crate::core::actions::cancellation::{CancelToken, Cancelled, NeverCancel};
use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::actions::generate_fractal::sweep::columns_into_row_major;
use crate::core::data::sample_grid::SampleGrid;

/// Samples every point of `grid` in parallel using rayon's work-stealing scheduler.
///
/// Columns are independent and are handed out to the pool; the output is
/// identical to [`generate_fractal_serial`](super::generate_fractal_serial::generate_fractal_serial).
/// For cancel-aware generation, use [`generate_fractal_parallel_rayon_cancelable`].
pub fn generate_fractal_parallel_rayon<Alg>(grid: &SampleGrid, algorithm: &Alg) -> Vec<Alg::Success>
where
    Alg: FractalAlgorithm + Sync,
    Alg::Success: Copy + Send,
{
    match generate_fractal_parallel_rayon_cancelable(grid, algorithm, &NeverCancel) {
        Ok(samples) => samples,
        Err(Cancelled) => unreachable!("NeverCancel token should never signal cancellation"),
    }
}

/// Samples every point of `grid` in parallel with cancellation support.
///
/// Polls the token at the start of each column and on every
/// [`CANCEL_POLL_INTERVAL`](crate::core::actions::cancellation::CANCEL_POLL_INTERVAL)th
/// sample within it. Returns
/// [`Cancelled`] as soon as any column observes cancellation; callers should
/// treat that as expected control flow rather than an error to display.
pub fn generate_fractal_parallel_rayon_cancelable<Alg, C>(
    grid: &SampleGrid,
    algorithm: &Alg,
    cancel: &C,
) -> Result<Vec<Alg::Success>, Cancelled>
where
    Alg: FractalAlgorithm + Sync,
    Alg::Success: Copy + Send,
    C: CancelToken,
{
    let height = grid.height();

    let columns: Vec<Vec<Alg::Success>> = (0..grid.width())
        .into_par_iter()
        .map(|column| {
            let mut samples = Vec::with_capacity(height as usize);

            for row in 0..height {
                cancel.check_at(row as usize)?;

                samples.push(algorithm.compute(grid.sample_point(column, row)));
            }

            Ok(samples)
        })
        .collect::<Result<_, _>>()?;

    Ok(columns_into_row_major(&columns))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::actions::generate_fractal::generate_fractal_serial::generate_fractal_serial;
    use crate::core::data::complex::Complex;
    use crate::core::data::plane_region::PlaneRegion;
    use crate::core::data::render_params::RenderParams;
    use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

    #[derive(Debug)]
    struct StubSumAlgorithm {}

    impl FractalAlgorithm for StubSumAlgorithm {
        type Success = f64;

        fn compute(&self, point: Complex) -> Self::Success {
            point.real * 1000.0 + point.imag
        }
    }

    fn create_grid(width: u32, height: u32) -> SampleGrid {
        let region = PlaneRegion::new(-2.0, 2.0, -1.6, 1.6).unwrap();
        SampleGrid::new(&RenderParams::new(width, height, region, 50).unwrap())
    }

    #[test]
    fn test_rayon_generates_same_results_as_serial() {
        let algorithm = StubSumAlgorithm {};
        let grid = create_grid(11, 9);

        let serial_results = generate_fractal_serial(&grid, &algorithm);
        let rayon_results = generate_fractal_parallel_rayon(&grid, &algorithm);

        assert_eq!(rayon_results, serial_results);
    }

    #[test]
    fn test_rayon_matches_serial_for_mandelbrot() {
        let algorithm = MandelbrotAlgorithm::new(64).unwrap();
        let grid = create_grid(100, 80);

        let serial_results = generate_fractal_serial(&grid, &algorithm);
        let rayon_results = generate_fractal_parallel_rayon(&grid, &algorithm);

        assert_eq!(rayon_results, serial_results);
    }

    #[test]
    fn test_rayon_with_single_pixel() {
        let algorithm = StubSumAlgorithm {};
        let grid = create_grid(1, 1);

        let results = generate_fractal_parallel_rayon(&grid, &algorithm);

        assert_eq!(results, vec![-2.0 * 1000.0 + 1.6]);
    }

    #[test]
    fn test_cancelable_produces_same_results_when_not_cancelled() {
        let algorithm = StubSumAlgorithm {};
        let grid = create_grid(10, 8);

        let serial_results = generate_fractal_serial(&grid, &algorithm);
        let cancelable_results =
            generate_fractal_parallel_rayon_cancelable(&grid, &algorithm, &NeverCancel).unwrap();

        assert_eq!(cancelable_results, serial_results);
    }

    #[test]
    fn test_cancelable_returns_cancelled_when_token_is_cancelled() {
        let algorithm = StubSumAlgorithm {};
        let grid = create_grid(10, 8);
        let cancelled = AtomicBool::new(true);
        let cancel_token = || cancelled.load(Ordering::Relaxed);

        let result = generate_fractal_parallel_rayon_cancelable(&grid, &algorithm, &cancel_token);

        assert_eq!(result, Err(Cancelled));
    }

    #[test]
    fn test_cancelable_cancels_after_k_polls() {
        let algorithm = StubSumAlgorithm {};
        let grid = create_grid(6, 6);

        let poll_count = AtomicUsize::new(0);
        let cancel_after = 3;
        let cancel_token = || {
            let count = poll_count.fetch_add(1, Ordering::Relaxed);
            count >= cancel_after
        };

        let result = generate_fractal_parallel_rayon_cancelable(&grid, &algorithm, &cancel_token);

        assert_eq!(result, Err(Cancelled));
        assert!(poll_count.load(Ordering::Relaxed) >= cancel_after);
    }

    #[test]
    fn test_cancellation_polled_at_column_start() {
        let algorithm = StubSumAlgorithm {};
        let grid = create_grid(5, 2);

        let poll_count = AtomicUsize::new(0);
        let cancel_token = || {
            poll_count.fetch_add(1, Ordering::Relaxed);
            false
        };

        let result = generate_fractal_parallel_rayon_cancelable(&grid, &algorithm, &cancel_token);

        assert!(result.is_ok());
        let polls = poll_count.load(Ordering::Relaxed);
        assert!(polls >= 5, "Expected at least 5 polls for 5 columns, got {}", polls);
    }

    #[test]
    fn test_cancellation_polled_multiple_times_on_tall_columns() {
        let algorithm = StubSumAlgorithm {};
        // 3000 rows is well over CANCEL_POLL_INTERVAL: polls at 0, 1024, 2048
        let grid = create_grid(2, 3000);

        let poll_count = AtomicUsize::new(0);
        let cancel_token = || {
            poll_count.fetch_add(1, Ordering::Relaxed);
            false
        };

        let result = generate_fractal_parallel_rayon_cancelable(&grid, &algorithm, &cancel_token);

        assert!(result.is_ok());
        let polls = poll_count.load(Ordering::Relaxed);
        assert!(polls >= 6, "Expected at least 6 polls for 2 tall columns, got {}", polls);
    }
}
