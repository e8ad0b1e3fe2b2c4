use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::actions::generate_fractal::sweep::columns_into_row_major;
use crate::core::data::sample_grid::SampleGrid;

/// Samples every point of `grid` on the calling thread.
///
/// Sweeps one column at a time, left to right, each column top to bottom.
/// Results are returned in row-major order.
pub fn generate_fractal_serial<Alg>(grid: &SampleGrid, algorithm: &Alg) -> Vec<Alg::Success>
where
    Alg: FractalAlgorithm,
    Alg::Success: Copy,
{
    let columns: Vec<Vec<Alg::Success>> = (0..grid.width())
        .map(|column| {
            (0..grid.height())
                .map(|row| algorithm.compute(grid.sample_point(column, row)))
                .collect()
        })
        .collect();

    columns_into_row_major(&columns)
}
