/// Interleaves per-column sample vectors into a single row-major vector.
///
/// Every column must hold the same number of samples.
pub(crate) fn columns_into_row_major<S: Copy>(columns: &[Vec<S>]) -> Vec<S> {
    let height = columns.first().map_or(0, Vec::len);
    let mut samples = Vec::with_capacity(columns.len() * height);

    for row in 0..height {
        for column in columns {
            samples.push(column[row]);
        }
    }

    samples
}
