//! Dense layout conversion.

/// Convert a dense `rows x cols` buffer from column-major to row-major
/// storage.
///
/// `dst[i * cols + j] == src[j * rows + i]` for every valid `(i, j)`;
/// every element is copied exactly once. Reapplying the conversion with
/// swapped dimensions recovers the original buffer.
///
/// # Panics
///
/// Panics if `src.len() != rows * cols`. A shape that disagrees with the
/// storage is a caller contract violation, not a runtime condition this
/// function recovers from.
pub fn col_to_row_major<T: Copy>(src: &[T], rows: usize, cols: usize) -> Vec<T> {
    assert_eq!(
        src.len(),
        rows * cols,
        "storage length must equal rows * cols"
    );
    let mut dst = Vec::with_capacity(rows * cols);
    for i in 0..rows {
        for j in 0..cols {
            dst.push(src[j * rows + i]);
        }
    }
    dst
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_by_three() {
        // column0 = [1, 2], column1 = [3, 4], column2 = [5, 6]
        let src = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
        assert_eq!(
            col_to_row_major(&src, 2, 3),
            vec![1.0, 3.0, 5.0, 2.0, 4.0, 6.0]
        );
    }

    #[test]
    fn test_self_inverse() {
        let src: Vec<i32> = (0..12).collect();
        let once = col_to_row_major(&src, 3, 4);
        let twice = col_to_row_major(&once, 4, 3);
        assert_eq!(twice, src);
    }

    #[test]
    fn test_vectors_are_unchanged() {
        let src = [1.0, 2.0, 3.0];
        assert_eq!(col_to_row_major(&src, 3, 1), src.to_vec());
        assert_eq!(col_to_row_major(&src, 1, 3), src.to_vec());
    }

    #[test]
    fn test_empty() {
        let src: [f64; 0] = [];
        assert!(col_to_row_major(&src, 0, 5).is_empty());
    }

    #[test]
    #[should_panic(expected = "storage length must equal rows * cols")]
    fn test_shape_mismatch_panics() {
        col_to_row_major(&[1.0, 2.0, 3.0], 2, 2);
    }
}
