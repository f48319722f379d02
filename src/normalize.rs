use ndarray::Array2;

fn l2_norm<'a, I: Iterator<Item = &'a f32>>(values: I) -> f32 {
    values.map(|v| v * v).sum::<f32>().sqrt()
}

/// Rescales `values` to unit L2 norm. An all-zero (or empty) vector is left
/// untouched.
pub fn normalize_vector(values: &mut [f32]) {
    let norm = l2_norm(values.iter());
    if norm > 0.0 {
        for v in values.iter_mut() {
            *v /= norm;
        }
    }
}

/// Divides every entry by the L2 norm taken over the whole matrix.
pub fn normalize_matrix(mat: &mut Array2<f32>) {
    let norm = l2_norm(mat.iter());
    if norm > 0.0 {
        mat.mapv_inplace(|v| v / norm);
    }
}

/// Sets every entry whose absolute value is below `tolerance` to zero.
pub fn mask_lower_values(mat: &mut Array2<f32>, tolerance: f32) {
    mat.mapv_inplace(|v| if v.abs() < tolerance { 0.0 } else { v });
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ndarray::arr2;

    #[test]
    fn test_normalize_vector() {
        let mut v = vec![3.0, 4.0];
        normalize_vector(&mut v);
        assert_abs_diff_eq!(0.6, v[0]);
        assert_abs_diff_eq!(0.8, v[1]);

        let mut zeros = vec![0.0, 0.0];
        normalize_vector(&mut zeros);
        assert_eq!(vec![0.0, 0.0], zeros);
    }

    #[test]
    fn test_normalize_matrix_uses_single_norm() {
        let mut m = arr2(&[[1.0, 1.0], [1.0, 1.0]]);
        normalize_matrix(&mut m);
        for v in m.iter() {
            assert_abs_diff_eq!(0.5, *v);
        }
    }

    #[test]
    fn test_mask_is_idempotent() {
        let mut m = arr2(&[[1e-7f32, -1e-7], [0.5, -0.25]]);
        mask_lower_values(&mut m, 1e-6);
        assert_eq!(arr2(&[[0.0f32, 0.0], [0.5, -0.25]]), m);

        let once = m.clone();
        mask_lower_values(&mut m, 1e-6);
        assert_eq!(once, m);
    }
}
