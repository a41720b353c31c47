//! Half Scaler: standardize only a suffix of the feature columns.
//!
//! Wraps a [`StandardScaler`] and applies it to columns `ignore_dim..` only,
//! passing the leading `ignore_dim` columns through untouched. Useful when
//! the first columns are already-encoded flags (one-hot months, booleans)
//! that must not be recentered.

use crate::error::ScalerError;
use crate::scaling::standard::{FittedStandardScaler, StandardScaler, StandardScalerParams};
use ndarray::{concatenate, s, Array2, Axis};
use serde::{Deserialize, Serialize};

/// Serializable parameters for a fitted HalfScaler.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HalfScalerParams {
    /// Number of leading pass-through columns.
    pub ignore_dim: usize,
    /// Parameters of the inner scaler fitted on the suffix columns.
    pub inner: StandardScalerParams,
}

/// HalfScaler transformer (unfitted).
#[derive(Clone, Debug)]
pub struct HalfScaler {
    ignore_dim: usize,
}

impl HalfScaler {
    /// Create a new HalfScaler leaving the first `ignore_dim` columns
    /// unscaled.
    pub fn new(ignore_dim: usize) -> Self {
        Self { ignore_dim }
    }

    /// Fit the inner scaler on columns `ignore_dim..`.
    ///
    /// # Errors
    /// Returns [`ScalerError::InvalidParameter`] if `ignore_dim` exceeds the
    /// column count, or [`ScalerError::EmptyData`] if the input has no rows.
    pub fn fit(&self, data: &Array2<f64>) -> Result<FittedHalfScaler, ScalerError> {
        let (_, cols) = data.dim();

        if self.ignore_dim > cols {
            return Err(ScalerError::InvalidParameter(format!(
                "ignore_dim = {} exceeds column count {}",
                self.ignore_dim, cols
            )));
        }

        let suffix = data.slice(s![.., self.ignore_dim..]).to_owned();
        let inner = StandardScaler::new().fit(&suffix)?;

        Ok(FittedHalfScaler {
            ignore_dim: self.ignore_dim,
            n_features: cols,
            inner,
        })
    }

    /// Fit and transform in one step.
    pub fn fit_transform(&self, data: &Array2<f64>) -> Result<Array2<f64>, ScalerError> {
        let fitted = self.fit(data)?;
        fitted.transform(data)
    }
}

/// Fitted HalfScaler ready for inference.
#[derive(Clone, Debug)]
pub struct FittedHalfScaler {
    ignore_dim: usize,
    n_features: usize,
    inner: FittedStandardScaler,
}

impl FittedHalfScaler {
    /// Number of leading pass-through columns.
    pub fn ignore_dim(&self) -> usize {
        self.ignore_dim
    }

    /// Returns the number of features seen during fit.
    pub fn n_features_in(&self) -> usize {
        self.n_features
    }

    /// Access the inner scaler fitted on the suffix columns.
    pub fn inner(&self) -> &FittedStandardScaler {
        &self.inner
    }

    fn check_features(&self, cols: usize) -> Result<(), ScalerError> {
        if cols != self.n_features {
            return Err(ScalerError::FeatureMismatch {
                expected_features: self.n_features,
                got_features: cols,
            });
        }
        Ok(())
    }

    /// Standardize columns `ignore_dim..` and keep the prefix columns
    /// bit-identical. Column order and count are preserved.
    pub fn transform(&self, data: &Array2<f64>) -> Result<Array2<f64>, ScalerError> {
        self.check_features(data.ncols())?;

        let prefix = data.slice(s![.., ..self.ignore_dim]);
        let scaled = self
            .inner
            .transform(&data.slice(s![.., self.ignore_dim..]).to_owned())?;

        Ok(concatenate(Axis(1), &[prefix, scaled.view()])?)
    }

    /// Mirror of [`transform`](Self::transform): prefix columns pass through,
    /// suffix columns go through the inner scaler's inverse.
    pub fn inverse_transform(&self, data: &Array2<f64>) -> Result<Array2<f64>, ScalerError> {
        self.check_features(data.ncols())?;

        let prefix = data.slice(s![.., ..self.ignore_dim]);
        let unscaled = self
            .inner
            .inverse_transform(&data.slice(s![.., self.ignore_dim..]).to_owned())?;

        Ok(concatenate(Axis(1), &[prefix, unscaled.view()])?)
    }

    /// Extract learned parameters as a serializable representation.
    pub fn extract_params(&self) -> HalfScalerParams {
        HalfScalerParams {
            ignore_dim: self.ignore_dim,
            inner: self.inner.extract_params(),
        }
    }

    /// Reconstruct a fitted scaler from parameters.
    pub fn from_params(params: HalfScalerParams) -> Result<Self, ScalerError> {
        let inner = FittedStandardScaler::from_params(params.inner)?;
        Ok(Self {
            ignore_dim: params.ignore_dim,
            n_features: params.ignore_dim + inner.n_features_in(),
            inner,
        })
    }

    /// Save the fitted scaler to a file.
    pub fn save_to_file<P: AsRef<std::path::Path>>(&self, path: P) -> std::io::Result<()> {
        let params = self.extract_params();
        let bytes = bincode::serialize(&params).map_err(std::io::Error::other)?;
        std::fs::write(path, bytes)
    }

    /// Load a fitted scaler from a file.
    pub fn load_from_file<P: AsRef<std::path::Path>>(path: P) -> Result<Self, ScalerError> {
        let bytes = std::fs::read(path)?;
        let params: HalfScalerParams = bincode::deserialize(&bytes)?;
        Self::from_params(params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::arr2;

    fn create_test_data() -> Array2<f64> {
        arr2(&[[0.0, 1.0, 2.0], [0.0, 3.0, 4.0]])
    }

    #[test]
    fn test_half_scaler_prefix_untouched() {
        let data = create_test_data();
        let transformed = HalfScaler::new(1).fit_transform(&data).unwrap();

        // Column 0 is bit-identical to the input
        assert_eq!(transformed[[0, 0]], 0.0);
        assert_eq!(transformed[[1, 0]], 0.0);
        assert_eq!(transformed.dim(), data.dim());
    }

    #[test]
    fn test_half_scaler_suffix_standardized() {
        let data = create_test_data();
        let transformed = HalfScaler::new(1).fit_transform(&data).unwrap();

        // Columns 1 and 2 each hold two distinct values, so they map to ±1
        for col in 1..3 {
            assert!((transformed[[0, col]] + 1.0).abs() < 1e-10);
            assert!((transformed[[1, col]] - 1.0).abs() < 1e-10);
        }
    }

    #[test]
    fn test_half_scaler_matches_standard_on_suffix() {
        let data = arr2(&[[1.0, 10.0], [0.0, 20.0], [1.0, 30.0]]);
        let half = HalfScaler::new(1).fit_transform(&data).unwrap();
        let full = StandardScaler::new()
            .fit_transform(&data.slice(s![.., 1..]).to_owned())
            .unwrap();

        for row in 0..3 {
            assert_eq!(half[[row, 1]], full[[row, 0]]);
        }
    }

    #[test]
    fn test_half_scaler_ignore_dim_zero() {
        // ignore_dim = 0 degenerates to a plain StandardScaler
        let data = arr2(&[[1.0, 10.0], [3.0, 20.0], [5.0, 30.0]]);
        let half = HalfScaler::new(0).fit_transform(&data).unwrap();
        let full = StandardScaler::new().fit_transform(&data).unwrap();

        for (a, b) in half.iter().zip(full.iter()) {
            assert_eq!(a, b);
        }
    }

    #[test]
    fn test_half_scaler_ignore_all_columns() {
        // ignore_dim = ncols leaves everything untouched
        let data = create_test_data();
        let transformed = HalfScaler::new(3).fit_transform(&data).unwrap();

        for (a, b) in data.iter().zip(transformed.iter()) {
            assert_eq!(a, b);
        }
    }

    #[test]
    fn test_half_scaler_inverse_roundtrip() {
        let data = arr2(&[[1.0, 10.0, -5.0], [0.0, 20.0, 0.0], [1.0, 30.0, 5.0]]);
        let fitted = HalfScaler::new(1).fit(&data).unwrap();

        let transformed = fitted.transform(&data).unwrap();
        let recovered = fitted.inverse_transform(&transformed).unwrap();

        assert_eq!(recovered.dim(), data.dim());
        for (o, r) in data.iter().zip(recovered.iter()) {
            assert!((o - r).abs() < 1e-10);
        }
    }

    #[test]
    fn test_half_scaler_ignore_dim_out_of_range() {
        let data = create_test_data();
        let result = HalfScaler::new(4).fit(&data);
        assert!(matches!(result, Err(ScalerError::InvalidParameter(_))));
    }

    #[test]
    fn test_half_scaler_feature_mismatch() {
        let data = create_test_data();
        let fitted = HalfScaler::new(1).fit(&data).unwrap();

        let wrong_data = arr2(&[[1.0, 2.0]]);
        let result = fitted.transform(&wrong_data);
        assert!(matches!(result, Err(ScalerError::FeatureMismatch { .. })));
    }

    #[test]
    fn test_half_scaler_nan_in_suffix() {
        // NaN handling is inherited from the inner scaler
        let data = arr2(&[[1.0, 2.0], [1.0, f64::NAN], [0.0, 6.0]]);
        let transformed = HalfScaler::new(1).fit_transform(&data).unwrap();

        assert_eq!(transformed[[1, 1]], 0.0);
        assert!(transformed.iter().all(|v| v.is_finite()));
        // Prefix passes NaN-free values through untouched
        assert_eq!(transformed[[0, 0]], 1.0);
    }

    #[test]
    fn test_half_scaler_params_roundtrip() {
        let data = create_test_data();
        let fitted = HalfScaler::new(1).fit(&data).unwrap();

        let params = fitted.extract_params();
        let restored = FittedHalfScaler::from_params(params).unwrap();

        assert_eq!(restored.ignore_dim(), 1);
        assert_eq!(restored.n_features_in(), 3);

        let t1 = fitted.transform(&data).unwrap();
        let t2 = restored.transform(&data).unwrap();
        for (a, b) in t1.iter().zip(t2.iter()) {
            assert_eq!(a, b);
        }
    }

    #[test]
    fn test_half_scaler_save_load_file() {
        let data = create_test_data();
        let fitted = HalfScaler::new(2).fit(&data).unwrap();

        let temp_file = std::env::temp_dir().join("test_nanscalers_half.bin");
        fitted.save_to_file(&temp_file).unwrap();

        let loaded = FittedHalfScaler::load_from_file(&temp_file).unwrap();
        assert_eq!(loaded.ignore_dim(), 2);

        let t1 = fitted.transform(&data).unwrap();
        let t2 = loaded.transform(&data).unwrap();
        for (a, b) in t1.iter().zip(t2.iter()) {
            assert!((a - b).abs() < 1e-12);
        }

        std::fs::remove_file(temp_file).ok();
    }
}
