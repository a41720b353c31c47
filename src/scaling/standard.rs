//! Standard Scaler (Z-score normalization) with NaN-tolerant statistics.
//!
//! Transforms features by removing the mean and scaling to unit variance:
//! ```text
//! z = (x - u) / s
//! ```
//! where `u` is the per-column mean and `s` the per-column population
//! standard deviation, both computed over the non-NaN entries only. Any NaN
//! remaining after the transform (i.e. stemming from NaN inputs) is imputed
//! to 0.
//!
//! # Example
//! ```ignore
//! use nanscalers::StandardScaler;
//!
//! let fitted = StandardScaler::new().fit(&train)?;
//! let scaled = fitted.transform(&train)?;
//!
//! // Later, for inference:
//! let loaded = FittedStandardScaler::load_from_file("scaler.bin")?;
//! let new_scaled = loaded.transform(&new_data)?;
//! ```

use crate::error::ScalerError;
use ndarray::{Array1, Array2};
use serde::{Deserialize, Serialize};

/// Serializable parameters for a fitted StandardScaler.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StandardScalerParams {
    /// Mean of each feature (NaN for features with no observed values).
    pub mean: Vec<f64>,
    /// Standard deviation of each feature, with zero-variance features
    /// floored to 1.
    pub std: Vec<f64>,
    /// Number of features seen during fit.
    pub n_features: usize,
}

/// StandardScaler transformer (unfitted).
///
/// Standardizes each feature column using statistics that skip NaN entries.
#[derive(Clone, Debug, Default)]
pub struct StandardScaler;

impl StandardScaler {
    /// Create a new StandardScaler.
    pub fn new() -> Self {
        Self
    }

    /// Fit the scaler, computing per-column mean and std over non-NaN
    /// entries.
    ///
    /// Zero-variance columns get a std of 1 so that transform divides by a
    /// finite value. Columns with no observed values keep NaN statistics;
    /// transform then maps every entry of such a column to 0.
    ///
    /// # Errors
    /// Returns [`ScalerError::EmptyData`] if the input has no rows.
    pub fn fit(&self, data: &Array2<f64>) -> Result<FittedStandardScaler, ScalerError> {
        let (rows, cols) = data.dim();

        if rows == 0 {
            return Err(ScalerError::EmptyData(
                "Cannot fit StandardScaler on empty data".to_string(),
            ));
        }

        let mut mean = Array1::<f64>::zeros(cols);
        let mut std = Array1::<f64>::zeros(cols);

        for col in 0..cols {
            let observed: Vec<f64> = data
                .column(col)
                .iter()
                .copied()
                .filter(|v| !v.is_nan())
                .collect();

            if observed.is_empty() {
                mean[col] = f64::NAN;
                std[col] = f64::NAN;
                continue;
            }

            let n = observed.len() as f64;
            let m = observed.iter().sum::<f64>() / n;
            let variance = observed.iter().map(|v| (v - m).powi(2)).sum::<f64>() / n;
            let s = variance.sqrt();

            mean[col] = m;
            std[col] = if s == 0.0 { 1.0 } else { s };
        }

        Ok(FittedStandardScaler {
            mean,
            std,
            n_features: cols,
        })
    }

    /// Fit the scaler and transform the data in one step.
    pub fn fit_transform(&self, data: &Array2<f64>) -> Result<Array2<f64>, ScalerError> {
        let fitted = self.fit(data)?;
        fitted.transform(data)
    }
}

/// Fitted StandardScaler ready for inference.
#[derive(Clone, Debug)]
pub struct FittedStandardScaler {
    mean: Array1<f64>,
    std: Array1<f64>,
    n_features: usize,
}

impl FittedStandardScaler {
    /// Get the mean values for each feature.
    pub fn mean(&self) -> &Array1<f64> {
        &self.mean
    }

    /// Get the standard deviation values for each feature.
    pub fn std(&self) -> &Array1<f64> {
        &self.std
    }

    /// Returns the number of features seen during fit.
    pub fn n_features_in(&self) -> usize {
        self.n_features
    }

    /// Transform data using the fitted statistics.
    ///
    /// Applies `(x - mean) / std` per column and imputes any resulting NaN
    /// to 0, so NaN inputs never leak into the output.
    ///
    /// # Errors
    /// Returns [`ScalerError::FeatureMismatch`] if the column count differs
    /// from the fitted data.
    pub fn transform(&self, data: &Array2<f64>) -> Result<Array2<f64>, ScalerError> {
        let (_, cols) = data.dim();

        if cols != self.n_features {
            return Err(ScalerError::FeatureMismatch {
                expected_features: self.n_features,
                got_features: cols,
            });
        }

        let standardized = (data - &self.mean) / &self.std;

        Ok(standardized.mapv(|v| if v.is_nan() { 0.0 } else { v }))
    }

    /// Recover the original scale via `y * std + mean`.
    ///
    /// Not a true inverse for inputs that contained NaN: those positions were
    /// imputed to 0 during transform and come back as the column mean, not as
    /// NaN.
    pub fn inverse_transform(&self, data: &Array2<f64>) -> Result<Array2<f64>, ScalerError> {
        let (_, cols) = data.dim();

        if cols != self.n_features {
            return Err(ScalerError::FeatureMismatch {
                expected_features: self.n_features,
                got_features: cols,
            });
        }

        Ok(data * &self.std + &self.mean)
    }

    /// Extract learned parameters as a serializable representation.
    pub fn extract_params(&self) -> StandardScalerParams {
        StandardScalerParams {
            mean: self.mean.to_vec(),
            std: self.std.to_vec(),
            n_features: self.n_features,
        }
    }

    /// Reconstruct a fitted scaler from parameters.
    pub fn from_params(params: StandardScalerParams) -> Result<Self, ScalerError> {
        if params.mean.len() != params.n_features || params.std.len() != params.n_features {
            return Err(ScalerError::InvalidParameter(format!(
                "Statistics length does not match n_features = {}",
                params.n_features
            )));
        }

        Ok(Self {
            mean: Array1::from_vec(params.mean),
            std: Array1::from_vec(params.std),
            n_features: params.n_features,
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
        let params: StandardScalerParams = bincode::deserialize(&bytes)?;
        Self::from_params(params)
    }
}
