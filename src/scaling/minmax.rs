//! Min-Max scaling to a target feature range.
//!
//! Two transformers live here:
//!
//! - [`ColumnMinMaxScaler`]: per-column scaling, the classic
//!   ```text
//!   x_scaled = (x - x_min) / (x_max - x_min) * (max - min) + min
//!   ```
//! - [`MinMaxScaler`]: global scaling over a whole 2-D array. It flattens the
//!   input to a single column, delegates to a [`ColumnMinMaxScaler`], and
//!   restores the original shape. All elements share one (min, max), which is
//!   deliberately different from the per-column semantics of
//!   [`StandardScaler`](crate::scaling::StandardScaler).
//!
//! # Example
//! ```ignore
//! use nanscalers::MinMaxScaler;
//!
//! let fitted = MinMaxScaler::new().with_range(-1.0, 1.0).fit(&data)?;
//! let scaled = fitted.transform(&data)?;
//! ```

use crate::error::ScalerError;
use ndarray::{Array1, Array2};
use serde::{Deserialize, Serialize};

/// Serializable parameters for a fitted ColumnMinMaxScaler.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ColumnMinMaxScalerParams {
    /// Target (min, max) range.
    pub feature_range: (f64, f64),
    /// Minimum of each feature.
    pub min: Vec<f64>,
    /// Maximum of each feature.
    pub max: Vec<f64>,
    /// Scale factor for each feature: (max - min) / (feature_max - feature_min).
    pub scale: Vec<f64>,
    /// Number of features seen during fit.
    pub n_features: usize,
}

/// Serializable parameters for a fitted MinMaxScaler.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MinMaxScalerParams {
    /// Parameters of the delegate fitted on the flattened values.
    pub inner: ColumnMinMaxScalerParams,
}

/// ColumnMinMaxScaler transformer (unfitted).
///
/// Rescales each feature column independently to the target range. NaN
/// entries are skipped while fitting and propagate through transform.
#[derive(Clone, Debug)]
pub struct ColumnMinMaxScaler {
    feature_range: (f64, f64),
}

impl Default for ColumnMinMaxScaler {
    fn default() -> Self {
        Self::new()
    }
}

impl ColumnMinMaxScaler {
    /// Create a new ColumnMinMaxScaler with default range [0, 1].
    pub fn new() -> Self {
        Self {
            feature_range: (0.0, 1.0),
        }
    }

    /// Set the target range for scaling.
    pub fn with_range(mut self, min: f64, max: f64) -> Self {
        assert!(max > min, "max must be greater than min");
        self.feature_range = (min, max);
        self
    }

    /// Fit the scaler, computing per-column min and max over non-NaN entries.
    ///
    /// Constant columns get a scale of 1 so that transform pins them to the
    /// range minimum and inverse transform recovers the constant.
    ///
    /// # Errors
    /// Returns [`ScalerError::EmptyData`] if the input has no rows.
    pub fn fit(&self, data: &Array2<f64>) -> Result<FittedColumnMinMaxScaler, ScalerError> {
        let (rows, cols) = data.dim();

        if rows == 0 {
            return Err(ScalerError::EmptyData(
                "Cannot fit ColumnMinMaxScaler on empty data".to_string(),
            ));
        }

        let target_range = self.feature_range.1 - self.feature_range.0;

        let mut min = Array1::<f64>::zeros(cols);
        let mut max = Array1::<f64>::zeros(cols);
        let mut scale = Array1::<f64>::zeros(cols);

        for col in 0..cols {
            let mut lo = f64::INFINITY;
            let mut hi = f64::NEG_INFINITY;
            let mut seen = false;

            for &v in data.column(col) {
                if v.is_nan() {
                    continue;
                }
                seen = true;
                lo = lo.min(v);
                hi = hi.max(v);
            }

            if !seen {
                min[col] = f64::NAN;
                max[col] = f64::NAN;
                scale[col] = f64::NAN;
                continue;
            }

            let range = hi - lo;
            min[col] = lo;
            max[col] = hi;
            scale[col] = if range == 0.0 { 1.0 } else { target_range / range };
        }

        Ok(FittedColumnMinMaxScaler {
            feature_range: self.feature_range,
            min,
            max,
            scale,
            n_features: cols,
        })
    }

    /// Fit and transform in one step.
    pub fn fit_transform(&self, data: &Array2<f64>) -> Result<Array2<f64>, ScalerError> {
        let fitted = self.fit(data)?;
        fitted.transform(data)
    }
}

/// Fitted ColumnMinMaxScaler ready for inference.
#[derive(Clone, Debug)]
pub struct FittedColumnMinMaxScaler {
    feature_range: (f64, f64),
    min: Array1<f64>,
    max: Array1<f64>,
    scale: Array1<f64>,
    n_features: usize,
}

impl FittedColumnMinMaxScaler {
    /// Target (min, max) range.
    pub fn feature_range(&self) -> (f64, f64) {
        self.feature_range
    }

    /// Get the minimum values for each feature.
    pub fn data_min(&self) -> &Array1<f64> {
        &self.min
    }

    /// Get the maximum values for each feature.
    pub fn data_max(&self) -> &Array1<f64> {
        &self.max
    }

    /// Get the scale factor for each feature.
    pub fn scale(&self) -> &Array1<f64> {
        &self.scale
    }

    /// Returns the number of features seen during fit.
    pub fn n_features_in(&self) -> usize {
        self.n_features
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

    /// Map each column into the target range.
    pub fn transform(&self, data: &Array2<f64>) -> Result<Array2<f64>, ScalerError> {
        self.check_features(data.ncols())?;

        // x_scaled = (x - x_min) * scale + target_min
        Ok((data - &self.min) * &self.scale + self.feature_range.0)
    }

    /// Map values from the target range back to the original scale.
    pub fn inverse_transform(&self, data: &Array2<f64>) -> Result<Array2<f64>, ScalerError> {
        self.check_features(data.ncols())?;

        // x = (x_scaled - target_min) / scale + x_min
        Ok((data - self.feature_range.0) / &self.scale + &self.min)
    }

    /// Extract learned parameters as a serializable representation.
    pub fn extract_params(&self) -> ColumnMinMaxScalerParams {
        ColumnMinMaxScalerParams {
            feature_range: self.feature_range,
            min: self.min.to_vec(),
            max: self.max.to_vec(),
            scale: self.scale.to_vec(),
            n_features: self.n_features,
        }
    }

    /// Reconstruct a fitted scaler from parameters.
    pub fn from_params(params: ColumnMinMaxScalerParams) -> Result<Self, ScalerError> {
        if params.min.len() != params.n_features
            || params.max.len() != params.n_features
            || params.scale.len() != params.n_features
        {
            return Err(ScalerError::InvalidParameter(format!(
                "Statistics length does not match n_features = {}",
                params.n_features
            )));
        }

        Ok(Self {
            feature_range: params.feature_range,
            min: Array1::from_vec(params.min),
            max: Array1::from_vec(params.max),
            scale: Array1::from_vec(params.scale),
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
        let params: ColumnMinMaxScalerParams = bincode::deserialize(&bytes)?;
        Self::from_params(params)
    }
}

/// MinMaxScaler transformer (unfitted), operating globally on 2-D arrays.
///
/// One (min, max) pair is computed over every element of the array jointly,
/// not per column.
#[derive(Clone, Debug)]
pub struct MinMaxScaler {
    feature_range: (f64, f64),
}

impl Default for MinMaxScaler {
    fn default() -> Self {
        Self::new()
    }
}

impl MinMaxScaler {
    /// Create a new MinMaxScaler with default range [0, 1].
    pub fn new() -> Self {
        Self {
            feature_range: (0.0, 1.0),
        }
    }

    /// Set the target range for scaling.
    pub fn with_range(mut self, min: f64, max: f64) -> Self {
        assert!(max > min, "max must be greater than min");
        self.feature_range = (min, max);
        self
    }

    /// Fit the delegate scaler on the array flattened to a single column.
    ///
    /// # Errors
    /// Returns [`ScalerError::EmptyData`] if the input has no elements.
    pub fn fit(&self, data: &Array2<f64>) -> Result<FittedMinMaxScaler, ScalerError> {
        let flat = to_column(data)?;
        let inner = ColumnMinMaxScaler::new()
            .with_range(self.feature_range.0, self.feature_range.1)
            .fit(&flat)?;

        Ok(FittedMinMaxScaler { inner })
    }

    /// Fit and transform in one step.
    pub fn fit_transform(&self, data: &Array2<f64>) -> Result<Array2<f64>, ScalerError> {
        let fitted = self.fit(data)?;
        fitted.transform(data)
    }
}

/// Fitted MinMaxScaler ready for inference.
#[derive(Clone, Debug)]
pub struct FittedMinMaxScaler {
    inner: FittedColumnMinMaxScaler,
}

impl FittedMinMaxScaler {
    /// Target (min, max) range.
    pub fn feature_range(&self) -> (f64, f64) {
        self.inner.feature_range()
    }

    /// Minimum over all elements seen during fit.
    pub fn data_min(&self) -> f64 {
        self.inner.data_min()[0]
    }

    /// Maximum over all elements seen during fit.
    pub fn data_max(&self) -> f64 {
        self.inner.data_max()[0]
    }

    /// Map every element into the target range, preserving the input shape.
    pub fn transform(&self, data: &Array2<f64>) -> Result<Array2<f64>, ScalerError> {
        let shape = data.dim();
        let scaled = self.inner.transform(&to_column(data)?)?;
        restore_shape(&scaled, shape)
    }

    /// Map every element back to the original scale, preserving the input
    /// shape.
    pub fn inverse_transform(&self, data: &Array2<f64>) -> Result<Array2<f64>, ScalerError> {
        let shape = data.dim();
        let unscaled = self.inner.inverse_transform(&to_column(data)?)?;
        restore_shape(&unscaled, shape)
    }

    /// Extract learned parameters as a serializable representation.
    pub fn extract_params(&self) -> MinMaxScalerParams {
        MinMaxScalerParams {
            inner: self.inner.extract_params(),
        }
    }

    /// Reconstruct a fitted scaler from parameters.
    pub fn from_params(params: MinMaxScalerParams) -> Result<Self, ScalerError> {
        let inner = FittedColumnMinMaxScaler::from_params(params.inner)?;

        if inner.n_features_in() != 1 {
            return Err(ScalerError::InvalidParameter(format!(
                "Global delegate must hold exactly one feature, got {}",
                inner.n_features_in()
            )));
        }

        Ok(Self { inner })
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
        let params: MinMaxScalerParams = bincode::deserialize(&bytes)?;
        Self::from_params(params)
    }
}

/// Flatten a 2-D array into an (n·m, 1) column, row-major.
fn to_column(data: &Array2<f64>) -> Result<Array2<f64>, ScalerError> {
    let values: Vec<f64> = data.iter().copied().collect();
    let len = values.len();
    Ok(Array2::from_shape_vec((len, 1), values)?)
}

/// Rebuild the original shape from a single-column array.
fn restore_shape(column: &Array2<f64>, shape: (usize, usize)) -> Result<Array2<f64>, ScalerError> {
    let values: Vec<f64> = column.iter().copied().collect();
    Ok(Array2::from_shape_vec(shape, values)?)
}
