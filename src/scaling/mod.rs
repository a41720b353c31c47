//! Scaling transformers for feature normalization.
//!
//! This module provides transformers that rescale numeric arrays before they
//! are fed to a model, with NaN-tolerant statistics throughout.
//!
//! # Available Transformers
//!
//! | Transformer | Description | Use Case |
//! |-------------|-------------|----------|
//! | [`StandardScaler`] | Per-column z-score normalization (mean=0, std=1), NaN imputed to 0 | Default choice for feature matrices |
//! | [`HalfScaler`] | StandardScaler on a column suffix, prefix passes through | Mixed encoded-flag / numeric layouts |
//! | [`MinMaxScaler`] | Global scaling of all elements to a target range | Bounded targets, shape-preserving |
//! | [`ColumnMinMaxScaler`] | Per-column scaling to a target range | Classic min-max on feature matrices |
//!
//! # Example
//!
//! ```ignore
//! use nanscalers::StandardScaler;
//!
//! let fitted = StandardScaler::new().fit(&data)?;
//! let scaled = fitted.transform(&new_data)?;
//! ```

pub mod half;
pub mod minmax;
pub mod standard;

pub use half::{FittedHalfScaler, HalfScaler, HalfScalerParams};
pub use minmax::{
    ColumnMinMaxScaler, ColumnMinMaxScalerParams, FittedColumnMinMaxScaler, FittedMinMaxScaler,
    MinMaxScaler, MinMaxScalerParams,
};
pub use standard::{FittedStandardScaler, StandardScaler, StandardScalerParams};
