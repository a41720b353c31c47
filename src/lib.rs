//! # nanscalers
//!
//! NaN-tolerant scaling transformers for preprocessing numeric arrays before
//! model training and inference.
//!
//! ## Core Design Principles
//!
//! - **Fitted Type Safety**: every scaler is a pair of plain structs, an
//!   unfitted one holding hyperparameters and a fitted one holding learned
//!   statistics, so transforming before fitting is impossible at compile
//!   time.
//! - **NaN Tolerance**: statistics skip NaN entries instead of poisoning the
//!   whole column, and [`StandardScaler`] imputes NaN positions to 0 on the
//!   way out.
//! - **Serializable**: fitted scalers expose serde-derived parameter structs
//!   and bincode-backed `save_to_file` / `load_from_file`, so the statistics
//!   learned at training time can be reused at inference time.
//!
//! ## Quick Start
//!
//! ```rust
//! use nanscalers::StandardScaler;
//! use ndarray::arr2;
//!
//! let train = arr2(&[[1.0, 2.0], [3.0, f64::NAN], [5.0, 6.0]]);
//!
//! let fitted = StandardScaler::new().fit(&train).unwrap();
//! let scaled = fitted.transform(&train).unwrap();
//!
//! // NaN inputs come out as 0, everything else is standardized
//! assert!(scaled.iter().all(|v| v.is_finite()));
//! ```
//!
//! ## Module Structure
//!
//! - `scaling` — The scaling transformers ([`StandardScaler`],
//!   [`HalfScaler`], [`MinMaxScaler`], [`ColumnMinMaxScaler`])
//! - `error` — The [`ScalerError`] taxonomy shared by all operations

pub mod error;

/// Scaling transformers for feature normalization.
pub mod scaling;

pub use error::ScalerError;
pub use scaling::{
    ColumnMinMaxScaler, ColumnMinMaxScalerParams, FittedColumnMinMaxScaler, FittedHalfScaler,
    FittedMinMaxScaler, FittedStandardScaler, HalfScaler, HalfScalerParams, MinMaxScaler,
    MinMaxScalerParams, StandardScaler, StandardScalerParams,
};

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::arr2;

    #[test]
    fn test_feature_and_target_pipeline() {
        // Feature matrix: one-hot day flag in column 0, raw sensor readings
        // with gaps in columns 1..3
        let features = arr2(&[
            [1.0, 20.5, 1013.0],
            [0.0, f64::NAN, 1009.0],
            [0.0, 18.0, 1021.0],
            [1.0, 23.5, f64::NAN],
        ]);
        // Targets rescaled globally into [-1, 1]
        let targets = arr2(&[[400.0], [860.0], [590.0], [700.0]]);

        let feature_scaler = HalfScaler::new(1).fit(&features).unwrap();
        let target_scaler = MinMaxScaler::new()
            .with_range(-1.0, 1.0)
            .fit(&targets)
            .unwrap();

        let x = feature_scaler.transform(&features).unwrap();
        let y = target_scaler.transform(&targets).unwrap();

        // Flags untouched, gaps gone, targets bounded
        for row in 0..4 {
            assert_eq!(x[[row, 0]], features[[row, 0]]);
        }
        assert!(x.iter().all(|v| v.is_finite()));
        assert!(y.iter().all(|v| (-1.0..=1.0).contains(v)));

        // Predictions map back to the original target scale
        let recovered = target_scaler.inverse_transform(&y).unwrap();
        for (o, r) in targets.iter().zip(recovered.iter()) {
            assert!((o - r).abs() < 1e-9);
        }
    }

    #[test]
    fn test_refit_overwrites_statistics() {
        let first = arr2(&[[0.0], [10.0]]);
        let second = arr2(&[[0.0], [100.0]]);

        let scaler = MinMaxScaler::new();
        let fitted_first = scaler.fit(&first).unwrap();
        let fitted_second = scaler.fit(&second).unwrap();

        assert_eq!(fitted_first.data_max(), 10.0);
        assert_eq!(fitted_second.data_max(), 100.0);

        // The first fitted value is unaffected by the second fit
        let probe = arr2(&[[10.0]]);
        assert!((fitted_first.transform(&probe).unwrap()[[0, 0]] - 1.0).abs() < 1e-10);
        assert!((fitted_second.transform(&probe).unwrap()[[0, 0]] - 0.1).abs() < 1e-10);
    }
}
