//! Zeta-zero ordinate datasets

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Imaginary parts of the first 20 nontrivial zeta zeros.
///
/// The oscillatory correction in [`crate::estimate_pi`] sums over these;
/// truncating the explicit formula to a 20-zero prefix is what bounds the
/// estimator's accuracy.
pub const FIRST_20_ORDINATES: [f64; 20] = [
    14.1347251417,
    21.0220396388,
    25.0108575801,
    30.4248761259,
    32.9350615877,
    37.5861781588,
    40.9187190121,
    43.3270732809,
    48.0051508812,
    49.7738324777,
    52.9703214777,
    56.4462476971,
    59.3470440026,
    60.8317785246,
    65.1125440481,
    67.0798105295,
    69.5464017112,
    72.0671576745,
    75.7046906991,
    77.1448400689,
];

/// An immutable set of zeta-zero ordinates used as oscillation frequencies.
///
/// Conventionally sorted ascending, though the oscillatory sum is
/// order-independent. Serializes as a plain JSON array so datasets can be
/// swapped in from a file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ZetaZeros(Vec<f64>);

impl ZetaZeros {
    /// Build a dataset from raw ordinates.
    ///
    /// Rejects empty input and any ordinate that is not a positive finite
    /// real, since a zero or negative frequency has no meaning in the
    /// oscillatory sum.
    pub fn new(ordinates: Vec<f64>) -> Result<Self> {
        if ordinates.is_empty() {
            return Err(Error::EmptyDataset);
        }
        for (index, &value) in ordinates.iter().enumerate() {
            if !(value.is_finite() && value > 0.0) {
                return Err(Error::NonPositiveOrdinate { index, value });
            }
        }
        Ok(Self(ordinates))
    }

    /// The built-in dataset: first 20 known ordinates.
    pub fn first_20() -> Self {
        Self(FIRST_20_ORDINATES.to_vec())
    }

    /// Load a dataset from a JSON array file.
    pub fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let ordinates: Vec<f64> = serde_json::from_str(&content)?;
        Self::new(ordinates)
    }

    /// Save the dataset to a JSON array file.
    pub fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let content = serde_json::to_string_pretty(&self.0)?;
        std::fs::write(path.as_ref(), content)?;
        Ok(())
    }

    /// The ordinates as a slice.
    pub fn ordinates(&self) -> &[f64] {
        &self.0
    }

    /// Number of ordinates in the dataset.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Restrict to the first `count` ordinates (for accuracy comparisons).
    pub fn truncated(&self, count: usize) -> Result<Self> {
        Self::new(self.0.iter().take(count).copied().collect())
    }
}
