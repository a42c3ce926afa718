//! Classical binary Hopfield network
//!
//! A single-layer, fully connected network whose N×N weight matrix is learned
//! by Hebbian outer-product accumulation. Inputs and outputs are always
//! boolean patterns of length N.
//!
//! Recall is one deterministic forward pass: each unit takes the weighted sum
//! of the presented (bipolar) pattern and fires when that sum is strictly
//! positive. There is no iterative relaxation towards an attractor.

pub mod bipolar;

use log::{debug, trace, warn};

use crate::error::{HopfieldError, Result};
use crate::matrix::{math, Matrix};

use bipolar::{bipolar_to_bool, to_bipolar};

/// Binary Hopfield associative memory
#[derive(Debug, Clone, PartialEq)]
pub struct HopfieldNetwork {
    /// Weight matrix: shape [size, size]
    weights: Matrix,
    /// Number of successful training calls
    pattern_count: usize,
}

impl HopfieldNetwork {
    /// Create an untrained network of `size` units (all weights zero)
    ///
    /// # Example
    ///
    /// ```rust
    /// use hopfield_memory::HopfieldNetwork;
    ///
    /// let mut network = HopfieldNetwork::new(4).unwrap();
    /// network.train(&[true, true, false, false]).unwrap();
    ///
    /// let recalled = network.present(&[true, false, false, false]).unwrap();
    /// assert_eq!(recalled, vec![true, true, false, false]);
    /// ```
    pub fn new(size: usize) -> Result<Self> {
        let weights = Matrix::new(size, size)?;

        Ok(Self {
            weights,
            pattern_count: 0,
        })
    }

    /// Number of units
    pub fn size(&self) -> usize {
        self.weights.rows()
    }

    /// The learned weight matrix
    pub fn weights(&self) -> &Matrix {
        &self.weights
    }

    /// Number of patterns trained so far
    pub fn pattern_count(&self) -> usize {
        self.pattern_count
    }

    fn check_size(&self, pattern: &[bool], operation: &str) -> Result<()> {
        if pattern.len() != self.size() {
            warn!(
                "Rejected {} with pattern of size {} on network of size {}",
                operation,
                pattern.len(),
                self.size()
            );
            return Err(HopfieldError::SizeMismatch {
                expected: self.size(),
                actual: pattern.len(),
            });
        }
        Ok(())
    }

    /// Weight contribution of one pattern: `vᵀv - I`
    fn hebbian_delta(pattern: &[bool]) -> Result<Matrix> {
        let row = Matrix::create_row_matrix(&to_bipolar(pattern))?;
        let outer = math::multiply(&math::transpose(&row), &row)?;

        // A unit must not reinforce itself
        let identity = math::identity(outer.rows())?;

        Ok(math::subtract(&outer, &identity)?)
    }

    /// Train the network on one pattern
    ///
    /// The pattern's association is added to the existing weights, so calling
    /// this repeatedly superimposes several memories. On error the weights are
    /// left unchanged.
    pub fn train(&mut self, pattern: &[bool]) -> Result<()> {
        self.check_size(pattern, "train")?;

        let delta = Self::hebbian_delta(pattern)?;
        self.weights = math::add(&self.weights, &delta)?;
        self.pattern_count += 1;

        debug!(
            "Trained pattern {} on network of size {}",
            self.pattern_count,
            self.size()
        );
        Ok(())
    }

    /// Train the network on several patterns
    ///
    /// All lengths are validated before any weight is touched: either every
    /// pattern is accumulated or none is.
    pub fn train_all<P: AsRef<[bool]>>(&mut self, patterns: &[P]) -> Result<()> {
        for pattern in patterns {
            self.check_size(pattern.as_ref(), "train")?;
        }

        let mut weights = self.weights.clone();
        for pattern in patterns {
            let delta = Self::hebbian_delta(pattern.as_ref())?;
            weights = math::add(&weights, &delta)?;
        }

        self.weights = weights;
        self.pattern_count += patterns.len();

        debug!(
            "Trained {} patterns ({} total) on network of size {}",
            patterns.len(),
            self.pattern_count,
            self.size()
        );
        Ok(())
    }

    /// Weighted input to every unit for a presented pattern
    ///
    /// Entry `j` is the dot product of the bipolar pattern with column `j`
    /// of the weight matrix.
    pub fn net_input(&self, pattern: &[bool]) -> Result<Vec<f64>> {
        self.check_size(pattern, "present")?;

        let input = Matrix::create_row_matrix(&to_bipolar(pattern))?;

        let net = (0..self.size())
            .map(|col| -> Result<f64> {
                let column = math::transpose(&self.weights.get_col(col)?);
                Ok(math::dot_product(&input, &column)?)
            })
            .collect::<Result<Vec<f64>>>()?;

        trace!("Net input: {:?}", net);
        Ok(net)
    }

    /// Present a pattern and receive the recalled pattern
    ///
    /// Output unit `j` is `true` only when its net input is strictly
    /// positive; a net input of exactly zero recalls `false`.
    pub fn present(&self, pattern: &[bool]) -> Result<Vec<bool>> {
        let net = self.net_input(pattern)?;
        Ok(net.into_iter().map(bipolar_to_bool).collect())
    }
}
