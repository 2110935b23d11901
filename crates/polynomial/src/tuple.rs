// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use crate::Polynomial;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Ordered operands of a remote arithmetic call.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PolynomialTuple {
    #[cfg_attr(feature = "serde", serde(default))]
    pub polys: Vec<Polynomial>,
}

impl PolynomialTuple {
    pub fn new(polys: Vec<Polynomial>) -> Self {
        Self { polys }
    }

    /// The `(p, q)` request sent by the interactive client.
    pub fn pair(p: Polynomial, q: Polynomial) -> Self {
        Self { polys: vec![p, q] }
    }

    pub fn polys(&self) -> &[Polynomial] {
        &self.polys
    }

    pub fn len(&self) -> usize {
        self.polys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.polys.is_empty()
    }
}

impl From<Vec<Polynomial>> for PolynomialTuple {
    fn from(polys: Vec<Polynomial>) -> Self {
        Self::new(polys)
    }
}
