//! Prime Sequence Value Object

use std::ops::Deref;

use serde::Serialize;

/// The first N primes, in ascending order.
///
/// Only [`PrimeGenerator`](crate::domain::services::PrimeGenerator) builds
/// these, so a `PrimeSequence` always starts at 2, is strictly increasing
/// and holds exactly the requested number of primes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PrimeSequence(Vec<u64>);

impl PrimeSequence {
    pub(crate) fn new(primes: Vec<u64>) -> Self {
        Self(primes)
    }

    pub fn as_slice(&self) -> &[u64] {
        &self.0
    }

    /// The last (largest) prime, `None` only for an empty sequence
    pub fn largest(&self) -> Option<u64> {
        self.0.last().copied()
    }

    pub fn into_vec(self) -> Vec<u64> {
        self.0
    }
}

impl Deref for PrimeSequence {
    type Target = [u64];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<[u64]> for PrimeSequence {
    fn as_ref(&self) -> &[u64] {
        &self.0
    }
}

impl<'a> IntoIterator for &'a PrimeSequence {
    type Item = &'a u64;
    type IntoIter = std::slice::Iter<'a, u64>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
