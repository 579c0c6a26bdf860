//! Prime Generator Domain Service
//!
//! Computes the first N primes by testing odd candidates against a rolling
//! set of "next odd multiple" trackers, one per prime factor in use. A
//! factor is only taken into use once the scan reaches its square, so no
//! candidate is ever trial-divided by a factor larger than its square root.

use crate::domain::value_objects::PrimeSequence;
use crate::error::{PrimeError, PrimeResult};

/// Generator for the first N primes
///
/// The generator itself only carries its numeric ceiling; all working
/// state lives in a private run that is created and dropped inside
/// [`PrimeGenerator::generate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrimeGenerator {
    ceiling: u64,
}

impl Default for PrimeGenerator {
    fn default() -> Self {
        Self { ceiling: u64::MAX }
    }
}

impl PrimeGenerator {
    /// Create a generator bounded only by `u64::MAX`
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a generator that never examines a candidate above `ceiling`
    pub fn with_ceiling(ceiling: u64) -> Self {
        Self { ceiling }
    }

    /// Generate exactly `count` primes in ascending order, starting at 2.
    ///
    /// # Errors
    ///
    /// - [`PrimeError::InvalidArgument`] if `count <= 0`
    /// - [`PrimeError::Capacity`] if the primes cannot be reached without
    ///   passing the ceiling or overflowing `u64`, or if `count` cannot be
    ///   allocated. No partial sequence is ever returned.
    pub fn generate(&self, count: i64) -> PrimeResult<PrimeSequence> {
        if count <= 0 {
            return Err(PrimeError::InvalidArgument {
                name: "count",
                value: count,
            });
        }

        let capacity = || PrimeError::Capacity {
            count: count.unsigned_abs(),
            ceiling: self.ceiling,
        };

        if self.ceiling < 2 {
            return Err(capacity());
        }

        let target = usize::try_from(count).map_err(|_| capacity())?;
        let mut run = GenerationRun::new(target, self.ceiling).ok_or_else(capacity)?;
        run.set_2_as_first_prime();
        run.check_odd_numbers_for_subsequent_primes()
            .ok_or_else(capacity)?;

        Ok(PrimeSequence::new(run.primes))
    }
}

/// Working state of a single `generate` call.
///
/// `multiples_of_prime_factors[i]` is the tracker for `primes[i]`. Entry 0
/// belongs to 2 and is never consulted, since only odd candidates are
/// scanned. `None` from any method means the scan ran out of numeric room.
struct GenerationRun {
    target: usize,
    ceiling: u64,
    primes: Vec<u64>,
    multiples_of_prime_factors: Vec<u64>,
}

impl GenerationRun {
    fn new(target: usize, ceiling: u64) -> Option<Self> {
        let mut primes = Vec::new();
        primes.try_reserve_exact(target).ok()?;

        Some(Self {
            target,
            ceiling,
            primes,
            multiples_of_prime_factors: Vec::new(),
        })
    }

    fn set_2_as_first_prime(&mut self) {
        self.primes.push(2);
        self.multiples_of_prime_factors.push(2);
    }

    fn check_odd_numbers_for_subsequent_primes(&mut self) -> Option<()> {
        let mut candidates = (3..=self.ceiling).step_by(2);
        while self.primes.len() < self.target {
            let candidate = candidates.next()?;
            if self.is_prime(candidate)? {
                self.primes.push(candidate);
            }
        }
        Some(())
    }

    fn is_prime(&mut self, candidate: u64) -> Option<bool> {
        if self.is_least_relevant_multiple_of_next_larger_prime_factor(candidate)? {
            self.multiples_of_prime_factors.push(candidate);
            return Some(false);
        }
        self.is_not_multiple_of_any_previous_prime_factor(candidate)
    }

    fn is_least_relevant_multiple_of_next_larger_prime_factor(
        &self,
        candidate: u64,
    ) -> Option<bool> {
        match self.primes.get(self.multiples_of_prime_factors.len()) {
            Some(&next_larger_prime_factor) => {
                let least_relevant_multiple =
                    next_larger_prime_factor.checked_mul(next_larger_prime_factor)?;
                Some(candidate == least_relevant_multiple)
            }
            // The next factor has not been discovered yet, so its square
            // lies beyond the current candidate.
            None => Some(false),
        }
    }

    fn is_not_multiple_of_any_previous_prime_factor(&mut self, candidate: u64) -> Option<bool> {
        for n in 1..self.multiples_of_prime_factors.len() {
            if self.is_multiple_of_nth_prime_factor(candidate, n)? {
                return Some(false);
            }
        }
        Some(true)
    }

    fn is_multiple_of_nth_prime_factor(&mut self, candidate: u64, n: usize) -> Option<bool> {
        Some(candidate == self.smallest_odd_nth_multiple_not_less_than_candidate(candidate, n)?)
    }

    fn smallest_odd_nth_multiple_not_less_than_candidate(
        &mut self,
        candidate: u64,
        n: usize,
    ) -> Option<u64> {
        let step = self.primes[n].checked_mul(2)?;
        let mut multiple = self.multiples_of_prime_factors[n];
        while multiple < candidate {
            multiple = multiple.checked_add(step)?;
        }
        self.multiples_of_prime_factors[n] = multiple;
        Some(multiple)
    }
}
