//! Property tests for prime generation.

use proptest::prelude::*;

use prime_pages::{PrimeError, PrimeGenerator};

fn is_prime_by_trial_division(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    let mut d = 2;
    while d * d <= n {
        if n % d == 0 {
            return false;
        }
        d += 1;
    }
    true
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: exactly `count` strictly increasing primes, starting at 2.
    #[test]
    fn property_generates_exactly_count_primes(count in 1i64..=1500) {
        let primes = PrimeGenerator::new().generate(count).unwrap();

        prop_assert_eq!(primes.len() as i64, count);
        prop_assert_eq!(primes[0], 2);
        prop_assert!(primes.windows(2).all(|w| w[0] < w[1]));
        prop_assert!(primes.iter().all(|&p| is_prime_by_trial_division(p)));
    }

    /// PROPERTY: generate(count) is a prefix of generate(count + 1).
    #[test]
    fn property_sequence_is_prefix_of_longer_run(count in 1i64..=800) {
        let generator = PrimeGenerator::new();
        let shorter = generator.generate(count).unwrap();
        let longer = generator.generate(count + 1).unwrap();

        prop_assert_eq!(shorter.as_slice(), &longer[..shorter.len()]);
        prop_assert!(longer.largest() > shorter.largest());
    }

    /// PROPERTY: non-positive counts are always rejected.
    #[test]
    fn property_non_positive_count_is_invalid(count in i64::MIN..=0) {
        let err = PrimeGenerator::new().generate(count).unwrap_err();
        let is_invalid_argument = matches!(err, PrimeError::InvalidArgument { .. });
        prop_assert!(is_invalid_argument);
    }

    /// PROPERTY: under a ceiling the generator returns every prime or fails, never a partial run.
    #[test]
    fn property_ceiling_never_truncates(ceiling in 2u64..=2000, count in 1i64..=400) {
        let available = (2..=ceiling).filter(|&n| is_prime_by_trial_division(n)).count() as i64;

        match PrimeGenerator::with_ceiling(ceiling).generate(count) {
            Ok(primes) => {
                prop_assert!(count <= available);
                prop_assert_eq!(primes.len() as i64, count);
                prop_assert!(primes.largest().unwrap() <= ceiling);
            }
            Err(err) => {
                prop_assert!(count > available);
                let is_capacity = matches!(err, PrimeError::Capacity { .. });
                prop_assert!(is_capacity);
            }
        }
    }
}
