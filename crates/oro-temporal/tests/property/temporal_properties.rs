use chrono::{DateTime, Duration, TimeZone, Utc};
use oro_core::errors::{ChainError, OroError};
use oro_temporal::{SupersessionChain, TemporalValidity};
use proptest::prelude::*;
use test_fixtures::{chain_links, linear_chain};

fn epoch_plus(secs: i64) -> DateTime<Utc> {
    Utc.timestamp_opt(1_700_000_000 + secs, 0).unwrap()
}

// ── Interval membership is exactly the closed interval ───────────────────

proptest! {
    #[test]
    fn valid_inside_and_invalid_just_outside(
        start in -1_000_000i64..1_000_000,
        len in 0i64..1_000_000,
        probe in 0.0f64..=1.0,
    ) {
        let from = epoch_plus(start);
        let until = epoch_plus(start + len);
        let v = TemporalValidity::new(Some(from), Some(until)).unwrap();

        let inside = from + Duration::seconds((len as f64 * probe) as i64);
        prop_assert!(v.is_valid_at(inside));
        prop_assert!(v.is_valid_at(from));
        prop_assert!(v.is_valid_at(until));
        prop_assert!(!v.is_valid_at(from - Duration::seconds(1)));
        prop_assert!(!v.is_valid_at(until + Duration::seconds(1)));
    }
}

proptest! {
    #[test]
    fn construction_fails_iff_bounds_are_reversed(a in -1_000_000i64..1_000_000, b in -1_000_000i64..1_000_000) {
        let result = TemporalValidity::new(Some(epoch_plus(a)), Some(epoch_plus(b)));
        prop_assert_eq!(result.is_err(), a > b);
    }
}

proptest! {
    #[test]
    fn expired_and_valid_are_exclusive_after_until(offset in 1i64..10_000_000) {
        let until = epoch_plus(0);
        let v = TemporalValidity::until(until);
        let later = until + Duration::seconds(offset);
        prop_assert!(v.is_expired(later));
        prop_assert!(!v.is_valid_at(later));
    }
}

// ── Chain positions form a bijection onto 0..N ───────────────────────────

proptest! {
    #[test]
    fn linear_chain_positions_are_a_bijection(n in 1usize..60, seed_pick in 0.0f64..1.0) {
        let beliefs = linear_chain(n, Utc::now());
        let map = chain_links(&beliefs);
        let seed = ((n as f64 * seed_pick) as usize).min(n - 1);

        let chain = SupersessionChain::build(&format!("b{seed}"), &map).unwrap();
        prop_assert_eq!(chain.len(), n);
        let head = format!("b{}", n - 1);
        prop_assert_eq!(chain.head().unwrap(), head.as_str());

        for (i, belief) in beliefs.iter().enumerate() {
            prop_assert_eq!(chain.position_of(&belief.id).unwrap(), i);
            prop_assert_eq!(chain.is_superseded(&belief.id).unwrap(), i + 1 < n);
        }
    }
}

proptest! {
    #[test]
    fn budget_below_length_always_fails(n in 2usize..40, cut in 1usize..40) {
        prop_assume!(cut < n);
        let beliefs = linear_chain(n, Utc::now());
        let map = chain_links(&beliefs);

        let err = SupersessionChain::build_with_limit("b0", &map, cut).unwrap_err();
        let too_long = matches!(err, OroError::ChainError(ChainError::ChainTooLong { .. }));
        prop_assert!(too_long, "expected ChainTooLong for n={} cut={}, got {:?}", n, cut, err);
    }
}
