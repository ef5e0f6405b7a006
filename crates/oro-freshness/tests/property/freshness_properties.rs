use chrono::{DateTime, Duration, TimeZone, Utc};
use oro_core::config::{DecayCurve, FreshnessConfig};
use oro_freshness::{calculate_freshness, freshness_label, FreshnessLabel, FreshnessScorer};
use proptest::prelude::*;
use test_fixtures::BeliefFactory;

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap()
}

fn arb_curve() -> impl Strategy<Value = DecayCurve> {
    prop_oneof![Just(DecayCurve::Exponential), Just(DecayCurve::Hyperbolic)]
}

// ── Monotonically non-increasing in age ──────────────────────────────────

proptest! {
    #[test]
    fn non_increasing_in_age(
        confidence in 0.0f64..=1.0,
        superseded in any::<bool>(),
        curve in arb_curve(),
        half_life in 1.0f64..365.0,
    ) {
        let scorer = FreshnessScorer::new(FreshnessConfig {
            decay_curve: curve,
            half_life_days: half_life,
            ..FreshnessConfig::default()
        }).unwrap();

        let mut prev = f64::INFINITY;
        for days in [0, 1, 7, 30, 90, 180, 365, 3650] {
            let mut factory = BeliefFactory::new(now())
                .confidence(confidence)
                .aged(now(), Duration::days(days));
            if superseded {
                factory = factory.superseded_by("next");
            }
            let score = scorer.calculate(&factory.build(), now()).unwrap().score;
            prop_assert!(
                score <= prev,
                "Not monotonic at day {}: {} > {}",
                days, score, prev
            );
            prev = score;
        }
    }
}

// ── Bounded and label-consistent ─────────────────────────────────────────

proptest! {
    #[test]
    fn score_bounded_and_tier_round_trips(
        confidence in 0.0f64..=1.0,
        age_secs in 0i64..(400 * 86_400),
        expired in any::<bool>(),
        superseded in any::<bool>(),
    ) {
        let mut factory = BeliefFactory::new(now())
            .confidence(confidence)
            .aged(now(), Duration::seconds(age_secs));
        if expired {
            factory = factory.valid_until(now() - Duration::seconds(1));
        }
        if superseded {
            factory = factory.superseded_by("next");
        }
        let result = calculate_freshness(&factory.build(), now()).unwrap();

        prop_assert!((0.0..=1.0).contains(&result.score));
        prop_assert_eq!(freshness_label(result.score), result.tier);
        if !expired && !superseded {
            prop_assert_eq!(freshness_label(result.score), result.label);
        }
        if expired {
            prop_assert_eq!(result.label, FreshnessLabel::Expired);
        } else if superseded {
            prop_assert_eq!(result.label, FreshnessLabel::Superseded);
        }
    }
}

// ── Non-head strictly below head ─────────────────────────────────────────

// Zero confidence (or an underflowing product) ties both at 0.0.
proptest! {
    #[test]
    fn superseded_scores_strictly_lower(
        confidence in 0.01f64..=1.0,
        age_days in 0i64..1000,
        expired in any::<bool>(),
    ) {
        let mut factory = BeliefFactory::new(now())
            .confidence(confidence)
            .aged(now(), Duration::days(age_days));
        if expired {
            factory = factory.valid_until(now() - Duration::days(1));
        }
        let head = factory.build();
        let mut replaced = head.clone();
        replaced.superseded_by_id = Some("next".into());

        let head_score = calculate_freshness(&head, now()).unwrap().score;
        let replaced_score = calculate_freshness(&replaced, now()).unwrap().score;
        prop_assert!(
            replaced_score < head_score,
            "superseded {} not below head {}",
            replaced_score, head_score
        );
    }
}

// ── Expired is always labelled expired ───────────────────────────────────

proptest! {
    #[test]
    fn past_valid_until_is_always_expired(
        confidence in 0.0f64..=1.0,
        age_days in -30i64..1000,
        overdue_secs in 1i64..(365 * 86_400),
    ) {
        let belief = BeliefFactory::new(now())
            .confidence(confidence)
            .aged(now(), Duration::days(age_days))
            .valid_until(now() - Duration::seconds(overdue_secs))
            .build();
        let result = calculate_freshness(&belief, now()).unwrap();
        prop_assert_eq!(result.label, FreshnessLabel::Expired);
    }
}
