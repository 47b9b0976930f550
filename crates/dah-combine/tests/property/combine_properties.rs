//! Property tests for the combine laws, checked under every policy.

use proptest::prelude::*;

use dah_combine::combine;
use dah_core::errors::CombineError;
use dah_core::{CombinePolicy, Context, FactorDef, FactorRegistry};

fn ctx(policy: CombinePolicy) -> Context {
    Context::with_policy(
        FactorRegistry::new(vec![FactorDef::new("f", 1.0, 0.5)]).unwrap(),
        policy,
    )
}

fn arb_policy() -> impl Strategy<Value = CombinePolicy> {
    prop_oneof![
        Just(CombinePolicy::RankDecay),
        Just(CombinePolicy::StrongestPlusWeighted),
    ]
}

fn arb_value() -> impl Strategy<Value = f64> {
    prop_oneof![Just(0.0), 0.001f64..100.0]
}

/// `(value, weight)` pairs with an independent weight per position.
fn arb_pairs() -> impl Strategy<Value = Vec<(f64, f64)>> {
    prop::collection::vec((arb_value(), 0.05f64..0.95), 1..12)
}

/// Combine `pairs` with their per-position weights.
fn run(ctx: &Context, pairs: &[(f64, f64)]) -> Result<f64, CombineError> {
    let values: Vec<f64> = pairs.iter().map(|p| p.0).collect();
    combine(ctx, &values, |i, _| pairs[i].1)
}

/// The only refusal allowed for valid values: rank decay seeing mixed weights.
fn refusal_is_expected(policy: CombinePolicy, err: &CombineError) -> bool {
    policy == CombinePolicy::RankDecay && matches!(err, CombineError::MixedWeights { .. })
}

proptest! {
    #[test]
    fn identity(policy in arb_policy(), v in 0.0f64..1e9, w in -10.0f64..10.0) {
        prop_assert_eq!(combine(&ctx(policy), &[v], |_, _| w).unwrap(), v);
    }

    #[test]
    fn absorption(policy in arb_policy(), pairs in arb_pairs(), zeros in 1usize..4) {
        let ctx = ctx(policy);
        let values: Vec<f64> = pairs.iter().map(|p| p.0).collect();
        let weights: Vec<f64> = pairs.iter().map(|p| p.1).collect();
        let base = combine(&ctx, &values, |i, _| weights[i]);

        let mut padded = values.clone();
        padded.extend(std::iter::repeat(0.0).take(zeros));
        let with_zeros = combine(&ctx, &padded, |i, _| weights.get(i).copied().unwrap_or(0.5));
        prop_assert_eq!(with_zeros, base);
    }

    #[test]
    fn diminishing_returns(policy in arb_policy(), v in 0.01f64..100.0, w in 0.1f64..0.9) {
        let ctx = ctx(policy);
        let mut previous = combine(&ctx, &[v], |_, _| w).unwrap();
        for n in 2..=8usize {
            let current = combine(&ctx, &vec![v; n], |_, _| w).unwrap();
            prop_assert!(current > previous, "n={} {} <= {}", n, current, previous);
            prop_assert!(current < n as f64 * v, "n={} {} >= {}", n, current, n as f64 * v);
            previous = current;
        }
    }

    #[test]
    fn commutative(policy in arb_policy(), pairs in arb_pairs(), seed in any::<u64>()) {
        let ctx = ctx(policy);
        let mut shuffled = pairs.clone();
        // Deterministic Fisher-Yates driven by the seed.
        let mut state = seed | 1;
        for i in (1..shuffled.len()).rev() {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            let j = (state % (i as u64 + 1)) as usize;
            shuffled.swap(i, j);
        }

        let outcome = |pairs: &[(f64, f64)]| match run(&ctx, pairs) {
            Ok(v) => Ok(v.to_bits()),
            Err(e) => Err(refusal_is_expected(policy, &e)),
        };
        let forward = outcome(&pairs);
        prop_assert_eq!(forward, outcome(&shuffled));
        prop_assert!(forward != Err(false), "unexpected refusal");
    }

    #[test]
    fn bounded_by_simple_sum(policy in arb_policy(), pairs in arb_pairs()) {
        let ctx = ctx(policy);
        let values: Vec<f64> = pairs.iter().map(|p| p.0).collect();
        let combined = match run(&ctx, &pairs) {
            Ok(v) => v,
            Err(e) => {
                prop_assert!(refusal_is_expected(policy, &e), "{}", e);
                return Ok(());
            }
        };
        let sum: f64 = values.iter().sum();
        let max = values.iter().cloned().fold(0.0, f64::max);
        prop_assert!(combined <= sum * (1.0 + 1e-12));
        prop_assert!(combined >= max * (1.0 - 1e-12));
        if values.iter().filter(|v| **v > 0.0).count() >= 2 {
            prop_assert!(combined < sum);
        }
    }

    #[test]
    fn monotone_in_each_value(
        policy in arb_policy(),
        pairs in arb_pairs(),
        pick in any::<prop::sample::Index>(),
        bump in 0.001f64..50.0,
    ) {
        let ctx = ctx(policy);
        let mut raised = pairs.clone();
        let i = pick.index(raised.len());
        raised[i].0 += bump;

        match (run(&ctx, &pairs), run(&ctx, &raised)) {
            (Ok(before), Ok(after)) => {
                prop_assert!(after >= before * (1.0 - 1e-12), "{} < {}", after, before);
            }
            (before, after) => {
                for err in [before.err(), after.err()].into_iter().flatten() {
                    prop_assert!(refusal_is_expected(policy, &err), "{}", err);
                }
            }
        }
    }

    #[test]
    fn rank_decay_with_one_shared_weight_is_monotone(
        values in prop::collection::vec(arb_value(), 1..12),
        w in 0.05f64..0.95,
        pick in any::<prop::sample::Index>(),
        bump in 0.001f64..50.0,
    ) {
        let ctx = ctx(CombinePolicy::RankDecay);
        let before = combine(&ctx, &values, |_, _| w).unwrap();
        let mut raised = values.clone();
        let i = pick.index(raised.len());
        raised[i] += bump;
        let after = combine(&ctx, &raised, |_, _| w).unwrap();
        prop_assert!(after >= before * (1.0 - 1e-12), "{} < {}", after, before);
    }

    #[test]
    fn rank_decay_refuses_exactly_the_mixed_weight_inputs(pairs in arb_pairs()) {
        let ctx = ctx(CombinePolicy::RankDecay);
        let mut nonzero_weights = pairs.iter().filter(|p| p.0 > 0.0).map(|p| p.1.to_bits());
        let shared = match nonzero_weights.next() {
            Some(first) => nonzero_weights.all(|w| w == first),
            None => true,
        };
        let single = pairs.iter().filter(|p| p.0 > 0.0).count() < 2;
        prop_assert_eq!(run(&ctx, &pairs).is_ok(), shared || single);
    }
}
