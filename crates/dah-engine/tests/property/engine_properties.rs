//! Property tests for propagation over random DAGs.

use proptest::prelude::*;

use dah_combine::combine_vectors;
use dah_core::{CombinePolicy, Context, Data, Entry, FactorDef, FactorRegistry, Impact, Matrix, Vector};
use dah_engine::AggregationEngine;

const FACTORS: usize = 3;

fn ctx(policy: CombinePolicy) -> Context {
    Context::with_policy(
        FactorRegistry::new(vec![
            FactorDef::new("emotion", 1.0, 0.5),
            FactorDef::new("art", 1.5, 0.3),
            FactorDef::new("influence", 0.5, 0.7),
        ])
        .unwrap(),
        policy,
    )
}

fn arb_policy() -> impl Strategy<Value = CombinePolicy> {
    prop_oneof![
        Just(CombinePolicy::RankDecay),
        Just(CombinePolicy::StrongestPlusWeighted),
    ]
}

fn arb_vector() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(prop_oneof![Just(0.0), 0.01f64..10.0], FACTORS)
}

/// Entries `e0..en`; edges only run from a lower to a higher index, so the
/// graph is always acyclic.
fn arb_data() -> impl Strategy<Value = Data> {
    (2usize..12).prop_flat_map(|n| {
        let edges = prop::collection::vec((0..n, 0..n, 0.0f64..1.0), 0..n * 2);
        let impacts = prop::collection::vec((arb_vector(), prop::collection::vec(0..n, 1..3)), 0..8);
        (Just(n), edges, impacts).prop_map(|(n, edges, impacts)| {
            let mut entries: Vec<Entry> = (0..n).map(|i| Entry::new(format!("e{i}"))).collect();
            for (a, b, k) in edges {
                if a < b {
                    let matrix = Matrix::diagonal(Vector::filled(FACTORS, k));
                    entries[a].children.insert(format!("e{b}"), matrix);
                }
            }
            let impacts = impacts
                .into_iter()
                .map(|(score, contributors)| {
                    let mut impact = Impact::new(Vector::from_values(score));
                    for c in contributors {
                        impact = impact.with_contributor(
                            format!("e{c}"),
                            Matrix::diagonal(Vector::filled(FACTORS, 1.0)),
                        );
                    }
                    impact
                })
                .collect();
            Data::new(entries, impacts, vec![])
        })
    })
}

proptest! {
    #[test]
    fn every_entry_is_scored_nonnegative(data in arb_data(), policy in arb_policy()) {
        let ctx = ctx(policy);
        let result = AggregationEngine::default().aggregate(&ctx, &data).unwrap();
        prop_assert_eq!(result.scores.len(), data.entries.len());
        for score in result.scores.values() {
            prop_assert_eq!(score.len(), FACTORS);
            prop_assert!(score.iter().all(|v| v.is_finite() && v >= 0.0));
        }
    }

    #[test]
    fn each_score_is_the_combine_of_its_provenance(data in arb_data(), policy in arb_policy()) {
        let ctx = ctx(policy);
        let result = AggregationEngine::default().aggregate(&ctx, &data).unwrap();
        for (id, score) in &result.scores {
            let vectors: Vec<Vector> = result
                .provenance(id)
                .iter()
                .map(|p| p.contribution.clone())
                .collect();
            let expected = if vectors.is_empty() {
                ctx.zero_vector()
            } else {
                combine_vectors(&ctx, &vectors).unwrap()
            };
            prop_assert_eq!(score, &expected);
        }
    }

    #[test]
    fn input_order_does_not_change_scores(data in arb_data(), policy in arb_policy()) {
        let ctx = ctx(policy);
        let engine = AggregationEngine::default();
        let forward = engine.aggregate(&ctx, &data).unwrap();

        let mut shuffled = data.clone();
        shuffled.entries.reverse();
        shuffled.impacts.reverse();
        let backward = engine.aggregate(&ctx, &shuffled).unwrap();
        prop_assert_eq!(forward.scores, backward.scores);
    }

    #[test]
    fn extra_impact_never_lowers_a_score(
        data in arb_data(),
        extra in arb_vector(),
        policy in arb_policy(),
    ) {
        let ctx = ctx(policy);
        let engine = AggregationEngine::default();
        let before = engine.aggregate(&ctx, &data).unwrap();

        let mut more = data.clone();
        more.impacts.push(
            Impact::new(Vector::from_values(extra))
                .with_contributor("e1", Matrix::diagonal(Vector::filled(FACTORS, 1.0))),
        );
        let after = engine.aggregate(&ctx, &more).unwrap();

        for (id, old) in &before.scores {
            let new = after.score(id).unwrap();
            for (o, n) in old.iter().zip(new.iter()) {
                prop_assert!(n >= o - 1e-9 * (1.0 + o), "{id}: {o} -> {n}");
            }
        }
    }
}
