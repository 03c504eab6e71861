use std::collections::HashSet;

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use trivia_core::{select_quiz_question, Question};

fn pool_from(ids: &HashSet<i64>) -> Vec<Question> {
    let mut ids: Vec<i64> = ids.iter().copied().collect();
    ids.sort_unstable();
    ids.into_iter()
        .map(|id| Question {
            id,
            question: format!("question {id}"),
            answer: format!("answer {id}"),
            category: 1,
            difficulty: 1,
        })
        .collect()
}

proptest! {
    /// Property: the pick is in P \ S, and None exactly when P \ S is empty
    #[test]
    fn prop_pick_is_eligible(
        pool_ids in prop::collection::hash_set(1i64..60, 0..25),
        seen in prop::collection::hash_set(1i64..60, 0..40),
        seed in any::<u64>(),
    ) {
        let pool = pool_from(&pool_ids);
        let mut rng = StdRng::seed_from_u64(seed);
        let eligible: HashSet<i64> = pool_ids.difference(&seen).copied().collect();

        match select_quiz_question(&pool, &seen, &mut rng) {
            Some(q) => prop_assert!(eligible.contains(&q.id)),
            None => prop_assert!(eligible.is_empty()),
        }
    }

    /// Property: feeding picks back as seen never repeats until exhausted
    #[test]
    fn prop_no_repeats_until_exhausted(
        pool_ids in prop::collection::hash_set(1i64..100, 1..30),
        seed in any::<u64>(),
    ) {
        let pool = pool_from(&pool_ids);
        let mut rng = StdRng::seed_from_u64(seed);
        let mut seen = HashSet::new();

        while let Some(q) = select_quiz_question(&pool, &seen, &mut rng) {
            prop_assert!(seen.insert(q.id), "question {} returned twice", q.id);
        }
        prop_assert_eq!(seen, pool_ids);
    }
}
