use proptest::prelude::*;
use qbank::bank::{generate, Difficulty, QuestionContext, SelectionPolicy, Subject};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn subject() -> impl Strategy<Value = Subject> {
    prop_oneof![
        Just(Subject::Physics),
        Just(Subject::Chemistry),
        Just(Subject::Biology),
    ]
}

fn policy() -> impl Strategy<Value = SelectionPolicy> {
    prop_oneof![
        Just(SelectionPolicy::Placeholder),
        Just(SelectionPolicy::Tiered),
        Just(SelectionPolicy::CoinFlip),
    ]
}

proptest! {
    #[test]
    fn answer_index_points_at_a_unique_option(
        seed in any::<u64>(),
        index in 0usize..1000,
        kind in subject(),
        policy in policy(),
        topic in "[a-z ,]{0,20}",
    ) {
        let context = QuestionContext { subject: "Subject", chapter: "Chapter", topic: &topic };
        let record = generate(kind, &context, index, policy, &mut ChaCha8Rng::seed_from_u64(seed));

        prop_assert_eq!(record.options.len(), 4);
        prop_assert!(record.ans < record.options.len());
        let correct = &record.options[record.ans];
        prop_assert_eq!(record.options.iter().filter(|o| *o == correct).count(), 1);
        let suffix = format!("-{}", index + 1);
        prop_assert!(record.id.ends_with(&suffix));
        if let Some(tags) = &record.topic_tags {
            prop_assert!(tags.iter().all(|t| !t.is_empty() && t.trim() == t));
        }
    }

    #[test]
    fn shuffled_answer_is_the_drafted_one(
        seed in any::<u64>(),
        kind in subject(),
        hard in any::<bool>(),
    ) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let tier = if hard { Difficulty::Hard } else { Difficulty::draw(&mut rng) };
        let draft = kind.tiered(tier, &mut rng);
        let (options, ans) = draft.shuffle_options(&mut rng);

        prop_assert_eq!(&options[ans], &draft.correct);
        for distractor in &draft.distractors {
            prop_assert!(options.contains(distractor));
        }
    }
}
