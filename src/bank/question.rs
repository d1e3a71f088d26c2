use rand::Rng;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionRecord {
    /// `slug(subject)-slug(chapter)-<1-based index>`
    pub id: String,

    pub subject: String,
    pub chapter: String,

    /// first manifest topic of the chapter, empty when the chapter lists none
    pub topic: String,

    #[serde(rename = "topicTags", skip_serializing_if = "Option::is_none", default)]
    pub topic_tags: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub difficulty: Option<Difficulty>,

    /// question stem
    pub q: String,

    /// exactly four options, one of them correct
    pub options: Vec<String>,

    /// index of the correct entry in `options`
    pub ans: usize,

    /// explanation
    pub exp: String,

    /// provenance tag of the run that produced the record
    pub source: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    #[serde(rename = "easy")]
    Easy,
    #[serde(rename = "medium")]
    Medium,
    #[serde(rename = "hard")]
    Hard,
}

impl Difficulty {
    /// Relative weights of easy, medium and hard in a tier draw.
    pub const WEIGHTS: [(Difficulty, u32); 3] = [
        (Difficulty::Easy, 45),
        (Difficulty::Medium, 40),
        (Difficulty::Hard, 15),
    ];

    /// Draws a tier according to [`Difficulty::WEIGHTS`].
    pub fn draw<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let total: u32 = Self::WEIGHTS.iter().map(|(_, weight)| weight).sum();
        let mut roll = rng.gen_range(0..total);
        for (tier, weight) in Self::WEIGHTS {
            if roll < weight {
                return tier;
            }
            roll -= weight;
        }
        Difficulty::Hard
    }
}

/// Splits a topic on commas into trimmed, non-empty tags.
pub fn topic_tags(topic: &str) -> Vec<String> {
    topic
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_and_trims_tags() {
        assert_eq!(
            topic_tags(" Motion in a line ,  Speed,,velocity "),
            vec!["Motion in a line", "Speed", "velocity"]
        );
    }

    #[test]
    fn empty_or_malformed_topic_has_no_tags() {
        assert!(topic_tags("").is_empty());
        assert!(topic_tags(" , ,, ").is_empty());
    }

    #[test]
    fn optional_fields_are_omitted() {
        let record = QuestionRecord {
            id: "physics-motion-1".into(),
            subject: "Physics".into(),
            chapter: "Motion".into(),
            topic: String::new(),
            topic_tags: None,
            difficulty: None,
            q: "?".into(),
            options: vec!["a".into(), "b".into(), "c".into(), "d".into()],
            ans: 2,
            exp: String::new(),
            source: "generated".into(),
        };
        let json = serde_json::to_value(&record).unwrap();
        assert!(json.get("topicTags").is_none());
        assert!(json.get("difficulty").is_none());
        assert_eq!(json["ans"], 2);
    }

    #[test]
    fn tier_draw_follows_weights() {
        use rand::SeedableRng;
        let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(2024);
        let mut counts = [0usize; 3];
        for _ in 0..10_000 {
            match Difficulty::draw(&mut rng) {
                Difficulty::Easy => counts[0] += 1,
                Difficulty::Medium => counts[1] += 1,
                Difficulty::Hard => counts[2] += 1,
            }
        }
        assert!((4_100..4_900).contains(&counts[0]), "easy: {}", counts[0]);
        assert!((3_600..4_400).contains(&counts[1]), "medium: {}", counts[1]);
        assert!((1_200..1_800).contains(&counts[2]), "hard: {}", counts[2]);
    }

    #[test]
    fn difficulty_serializes_lowercase() {
        let json = serde_json::to_string(&Difficulty::Medium).unwrap();
        assert_eq!(json, "\"medium\"");
    }
}
