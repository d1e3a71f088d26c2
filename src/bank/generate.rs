use rand::Rng;
use regex::Regex;
use std::{fmt, str::FromStr, sync::OnceLock};
use thiserror::Error;

use super::{
    question::{topic_tags, Difficulty, QuestionRecord},
    subject::Subject,
};

/// How a question's template is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionPolicy {
    /// Numbered stand-in questions with no real content.
    Placeholder,
    /// A difficulty tier is drawn first and decides the template.
    #[default]
    Tiered,
    /// Templates are chosen by independent coin flips, without a difficulty.
    CoinFlip,
}

impl SelectionPolicy {
    pub fn default_count(self) -> usize {
        match self {
            SelectionPolicy::Placeholder => 200,
            SelectionPolicy::Tiered | SelectionPolicy::CoinFlip => 300,
        }
    }

    /// Provenance tag written to each record's `source`.
    pub fn source(self) -> &'static str {
        match self {
            SelectionPolicy::Placeholder => "generated",
            SelectionPolicy::Tiered | SelectionPolicy::CoinFlip => "generated-original",
        }
    }
}

#[derive(Error, Debug)]
#[error("unknown selection policy '{0}', expected placeholder, tiered or coin-flip")]
pub struct UnknownPolicy(pub String);

impl FromStr for SelectionPolicy {
    type Err = UnknownPolicy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "placeholder" => Ok(SelectionPolicy::Placeholder),
            "tiered" => Ok(SelectionPolicy::Tiered),
            "coin-flip" | "coinflip" => Ok(SelectionPolicy::CoinFlip),
            _ => Err(UnknownPolicy(s.to_string())),
        }
    }
}

impl fmt::Display for SelectionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectionPolicy::Placeholder => write!(f, "placeholder"),
            SelectionPolicy::Tiered => write!(f, "tiered"),
            SelectionPolicy::CoinFlip => write!(f, "coin-flip"),
        }
    }
}

/// Where a question belongs, as named in the manifest.
#[derive(Debug, Clone, Copy)]
pub struct QuestionContext<'a> {
    pub subject: &'a str,
    pub chapter: &'a str,
    pub topic: &'a str,
}

fn slug_separator() -> &'static Regex {
    static SEPARATOR: OnceLock<Regex> = OnceLock::new();
    SEPARATOR.get_or_init(|| Regex::new(r"[^a-z0-9]+").unwrap())
}

/// Lowercases and collapses every run of non-alphanumerics into one hyphen.
pub fn slug(s: &str) -> String {
    slug_separator()
        .replace_all(&s.to_lowercase(), "-")
        .trim_matches('-')
        .to_string()
}

pub fn make_id(subject: &str, chapter: &str, index: usize) -> String {
    format!("{}-{}-{}", slug(subject), slug(chapter), index + 1)
}

/// Builds the record for the `index`-th (0-based) question of a chapter.
pub fn generate<R: Rng + ?Sized>(
    kind: Subject,
    context: &QuestionContext,
    index: usize,
    policy: SelectionPolicy,
    rng: &mut R,
) -> QuestionRecord {
    let id = make_id(context.subject, context.chapter, index);

    if policy == SelectionPolicy::Placeholder {
        return QuestionRecord {
            id,
            subject: context.subject.to_string(),
            chapter: context.chapter.to_string(),
            topic: context.topic.to_string(),
            topic_tags: None,
            difficulty: None,
            q: format!(
                "Placeholder Q{}: Sample question for {} ({})",
                index + 1,
                context.chapter,
                context.subject
            ),
            options: ['A', 'B', 'C', 'D']
                .iter()
                .map(|c| format!("Option {} for Q{}", c, index + 1))
                .collect(),
            ans: rng.gen_range(0..=3),
            exp: String::from("This is a placeholder explanation."),
            source: policy.source().to_string(),
        };
    }

    let (draft, difficulty) = match policy {
        SelectionPolicy::CoinFlip => (kind.coin_flip(rng), None),
        _ => {
            let tier = Difficulty::draw(rng);
            (kind.tiered(tier, rng), Some(tier))
        }
    };
    let (options, ans) = draft.shuffle_options(rng);

    QuestionRecord {
        id,
        subject: context.subject.to_string(),
        chapter: context.chapter.to_string(),
        topic: context.topic.to_string(),
        topic_tags: Some(topic_tags(context.topic)),
        difficulty,
        q: draft.q,
        options,
        ans,
        exp: draft.exp,
        source: policy.source().to_string(),
    }
}
