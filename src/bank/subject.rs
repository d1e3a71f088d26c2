use rand::Rng;

use super::{
    biology::Biology, chemistry::Chemistry, draft::Draft, physics::Physics, question::Difficulty,
};

/// Question templates of one subject.
pub trait Templates {
    /// Picks a template suited to `tier`.
    fn tiered<R: Rng + ?Sized>(tier: Difficulty, rng: &mut R) -> Draft;

    /// Picks a template by independent coin flips.
    fn coin_flip<R: Rng + ?Sized>(rng: &mut R) -> Draft;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Subject {
    Physics,
    Chemistry,
    Biology,
}

impl Subject {
    /// Recognizes a manifest subject name by case-insensitive prefix.
    pub fn parse(name: &str) -> Option<Self> {
        let name = name.trim().to_lowercase();
        if name.starts_with("phys") {
            Some(Subject::Physics)
        } else if name.starts_with("chem") {
            Some(Subject::Chemistry)
        } else if name.starts_with("bio") {
            Some(Subject::Biology)
        } else {
            None
        }
    }

    /// Like [`Subject::parse`], treating any unrecognized name as biology.
    pub fn from_name(name: &str) -> Self {
        Self::parse(name).unwrap_or_else(|| {
            tracing::warn!(subject = name, "unrecognized subject, using biology templates");
            Subject::Biology
        })
    }

    pub fn tiered<R: Rng + ?Sized>(self, tier: Difficulty, rng: &mut R) -> Draft {
        match self {
            Subject::Physics => Physics::tiered(tier, rng),
            Subject::Chemistry => Chemistry::tiered(tier, rng),
            Subject::Biology => Biology::tiered(tier, rng),
        }
    }

    pub fn coin_flip<R: Rng + ?Sized>(self, rng: &mut R) -> Draft {
        match self {
            Subject::Physics => Physics::coin_flip(rng),
            Subject::Chemistry => Chemistry::coin_flip(rng),
            Subject::Biology => Biology::coin_flip(rng),
        }
    }
}
