use rand::seq::SliceRandom;
use rand::Rng;

/// Number of wrong options offered next to the correct one.
pub const DISTRACTORS: usize = 3;

const MAX_ATTEMPTS: usize = 64;
const FALLBACK_OPTIONS: [&str; 3] = ["None of these", "Cannot be determined", "All of these"];

/// A question as a template produces it, before the options are shuffled.
#[derive(Debug, Clone)]
pub struct Draft {
    pub q: String,
    pub correct: String,
    pub distractors: Vec<String>,
    pub exp: String,
}

impl Draft {
    /// Places the correct answer at a random position among the distractors.
    /// Returns the options and the index of the correct one.
    pub fn shuffle_options<R: Rng + ?Sized>(&self, rng: &mut R) -> (Vec<String>, usize) {
        let mut options = self.distractors.clone();
        options.shuffle(rng);
        let ans = rng.gen_range(0..=options.len());
        options.insert(ans, self.correct.clone());
        (options, ans)
    }
}

/// A fixed conceptual item with hand-written wrong answers.
#[derive(Debug, Clone, Copy)]
pub struct Concept {
    pub q: &'static str,
    pub correct: &'static str,
    pub wrong: [&'static str; DISTRACTORS],
    pub exp: &'static str,
}

impl Concept {
    pub fn draft(&self) -> Draft {
        Draft {
            q: self.q.to_string(),
            correct: self.correct.to_string(),
            distractors: self.wrong.iter().map(|w| w.to_string()).collect(),
            exp: self.exp.to_string(),
        }
    }
}

/// Draws one concept from a non-empty table.
pub fn pick_concept<R: Rng + ?Sized>(table: &[Concept], rng: &mut R) -> Draft {
    table[rng.gen_range(0..table.len())].draft()
}

/// Samples wrong options until three are found that differ from `correct`
/// and from each other. Falls back to fixed filler options if the sampler
/// keeps repeating itself.
pub fn distinct_distractors<R, F>(rng: &mut R, correct: &str, mut sample: F) -> Vec<String>
where
    R: Rng + ?Sized,
    F: FnMut(&mut R) -> String,
{
    let mut picked: Vec<String> = Vec::with_capacity(DISTRACTORS);
    let mut attempts = 0;

    while picked.len() < DISTRACTORS && attempts < MAX_ATTEMPTS {
        attempts += 1;
        let candidate = sample(rng);
        if candidate != correct && !picked.contains(&candidate) {
            picked.push(candidate);
        }
    }

    if picked.len() < DISTRACTORS {
        tracing::warn!(
            correct,
            found = picked.len(),
            "distractor sampler exhausted, padding with filler options"
        );
        for filler in FALLBACK_OPTIONS {
            if picked.len() == DISTRACTORS {
                break;
            }
            if filler != correct && !picked.iter().any(|p| p == filler) {
                picked.push(filler.to_string());
            }
        }
    }

    picked
}

/// Nudges a positive value by a small offset, or halves or doubles it.
/// The result is always positive.
pub fn perturb<R: Rng + ?Sized>(rng: &mut R, value: f64) -> f64 {
    let step = ((value.abs() / 5.0).round() as i64).max(1);
    let offset = rng.gen_range(1..=step) as f64;
    let candidate = match rng.gen_range(0..4) {
        0 => value + offset,
        1 => value - offset,
        2 => value / 2.0,
        _ => value * 2.0,
    };
    if candidate > 0.0 {
        candidate
    } else {
        value + offset
    }
}

/// Formats a quantity without a trailing `.0` and with at most two decimals.
pub fn format_quantity(value: f64) -> String {
    if (value - value.round()).abs() < 1e-9 {
        return format!("{}", value.round() as i64);
    }
    let fixed = format!("{:.2}", value);
    fixed.trim_end_matches('0').trim_end_matches('.').to_string()
}

/// Formats a positive value as `m.mm × 10^e`.
pub fn format_scientific(value: f64) -> String {
    if value <= 0.0 || !value.is_finite() {
        return format_quantity(value);
    }
    let mut exponent = value.log10().floor() as i32;
    let mut mantissa = value / 10f64.powi(exponent);
    if (mantissa * 100.0).round() >= 1000.0 {
        mantissa /= 10.0;
        exponent += 1;
    }
    format!("{:.2} × 10^{}", mantissa, exponent)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn shuffled_options_keep_correct_answer_at_ans() {
        let draft = Draft {
            q: "q".into(),
            correct: "right".into(),
            distractors: vec!["a".into(), "b".into(), "c".into()],
            exp: String::new(),
        };
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..50 {
            let (options, ans) = draft.shuffle_options(&mut rng);
            assert_eq!(options.len(), 4);
            assert_eq!(options[ans], "right");
        }
    }

    #[test]
    fn correct_answer_lands_in_every_slot() {
        let draft = pick_concept(
            &[Concept {
                q: "q",
                correct: "x",
                wrong: ["a", "b", "c"],
                exp: "",
            }],
            &mut ChaCha8Rng::seed_from_u64(0),
        );
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let mut seen = [false; 4];
        for _ in 0..200 {
            let (_, ans) = draft.shuffle_options(&mut rng);
            seen[ans] = true;
        }
        assert_eq!(seen, [true; 4]);
    }

    #[test]
    fn distractors_are_distinct_and_never_correct() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let values = ["1", "2", "3", "2", "1", "4"];
        let mut i = 0;
        let picked = distinct_distractors(&mut rng, "2", |_| {
            i += 1;
            values[(i - 1) % values.len()].to_string()
        });
        assert_eq!(picked, vec!["1", "3", "4"]);
    }

    #[test]
    fn exhausted_sampler_is_padded_with_fillers() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let picked = distinct_distractors(&mut rng, "5 m", |_| "5 m".to_string());
        assert_eq!(picked, FALLBACK_OPTIONS.to_vec());

        let picked = distinct_distractors(&mut rng, "5 m", |_| "6 m".to_string());
        assert_eq!(picked, vec!["6 m", "None of these", "Cannot be determined"]);
    }

    #[test]
    fn perturbed_values_stay_positive() {
        let mut rng = ChaCha8Rng::seed_from_u64(99);
        for value in [0.5, 1.0, 2.0, 40.0, 1250.0] {
            for _ in 0..100 {
                assert!(perturb(&mut rng, value) > 0.0);
            }
        }
    }

    #[test]
    fn quantities_drop_trailing_zeros() {
        assert_eq!(format_quantity(50.0), "50");
        assert_eq!(format_quantity(12.5), "12.5");
        assert_eq!(format_quantity(1.0 / 3.0), "0.33");
        assert_eq!(format_quantity(2.999999999999), "3");
    }

    #[test]
    fn scientific_notation() {
        assert_eq!(format_scientific(1.3416e-3), "1.34 × 10^-3");
        assert_eq!(format_scientific(9.999e-4), "1.00 × 10^-3");
        assert_eq!(format_scientific(4.2), "4.20 × 10^0");
    }
}
