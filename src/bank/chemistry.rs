use rand::Rng;

use super::{
    draft::{
        distinct_distractors, format_quantity, format_scientific, perturb, pick_concept, Concept,
        Draft,
    },
    question::Difficulty,
    subject::Templates,
};

const PERIODICITY: [Concept; 4] = [
    Concept {
        q: "Which of the following alkali metals reacts most vigorously with water?",
        correct: "Caesium",
        wrong: ["Lithium", "Sodium", "Potassium"],
        exp: "Reactivity of alkali metals increases down the group because the outer electron is farther from the nucleus and is lost more easily.",
    },
    Concept {
        q: "Which element has the highest electronegativity?",
        correct: "Fluorine",
        wrong: ["Oxygen", "Chlorine", "Nitrogen"],
        exp: "Electronegativity increases across a period and decreases down a group, which puts fluorine at the top of the scale.",
    },
    Concept {
        q: "Moving from left to right across a period, the first ionization enthalpy generally",
        correct: "increases",
        wrong: ["decreases", "remains constant", "first decreases and then increases"],
        exp: "Nuclear charge increases across a period while electrons enter the same shell, so the outer electrons are held more tightly.",
    },
    Concept {
        q: "Among the halogens, which is the strongest oxidising agent?",
        correct: "F₂",
        wrong: ["Cl₂", "Br₂", "I₂"],
        exp: "F₂ has the highest standard reduction potential of the halogens, so it accepts electrons most readily.",
    },
];

/// `(name, Ka)` of common weak monoprotic acids.
const WEAK_ACIDS: [(&str, f64); 5] = [
    ("acetic acid", 1.8e-5),
    ("formic acid", 1.8e-4),
    ("hydrofluoric acid", 6.8e-4),
    ("benzoic acid", 6.3e-5),
    ("hypochlorous acid", 3.0e-8),
];

const CONCENTRATIONS: [f64; 5] = [0.01, 0.05, 0.1, 0.2, 0.5];

pub struct Chemistry;

impl Templates for Chemistry {
    fn tiered<R: Rng + ?Sized>(tier: Difficulty, rng: &mut R) -> Draft {
        match tier {
            Difficulty::Easy => pick_concept(&PERIODICITY, rng),
            Difficulty::Medium => {
                let moles = rng.gen_range(2..=12);
                stoichiometry(moles, rng)
            }
            Difficulty::Hard => random_weak_acid(rng),
        }
    }

    fn coin_flip<R: Rng + ?Sized>(rng: &mut R) -> Draft {
        if rng.gen_bool(0.5) {
            pick_concept(&PERIODICITY, rng)
        } else if rng.gen_bool(0.5) {
            let moles = rng.gen_range(2..=12);
            stoichiometry(moles, rng)
        } else {
            random_weak_acid(rng)
        }
    }
}

fn moles_text(value: f64) -> String {
    format!("{} moles", format_quantity(value))
}

/// Water formed from `moles` of H₂ in `2H₂ + O₂ → 2H₂O`.
pub fn stoichiometry<R: Rng + ?Sized>(moles: u32, rng: &mut R) -> Draft {
    let produced = f64::from(moles);
    let correct = moles_text(produced);
    let distractors = distinct_distractors(rng, &correct, |rng| {
        // reading the oxygen coefficient instead of water's gives half
        if rng.gen_bool(0.3) {
            moles_text(produced / 2.0)
        } else {
            moles_text(perturb(rng, produced))
        }
    });

    Draft {
        q: format!(
            "In the reaction 2H₂ + O₂ → 2H₂O, how many moles of water are formed when {} moles of H₂ react with excess oxygen?",
            moles
        ),
        correct,
        distractors,
        exp: format!(
            "From the balanced equation, 2 mol H₂ give 2 mol H₂O, a 1:1 ratio.\nSo {} mol H₂ give {} mol H₂O.",
            moles, moles
        ),
    }
}

fn random_weak_acid<R: Rng + ?Sized>(rng: &mut R) -> Draft {
    let (name, ka) = WEAK_ACIDS[rng.gen_range(0..WEAK_ACIDS.len())];
    let concentration = CONCENTRATIONS[rng.gen_range(0..CONCENTRATIONS.len())];
    weak_acid(name, ka, concentration, rng)
}

fn molar(value: f64) -> String {
    format!("{} mol/L", format_scientific(value))
}

/// `[H⁺] ≈ √(Ka·c)` for a weak acid of concentration `concentration`.
pub fn weak_acid<R: Rng + ?Sized>(name: &str, ka: f64, concentration: f64, rng: &mut R) -> Draft {
    let product = ka * concentration;
    let hydrogen = product.sqrt();
    let correct = molar(hydrogen);
    let distractors = distinct_distractors(rng, &correct, |rng| match rng.gen_range(0..5) {
        0 => molar(product),
        1 => molar(ka.sqrt()),
        2 => molar(hydrogen * 10.0),
        3 => molar(hydrogen / 10.0),
        _ => molar(hydrogen * rng.gen_range(1.5..3.0)),
    });

    Draft {
        q: format!(
            "Estimate [H⁺] in a {} M solution of {} (Ka = {}).",
            format_quantity(concentration),
            name,
            format_scientific(ka)
        ),
        correct,
        distractors,
        exp: format!(
            "For a weak acid with small dissociation, [H⁺] ≈ √(Ka·c).\nKa·c = {} × {} = {}.\n[H⁺] = √({}) = {}.",
            format_scientific(ka),
            format_quantity(concentration),
            format_scientific(product),
            format_scientific(product),
            molar(hydrogen)
        ),
    }
}
