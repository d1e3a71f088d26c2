use rand::Rng;

use super::{
    draft::{distinct_distractors, format_quantity, perturb, pick_concept, Concept, Draft},
    question::Difficulty,
    subject::Templates,
};

const SPEED_KMH: [u32; 6] = [18, 36, 54, 72, 90, 108];

const NEWTON_THIRD_LAW: [Concept; 3] = [
    Concept {
        q: "A book rests on a table. According to Newton's third law, the reaction to the book's weight is",
        correct: "the gravitational pull of the book on the Earth",
        wrong: [
            "the normal force of the table on the book",
            "the friction between the book and the table",
            "the weight of the table",
        ],
        exp: "Action-reaction pairs act on different bodies. The Earth pulls the book down, so the book pulls the Earth up with an equal force. The normal force also acts on the book, so it cannot be the reaction.",
    },
    Concept {
        q: "A rifle recoils when a bullet is fired. This is best explained by",
        correct: "Newton's third law of motion",
        wrong: [
            "Newton's first law of motion",
            "the law of conservation of energy alone",
            "Hooke's law",
        ],
        exp: "The rifle pushes the bullet forward and the bullet pushes the rifle backward with an equal and opposite force.",
    },
    Concept {
        q: "A swimmer pushes water backwards with each stroke. The force that moves the swimmer forward is exerted by",
        correct: "the water on the swimmer",
        wrong: [
            "the swimmer on the water",
            "the swimmer's muscles on the swimmer's body",
            "the buoyant force alone",
        ],
        exp: "The swimmer exerts a backward force on the water and the water exerts an equal forward force on the swimmer.",
    },
];

pub struct Physics;

impl Templates for Physics {
    fn tiered<R: Rng + ?Sized>(tier: Difficulty, rng: &mut R) -> Draft {
        match tier {
            Difficulty::Easy => {
                if rng.gen_bool(0.5) {
                    return pick_concept(&NEWTON_THIRD_LAW, rng);
                }
                let speed = rng.gen_range(2..=30);
                let time = rng.gen_range(2..=20);
                uniform_speed(speed, time, rng)
            }
            Difficulty::Medium => {
                let speed_kmh = SPEED_KMH[rng.gen_range(0..SPEED_KMH.len())];
                let time = rng.gen_range(5..=60);
                converted_speed(speed_kmh, time, rng)
            }
            Difficulty::Hard => {
                let initial = rng.gen_range(0..=10);
                let acceleration = rng.gen_range(1..=5);
                let time = rng.gen_range(1..=10);
                accelerated_displacement(initial, acceleration, time, rng)
            }
        }
    }

    fn coin_flip<R: Rng + ?Sized>(rng: &mut R) -> Draft {
        if rng.gen_bool(0.5) {
            return pick_concept(&NEWTON_THIRD_LAW, rng);
        }
        if rng.gen_bool(0.5) {
            let speed = rng.gen_range(2..=30);
            let time = rng.gen_range(2..=20);
            uniform_speed(speed, time, rng)
        } else if rng.gen_bool(0.5) {
            let speed_kmh = SPEED_KMH[rng.gen_range(0..SPEED_KMH.len())];
            let time = rng.gen_range(5..=60);
            converted_speed(speed_kmh, time, rng)
        } else {
            let initial = rng.gen_range(0..=10);
            let acceleration = rng.gen_range(1..=5);
            let time = rng.gen_range(1..=10);
            accelerated_displacement(initial, acceleration, time, rng)
        }
    }
}

fn metres(value: f64) -> String {
    format!("{} m", format_quantity(value))
}

/// Distance covered at a constant `speed` (m/s) during `time` (s).
pub fn uniform_speed<R: Rng + ?Sized>(speed: u32, time: u32, rng: &mut R) -> Draft {
    let distance = f64::from(speed * time);
    let correct = metres(distance);
    let distractors = distinct_distractors(rng, &correct, |rng| metres(perturb(rng, distance)));

    Draft {
        q: format!(
            "A body moves with a uniform speed of {} m/s for {} s. What distance does it cover?",
            speed, time
        ),
        correct,
        distractors,
        exp: format!(
            "distance = speed × time = {} m/s × {} s = {}.",
            speed,
            time,
            metres(distance)
        ),
    }
}

/// Same as [`uniform_speed`] with the speed given in km/h.
pub fn converted_speed<R: Rng + ?Sized>(speed_kmh: u32, time: u32, rng: &mut R) -> Draft {
    let speed = f64::from(speed_kmh) * 5.0 / 18.0;
    let distance = speed * f64::from(time);
    let correct = metres(distance);
    let unconverted = f64::from(speed_kmh * time);
    let distractors = distinct_distractors(rng, &correct, |rng| {
        // forgetting the unit conversion is the classic slip
        if rng.gen_bool(0.3) {
            metres(unconverted)
        } else {
            metres(perturb(rng, distance))
        }
    });

    Draft {
        q: format!(
            "A car travels at a constant {} km/h for {} s. How far does it travel?",
            speed_kmh, time
        ),
        correct,
        distractors,
        exp: format!(
            "Convert the speed: {} km/h × 5/18 = {} m/s. Then distance = {} m/s × {} s = {}.",
            speed_kmh,
            format_quantity(speed),
            format_quantity(speed),
            time,
            metres(distance)
        ),
    }
}

/// Displacement `s = ut + ½at²` under uniform acceleration.
pub fn accelerated_displacement<R: Rng + ?Sized>(
    initial: u32,
    acceleration: u32,
    time: u32,
    rng: &mut R,
) -> Draft {
    let (u, a, t) = (f64::from(initial), f64::from(acceleration), f64::from(time));
    let drift = u * t;
    let gain = 0.5 * a * t * t;
    let displacement = drift + gain;
    let correct = metres(displacement);
    let without_half = drift + a * t * t;
    let distractors = distinct_distractors(rng, &correct, |rng| {
        if rng.gen_bool(0.3) {
            metres(without_half)
        } else {
            metres(perturb(rng, displacement))
        }
    });

    Draft {
        q: format!(
            "A particle starts with velocity {} m/s and accelerates uniformly at {} m/s² for {} s. Find its displacement.",
            initial, acceleration, time
        ),
        correct,
        distractors,
        exp: format!(
            "Use s = ut + ½at².\nut = {} × {} = {} m.\n½at² = 0.5 × {} × {}² = {} m.\ns = {} + {} = {}.",
            initial,
            time,
            format_quantity(drift),
            acceleration,
            time,
            format_quantity(gain),
            format_quantity(drift),
            format_quantity(gain),
            metres(displacement)
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn assert_well_formed(draft: &Draft) {
        assert_eq!(draft.distractors.len(), 3);
        assert!(!draft.distractors.contains(&draft.correct));
        for (i, d) in draft.distractors.iter().enumerate() {
            assert!(!draft.distractors[i + 1..].contains(d), "duplicate {}", d);
        }
    }

    #[test]
    fn uniform_speed_distance() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let draft = uniform_speed(10, 5, &mut rng);
        assert_eq!(draft.correct, "50 m");
        assert!(draft.q.contains("10 m/s"));
        assert_well_formed(&draft);
    }

    #[test]
    fn converted_speed_distance() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let draft = converted_speed(72, 10, &mut rng);
        assert_eq!(draft.correct, "200 m");
        assert!(draft.exp.contains("72 km/h × 5/18 = 20 m/s"));
        assert_well_formed(&draft);
    }

    #[test]
    fn accelerated_displacement_with_half_metres() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let draft = accelerated_displacement(2, 3, 3, &mut rng);
        // 2·3 + ½·3·9 = 19.5
        assert_eq!(draft.correct, "19.5 m");
        assert_well_formed(&draft);

        let draft = accelerated_displacement(0, 2, 4, &mut rng);
        assert_eq!(draft.correct, "16 m");
    }

    #[test]
    fn every_tier_produces_valid_drafts() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        for tier in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
            for _ in 0..100 {
                assert_well_formed(&Physics::tiered(tier, &mut rng));
            }
        }
        for _ in 0..100 {
            assert_well_formed(&Physics::coin_flip(&mut rng));
        }
    }
}
