use rand::Rng;

use super::{
    draft::{distinct_distractors, pick_concept, Concept, Draft},
    question::Difficulty,
    subject::Templates,
};

/// `(organelle, function)`
const ORGANELLES: [(&str, &str); 7] = [
    ("mitochondrion", "Aerobic respiration and ATP synthesis"),
    ("ribosome", "Protein synthesis"),
    ("lysosome", "Intracellular digestion"),
    ("chloroplast", "Photosynthesis"),
    ("Golgi apparatus", "Packaging and secretion of proteins"),
    ("rough endoplasmic reticulum", "Synthesis and folding of secretory proteins"),
    ("centriole", "Formation of spindle fibres in animal cells"),
];

/// `(question clause, phase)`
const MEIOSIS: [(&str, &str); 6] = [
    ("does crossing over between homologous chromosomes occur", "Pachytene of prophase I"),
    ("does synaptonemal complex formation begin", "Zygotene of prophase I"),
    ("do chiasmata first become visible", "Diplotene of prophase I"),
    ("do homologous chromosomes separate", "Anaphase I"),
    ("do sister chromatids separate", "Anaphase II"),
    ("does terminalisation of chiasmata take place", "Diakinesis of prophase I"),
];

const MUTATIONS: [Concept; 3] = [
    Concept {
        q: "Sickle-cell anaemia results from the substitution of glutamic acid by valine in the β-globin chain. This is an example of",
        correct: "a missense point mutation",
        wrong: ["a frameshift mutation", "a nonsense mutation", "a chromosomal deletion"],
        exp: "A single base change (GAG → GTG) alters one codon so that a different amino acid is incorporated, which is a missense mutation.",
    },
    Concept {
        q: "Deletion of a single nucleotide near the start of a coding sequence most likely causes",
        correct: "a shift in the reading frame altering all downstream codons",
        wrong: [
            "replacement of exactly one amino acid",
            "no change in the protein",
            "duplication of the whole gene",
        ],
        exp: "Codons are read in triplets, so removing one base shifts every downstream codon and usually produces a non-functional protein.",
    },
    Concept {
        q: "A point mutation changes a codon from UAC to UAA. The most likely effect on the protein is",
        correct: "premature termination of translation",
        wrong: [
            "substitution of a single amino acid",
            "no effect because the code is degenerate",
            "addition of an extra amino acid",
        ],
        exp: "UAA is a stop codon, so this nonsense mutation ends translation early and yields a truncated polypeptide.",
    },
];

pub struct Biology;

impl Templates for Biology {
    fn tiered<R: Rng + ?Sized>(tier: Difficulty, rng: &mut R) -> Draft {
        match tier {
            Difficulty::Easy => organelle_function(rng.gen_range(0..ORGANELLES.len()), rng),
            Difficulty::Medium => meiosis_phase(rng.gen_range(0..MEIOSIS.len()), rng),
            Difficulty::Hard => pick_concept(&MUTATIONS, rng),
        }
    }

    fn coin_flip<R: Rng + ?Sized>(rng: &mut R) -> Draft {
        if rng.gen_bool(0.5) {
            organelle_function(rng.gen_range(0..ORGANELLES.len()), rng)
        } else if rng.gen_bool(0.5) {
            meiosis_phase(rng.gen_range(0..MEIOSIS.len()), rng)
        } else {
            pick_concept(&MUTATIONS, rng)
        }
    }
}

/// Asks for the function of `ORGANELLES[which]`; other functions are the distractors.
pub fn organelle_function<R: Rng + ?Sized>(which: usize, rng: &mut R) -> Draft {
    let (organelle, function) = ORGANELLES[which % ORGANELLES.len()];
    let distractors = distinct_distractors(rng, function, |rng| {
        ORGANELLES[rng.gen_range(0..ORGANELLES.len())].1.to_string()
    });

    Draft {
        q: format!("What is the primary function of the {}?", organelle),
        correct: function.to_string(),
        distractors,
        exp: format!(
            "{}: the primary role of the {}. The other options describe different organelles.",
            function, organelle
        ),
    }
}

/// Asks in which phase `MEIOSIS[which]` happens; other phases are the distractors.
pub fn meiosis_phase<R: Rng + ?Sized>(which: usize, rng: &mut R) -> Draft {
    let (clause, phase) = MEIOSIS[which % MEIOSIS.len()];
    let distractors = distinct_distractors(rng, phase, |rng| {
        MEIOSIS[rng.gen_range(0..MEIOSIS.len())].1.to_string()
    });

    Draft {
        q: format!("During which stage of meiosis {}?", clause),
        correct: phase.to_string(),
        distractors,
        exp: format!(
            "This happens in {}. The other stages listed belong to different steps of meiosis.",
            phase.to_lowercase()
        ),
    }
}
