use anyhow::Context;
use rand::Rng;
use serde::Deserialize;
use serde_json::{Map, Value};
use std::{
    fmt,
    fs::{self, File},
    io::{BufWriter, Write},
    path::Path,
};
use thiserror::Error;

use super::{
    generate::{generate, QuestionContext, SelectionPolicy},
    question::QuestionRecord,
    subject::Subject,
};
use crate::config::Config;

#[derive(Error, Debug)]
pub enum ManifestError {
    #[error("manifest must be a JSON object of subjects")]
    NotAnObject,

    #[error("subject '{subject}' must map chapter names to chapter metadata")]
    SubjectNotAnObject { subject: String },

    #[error("chapter '{chapter}' of '{subject}' has no 'file' entry")]
    MissingFile { subject: String, chapter: String },

    #[error("chapter '{chapter}' of '{subject}' has invalid metadata: {source}")]
    InvalidChapter {
        subject: String,
        chapter: String,
        source: serde_json::Error,
    },
}

#[derive(Debug, Deserialize)]
pub struct ChapterMeta {
    /// output path relative to the root directory
    pub file: String,

    pub topics: Option<Vec<String>>,
}

impl ChapterMeta {
    /// First listed topic, or empty.
    pub fn topic(&self) -> &str {
        self.topics
            .as_deref()
            .and_then(|topics| topics.first())
            .map(String::as_str)
            .unwrap_or("")
    }
}

/// Subjects and chapters in the order the manifest lists them. Chapter
/// metadata is validated lazily, when the walk reaches it.
#[derive(Debug)]
pub struct Manifest {
    subjects: Map<String, Value>,
}

impl Manifest {
    pub fn parse(content: &str) -> anyhow::Result<Self> {
        let value: Value = serde_json::from_str(content).context("manifest is not valid JSON")?;
        match value {
            Value::Object(subjects) => Ok(Self { subjects }),
            _ => Err(ManifestError::NotAnObject.into()),
        }
    }
}

pub fn load_manifest(path: &Path) -> anyhow::Result<Manifest> {
    let content = fs::read_to_string(path)
        .context(format!("failed to read manifest {}", path.display()))?;
    Manifest::parse(&content).context(format!("failed to parse manifest {}", path.display()))
}

fn parse_chapter(subject: &str, chapter: &str, meta: &Value) -> Result<ChapterMeta, ManifestError> {
    if meta.get("file").is_none() {
        return Err(ManifestError::MissingFile {
            subject: subject.to_string(),
            chapter: chapter.to_string(),
        });
    }
    ChapterMeta::deserialize(meta).map_err(|source| ManifestError::InvalidChapter {
        subject: subject.to_string(),
        chapter: chapter.to_string(),
        source,
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub files_written: usize,
    pub questions_per_file: usize,
    pub policy: SelectionPolicy,
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self.policy {
            SelectionPolicy::Placeholder => "",
            SelectionPolicy::Tiered | SelectionPolicy::CoinFlip => "original ",
        };
        write!(
            f,
            "Wrote {} chapter files with {} {}questions each.",
            self.files_written, self.questions_per_file, kind
        )
    }
}

/// Generates `count` questions for one chapter, in index order.
pub fn generate_chapter<R: Rng + ?Sized>(
    kind: Subject,
    context: &QuestionContext,
    count: usize,
    policy: SelectionPolicy,
    rng: &mut R,
) -> Vec<QuestionRecord> {
    (0..count)
        .map(|index| generate(kind, context, index, policy, rng))
        .collect()
}

/// Writes `records` as a pretty-printed JSON array, replacing any existing file.
pub fn write_chapter(path: &Path, records: &[QuestionRecord]) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .context(format!("failed to create directory {}", parent.display()))?;
    }

    let file = File::create(path).context(format!("failed to open {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, records)
        .context(format!("failed to serialize questions for {}", path.display()))?;
    writer
        .flush()
        .context(format!("failed to write {}", path.display()))?;

    Ok(())
}

/// Walks every chapter of `manifest` and writes its question file under `config.root`.
/// Stops at the first failing chapter; files already written are left in place.
pub fn write_manifest<R: Rng + ?Sized>(
    manifest: &Manifest,
    config: &Config,
    rng: &mut R,
) -> anyhow::Result<Summary> {
    let mut files_written = 0;

    for (subject, chapters) in &manifest.subjects {
        let chapters = chapters
            .as_object()
            .ok_or_else(|| ManifestError::SubjectNotAnObject {
                subject: subject.clone(),
            })?;

        let kind = Subject::from_name(subject);
        tracing::info!(
            subject = subject.as_str(),
            chapters = chapters.len(),
            "generating subject"
        );

        for (chapter, meta) in chapters {
            let meta = parse_chapter(subject, chapter, meta)?;
            let path = config.root.join(&meta.file);
            let context = QuestionContext {
                subject,
                chapter,
                topic: meta.topic(),
            };
            tracing::debug!(
                chapter = chapter.as_str(),
                topic = context.topic,
                path = %path.display(),
                "generating chapter"
            );

            let records = generate_chapter(kind, &context, config.count, config.policy, rng);
            write_chapter(&path, &records).context(format!(
                "failed to write chapter '{}' of '{}'",
                chapter, subject
            ))?;

            tracing::info!(
                path = %path.display(),
                questions = records.len(),
                "wrote chapter file"
            );
            files_written += 1;
        }
    }

    Ok(Summary {
        files_written,
        questions_per_file: config.count,
        policy: config.policy,
    })
}

/// Loads the configured manifest and writes every chapter file.
pub fn run<R: Rng + ?Sized>(config: &Config, rng: &mut R) -> anyhow::Result<Summary> {
    let manifest_path = config.manifest_path();
    tracing::info!(
        manifest = %manifest_path.display(),
        policy = %config.policy,
        count = config.count,
        "starting generation"
    );
    let manifest = load_manifest(&manifest_path)?;
    write_manifest(&manifest, config, rng)
}
