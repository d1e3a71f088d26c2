mod biology;
mod chemistry;
mod draft;
mod generate;
mod manifest;
mod physics;
mod question;
mod subject;

pub use draft::Draft;
pub use generate::{generate, make_id, slug, QuestionContext, SelectionPolicy, UnknownPolicy};
pub use manifest::{
    generate_chapter, load_manifest, run, write_chapter, write_manifest, ChapterMeta, Manifest,
    ManifestError, Summary,
};
pub use question::{topic_tags, Difficulty, QuestionRecord};
pub use subject::{Subject, Templates};
