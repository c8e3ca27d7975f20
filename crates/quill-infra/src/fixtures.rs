//! Seed fixture loading.
//!
//! The seed records are embedded at compile time and parsed exactly once per
//! call site. A malformed fixture file is a hard error; callers must treat it
//! as fatal rather than seeding a partial set.

use serde::Deserialize;
use thiserror::Error;

use quill_core::domain::{Author, PostDraft};

const SEED_DATA: &str = include_str!("../fixtures/seed_posts.json");

#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("Malformed seed data: {0}")]
    Malformed(#[from] serde_json::Error),
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SeedAuthor {
    first_name: String,
    last_name: String,
}

#[derive(Debug, Deserialize)]
struct SeedPost {
    author: SeedAuthor,
    title: String,
    content: String,
}

/// Parse the embedded seed records, preserving their order.
pub fn seed_posts() -> Result<Vec<PostDraft>, FixtureError> {
    let records: Vec<SeedPost> = serde_json::from_str(SEED_DATA)?;

    Ok(records
        .into_iter()
        .map(|r| PostDraft {
            author: Author::new(r.author.first_name, r.author.last_name),
            title: r.title,
            content: r.content,
        })
        .collect())
}
