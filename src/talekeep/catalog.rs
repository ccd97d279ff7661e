//! The story catalog: an external JSON document describing the library.
//!
//! The catalog is owned by whoever publishes the site; this crate only reads
//! it and uses story ids as foreign keys into the progress store. It is never
//! validated beyond what deserialization requires.

use crate::error::{Result, TalekeepError};
use crate::model::StoryId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

const WORDS_PER_MINUTE: u32 = 200;

/// One catalog record. Most fields are presentation metadata and optional.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Story {
    pub id: StoryId,
    pub title: String,

    #[serde(default)]
    pub author: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub genre: String,

    #[serde(default)]
    pub tags: Vec<String>,

    /// Relative path of the story document on the site
    #[serde(default)]
    pub file: String,

    #[serde(default)]
    pub cover: String,

    #[serde(default, rename = "wordCount")]
    pub word_count: u32,

    #[serde(default)]
    pub chapters: u32,

    #[serde(default)]
    pub rating: f64,
}

impl Story {
    /// Estimated reading time in whole minutes, at 200 words per minute.
    pub fn reading_minutes(&self) -> u32 {
        self.word_count.div_ceil(WORDS_PER_MINUTE)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub stories: Vec<Story>,

    #[serde(default)]
    pub categories: Vec<String>,
}

impl Catalog {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            TalekeepError::Store(format!("Cannot read catalog {}: {}", path.display(), e))
        })?;
        let catalog: Catalog =
            serde_json::from_str(&content).map_err(TalekeepError::Serialization)?;
        Ok(catalog)
    }

    pub fn get(&self, id: &StoryId) -> Option<&Story> {
        self.stories.iter().find(|s| &s.id == id)
    }

    /// Case-insensitive substring search across title, description, genre,
    /// tags and author.
    pub fn search(&self, query: &str) -> Vec<&Story> {
        let query = query.to_lowercase();
        if query.is_empty() {
            return Vec::new();
        }

        self.stories
            .iter()
            .filter(|story| {
                let haystack = format!(
                    "{} {} {} {} {}",
                    story.title,
                    story.description,
                    story.genre,
                    story.tags.join(" "),
                    story.author
                )
                .to_lowercase();
                haystack.contains(&query)
            })
            .collect()
    }

    /// Story count per genre, ordered by genre name.
    pub fn genre_counts(&self) -> BTreeMap<String, usize> {
        let mut counts = BTreeMap::new();
        for story in &self.stories {
            if !story.genre.is_empty() {
                *counts.entry(story.genre.clone()).or_insert(0) += 1;
            }
        }
        counts
    }
}
