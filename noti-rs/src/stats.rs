//! Summary views over a collection of notes.

use crate::note::Note;
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};

/// Number of notes in a folder, counting notes in its subfolders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FolderCount {
    pub path: String,
    pub count: usize,
}

impl FolderCount {
    /// Nesting depth (0 for top-level folders).
    pub fn depth(&self) -> usize {
        self.path.matches('/').count()
    }

    /// Last segment of the folder path.
    pub fn name(&self) -> &str {
        self.path.rsplit('/').next().unwrap_or(&self.path)
    }
}

/// Number of times a tag is used across notes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagCount {
    pub tag: String,
    pub count: usize,
}

/// Count notes per folder, crediting every ancestor folder too.
///
/// Notes at the root are not counted. Sorted by folder path.
pub fn folder_counts(notes: &[Note]) -> Vec<FolderCount> {
    let mut counts: BTreeMap<String, usize> = BTreeMap::new();

    for note in notes.iter().filter(|n| !n.folder.is_empty()) {
        let mut prefix = String::new();
        for segment in note.folder.split('/') {
            if !prefix.is_empty() {
                prefix.push('/');
            }
            prefix.push_str(segment);
            *counts.entry(prefix.clone()).or_insert(0) += 1;
        }
    }

    counts
        .into_iter()
        .map(|(path, count)| FolderCount { path, count })
        .collect()
}

/// Count tag occurrences, most used first, ties by tag name.
pub fn tag_counts(notes: &[Note]) -> Vec<TagCount> {
    let mut counts: HashMap<&str, usize> = HashMap::new();

    for note in notes {
        for tag in &note.tags {
            *counts.entry(tag.as_str()).or_insert(0) += 1;
        }
    }

    let mut tags: Vec<TagCount> = counts
        .into_iter()
        .map(|(tag, count)| TagCount {
            tag: tag.to_string(),
            count,
        })
        .collect();

    tags.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.tag.cmp(&b.tag)));
    tags
}
