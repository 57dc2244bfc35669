//! `noti tags` implementation.

use crate::cli::args::TagsArgs;
use crate::cli::output::{plural, Output};
use crate::error::Result;
use crate::store::NoteStore;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct TagsResponse {
    pub tags: Vec<TagOutput>,
    pub total: usize,
}

/// A tag, with its usage count unless counts were turned off.
#[derive(Debug, Serialize)]
pub struct TagOutput {
    pub tag: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
}

pub fn run(store: &NoteStore, args: &TagsArgs, output: &Output) -> Result<()> {
    let tags: Vec<TagOutput> = store
        .tag_counts()?
        .into_iter()
        .map(|t| TagOutput {
            tag: t.tag,
            count: (!args.no_counts).then_some(t.count),
        })
        .collect();

    if output.is_structured() {
        return output.print(&TagsResponse {
            total: tags.len(),
            tags,
        });
    }

    if output.is_quiet() {
        for tag in &tags {
            output.print_raw(&tag.tag);
        }
        return Ok(());
    }

    if tags.is_empty() {
        output.print_raw("No tags found");
        return Ok(());
    }

    output.print_raw(&format!("Found {} tag(s):\n", tags.len()));
    for tag in &tags {
        match tag.count {
            Some(count) => output.print_raw(&format!("  {:<20} ({})", tag.tag, plural(count, "note"))),
            None => output.print_raw(&format!("  {}", tag.tag)),
        }
    }
    Ok(())
}
