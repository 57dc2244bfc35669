//! Parsers for note file contents.

pub mod frontmatter;

pub use frontmatter::{
    decode, decode_with_path, encode, split_frontmatter, Frontmatter, FrontmatterSplit,
};
