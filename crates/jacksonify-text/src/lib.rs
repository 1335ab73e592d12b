//! Text primitives shared by the annotation engine.
//!
//! This crate knows nothing about Java declarations. It provides byte-offset
//! ranges and edits over a single file's text, plus the depth-counter
//! scanning used to delimit parameter lists and split them at top-level
//! commas.

mod brackets;
mod edit;

pub use brackets::{match_closing_paren, split_top_level};
pub use edit::{apply_text_edits, EditError, TextEdit, TextRange};
