//! Copo Text - ingredient text processing
//!
//! - `normalize`: raw phrase → canonical ingredient name
//! - `split_ingredients`: one splitter for raw ingredient lists, either
//!   normalizing (index) or trimming only (display and scoring)
//! - `split_steps`: preparation text → period-terminated steps
//! - `vocab`: the unit, connective and qualifier tables
//!
//! Nothing here fails: a step whose pattern is absent leaves the text as-is.

mod normalize;
mod split;
pub mod vocab;

pub use normalize::{capitalize, normalize, strip_measure, strip_qualifiers};
pub use split::{extract_ingredients, split_ingredients, split_steps, SplitMode};
