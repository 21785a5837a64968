/*! Text transformers.

Deterministic corrections applied to in-memory text.

!*/

mod substitutions;
mod transform;

pub use substitutions::{Rule, RuleSet, DEFAULT_RULES};
pub use transform::Transform;
