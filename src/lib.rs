pub mod classify;
pub mod context;
pub mod extract;
pub mod lexicon;
pub mod lookup;
pub mod medterm;
pub mod output;
pub mod render;
pub mod segment;
pub mod stage;

#[doc(hidden)]
pub mod testing {
    pub mod stage_contract;
}

pub use classify::{Classification, Reason, classify, explain};
pub use context::Context;
pub use extract::{Term, Terms, terms};
pub use lookup::{Definition, DefinitionSource, LookupError, LookupOutcome, define};
pub use medterm::{MedTerm, MedTermBuilder};
pub use render::{Block, Span, Style, render};
pub use segment::{Segment, concat, segment};
pub use stage::normalize;

#[cfg(test)]
mod tests {
    include!("tests/unit.rs");
    include!("tests/integration.rs");
    include!("tests/proptest.rs");
}
