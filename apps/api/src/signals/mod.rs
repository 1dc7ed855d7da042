// Text signals: per-testimonial keyword selection, corpus aggregation, highlighting.
// Core modules are pure and synchronous; only `handlers` touches HTTP.

pub mod aggregate;
pub mod handlers;
pub mod highlight;
pub mod keywords;
pub mod matching;
pub mod render;
pub mod tier;
pub mod vocabulary;

pub use aggregate::{aggregate_signals, SignalEntry};
pub use highlight::{render_highlighted, Segment};
pub use keywords::select_keywords;
pub use tier::CandidatePhrase;
