//! Domain model (candidates, history, errors, ids, specs, reports).

pub mod candidate;
pub mod errors;
pub mod history;
pub mod ids;
pub mod report;
pub mod spec;

pub use candidate::{Candidate, HistoryEntry};
pub use errors::{AgentError, AgentResult, BoxError, Collaborator};
pub use history::History;
pub use ids::RunId;
pub use report::RunReport;
pub use spec::{ApproximatorSpec, RunSpec, SpecError};
