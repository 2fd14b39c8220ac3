//! Run report: what a `Runner` hands back after driving an agent.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::history::History;
use super::ids::RunId;

/// Summary of one run, serializable for export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunReport<S, A> {
    pub run_id: RunId,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,

    /// Ticks performed during this run (not the agent's lifetime total).
    pub ticks: u64,

    /// `Solver::correct` calls issued during this run.
    pub corrections: u64,

    /// The agent's full history at the end of the run.
    pub history: History<S, A>,
}

impl<S, A> RunReport<S, A> {
    pub fn elapsed_ms(&self) -> i64 {
        (self.finished_at - self.started_at).num_milliseconds()
    }
}
