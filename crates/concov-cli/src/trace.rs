//! Recorded instrumentor traces
//!
//! One JSON object per line, in the order the instrumentor and runner
//! issued the calls:
//!
//! ```text
//! {"op":"class","name":"app/Parser"}
//! {"op":"branch","iid":10}
//! {"op":"visit","iid":10,"side":true}
//! {"op":"commit"}
//! ```
//!
//! Blank lines and lines starting with `#` are skipped.

use crate::error::{CliError, CliResult};
use concov::{BranchId, CoverageSession};
use serde::{Deserialize, Serialize};
use std::io::BufRead;

/// One recorded call into the coverage store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum TraceEvent {
    /// First encounter of a class
    Class {
        /// Class name
        name: String,
    },
    /// Branch declared during class registration
    Branch {
        /// Branch id
        iid: u32,
    },
    /// Branch side taken at runtime
    Visit {
        /// Branch id
        iid: u32,
        /// Side taken
        side: bool,
    },
    /// End of one execution
    Commit,
}

/// Parse every event of a trace
pub fn parse_trace(reader: impl BufRead) -> CliResult<Vec<TraceEvent>> {
    let mut events = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let event =
            serde_json::from_str(trimmed).map_err(|e| CliError::trace(idx + 1, e.to_string()))?;
        events.push(event);
    }
    Ok(events)
}

/// Counters from applying a trace
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReplayStats {
    /// Events applied
    pub events: usize,
    /// Executions committed
    pub executions: usize,
    /// Branches observed after the last commit, discarded at save
    pub uncommitted: usize,
}

/// Drive a session with recorded events
pub fn apply_events(session: &mut CoverageSession, events: &[TraceEvent]) -> ReplayStats {
    let mut stats = ReplayStats::default();
    for event in events {
        match event {
            TraceEvent::Class { name } => {
                session.store_mut().get_cid(name);
            }
            TraceEvent::Branch { iid } => {
                session.store_mut().add_branch_count(BranchId::new(*iid));
            }
            TraceEvent::Visit { iid, side } => {
                session.store_mut().visit_branch(BranchId::new(*iid), *side);
            }
            TraceEvent::Commit => {
                session.end_execution();
                stats.executions += 1;
            }
        }
        stats.events += 1;
    }
    stats.uncommitted = session.store().pending_len();
    stats
}
