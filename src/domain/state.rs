use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle state of an issuance.
///
/// Transitions are monotonic: `Created → Open → Live`, with the single
/// emergency exit `Open → Failed`. Once `Live` or `Failed` is reached the
/// engine never returns to an earlier state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum State {
    Created,
    Open,
    Live,
    Failed,
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            State::Created => "CREATED",
            State::Open => "OPEN",
            State::Live => "LIVE",
            State::Failed => "FAILED",
        };
        f.write_str(name)
    }
}
