//! evobench — terminal client for an evo vote-shuffle benchmark server.
//!
//! ## Design
//! - One persistent WebSocket session per process (`session::SessionClient`);
//!   a closed session stays closed until the process is restarted
//! - Queries are built fresh from the current `form::SubmitForm` values on
//!   every submit and never kept around after the send
//! - Inbound frames carry opaque text (the server's timing report) and are
//!   rendered by full replacement of the previous result

pub mod cli;
pub mod config;
pub mod error;
pub mod form;
pub mod session;
pub mod votes;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Wire types
// ---------------------------------------------------------------------------

/// Shuffle algorithm the server should benchmark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    Neff,
    Sato,
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Algorithm::Neff => write!(f, "neff"),
            Algorithm::Sato => write!(f, "sato"),
        }
    }
}

/// One benchmark query, serialized to a single JSON text frame.
///
/// Field order matters on the wire: `votes`, `algorithm`, `parallelize`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Query {
    pub votes: Vec<String>,
    pub algorithm: Algorithm,
    pub parallelize: bool,
}
