//! Web relay in front of a remote versioned key-value server.
//!
//! The library holds the pieces that do not depend on the web layer: the
//! branch/version model, per-operation query construction, and the HTTP
//! client that talks to the remote server.

pub mod model;
pub mod query;
pub mod remote;
