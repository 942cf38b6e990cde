//! Single-node proof-of-work ledger
//!
//! The `blockchain` module holds the ledger itself; `api` exposes it over
//! HTTP. The `pow-ledger` binary wires both together with configuration and
//! logging.

pub mod api;
pub mod blockchain;
pub mod config;
pub mod logging;
