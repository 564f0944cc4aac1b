//! Domains module containing the server's business logic.
//!
//! The server exposes a single capability: tools that look up entity and enum
//! definitions from the catalog backend.

pub mod tools;
