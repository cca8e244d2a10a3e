//! pr-body-update
//!
//! Single-run automation that updates a pull request's description:
//! resolve the target PR (explicit number or commit lookup), resolve the
//! new content (literal, file, or regex extraction), merge it into the
//! existing body (replace matched span, append, or set), and persist.

pub mod config;
pub mod content;
pub mod context;
pub mod error;
pub mod merge;
pub mod pattern;
pub mod resolve;
pub mod store;
pub mod subscription;
pub mod update;
