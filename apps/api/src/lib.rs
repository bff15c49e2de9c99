//! Team Board API Library
//!
//! Drag-and-drop team assignment board: a fixed roster split into an
//! unassigned pool, attackers and defenders, with per-side win counters.
//! Provides the board domain logic, the in-memory store that fans out
//! updates, and the HTTP adapter a browser front-end renders from.

pub mod api;
pub mod config;
pub mod domain;
pub mod infrastructure;
