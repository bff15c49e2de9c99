// Infrastructure layer module
// Contains the in-memory board store and its subscriber fan-out
// Follows Hexagonal Architecture

pub mod board_store;

pub use board_store::{BoardStore, BoardUpdate};
