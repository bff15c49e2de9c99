// HTTP handlers for the board API

pub mod board;
pub mod health;
