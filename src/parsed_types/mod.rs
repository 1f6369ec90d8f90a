//! Plain data produced by the board file parsers, before any validation.

mod board_description;
mod cell;

pub use board_description::BoardDescription;
pub use cell::Cell;
