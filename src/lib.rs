//! Console Othello: the rules engine for the 8x8 flipping game plus the
//! turn controller that drives alternating play over line-based input.
//!
//! [`board::Board`] owns the grid and implements move legality, the flip
//! algorithm and disc counting. [`game::Game`] alternates turns on top of
//! it, skipping players with no legal move and ending the game after two
//! consecutive skips.

pub mod board;
pub mod game;
pub mod types;

/// The number of cells on one edge of the board.
pub const BOARD_SIZE: usize = 8;
