//! A two-player chess variant on a rectangular board of 6 to 12 cells a side,
//! with a King, a Tower and a Horse per colour. Taking the opposing king wins.

pub mod board;
pub mod error;
pub mod game;
pub mod ui;
