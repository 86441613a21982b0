pub mod cards;
pub mod cli;
pub mod decision;
pub mod display;
pub mod drill;
pub mod error;
pub mod hand;
pub mod ranges;
