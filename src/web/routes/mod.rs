pub mod activities;
pub mod board;
