//! userdeck
//!
//! TUI application for browsing, searching, creating, editing and deleting
//! user records held in memory.
//!
//! Pure Core / Impure Shell: [`model`], [`store`] and [`state`] hold every
//! rule and transition and never touch the terminal. [`view`] owns the
//! terminal and maps key events onto state operations.

pub mod config;
pub mod logging;
pub mod model;
pub mod state;
pub mod store;
pub mod view;

#[cfg(test)]
mod test_harness;

#[cfg(test)]
mod tests;
