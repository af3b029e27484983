//! Internal test modules - whitebox tests with crate access
//!
//! Harness-based acceptance tests drive `TuiApp<TestBackend>` through the
//! key routing exactly as a user would.

mod acceptance_crud;
mod crash_regression;
