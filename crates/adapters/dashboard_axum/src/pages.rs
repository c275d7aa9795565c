//! Dashboard pages.

pub mod dashboard;
