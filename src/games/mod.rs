//! Game implementations.

pub mod splendor;
