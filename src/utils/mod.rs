//! Utility modules shared by the generators.

pub mod date;
pub mod files;
pub mod xml;
