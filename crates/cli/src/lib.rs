//! Fontpack CLI library.

pub mod archive;
pub mod cli;
