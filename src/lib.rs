//! LRT: League Registration Toolkit
//!
//! Role classification and registration wizard flows for sports leagues,
//! kept as plain text files.

pub mod cli;
pub mod core;
pub mod flows;
