//! # Debugging and Logging
//!
//! - [`logger`]: `tracing` subscriber setup (stderr, optional rotated file)
//! - [`trace_context`]: trace ids correlating the log lines of one user action

pub mod logger;
pub mod trace_context;
