//! UI module - contains UI rendering components
//!
//! Components here are stateless: they draw from their arguments and report
//! user activation back to the caller, which decides how state changes.

pub mod components;
