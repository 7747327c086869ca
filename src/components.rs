//! Reusable HTML components for page generation
//!
//! Maud components that wrap rendered markdown fragments into complete
//! documents.

pub mod layout;
