//! Networking for theme preference saves.
//!
//! SYSTEM CONTEXT
//! ==============
//! `types` defines the wire schema and `preference` sends it through an
//! injected transport.

pub mod preference;
pub mod types;
