//! Render step: apply declarative state to class lists.
//!
//! DESIGN
//! ======
//! Computation lives in `nav` and `theme`; this module only writes classes
//! through `ClassTarget`, so the same code drives the live DOM and the
//! in-memory `ClassSet` used in tests.

pub mod classes;
pub mod nav;
pub mod theme;

pub use classes::{ClassSet, ClassTarget};
