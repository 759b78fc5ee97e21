//! Browser helpers kept out of component logic.

pub mod csrf;
