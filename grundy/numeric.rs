//! Numeric types

pub mod nimber;
pub mod v2f;
