//! Reference rulesets played on the non-negative integers

pub mod all_but;
pub mod subtraction;
