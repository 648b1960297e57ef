//! Top-level route pages.

pub mod login;
pub mod marketplace;
pub mod signup;
