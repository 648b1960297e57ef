//! Browser utility helpers.

pub mod session_store;
