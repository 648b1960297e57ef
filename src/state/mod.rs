//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`session`, `selection`, `toast`) so individual
//! components can depend on small focused models. Everything here is plain
//! data, natively testable without a browser.

pub mod selection;
pub mod session;
pub mod toast;
