//! Reusable UI components.

pub mod listings_grid;
pub mod navbar;
pub mod negotiate_dialog;
pub mod payment_dialog;
pub mod toast_host;
