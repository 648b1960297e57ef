//! Network layer for the managed backend's REST surface.
//!
//! DESIGN
//! ======
//! `identity` speaks the identity service's auth endpoints, `listings`
//! fetches marketplace rows, and `session` owns the local session mirror
//! and its single-writer update pump. All browser HTTP lives behind the
//! `hydrate` feature; server-side renders see inert stubs.

pub mod backend;
pub mod identity;
pub mod listings;
pub mod session;
pub mod types;
