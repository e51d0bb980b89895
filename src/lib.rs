//! Static route table and navigation view for the transfer web app.
//!
//! The crate surface mirrors the two things the app needs from this
//! module: the [`Navigation`] view and the route table ([`Route`]).

pub mod config;
pub mod navigation;
pub mod routes;

pub use navigation::{NavLink, Navigation};
pub use routes::{Route, RouteEntry};
