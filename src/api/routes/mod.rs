//! Routes module
//!
//! API route definitions.

pub mod assignment_routes;
pub mod physician_routes;
pub mod specialty_routes;
