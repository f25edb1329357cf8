//! DTO module
//!
//! Request and response shapes for the REST surface.

pub mod assignment_dto;
pub mod physician_dto;
pub mod specialty_dto;

pub use assignment_dto::*;
pub use physician_dto::*;
pub use specialty_dto::*;
