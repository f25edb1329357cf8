//! Storage layer
//!
//! Connection handling for the external SurrealDB store. The taxonomy and
//! physician tables live in a database the surrounding platform owns; this
//! service reads and writes them through the repositories in `models`.

pub mod surrealdb;
