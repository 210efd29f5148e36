//! Core type definitions used across the Haven workspace.

pub mod pagination;

pub use pagination::{PageRequest, PageResponse};
