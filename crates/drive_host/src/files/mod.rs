//! Drive listing types, remote API contracts and the in-memory drive.

pub mod memory;
pub mod service;
pub mod types;
