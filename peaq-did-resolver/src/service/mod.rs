//! Services exposed by the resolver.

pub mod did_service;
pub mod error;
