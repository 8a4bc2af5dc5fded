//! Daycast Application Layer
//!
//! Ports (async traits at the seams to infrastructure) and use-cases.
pub mod ports;
pub mod services;
pub mod use_cases;
