//! Core library for the shiftmatch part-time job marketplace.
//!
//! The marketplace connects business accounts publishing part-time postings
//! with worker accounts looking for shifts. This crate owns the domain model,
//! the recommendation engine that ranks open postings for a worker, posting
//! intake from CSV exports, and the service/router seams the HTTP binary in
//! `services/api` composes at startup.

pub mod config;
pub mod error;
pub mod marketplace;
pub mod telemetry;
