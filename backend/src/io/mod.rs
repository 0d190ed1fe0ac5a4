//! # IO Module
//!
//! The adapter layer between the PWA and the domain: HTTP endpoints,
//! JSON (de)serialization, and error translation.

pub mod rest;

pub use rest::api_router;
