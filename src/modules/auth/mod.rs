//! Login, logout and the caller's identity.

pub mod controller;
pub mod router;
pub mod service;
