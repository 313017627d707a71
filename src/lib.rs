//! HTTP service support for HiP web APIs: bearer-token principals, claim-based
//! user id / role resolution, and scheme correction behind a reverse proxy.

pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod middleware;
pub mod services;
pub mod state;
