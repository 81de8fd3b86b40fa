//! Shared library surface for the waypoint server and its tests.

pub mod api;
pub mod config;
pub mod request;
pub mod state;
