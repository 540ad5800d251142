//! Networking modules for the authentication API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles the HTTP transport, `auth_client` orchestrates the
//! login/refresh/logout flows, `single_flight` coalesces duplicate
//! in-flight requests, and `types` defines the shared wire schema.

pub mod api;
pub mod auth_client;
pub mod single_flight;
pub mod types;
