//! API client modules for the HR portal.
//!
//! The portal exposes its reporting data over multipart form POST endpoints;
//! this module wraps the one endpoint attrex needs: the per-day attendance
//! feed for a date range.
//!
//! ## Features
//!
//! - **Attendance Feed**: Fetches per-employee per-day records for a range
//! - **Token Auth**: Static bearer token from the configuration file
//! - **Plain Failure Semantics**: No retry, backoff, or timeout; a failed
//!   request surfaces as a single readable error with the server's message
//!   extracted when the body allows it

pub mod portal;

pub use portal::{Portal, PortalConfig};
