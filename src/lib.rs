//! Devbench - developer utility workbench
//!
//! CLI counterparts of the browser developer tools: color palettes,
//! gradient CSS, Base64 and JSON codecs, a naive code formatter and a
//! QR code client. This library exposes modules for integration testing.

pub mod config;
pub mod error;
pub mod export;
pub mod services;
pub mod tools;
