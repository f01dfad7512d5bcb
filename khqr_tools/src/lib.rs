//! Tools for building Bakong KHQR payment payloads and rendering them as scannable QR codes.
//!
//! KHQR is the Cambodian interbank QR payment standard, an EMVCo merchant-presented QR profile. A payload is a
//! flat string of tag/length/value fields terminated by a CRC-16 checksum. This crate builds *dynamic* (single
//! use, amount-bound) payloads for a configured merchant, renders them as base64 PNG images for inline display,
//! and computes the MD5 fingerprint that payment notifications are correlated against.

mod api;
mod config;
mod error;
mod payload;

pub use api::KhqrApi;
pub use config::KhqrConfig;
pub use error::KhqrError;
pub use payload::{build_payload, crc16_ccitt, PaymentRequest};
