//! Adapters that plug external payment services into the order workflow.

mod khqr;

pub use khqr::KhqrQrGenerator;
