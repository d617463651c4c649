// Data model for the gateway

pub mod envelope;

pub use envelope::{AuthRequest, AuthResponse, BridgeBody};
