// Upstream auth service boundary

mod client;

pub use client::AuthClient;
