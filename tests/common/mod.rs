#![allow(dead_code)]

use alphastream::{AlphaStreamClient, ClientSettings, Credentials};
use httpmock::MockServer;
use std::time::Duration;

pub const TEST_ALPHA_ID: &str = "5443d94e213604f4fefbab185";
pub const TEST_AUTHOR_ID: &str = "1f48359f6c6cbad65b091232eaae73ce";

pub fn settings_for(server: &MockServer) -> ClientSettings {
    ClientSettings::new(server.base_url())
        .with_credentials(Credentials::new("12345", "test-token"))
        .with_retries(0, Duration::ZERO)
        .with_timeout(Duration::from_secs(5))
}

/// Client pointed at the mock server, authenticated, without retries.
pub fn client_for(server: &MockServer) -> AlphaStreamClient {
    AlphaStreamClient::new(&settings_for(server)).unwrap()
}
