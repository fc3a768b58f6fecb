//! Integration tests for skyvault-api
//!
//! Uses wiremock to simulate the storage service and verifies end-to-end
//! behavior of the endpoint calls, the provider, and the use cases wired
//! over them.

mod common;

mod test_auth;
mod test_upload;
