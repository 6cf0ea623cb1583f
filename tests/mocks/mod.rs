//! Shared helpers for integration tests

pub mod odos_upstream;
pub mod test_server;

#[allow(unused_imports)]
pub use odos_upstream::MockOdosUpstream;
#[allow(unused_imports)]
pub use test_server::TestServer;
