use fetchlog::ReqwestTransport;
use std::path::PathBuf;

/// Transport that talks to local mock servers directly, ignoring any proxy variables
/// set in the environment
#[allow(dead_code)]
pub fn local_transport() -> ReqwestTransport {
    let client = reqwest::blocking::Client::builder()
        .no_proxy()
        .build()
        .expect("Failed to build reqwest client");
    ReqwestTransport::from_client(client)
}

#[allow(dead_code)]
pub fn fetchlog_binary() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_fetchlog"))
}

/// Clears `RUST_LOG` until dropped so subscribers are built from the test's own level.
/// Tests holding one must be `#[serial]`.
#[allow(dead_code)]
pub struct RustLogGuard(Option<String>);

#[allow(dead_code)]
impl RustLogGuard {
    pub fn clear() -> Self {
        let old = std::env::var("RUST_LOG").ok();
        std::env::remove_var("RUST_LOG");
        Self(old)
    }
}

impl Drop for RustLogGuard {
    fn drop(&mut self) {
        if let Some(value) = &self.0 {
            std::env::set_var("RUST_LOG", value);
        }
    }
}
