// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Credential store adapter
//!
//! Narrow contract over an OS-protected secret store, used when entries run
//! in password authentication mode. Secrets never land in the crontab file
//! or the task registration output.

mod dpapi;

pub use dpapi::DpapiCredentialAdapter;

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::FakeCredentialAdapter;

use async_trait::async_trait;
use thiserror::Error;

/// Errors from credential operations
#[derive(Debug, Error)]
pub enum CredentialError {
    #[error("credential backend failed: {0}")]
    Backend(String),
    #[error("home directory could not be determined")]
    NoHome,
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Adapter for the OS credential store
#[async_trait]
pub trait CredentialAdapter: Clone + Send + Sync + 'static {
    /// Fetch the stored secret for an account, if any
    async fn get(&self, account: &str) -> Result<Option<String>, CredentialError>;

    /// Store (or replace) the secret for an account
    async fn put(&self, account: &str, secret: &str) -> Result<(), CredentialError>;

    /// Remove a stored secret; removing an absent one is not an error
    async fn delete(&self, account: &str) -> Result<(), CredentialError>;
}
