// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake credential adapter for testing

use super::{CredentialAdapter, CredentialError};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// In-memory credential adapter for testing
#[derive(Clone, Default)]
pub struct FakeCredentialAdapter {
    secrets: Arc<Mutex<HashMap<String, String>>>,
}

impl FakeCredentialAdapter {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CredentialAdapter for FakeCredentialAdapter {
    async fn get(&self, account: &str) -> Result<Option<String>, CredentialError> {
        Ok(self
            .secrets
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .get(account)
            .cloned())
    }

    async fn put(&self, account: &str, secret: &str) -> Result<(), CredentialError> {
        self.secrets
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .insert(account.to_string(), secret.to_string());
        Ok(())
    }

    async fn delete(&self, account: &str) -> Result<(), CredentialError> {
        self.secrets
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .remove(account);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn put_get_delete_round_trip() {
        let fake = FakeCredentialAdapter::new();
        assert!(fake.get("alice").await.unwrap().is_none());

        fake.put("alice", "s3cret").await.unwrap();
        assert_eq!(fake.get("alice").await.unwrap().as_deref(), Some("s3cret"));

        fake.delete("alice").await.unwrap();
        assert!(fake.get("alice").await.unwrap().is_none());
    }
}
