// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! DPAPI-backed credential adapter
//!
//! Secrets are protected with the user-scoped Windows Data Protection API
//! through PowerShell's SecureString round-trip and stored one file per
//! account under `~/.wcron/credentials`. Only the same user on the same
//! machine can decrypt them. The secret crosses into PowerShell through an
//! environment variable, never through the command line.

use super::{CredentialAdapter, CredentialError};
use async_trait::async_trait;
use std::path::PathBuf;
use tokio::process::Command;

const SECRET_ENV: &str = "WCRON_SECRET";

/// Credential adapter using PowerShell DPAPI primitives
#[derive(Debug, Clone)]
pub struct DpapiCredentialAdapter {
    dir: PathBuf,
}

impl DpapiCredentialAdapter {
    /// Store under the default `~/.wcron/credentials` directory
    pub fn new() -> Result<Self, CredentialError> {
        let dir = wcron_core::paths::credentials_dir().ok_or(CredentialError::NoHome)?;
        Ok(Self { dir })
    }

    /// Store under an explicit directory
    pub fn with_dir(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn file_for(&self, account: &str) -> PathBuf {
        // account names may contain domain separators; flatten them
        let safe: String = account
            .chars()
            .map(|c| if c.is_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
            .collect();
        self.dir.join(format!("{}.cred", safe))
    }

    async fn powershell(
        &self,
        script: &str,
        secret: Option<&str>,
    ) -> Result<std::process::Output, CredentialError> {
        let mut cmd = Command::new("powershell");
        cmd.args(["-NoProfile", "-NonInteractive", "-Command", script]);
        if let Some(secret) = secret {
            cmd.env(SECRET_ENV, secret);
        }
        Ok(cmd.output().await?)
    }
}

#[async_trait]
impl CredentialAdapter for DpapiCredentialAdapter {
    async fn get(&self, account: &str) -> Result<Option<String>, CredentialError> {
        let file = self.file_for(account);
        if !file.exists() {
            return Ok(None);
        }

        let script = format!(
            "$sec = Get-Content -Path '{}' | ConvertTo-SecureString; \
             $bstr = [System.Runtime.InteropServices.Marshal]::SecureStringToBSTR($sec); \
             [System.Runtime.InteropServices.Marshal]::PtrToStringAuto($bstr)",
            file.display()
        );
        let output = self.powershell(&script, None).await?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(CredentialError::Backend(stderr.trim().to_string()));
        }

        let secret = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if secret.is_empty() {
            return Ok(None);
        }
        Ok(Some(secret))
    }

    async fn put(&self, account: &str, secret: &str) -> Result<(), CredentialError> {
        std::fs::create_dir_all(&self.dir)?;
        let file = self.file_for(account);

        let script = format!(
            "ConvertTo-SecureString -String $env:{} -AsPlainText -Force \
             | ConvertFrom-SecureString | Set-Content -Path '{}'",
            SECRET_ENV,
            file.display()
        );
        let output = self.powershell(&script, Some(secret)).await?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(CredentialError::Backend(stderr.trim().to_string()));
        }
        tracing::info!(account, "credential stored");
        Ok(())
    }

    async fn delete(&self, account: &str) -> Result<(), CredentialError> {
        let file = self.file_for(account);
        match std::fs::remove_file(&file) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
#[path = "dpapi_tests.rs"]
mod tests;
