use anyhow::{Context, Result};
use async_trait::async_trait;
use tokio::process::Command;
use tracing::info;

/// Machine power capability, injected so tests never shut anything down.
#[async_trait]
pub trait PowerControl: Send + Sync {
    /// Request a system shutdown. Fire-and-forget: callers don't learn
    /// whether the shutdown actually happened.
    async fn shutdown(&self) -> Result<()>;
}

/// Issues the platform `shutdown` command.
pub struct SystemPower;

#[async_trait]
impl PowerControl for SystemPower {
    async fn shutdown(&self) -> Result<()> {
        info!("Issuing system shutdown");

        Command::new("shutdown")
            .status()
            .await
            .context("Failed to launch shutdown command")?;

        Ok(())
    }
}
