//! Environment/runtime helpers
//!
//! Sanity checks to ensure expected directories exist at startup.

/// Ensure the upload directory exists; it receives catalog images.
pub async fn ensure_env(uploads_dir: &str) -> anyhow::Result<()> {
    tokio::fs::create_dir_all(uploads_dir)
        .await
        .map_err(|e| anyhow::anyhow!("cannot create {uploads_dir}: {e}"))?;
    Ok(())
}
