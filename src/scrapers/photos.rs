use anyhow::{Context, Result};
use futures_util::StreamExt;
use reqwest::{redirect, Client};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::{debug, warn};

const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Downloads listing photos into per-listing directories with zero-padded
/// sequential filenames. Files already on disk are never re-fetched, which
/// keeps re-runs cheap and idempotent.
pub struct PhotoFetcher {
    client: Client,
    image_root: PathBuf,
}

impl PhotoFetcher {
    pub fn new(image_root: impl Into<PathBuf>, max_redirects: usize) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent(USER_AGENT)
            .redirect(redirect::Policy::limited(max_redirects))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            image_root: image_root.into(),
        })
    }

    /// Ensure each photo URL's content is present locally, in list order,
    /// numbered from 01. Returns the relative paths of the photos that are
    /// on disk afterwards; a failed download drops only that photo.
    pub async fn fetch_all(&self, external_id: &str, photos: &[String]) -> Result<Vec<String>> {
        let dir = self.image_root.join(external_id);
        fs::create_dir_all(&dir)
            .await
            .with_context(|| format!("Failed to create {}", dir.display()))?;

        let mut local = Vec::new();
        for (idx, url) in photos.iter().enumerate() {
            let filename = format!("{:02}.jpg", idx + 1);
            let path = dir.join(&filename);
            let relative = format!("{}/{}/{}", self.image_root.display(), external_id, filename);

            if fs::try_exists(&path).await.unwrap_or(false) {
                debug!(photo = idx + 1, "Already downloaded, skipping");
                local.push(relative);
                continue;
            }

            match self.download(url, &path).await {
                Ok(()) => local.push(relative),
                Err(e) => {
                    warn!(photo = idx + 1, url = %url, error = %e, "Failed to download photo");
                    // don't leave a partial file behind to poison the next run
                    let _ = fs::remove_file(&path).await;
                }
            }
        }
        Ok(local)
    }

    async fn download(&self, url: &str, dest: &Path) -> Result<()> {
        let res = self.client.get(url).send().await?;
        if !res.status().is_success() {
            anyhow::bail!("HTTP {}", res.status());
        }

        let mut file = fs::File::create(dest).await?;
        let mut stream = res.bytes_stream();
        while let Some(chunk) = stream.next().await {
            file.write_all(&chunk?).await?;
        }
        file.flush().await?;
        Ok(())
    }
}
