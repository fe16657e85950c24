use std::path::{Path, PathBuf};
use std::process::Stdio;

use anyhow::anyhow;
use async_trait::async_trait;

use super::traits::{FetchAttempt, MediaFetcher};

/// Adapter mapping the `MediaFetcher` seam onto a yt-dlp/youtube-dl style
/// executable. `--ignore-config` keeps a user's global config from changing
/// the output location or format choice under us.
pub struct YtdlpFetcher {
    program: PathBuf,
    cookies: PathBuf,
}

impl YtdlpFetcher {
    pub fn new(program: impl Into<PathBuf>, cookies: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            cookies: cookies.into(),
        }
    }
}

#[async_trait]
impl MediaFetcher for YtdlpFetcher {
    async fn attempt(
        &self,
        locator: &str,
        dest: &Path,
        format_selector: &str,
    ) -> anyhow::Result<FetchAttempt> {
        let output = tokio::process::Command::new(&self.program)
            .arg("--cookie")
            .arg(&self.cookies)
            .arg("--output")
            .arg(dest)
            .arg(locator)
            .arg("--ignore-config")
            .arg("-f")
            .arg(format_selector)
            .arg("--verbose")
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|e| anyhow!("failed to run {}: {}", self.program.display(), e))?;

        let mut raw_output = String::from_utf8_lossy(&output.stdout).into_owned();
        raw_output.push_str(&String::from_utf8_lossy(&output.stderr));

        Ok(FetchAttempt {
            success: output.status.success(),
            raw_output,
        })
    }

    async fn probe_formats(&self, locator: &str) -> anyhow::Result<()> {
        // Inherited stdio: the format table goes straight to the operator.
        let status = tokio::process::Command::new(&self.program)
            .arg("--cookie")
            .arg(&self.cookies)
            .arg(locator)
            .arg("--ignore-config")
            .arg("-F")
            .status()
            .await
            .map_err(|e| anyhow!("failed to run {}: {}", self.program.display(), e))?;

        if !status.success() {
            return Err(anyhow!("format probe exited with {}", status));
        }
        Ok(())
    }
}
