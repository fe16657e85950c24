use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context;

use super::filename::sanitize;
use super::format;
use super::traits::MediaFetcher;
use crate::models::course::{CourseIndex, Topic, Video};

/// Messages yt-dlp (and youtube-dl before it) prints when no offered format
/// matches the `-f` selector. Only these trigger the discovery probe.
const FORMAT_UNAVAILABLE_MARKERS: &[&str] = &[
    "requested format is not available",
    "requested format not available",
];

/// Terminal state of one video in a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VideoOutcome {
    /// Destination file already present; presence alone is trusted.
    Skipped,
    Succeeded,
    /// Preferred formats unavailable; a format-discovery probe was issued
    /// for the operator. No automatic re-attempt.
    FormatFallbackIssued,
    Failed,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DownloadSummary {
    pub skipped: u32,
    pub succeeded: u32,
    pub fallback_issued: u32,
    pub failed: u32,
}

impl DownloadSummary {
    fn record(&mut self, outcome: VideoOutcome) {
        match outcome {
            VideoOutcome::Skipped => self.skipped += 1,
            VideoOutcome::Succeeded => self.succeeded += 1,
            VideoOutcome::FormatFallbackIssued => self.fallback_issued += 1,
            VideoOutcome::Failed => self.failed += 1,
        }
    }

    pub fn total(&self) -> u32 {
        self.skipped + self.succeeded + self.fallback_issued + self.failed
    }
}

/// Walks the course index strictly in order, one blocking fetch at a time.
/// Destination paths are a pure function of topic title, 1-based position
/// and video title, so an interrupted run resumes by re-invocation: whatever
/// is already on disk is skipped.
pub struct Orchestrator {
    fetcher: Arc<dyn MediaFetcher>,
    format_selector: String,
}

impl Orchestrator {
    pub fn new(fetcher: Arc<dyn MediaFetcher>) -> Self {
        Self {
            fetcher,
            format_selector: format::selector_string(&format::preferred_formats()),
        }
    }

    /// Never fails as a whole: per-topic and per-video errors are logged,
    /// counted and the walk continues with the rest of the catalog.
    pub async fn download_course(&self, index: &CourseIndex, output_root: &Path) -> DownloadSummary {
        let mut summary = DownloadSummary::default();

        for topic in &index.topics {
            match self.download_topic(topic, output_root).await {
                Ok(outcomes) => {
                    for outcome in outcomes {
                        summary.record(outcome);
                    }
                }
                Err(e) => {
                    tracing::error!("skipping topic '{}': {:#}", topic.title, e);
                    for _ in &topic.videos {
                        summary.record(VideoOutcome::Failed);
                    }
                }
            }
        }

        tracing::info!(
            "course complete: {} downloaded, {} skipped, {} failed, {} awaiting format choice",
            summary.succeeded,
            summary.skipped,
            summary.failed,
            summary.fallback_issued
        );

        summary
    }

    /// Folder creation failure is fatal for this topic only.
    pub async fn download_topic(
        &self,
        topic: &Topic,
        output_root: &Path,
    ) -> anyhow::Result<Vec<VideoOutcome>> {
        let folder = PathBuf::from(sanitize(
            &format!("{}/{}", output_root.display(), topic.title),
            true,
        ));
        tokio::fs::create_dir_all(&folder)
            .await
            .with_context(|| format!("creating folder {}", folder.display()))?;

        let mut outcomes = Vec::with_capacity(topic.videos.len());
        for (idx, video) in topic.videos.iter().enumerate() {
            let position = idx as u32 + 1;
            outcomes.push(self.download_video(video, position, &folder).await);
        }
        Ok(outcomes)
    }

    pub async fn download_video(
        &self,
        video: &Video,
        position: u32,
        folder: &Path,
    ) -> VideoOutcome {
        let file_name = sanitize(&format!("{:03}-{}", position, video.title), false);
        let dest = folder.join(format!("{}.mp4", file_name));

        if tokio::fs::metadata(&dest).await.is_ok() {
            tracing::info!("skipping existing file: {}", dest.display());
            return VideoOutcome::Skipped;
        }

        tracing::info!("downloading {}", file_name);

        let attempt = match self
            .fetcher
            .attempt(&video.source_url, &dest, &self.format_selector)
            .await
        {
            Ok(attempt) => attempt,
            Err(e) => {
                tracing::error!("fetch invocation for '{}' failed: {:#}", video.title, e);
                return VideoOutcome::Failed;
            }
        };

        if attempt.success {
            return VideoOutcome::Succeeded;
        }

        if format_unavailable(&attempt.raw_output) {
            tracing::warn!(
                "preferred formats unavailable for '{}', listing what the source offers",
                video.title
            );
            if let Err(e) = self.fetcher.probe_formats(&video.source_url).await {
                tracing::error!("format probe for '{}' failed: {:#}", video.title, e);
            }
            return VideoOutcome::FormatFallbackIssued;
        }

        tracing::error!(
            "failed to download '{}': {}",
            video.title,
            last_line(&attempt.raw_output)
        );
        VideoOutcome::Failed
    }
}

fn format_unavailable(raw_output: &str) -> bool {
    let lower = raw_output.to_lowercase();
    FORMAT_UNAVAILABLE_MARKERS
        .iter()
        .any(|marker| lower.contains(marker))
}

fn last_line(output: &str) -> &str {
    output
        .lines()
        .rev()
        .find(|line| !line.trim().is_empty())
        .unwrap_or("(no output)")
}
