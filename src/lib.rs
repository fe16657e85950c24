use std::sync::Arc;

pub mod core;
pub mod models;
pub mod platforms;
pub mod storage;

use crate::core::orchestrator::{DownloadSummary, Orchestrator};
use crate::core::traits::CourseIndexProvider;
use crate::core::ytdlp::YtdlpFetcher;
use crate::models::settings::AppConfig;
use crate::platforms::oreilly::OreillyIndexProvider;

/// Fetches the course index and runs the download orchestration over it.
/// Index retrieval failure is the only fatal error; everything downstream is
/// contained per video and reflected in the summary.
pub async fn run(config: AppConfig) -> anyhow::Result<DownloadSummary> {
    let provider = OreillyIndexProvider::new();
    let index = provider.fetch_index(&config.course_url).await?;

    let fetcher = Arc::new(YtdlpFetcher::new(
        &config.downloader_path,
        &config.cookies_path,
    ));
    let orchestrator = Orchestrator::new(fetcher);

    Ok(orchestrator.download_course(&index, &config.output_dir).await)
}
