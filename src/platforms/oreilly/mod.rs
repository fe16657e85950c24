pub mod parser;

use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;

use crate::core::traits::CourseIndexProvider;
use crate::models::course::CourseIndex;

const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/145.0.0.0 Safari/537.36 Edg/145.0.0.0";

/// Fetches and parses the course table-of-contents page. The TOC itself is
/// viewable without authentication; the session cookies only matter to the
/// download executable later on.
pub struct OreillyIndexProvider {
    client: reqwest::Client,
}

impl OreillyIndexProvider {
    pub fn new() -> Self {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .connect_timeout(Duration::from_secs(30))
            .timeout(Duration::from_secs(120))
            .build()
            .unwrap_or_default();

        Self { client }
    }
}

impl Default for OreillyIndexProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CourseIndexProvider for OreillyIndexProvider {
    async fn fetch_index(&self, url: &str) -> anyhow::Result<CourseIndex> {
        let resp = self
            .client
            .get(url)
            .send()
            .await
            .with_context(|| format!("requesting course page {}", url))?
            .error_for_status()
            .context("course page returned an error status")?;

        let body = resp.text().await.context("reading course page body")?;
        let index = parser::parse_course_index(&body)?;

        tracing::info!(
            "course index: {} topics, {} videos",
            index.topics.len(),
            index.video_count()
        );

        Ok(index)
    }
}
