use std::path::Path;

use async_trait::async_trait;

use crate::models::course::CourseIndex;

/// Result of a single fetch invocation. `raw_output` carries the
/// executable's combined stdout/stderr so the orchestrator can recognize a
/// format-unavailable failure without knowing the argument syntax.
#[derive(Debug, Clone)]
pub struct FetchAttempt {
    pub success: bool,
    pub raw_output: String,
}

/// Retrieves and parses the course table of contents. Implementations own
/// whatever session handling the index page needs.
#[async_trait]
pub trait CourseIndexProvider: Send + Sync {
    async fn fetch_index(&self, url: &str) -> anyhow::Result<CourseIndex>;
}

/// Capability seam over the external download executable. Credentials and
/// executable path are implementation state, so the orchestration core never
/// touches a specific tool's flags.
#[async_trait]
pub trait MediaFetcher: Send + Sync {
    /// Try to materialize the video at `dest` using the given format
    /// selector. An `Err` means the invocation itself could not run; a
    /// failed download comes back as `FetchAttempt { success: false, .. }`.
    async fn attempt(
        &self,
        locator: &str,
        dest: &Path,
        format_selector: &str,
    ) -> anyhow::Result<FetchAttempt>;

    /// List the formats the source actually offers, for the operator.
    /// Output is surfaced, never parsed.
    async fn probe_formats(&self, locator: &str) -> anyhow::Result<()>;
}
