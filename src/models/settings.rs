use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub course_url: String,
    pub output_dir: PathBuf,
    /// Path to the yt-dlp/youtube-dl executable.
    pub downloader_path: PathBuf,
    /// Cookies file exported from a logged-in session.
    pub cookies_path: PathBuf,
}
