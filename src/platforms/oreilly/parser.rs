use anyhow::anyhow;
use scraper::{Html, Selector};

use crate::models::course::{CourseIndex, Topic, Video};

/// Extracts the topic/video tree from the course's table-of-contents page.
/// Pure over the HTML string so it is testable without network access.
///
/// Topics are the top-level `li.toc-level-1` entries; a topic's title is the
/// text of its first link, and its videos are the links inside its `ol`, in
/// document order.
pub fn parse_course_index(html: &str) -> anyhow::Result<CourseIndex> {
    let doc = Html::parse_document(html);
    let topic_sel = Selector::parse("li.toc-level-1").unwrap();
    let title_sel = Selector::parse("a").unwrap();
    let video_sel = Selector::parse("ol a").unwrap();

    let mut topics = Vec::new();
    for entry in doc.select(&topic_sel) {
        let title = match entry.select(&title_sel).next() {
            Some(link) => link.text().collect::<String>().trim().to_string(),
            None => {
                tracing::warn!("topic entry without a title link, skipping");
                continue;
            }
        };

        let videos: Vec<Video> = entry
            .select(&video_sel)
            .filter_map(|link| {
                let href = link.value().attr("href")?;
                Some(Video {
                    title: link.text().collect::<String>().trim().to_string(),
                    source_url: href.to_string(),
                })
            })
            .collect();

        if videos.is_empty() {
            tracing::warn!("topic '{}' has no videos, skipping", title);
            continue;
        }

        topics.push(Topic { title, videos });
    }

    if topics.is_empty() {
        return Err(anyhow!("no topics found in course page"));
    }

    Ok(CourseIndex { topics })
}
