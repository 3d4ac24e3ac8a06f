use std::collections::HashSet;
use std::io;
use std::io::ErrorKind;
use std::path::Path;

use serde::{Deserialize, Serialize};
use spdlog::{debug, info, warn};

use crate::content::content_file::ContentFile;
use crate::content::content_format::ContentFormat;
use crate::content::parsing_utils::{generate_header_from_name, parse_post_header, parse_title_html, parse_title_markdown};
use crate::content::{ContentRecord, PostId};
use crate::post_list::{PostLink, PostList};

/// Every indexed post, newest first, plus the total count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArchiveQuery {
    pub nodes: Vec<ContentRecord>,
    pub total_count: usize,
}

impl ArchiveQuery {
    pub fn from_records(mut nodes: Vec<ContentRecord>) -> ArchiveQuery {
        nodes.sort_by(|a, b| b.date.cmp(&a.date).then_with(|| a.slug.cmp(&b.slug)));
        let total_count = nodes.len();
        ArchiveQuery {
            nodes,
            total_count,
        }
    }

    pub fn from_json(json: &str) -> io::Result<ArchiveQuery> {
        serde_json::from_str(json)
            .map_err(|e| io::Error::new(ErrorKind::InvalidData, format!("Error parsing archive index: {}", e)))
    }

    pub fn to_json(&self) -> io::Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| io::Error::new(ErrorKind::InvalidData, format!("Error writing archive index: {}", e)))
    }
}

/// Slugs shared by more than one record, e.g. `posts/foo/` next to `posts/foo.md`.
pub fn duplicate_slugs(records: &[ContentRecord]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut duplicates = vec![];
    for record in records {
        if !seen.insert(record.slug.as_str()) && !duplicates.contains(&record.slug) {
            duplicates.push(record.slug.clone());
        }
    }
    duplicates
}

pub struct ContentIndex;

impl ContentIndex {
    pub fn build(posts_dir: &Path, index_base_name: &str) -> io::Result<ArchiveQuery> {
        let post_list = PostList {
            root_dir: posts_dir.to_path_buf(),
            post_file: index_base_name.to_string(),
        };

        let posts = post_list.retrieve_posts()
            .map_err(|e| io::Error::new(e.kind(), format!("Error listing posts in {}: {}", posts_dir.display(), e)))?;

        let mut records = Vec::with_capacity(posts.len());
        for post in posts {
            match Self::read_record(&post) {
                Ok(record) => {
                    debug!("Indexed {} -> {}", post.post_path.display(), record.slug);
                    records.push(record);
                }
                Err(e) => warn!("Skipping post {}: {}", post.post_path.display(), e),
            }
        }

        for slug in duplicate_slugs(&records) {
            warn!("More than one post is published at {}", slug);
        }

        info!("Indexed {} posts from {}", records.len(), posts_dir.display());
        Ok(ArchiveQuery::from_records(records))
    }

    pub fn read_record(post: &PostLink) -> io::Result<ContentRecord> {
        let content_file = ContentFile::from_file(post.post_name.clone(), post.post_path.clone())?;
        Self::parse_record(&content_file)
    }

    pub fn parse_record(content_file: &ContentFile) -> io::Result<ContentRecord> {
        let file_name = content_file.file_path.as_path();
        let lines = content_file.raw_content.lines();

        let (mut header, lines, maybe_line) = match parse_post_header(file_name, lines.clone()) {
            Ok(parsed) => parsed,
            Err(e) => {
                // No usable header, the post name may still carry the date
                let header = generate_header_from_name(file_name, &content_file.post_name).map_err(|_| e)?;
                let mut lines = lines;
                let first = lines.next();
                (header, lines, first)
            }
        };

        if header.id.0.is_empty() {
            header.id = PostId(content_file.post_name.clone());
        }

        let (title, _, _) = match content_file.format {
            ContentFormat::Markdown => parse_title_markdown(lines, maybe_line),
            ContentFormat::Html => parse_title_html(lines, maybe_line),
        };

        Ok(ContentRecord::new(&header, &content_file.post_name, title))
    }
}
