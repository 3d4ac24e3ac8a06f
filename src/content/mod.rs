use std::path::PathBuf;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::text_utils::format_month_year;

pub mod content_file;
pub mod content_format;
pub mod content_index;
pub mod parsing_utils;

#[derive(Debug, Clone, PartialEq)]
pub struct ContentHeader {
    pub file_name: PathBuf,
    pub id: PostId,
    pub date: NaiveDateTime,
    pub author: String,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostId(pub String);

/// Metadata of one published post, as listed by the archive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentRecord {
    pub id: PostId,
    pub slug: String,
    pub title: String,
    pub month: String,
    pub year: String,
    pub date: NaiveDateTime,
}

impl ContentRecord {
    pub fn new(header: &ContentHeader, post_name: &str, title: String) -> ContentRecord {
        let (month, year) = format_month_year(&header.date);
        ContentRecord {
            id: header.id.clone(),
            slug: slug_from_post_name(post_name),
            title,
            month,
            year,
            date: header.date,
        }
    }
}

pub fn slug_from_post_name(post_name: &str) -> String {
    let post_name = post_name.trim_matches('/');
    format!("/{}/", post_name)
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveTime};

    use super::*;

    #[test]
    fn test_record_from_header() {
        let header = ContentHeader {
            file_name: PathBuf::from("posts/20220402_what_i_learned/index.md"),
            id: PostId("a63bd715".to_string()),
            date: NaiveDateTime::new(
                NaiveDate::from_ymd_opt(2022, 4, 2).unwrap(),
                NaiveTime::from_hms_opt(12, 5, 0).unwrap(),
            ),
            author: "someone".to_string(),
            tags: vec![],
        };

        let record = ContentRecord::new(&header, "20220402_what_i_learned", "What I learned".to_string());
        assert_eq!(record.id, PostId("a63bd715".to_string()));
        assert_eq!(record.slug, "/20220402_what_i_learned/");
        assert_eq!(record.month, "Apr");
        assert_eq!(record.year, "2022");
        assert_eq!(record.title, "What I learned");
    }

    #[test]
    fn test_slug() {
        assert_eq!(slug_from_post_name("hello"), "/hello/");
        assert_eq!(slug_from_post_name("/hello/"), "/hello/");
    }
}
