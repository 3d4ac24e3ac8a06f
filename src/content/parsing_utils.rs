use std::io;
use std::io::ErrorKind;
use std::path::Path;
use std::str::Lines;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use lazy_static::lazy_static;
use regex::Regex;

use crate::content::{ContentHeader, PostId};
use crate::text_utils::parse_date_time;

pub fn parse_post_header<'a>(file_name: &Path, lines: Lines<'a>) -> io::Result<(ContentHeader, Lines<'a>, Option<&'a str>)> {
    let mut id: String = "".to_string();
    let mut date: String = "".to_string();
    let mut author: String = "".to_string();
    let mut tags: String = "".to_string();

    let mut lines = lines.clone();
    let mut maybe_line = lines.next();

    // Skip optional HTML comment in the beginning
    let mut start_with_comment = false;

    while let Some(line) = maybe_line {
        let line = line.trim();

        if line.is_empty() {
            maybe_line = lines.next();
            continue;
        }

        if line == "<!--" {
            maybe_line = lines.next();
            start_with_comment = true;
        }
        break;
    }

    while let Some(line) = maybe_line {
        if line.trim().is_empty() {
            maybe_line = lines.next();
            continue;
        }

        let Some((key, val)) = extract_header_line(line) else {
            break;
        };

        match key {
            "ID" => id = val.to_string(),
            "DATE" => date = val.to_string(),
            "AUTHOR" => author = val.to_string(),
            "TAGS" => tags = val.to_string(),
            _ => {}
        }
        maybe_line = lines.next();
    }

    if start_with_comment {
        // Let's find the end of the comment
        loop {
            let Some(line) = maybe_line else {
                return Err(io::Error::new(
                    ErrorKind::InvalidData,
                    format!("End of comment in the header is missing - file={}", file_name.display()),
                ));
            };

            let line = line.trim();
            if line == "-->" {
                maybe_line = lines.next();
                break;
            }

            maybe_line = lines.next();
        }
    }

    if id.is_empty() && date.is_empty() && author.is_empty() && tags.is_empty() {
        return Err(io::Error::new(ErrorKind::InvalidData, "Invalid post header".to_string()));
    }

    let tags = extract_tags(&tags);
    let date = parse_date_time(&date)
        .map_err(|e| io::Error::new(ErrorKind::InvalidData, format!("{} - file={}", e, file_name.display())))?;

    let header = ContentHeader {
        file_name: file_name.to_path_buf(),
        id: PostId(id),
        date,
        author,
        tags,
    };

    Ok((header, lines, maybe_line))
}

/// Builds a header for posts without one, from a `YYYYMMDD_name` post name.
pub fn generate_header_from_name(file_name: &Path, post_name: &str) -> io::Result<ContentHeader> {
    lazy_static! {
        static ref NAME_DATE_REGEX: Regex = Regex::new(r"^(?P<date>\d{8})(_|$)").unwrap();
    }

    let date = NAME_DATE_REGEX.captures(post_name)
        .and_then(|cap| cap.name("date"))
        .and_then(|date| NaiveDate::parse_from_str(date.as_str(), "%Y%m%d").ok());

    let Some(date) = date else {
        return Err(io::Error::new(
            ErrorKind::InvalidData,
            format!("No post header and no date in the post name - file={}", file_name.display()),
        ));
    };

    Ok(ContentHeader {
        file_name: file_name.to_path_buf(),
        id: PostId(post_name.to_string()),
        date: NaiveDateTime::new(date, NaiveTime::MIN),
        author: "".to_string(),
        tags: vec![],
    })
}

pub fn parse_title_markdown<'a>(lines: Lines<'a>, mut maybe_line: Option<&'a str>) -> (String, Lines<'a>, Option<&'a str>) {
    let mut lines = lines;
    let title = loop {
        let Some(line) = maybe_line else {
            break "".to_string();
        };
        if let Some(title) = line.strip_prefix("# ") {
            break title.trim().to_string();
        }
        maybe_line = lines.next();
    };
    (title, lines, maybe_line)
}

pub fn parse_title_html<'a>(lines: Lines<'a>, mut maybe_line: Option<&'a str>) -> (String, Lines<'a>, Option<&'a str>) {
    lazy_static! {
        static ref TITLE_REGEX: Regex = Regex::new(
            r"<h[12][^>]*>(?P<title>.+?)</h[12]>"
        ).unwrap();
    }

    let mut lines = lines;
    let title = loop {
        let Some(line) = maybe_line else {
            break "".to_string();
        };
        if let Some(title) = TITLE_REGEX.captures(line).and_then(|cap| cap.name("title")) {
            break title.as_str().trim().to_string();
        }
        maybe_line = lines.next();
    };
    (title, lines, maybe_line)
}

fn extract_tags(tags_str: &str) -> Vec<String> {
    tags_str.split(' ')
        .filter(|x| !x.is_empty())
        .map(|s| s.to_string())
        .collect()
}

fn extract_header_line(line: &str) -> Option<(&str, &str)> {
    lazy_static! {
        static ref HEADER_REGEX: Regex = Regex::new(r"\[(?P<key>\w+)\]: # \((?P<value>.*)\)").unwrap();
    }

    HEADER_REGEX.captures(line).and_then(|cap| {
        let key = cap.name("key").map(|key| key.as_str());
        let val = cap.name("value").map(|val| val.as_str());
        match (key, val) {
            (Some(key), Some(val)) => Some((key, val)),
            _ => None
        }
    })
}
