use std::fs::{create_dir_all, File};
use std::io;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use chrono::{Datelike, Local};
use spdlog::{info, warn};

use crate::config::Config;
use crate::content::content_index::{ArchiveQuery, ContentIndex};
use crate::head::{on_render_body, HeadTag};
use crate::view::archive_renderer::{hidden_count, year_list, ArchiveRenderer};
use crate::view::seo::Seo;

pub const ARCHIVES_DIR: &str = "archives";

#[derive(Debug, Clone, PartialEq)]
pub struct BuildReport {
    pub indexed: usize,
    pub displayed: usize,
    pub hidden: usize,
    pub output: PathBuf,
}

pub fn current_year() -> i32 {
    Local::now().year()
}

fn writeable(path: &Path) -> io::Result<File> {
    if let Some(parent) = path.parent() {
        create_dir_all(parent)?;
    }
    File::create(path)
}

pub struct SiteBuilder {
    config: Config,
}

impl SiteBuilder {
    pub fn new(config: Config) -> Self {
        SiteBuilder { config }
    }

    /// Indexes the posts directory and writes the archive page.
    pub fn build(&self, current_year: i32) -> io::Result<BuildReport> {
        let query = ContentIndex::build(&self.config.paths.posts_dir, self.config.index_base_name())?;
        self.build_with_query(&query, current_year)
    }

    /// Writes the archive page from an index previously saved as JSON.
    pub fn build_from_index(&self, index_path: &Path, current_year: i32) -> io::Result<BuildReport> {
        let json = std::fs::read_to_string(index_path)
            .map_err(|e| io::Error::new(e.kind(), format!("Error opening archive index {}: {}", index_path.display(), e)))?;
        let query = ArchiveQuery::from_json(&json)?;
        self.build_with_query(&query, current_year)
    }

    pub fn build_with_query(&self, query: &ArchiveQuery, current_year: i32) -> io::Result<BuildReport> {
        let years = year_list(current_year, self.config.floor_year());
        let hidden = hidden_count(query, &years);
        if hidden > 0 {
            warn!("{} posts are outside {}..{} and are not listed in the archive", hidden, self.config.floor_year(), current_year);
        }

        let rendered = self.render_archives(query, current_year)?;

        let out_dir = self.config.paths.public_dir.join(ARCHIVES_DIR);
        let html_path = out_dir.join("index.html");
        writeable(&html_path)?.write_all(rendered.as_bytes())?;
        writeable(&out_dir.join("index.json"))?.write_all(query.to_json()?.as_bytes())?;

        info!("Archive written to {} ({} years, {} posts)", html_path.display(), years.len(), query.nodes.len());

        Ok(BuildReport {
            indexed: query.nodes.len(),
            displayed: query.nodes.len() - hidden,
            hidden,
            output: html_path,
        })
    }

    pub fn render_archives(&self, query: &ArchiveQuery, current_year: i32) -> io::Result<String> {
        let mut head_tags: Vec<HeadTag> = vec![];
        on_render_body(|tags| head_tags.extend(tags));

        let seo = Seo {
            title: "文章歸檔",
            pathname: ARCHIVES_DIR,
        };
        let head = seo.page_head(&self.config.site.title, &self.config.site.site_url, &head_tags)
            .map_err(|e| io::Error::new(ErrorKind::InvalidData, format!("Error rendering head components: {}", e)))?;

        let renderer = ArchiveRenderer::from_template_dir(&self.config.paths.template_dir, self.config.floor_year())?;
        Ok(renderer.render(query, current_year, &head))
    }
}

#[cfg(test)]
mod tests {
    use std::fs::{create_dir, read_to_string, write};

    use super::*;
    use crate::config::parse_config;
    use crate::test_data::POST_DATA_MD;

    fn config_for(root: &Path) -> Config {
        let toml = format!(r##"
[site]
title = "My blog"
site_url = "https://example.com"

[paths]
template_dir = "{root}/template"
public_dir = "{root}/public"
posts_dir = "{root}/posts"
"##, root = root.display());
        parse_config(&toml).unwrap()
    }

    #[test]
    fn test_build_site() -> io::Result<()> {
        let root = tempfile::tempdir()?;
        let posts = root.path().join("posts");
        create_dir(&posts)?;
        create_dir(posts.join("20220402_what_i_learned"))?;
        write(posts.join("20220402_what_i_learned/index.md"), POST_DATA_MD)?;
        write(posts.join("20150101_ancient.md"), "# Ancient\n")?;

        let builder = SiteBuilder::new(config_for(root.path()));
        let report = builder.build(2024)?;

        assert_eq!(report.indexed, 2);
        assert_eq!(report.displayed, 1);
        assert_eq!(report.hidden, 1);
        assert_eq!(report.output, root.path().join("public/archives/index.html"));

        let html = read_to_string(&report.output)?;
        assert!(html.contains("<title>文章歸檔 | My blog</title>"));
        assert!(html.contains(r#"<link rel="preload" href="/fonts/KurewaGothicCjkTc-Regular.woff2" as="font" type="font/woff2" crossorigin="anonymous"/>"#));
        assert!(html.contains("目前總共有 2 篇文章 d(`･∀･)b"));
        assert!(html.contains(r#"href="/20220402_what_i_learned/""#));
        assert!(!html.contains("Ancient"));
        assert_eq!(html.matches("<h3>").count(), 6);

        let json = read_to_string(root.path().join("public/archives/index.json"))?;
        let saved = ArchiveQuery::from_json(&json)?;
        assert_eq!(saved.total_count, 2);
        Ok(())
    }

    #[test]
    fn test_build_from_index() -> io::Result<()> {
        let root = tempfile::tempdir()?;
        let index = root.path().join("index.json");
        write(&index, r##"{
  "nodes": [
    {"id": "a", "slug": "/a", "title": "A", "month": "Jan", "year": "2020", "date": "2020-01-10T12:00:00"},
    {"id": "b", "slug": "/b", "title": "B", "month": "Dec", "year": "2019", "date": "2019-12-03T12:00:00"}
  ],
  "totalCount": 2
}"##)?;

        let builder = SiteBuilder::new(config_for(root.path()));
        let report = builder.build_from_index(&index, 2024)?;
        assert_eq!(report.displayed, 2);

        let html = read_to_string(&report.output)?;
        for year in ["2024", "2023", "2022", "2021", "2020", "2019"] {
            assert!(html.contains(&format!("<h3>{}</h3>", year)));
        }
        assert!(html.contains(r#"<span>Jan</span> <a class="post-link" href="/a">A</a>"#));
        assert!(html.contains(r#"<span>Dec</span> <a class="post-link" href="/b">B</a>"#));
        Ok(())
    }

    #[test]
    fn test_future_posts_hidden() -> io::Result<()> {
        let root = tempfile::tempdir()?;
        let index = root.path().join("index.json");
        write(&index, r##"{
  "nodes": [
    {"id": "next", "slug": "/next", "title": "Next", "month": "Mar", "year": "2025", "date": "2025-03-01T12:00:00"},
    {"id": "a", "slug": "/a", "title": "A", "month": "Jan", "year": "2020", "date": "2020-01-10T12:00:00"}
  ],
  "totalCount": 2
}"##)?;

        let builder = SiteBuilder::new(config_for(root.path()));
        let report = builder.build_from_index(&index, 2024)?;
        assert_eq!(report.hidden, 1);
        assert_eq!(report.displayed, 1);

        let html = read_to_string(&report.output)?;
        assert!(!html.contains("<h3>2025</h3>"));
        assert!(!html.contains(r#"href="/next""#));
        assert!(html.contains("目前總共有 2 篇文章"));
        Ok(())
    }

    #[test]
    fn test_missing_posts_dir() {
        let root = tempfile::tempdir().unwrap();
        let builder = SiteBuilder::new(config_for(root.path()));
        assert!(builder.build(2024).is_err());
    }
}
