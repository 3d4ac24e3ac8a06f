use std::io;
use std::io::ErrorKind;
use std::path::Path;

use ramhorns::Template;

use crate::content::content_index::ArchiveQuery;
use crate::view::seo::PageHead;

pub const DEFAULT_FLOOR_YEAR: i32 = 2019;
pub const ARCHIVES_TEMPLATE: &str = "archives.tpl";

const DEFAULT_TEMPLATE: &str = include_str!("../../res/template/archives.tpl");

#[derive(ramhorns::Content)]
struct ArchivePage<'a> {
    page_title: &'a str,
    canonical: &'a str,
    head_components: &'a str,
    heading: &'a str,
    summary: String,
    total_count: usize,
    years: Vec<YearSection<'a>>,
}

#[derive(ramhorns::Content)]
struct YearSection<'a> {
    year: &'a str,
    posts: Vec<PostItem<'a>>,
}

#[derive(ramhorns::Content)]
struct PostItem<'a> {
    month: &'a str,
    link: &'a str,
    title: &'a str,
}

/// Years shown by the archive, from `current_year` down to `floor_year`.
pub fn year_list(current_year: i32, floor_year: i32) -> Vec<String> {
    (floor_year..=current_year).rev().map(|year| year.to_string()).collect()
}

/// Number of records that fall outside every year in `years`.
pub fn hidden_count(query: &ArchiveQuery, years: &[String]) -> usize {
    query.nodes.iter().filter(|node| !years.contains(&node.year)).count()
}

pub fn summary_line(total_count: usize) -> String {
    format!("目前總共有 {} 篇文章 d(`･∀･)b", total_count)
}

pub struct ArchiveRenderer<'a> {
    pub template: Template<'a>,
    pub floor_year: i32,
}

impl<'a> ArchiveRenderer<'a> {
    pub fn new(archive_tpl_src: &'a str, floor_year: i32) -> io::Result<ArchiveRenderer<'a>> {
        let template = match Template::new(archive_tpl_src) {
            Ok(x) => x,
            Err(e) => {
                return Err(io::Error::new(ErrorKind::InvalidInput, format!("Error parsing archive template: {}", e)));
            }
        };

        Ok(ArchiveRenderer {
            template,
            floor_year,
        })
    }

    pub fn render(&self, query: &ArchiveQuery, current_year: i32, head: &PageHead) -> String {
        let year_list = year_list(current_year, self.floor_year);

        let years = year_list.iter()
            .map(|year| YearSection {
                year: year.as_str(),
                posts: query.nodes.iter()
                    .filter(|node| &node.year == year)
                    .map(|node| PostItem {
                        month: node.month.as_str(),
                        link: node.slug.as_str(),
                        title: node.title.as_str(),
                    })
                    .collect(),
            })
            .collect();

        self.template.render(&ArchivePage {
            page_title: head.title.as_str(),
            canonical: head.canonical.as_str(),
            head_components: head.components.as_str(),
            heading: "Archives",
            summary: summary_line(query.total_count),
            total_count: query.total_count,
            years,
        })
    }
}

impl ArchiveRenderer<'static> {
    /// Uses `archives.tpl` from the template dir when present, the built-in template otherwise.
    pub fn from_template_dir(template_dir: &Path, floor_year: i32) -> io::Result<ArchiveRenderer<'static>> {
        let template_path = template_dir.join(ARCHIVES_TEMPLATE);
        if !template_path.exists() {
            return ArchiveRenderer::new(DEFAULT_TEMPLATE, floor_year);
        }

        let template_src = std::fs::read_to_string(&template_path)
            .map_err(|e| io::Error::new(e.kind(), format!("Error loading archive template {}: {}", template_path.display(), e)))?;
        let template = Template::new(template_src)
            .map_err(|e| io::Error::new(ErrorKind::InvalidInput, format!("Error parsing archive template: {}", e)))?;

        Ok(ArchiveRenderer {
            template,
            floor_year,
        })
    }
}
