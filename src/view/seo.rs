use crate::head::{render_head_tags, HeadTag};

pub struct Seo<'a> {
    pub title: &'a str,
    pub pathname: &'a str,
}

/// Everything a page template needs for its `<head>`.
#[derive(Debug, Clone, PartialEq)]
pub struct PageHead {
    pub title: String,
    pub canonical: String,
    pub components: String,
}

impl Seo<'_> {
    pub fn page_head(&self, site_title: &str, site_url: &str, head_tags: &[HeadTag]) -> quick_xml::Result<PageHead> {
        let title = if site_title.is_empty() {
            self.title.to_string()
        } else {
            format!("{} | {}", self.title, site_title)
        };

        Ok(PageHead {
            title,
            canonical: canonical_link(site_url, self.pathname),
            components: render_head_tags(head_tags)?,
        })
    }
}

fn canonical_link(site_url: &str, pathname: &str) -> String {
    let base_url = site_url.trim_end_matches('/');
    let pathname = pathname.trim_matches('/');
    if pathname.is_empty() {
        format!("{}/", base_url)
    } else {
        format!("{}/{}/", base_url, pathname)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::head::font_preload;

    #[test]
    fn test_page_head() {
        let seo = Seo { title: "文章歸檔", pathname: "archives" };
        let head = seo.page_head("My blog", "https://example.com/", &[font_preload()]).unwrap();
        assert_eq!(head.title, "文章歸檔 | My blog");
        assert_eq!(head.canonical, "https://example.com/archives/");
        assert!(head.components.starts_with("<link rel=\"preload\""));
    }

    #[test]
    fn test_canonical_link() {
        assert_eq!(canonical_link("https://example.com", "archives"), "https://example.com/archives/");
        assert_eq!(canonical_link("https://example.com/", "/archives/"), "https://example.com/archives/");
        assert_eq!(canonical_link("https://example.com", ""), "https://example.com/");
    }

    #[test]
    fn test_without_site_title() {
        let seo = Seo { title: "文章歸檔", pathname: "archives" };
        let head = seo.page_head("", "https://example.com", &[]).unwrap();
        assert_eq!(head.title, "文章歸檔");
        assert_eq!(head.components, "");
    }
}
