use std::io::Cursor;

use quick_xml::events::{BytesStart, Event};
use quick_xml::Writer;

pub const FONT_HREF: &str = "/fonts/KurewaGothicCjkTc-Regular.woff2";

/// A `<link>` element to place in the document head.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadTag {
    pub rel: &'static str,
    pub href: &'static str,
    pub destination: &'static str,
    pub mime_type: &'static str,
    pub cross_origin: &'static str,
    /// Identity of the tag among the head components, never rendered.
    pub key: &'static str,
}

impl HeadTag {
    pub fn to_html(&self) -> quick_xml::Result<String> {
        let mut writer = Writer::new(Cursor::new(Vec::new()));
        self.write(&mut writer)?;
        Ok(String::from_utf8_lossy(&writer.into_inner().into_inner()).into_owned())
    }

    pub fn write(&self, writer: &mut Writer<Cursor<Vec<u8>>>) -> quick_xml::Result<()> {
        // <link rel="preload" href="..." as="font" type="font/woff2" crossorigin="anonymous"/>
        let mut link = BytesStart::new("link");
        link.push_attribute(("rel", self.rel));
        link.push_attribute(("href", self.href));
        link.push_attribute(("as", self.destination));
        link.push_attribute(("type", self.mime_type));
        link.push_attribute(("crossorigin", self.cross_origin));
        writer.write_event(Event::Empty(link))?;
        Ok(())
    }
}

pub fn font_preload() -> HeadTag {
    HeadTag {
        rel: "preload",
        href: FONT_HREF,
        destination: "font",
        mime_type: "font/woff2",
        cross_origin: "anonymous",
        key: "KurewaFont",
    }
}

/// Registers the head components every rendered page carries.
pub fn on_render_body<F>(set_head_components: F)
where
    F: FnOnce(Vec<HeadTag>),
{
    set_head_components(vec![font_preload()]);
}

pub fn render_head_tags(tags: &[HeadTag]) -> quick_xml::Result<String> {
    let mut writer = Writer::new(Cursor::new(Vec::new()));
    for tag in tags {
        tag.write(&mut writer)?;
    }
    Ok(String::from_utf8_lossy(&writer.into_inner().into_inner()).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_font_preload() {
        let mut calls = 0;
        let mut head = vec![];
        on_render_body(|tags| {
            calls += 1;
            head.extend(tags);
        });

        assert_eq!(calls, 1);
        assert_eq!(head.len(), 1);
        assert_eq!(head[0].rel, "preload");
        assert_eq!(head[0].destination, "font");
        assert_eq!(head[0].mime_type, "font/woff2");
        assert_eq!(head[0].cross_origin, "anonymous");
        assert_eq!(head[0].key, "KurewaFont");
        assert_eq!(head[0], font_preload());
    }

    #[test]
    fn test_render_link() {
        let html = font_preload().to_html().unwrap();
        assert_eq!(html, r#"<link rel="preload" href="/fonts/KurewaGothicCjkTc-Regular.woff2" as="font" type="font/woff2" crossorigin="anonymous"/>"#);
        assert!(!html.contains("KurewaFont"));
    }

    #[test]
    fn test_attributes_escaped() {
        let tag = HeadTag {
            href: "/fonts/a\"b.woff2",
            ..font_preload()
        };
        let html = tag.to_html().unwrap();
        assert!(html.contains(r#"href="/fonts/a&quot;b.woff2""#));
    }

    #[test]
    fn test_render_many() {
        let html = render_head_tags(&[font_preload(), font_preload()]).unwrap();
        assert_eq!(html.matches("<link ").count(), 2);
        assert_eq!(render_head_tags(&[]).unwrap(), "");
    }
}
