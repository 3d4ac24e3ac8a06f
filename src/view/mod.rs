pub mod archive_renderer;
pub mod seo;
