use std::{fs, io};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::content::content_format::ContentFormat;

pub struct ContentFile {
    pub post_name: String,
    pub file_path: PathBuf,
    pub format: ContentFormat,
    pub raw_content: String,
}

impl ContentFile {
    pub fn from_file(post_name: String, file_path: PathBuf) -> io::Result<ContentFile> {
        let format = match Self::guess_type(&file_path) {
            None => return Err(io::Error::new(ErrorKind::Unsupported, format!("Could not guess the type of the file {}", file_path.display()))),
            Some(format) => format,
        };

        let raw_content = fs::read_to_string(&file_path)?;

        Ok(ContentFile {
            post_name,
            file_path,
            format,
            raw_content,
        })
    }

    pub fn guess_type(file_name: &Path) -> Option<ContentFormat> {
        match file_name.extension().and_then(|ext| ext.to_str()) {
            Some("md") => Some(ContentFormat::Markdown),
            Some("html") | Some("htm") => Some(ContentFormat::Html),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guess_type() {
        assert_eq!(ContentFile::guess_type(Path::new("posts/a.md")), Some(ContentFormat::Markdown));
        assert_eq!(ContentFile::guess_type(Path::new("posts/a/index.html")), Some(ContentFormat::Html));
        assert_eq!(ContentFile::guess_type(Path::new("posts/a.htm")), Some(ContentFormat::Html));
        assert_eq!(ContentFile::guess_type(Path::new("posts/a.png")), None);
        assert_eq!(ContentFile::guess_type(Path::new("posts/README")), None);
    }

    #[test]
    fn test_unsupported_file() {
        let err = ContentFile::from_file("img".to_string(), PathBuf::from("posts/img.png")).err().unwrap();
        assert_eq!(err.kind(), ErrorKind::Unsupported);
    }
}
