use std::{fs, io};
use std::path::{Path, PathBuf};

use crate::content::content_file::ContentFile;

#[derive(Debug, Clone, PartialEq)]
pub struct PostLink {
    pub post_name: String,
    pub post_path: PathBuf,
}

pub struct PostList {
    pub root_dir: PathBuf,
    pub post_file: String,
}

impl PostList {
    /// Lists every post under the root: directory posts first, then single file posts.
    pub fn retrieve_posts(&self) -> io::Result<Vec<PostLink>> {
        let mut posts = vec![];

        for (dir, file_name) in self.retrieve_dirs()? {
            let Some(post_name) = dir.file_name().and_then(|n| n.to_str()) else {
                continue;
            };
            posts.push(PostLink {
                post_name: post_name.to_string(),
                post_path: dir.join(file_name),
            });
        }

        for post_file in self.retrieve_files()? {
            let Some(post_name) = post_file.file_stem().and_then(|n| n.to_str()) else {
                continue;
            };
            posts.push(PostLink {
                post_name: post_name.to_string(),
                post_path: post_file.clone(),
            });
        }

        Ok(posts)
    }

    pub fn retrieve_files(&self) -> io::Result<Vec<PathBuf>> {
        let mut posts = vec![];
        for entry in fs::read_dir(self.root_dir.as_path())? {
            let entry = entry?;
            if !entry.file_type()?.is_file() {
                continue;
            }
            let path = entry.path();
            if ContentFile::guess_type(&path).is_some() {
                posts.push(path);
            }
        }
        posts.sort();
        Ok(posts)
    }

    pub fn retrieve_dirs(&self) -> io::Result<Vec<(PathBuf, String)>> {
        // Per directory, we should have a file called like post_file
        let dirs = Self::list_dirs(self.root_dir.as_path())?;
        Self::filter_dirs(&self.post_file, dirs)
    }

    fn list_dirs(posts_dir: &Path) -> io::Result<Vec<PathBuf>> {
        let mut dirs: Vec<PathBuf> = vec![];
        for entry in fs::read_dir(posts_dir)? {
            let entry = entry?;
            if entry.file_type()?.is_dir() {
                dirs.push(entry.path());
            }
        }
        dirs.sort();
        Ok(dirs)
    }

    fn filter_dirs(post_file: &str, dirs: Vec<PathBuf>) -> io::Result<Vec<(PathBuf, String)>> {
        let mut post_dirs = vec![];
        for dir in dirs {
            if let Some(file_name) = Self::contains_file(&dir, post_file)? {
                post_dirs.push((dir, file_name));
            }
        }
        Ok(post_dirs)
    }

    fn contains_file(dir: &Path, base_name: &str) -> io::Result<Option<String>> {
        let mut found = vec![];
        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            if !entry.file_type()?.is_file() {
                continue;
            }
            if let Some(file_name) = entry.file_name().to_str() {
                if file_name.contains(base_name) {
                    found.push(file_name.to_string());
                }
            }
        }

        found.sort();
        Ok(found.into_iter().next())
    }
}

#[cfg(test)]
mod tests {
    use std::fs::{create_dir, write};

    use super::*;

    #[test]
    fn test_happy_case() -> io::Result<()> {
        let root = tempfile::tempdir()?;
        create_dir(root.path().join("20220402_dir_post"))?;
        write(root.path().join("20220402_dir_post/index.md"), "")?;
        write(root.path().join("20220402_dir_post/image.png"), "")?;
        create_dir(root.path().join("assets"))?;
        write(root.path().join("assets/logo.png"), "")?;
        write(root.path().join("20230101_file_post.md"), "")?;
        write(root.path().join("20230102_html_post.html"), "")?;
        write(root.path().join("notes.txt"), "")?;

        let post_list = PostList {
            root_dir: root.path().to_path_buf(),
            post_file: "index.md".to_string(),
        };
        let posts = post_list.retrieve_posts()?;

        assert_eq!(posts, vec![
            PostLink {
                post_name: "20220402_dir_post".to_string(),
                post_path: root.path().join("20220402_dir_post/index.md"),
            },
            PostLink {
                post_name: "20230101_file_post".to_string(),
                post_path: root.path().join("20230101_file_post.md"),
            },
            PostLink {
                post_name: "20230102_html_post".to_string(),
                post_path: root.path().join("20230102_html_post.html"),
            },
        ]);
        Ok(())
    }

    #[test]
    fn test_missing_root() {
        let post_list = PostList {
            root_dir: PathBuf::from("this/path/does/not/exist"),
            post_file: "index.md".to_string(),
        };
        assert!(post_list.retrieve_posts().is_err());
    }
}
