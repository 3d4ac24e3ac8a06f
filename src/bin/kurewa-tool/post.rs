use std::fmt::Write;
use std::fs::{create_dir, File};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use chrono::{Local, NaiveDate};
use uuid::Uuid;

use kurewa::util::os_helper::author_name;

use crate::{PostArgs, PostOutput};

fn get_author(args: &PostArgs) -> String {
    if let Some(ref name) = args.name {
        return name.clone();
    }

    author_name()
}

fn render_header(id: &str, name: &str, date: &str, title: Option<&str>) -> String {
    let mut buf = String::new();

    let _ = writeln!(&mut buf, "<!--");
    let _ = writeln!(&mut buf, "[ID]: # ({})", id);
    let _ = writeln!(&mut buf, "[DATE]: # ({})", date);
    let _ = writeln!(&mut buf, "[AUTHOR]: # ({})", name);
    let _ = writeln!(&mut buf, "[TAGS]: # ()");
    let _ = writeln!(&mut buf, "-->");
    let _ = writeln!(&mut buf);
    let _ = writeln!(&mut buf, "# {}", title.unwrap_or("Replace with title"));
    let _ = writeln!(&mut buf);
    buf
}

fn render_body() -> String {
    let mut buf = String::new();

    let _ = writeln!(&mut buf, "This is a body example");
    let _ = writeln!(&mut buf, "Please remove it and replace with your content");
    buf
}

/// `YYYYMMDD_title_in_ascii`, used as file or directory name and so as the slug.
fn post_name_from_title(title: &str, date: &NaiveDate) -> String {
    let ascii_title = unidecode::unidecode(title);
    let mut name = String::new();

    for c in ascii_title.chars() {
        if c.is_ascii_alphanumeric() {
            name.push(c.to_ascii_lowercase());
        } else if c.is_whitespace() && !name.is_empty() && !name.ends_with('_') {
            name.push('_');
        }
    }

    let name = name.trim_end_matches('_');
    format!("{}_{}", date.format("%Y%m%d"), name)
}

fn write_post(path: &PathBuf, header: &str, body: &str) -> Result<()> {
    use std::io::Write;

    let mut file = File::create(path).with_context(|| format!("Creating {}", path.display()))?;
    file.write_all(header.as_bytes())?;
    file.write_all(body.as_bytes())?;
    Ok(())
}

pub fn post_cmd(args: PostArgs) -> Result<()> {
    let id = Uuid::new_v4().to_string();
    let name = get_author(&args);
    let date = Local::now();
    let date_str = date.format("%Y-%m-%d %H:%M:%S.000").to_string();

    let title = match (&args.output, args.title.as_deref()) {
        (PostOutput::Stdout, title) => title,
        (_, None) => bail!("For file and dir outputs, title is required"),
        (_, Some(title)) => Some(title),
    };

    let header = render_header(&id, &name, &date_str, title);
    let body = render_body();

    match args.output {
        PostOutput::Stdout => {
            println!("{}", header);
            println!("{}", body);
        }
        PostOutput::File => {
            let post_name = post_name_from_title(title.unwrap_or_default(), &date.date_naive());
            let full_path = PathBuf::from(format!("{}.md", post_name));
            println!("Creating file {}", full_path.display());
            write_post(&full_path, &header, &body)?;
        }
        PostOutput::Dir => {
            let post_name = post_name_from_title(title.unwrap_or_default(), &date.date_naive());
            let full_path = PathBuf::from(&post_name).join("index.md");
            println!("Creating dir post {}", full_path.display());
            create_dir(&post_name).with_context(|| format!("Creating directory {}", post_name))?;
            write_post(&full_path, &header, &body)?;
        }
    };

    Ok(())
}
