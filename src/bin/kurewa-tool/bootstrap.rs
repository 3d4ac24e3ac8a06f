use std::fs;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{bail, Context, Result};
use lazy_static::lazy_static;
use regex::Regex;

use kurewa::config::CFG_FILE_NAME;

use crate::decompress::decompress_files;
use crate::BootstrapArgs;

const SAMPLE_CFG: &str = include_str!("../../../kurewa.toml");

fn write_sample_cfg(out_dir: &Path) -> Result<()> {
    let cfg_path = out_dir.join(CFG_FILE_NAME);
    let file = File::create(&cfg_path).with_context(|| format!("Creating {}", cfg_path.display()))?;
    let mut writer = BufWriter::new(file);

    let sample_cfg = replace_paths(out_dir, SAMPLE_CFG);
    writer.write_all(sample_cfg.as_bytes())?;
    writer.flush()?;

    println!("Configuration written to {}", cfg_path.display());
    Ok(())
}

/// Rebases the `res/...` paths of the sample configuration onto `prefix`.
fn replace_paths(prefix: &Path, config_data: &str) -> String {
    lazy_static! {
        static ref RES_REGEX: Regex = Regex::new(r#""res/(?P<dir>\w+)""#).unwrap();
    }

    let prefix = prefix.display().to_string();
    let prefix = prefix.trim_end_matches('/');

    RES_REGEX.replace_all(config_data, |captures: &regex::Captures| {
        format!("\"{}/{}\"", prefix, &captures["dir"])
    }).to_string()
}

pub fn bootstrap_cmd(args: BootstrapArgs) -> Result<()> {
    let out_path = fs::canonicalize(&args.out_dir)
        .with_context(|| format!("Error converting path to absolute: {}", args.out_dir))?;

    if !fs::metadata(&out_path)?.is_dir() {
        bail!("Output path must be a directory: {}", out_path.display());
    }

    decompress_files(&out_path).context("Error bootstrapping")?;
    write_sample_cfg(&out_path).context("Error writing kurewa configuration")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use kurewa::config::parse_config;

    use super::*;

    #[test]
    fn test_sample_cfg() {
        let res = replace_paths(Path::new("/abs/path/"), SAMPLE_CFG);
        assert!(res.contains(r##"template_dir = "/abs/path/template""##));
        assert!(res.contains(r##"public_dir = "/abs/path/public""##));
        assert!(res.contains(r##"posts_dir = "/abs/path/posts""##));

        let cfg = parse_config(&res).unwrap();
        assert_eq!(cfg.paths.posts_dir, Path::new("/abs/path/posts"));
    }

    #[test]
    fn test_bootstrap() -> Result<()> {
        let out_dir = tempfile::tempdir()?;
        bootstrap_cmd(BootstrapArgs {
            out_dir: out_dir.path().display().to_string(),
        })?;

        assert!(out_dir.path().join("template/archives.tpl").exists());
        assert!(out_dir.path().join("posts/20190601_hello_kurewa/index.md").exists());
        assert!(out_dir.path().join(CFG_FILE_NAME).exists());
        Ok(())
    }
}
