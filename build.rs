use std::fs::File;
use std::path::{Path, PathBuf};
use std::{env, io};

use flate2::write::GzEncoder;
use flate2::Compression;

fn archive_path() -> PathBuf {
    let out_dir = env::var("OUT_DIR").expect("OUT_DIR is set by cargo");
    PathBuf::from(out_dir).join("res.tar.gz")
}

fn compress_dir(path: &Path) -> io::Result<()> {
    let tar_gz = File::create(archive_path())?;
    let enc = GzEncoder::new(tar_gz, Compression::default());
    let mut tar = tar::Builder::new(enc);
    tar.append_dir_all(".", path)?;
    tar.into_inner()?.finish()?;
    Ok(())
}

fn main() {
    let current_dir = env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR is set by cargo");
    let res_dir = PathBuf::from(&current_dir).join("res");
    println!("cargo:rerun-if-changed=res");
    compress_dir(&res_dir).expect("Error packing resources");
}
