// src/file.rs

use std::{
    collections::BTreeMap,
    fs::{self, File},
    io::{self, BufReader, BufWriter, Write},
    path::{Path, PathBuf},
};

use crate::envelope::Envelope;
use crate::error::Result;

/// Write a multi-season result as `{"<year>": "<gml or diagnostic>"}`.
/// Parent directories are created as needed. Returns the path written to.
pub fn write_graph_bundle(path: &Path, seasons: &BTreeMap<i32, Envelope>) -> Result<PathBuf> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }

    let texts: BTreeMap<i32, &str> = seasons.iter().map(|(year, env)| (*year, env.result.as_str())).collect();
    let failed = seasons.values().filter(|env| !env.is_ok()).count();

    let mut w = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut w, &texts)?;
    w.flush()?;

    logf!("Wrote {} seasons ({failed} failed) to {}", texts.len(), path.display());
    Ok(path.to_path_buf())
}

/// Read a bundle written by [`write_graph_bundle`].
pub fn read_graph_bundle(path: &Path) -> Result<BTreeMap<i32, String>> {
    let r = BufReader::new(File::open(path)?);
    Ok(serde_json::from_reader(r)?)
}

pub fn ensure_directory(dir: &Path) -> io::Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(io::Error::new(
            io::ErrorKind::AlreadyExists,
            format!("Path exists but is not a directory: {}", dir.display()),
        ));
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ensure_directory_rejects_files() {
        let tmp = tempfile::tempdir().unwrap();
        let file = tmp.path().join("plain");
        fs::write(&file, "x").unwrap();
        assert!(ensure_directory(&file).is_err());
        assert!(ensure_directory(&tmp.path().join("a/b")).is_ok());
        assert!(tmp.path().join("a/b").is_dir());
    }
}
