// tests/common/fixtures.rs
//! Temp workspaces with shell scripts standing in for TrID and ExifTool.
#![allow(dead_code)]

use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};

use metaextract::{MetaExtractor, Options};
use tempfile::TempDir;

pub struct ToolWorkspace {
    dir: TempDir,
    trid: PathBuf,
    exiftool: PathBuf,
}

impl ToolWorkspace {
    /// Workspace whose tools report nothing at all.
    pub fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let trid = dir.path().join("bin").join("trid");
        let exiftool = dir.path().join("bin").join("exiftool");
        let workspace = Self { dir, trid, exiftool };
        workspace.trid_script("echo 'Unknown!'");
        workspace.exiftool_script("exit 0");
        workspace
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn write_file(&self, rel: &str, contents: &[u8]) -> PathBuf {
        let path = self.dir.path().join("data").join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, contents).unwrap();
        path
    }

    /// Replace the fake TrID with a script that prints `report` lines.
    pub fn trid_reports(&self, lines: &[&str]) -> &Self {
        let body: Vec<String> = lines.iter().map(|line| format!("echo '{line}'")).collect();
        self.trid_script(&body.join("\n"))
    }

    pub fn exiftool_reports(&self, json: &str) -> &Self {
        self.exiftool_script(&format!("cat <<'JSON'\n{json}\nJSON"))
    }

    pub fn trid_script(&self, body: &str) -> &Self {
        write_script(&self.trid, body);
        self
    }

    pub fn exiftool_script(&self, body: &str) -> &Self {
        write_script(&self.exiftool, body);
        self
    }

    pub fn options(&self) -> Options {
        Options::builder()
            .trid_path(&self.trid)
            .trid_timeout(Duration::from_secs(10))
            .exiftool_path(&self.exiftool)
            .build()
            .unwrap()
    }

    pub fn extractor(&self) -> MetaExtractor {
        MetaExtractor::new(self.options())
    }
}

#[cfg(unix)]
fn write_script(path: &Path, body: &str) {
    use std::os::unix::fs::PermissionsExt;

    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, format!("#!/bin/sh\n{body}\n")).unwrap();
    fs::set_permissions(path, fs::Permissions::from_mode(0o755)).unwrap();
}

#[cfg(not(unix))]
fn write_script(path: &Path, _body: &str) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
}
