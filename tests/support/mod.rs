#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

pub const LOG_FILE: &str = "did.txt";

pub struct TestDir {
    dir: TempDir,
}

impl TestDir {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("failed to create tempdir");
        Self { dir }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn log_path(&self) -> PathBuf {
        self.dir.path().join(LOG_FILE)
    }

    pub fn write_file(&self, rel_path: &str, contents: &str) -> std::io::Result<PathBuf> {
        let path = self.dir.path().join(rel_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, contents)?;
        Ok(path)
    }

    pub fn write_log(&self, contents: &str) -> std::io::Result<PathBuf> {
        self.write_file(LOG_FILE, contents)
    }

    pub fn read_log(&self) -> std::io::Result<String> {
        fs::read_to_string(self.log_path())
    }

    pub fn write_config(&self, contents: &str) -> std::io::Result<PathBuf> {
        self.write_file(".did.toml", contents)
    }
}

/// `did` binary running inside `dir`, isolated from the caller's environment
pub fn did_cmd(dir: &TestDir) -> Command {
    let mut cmd = Command::cargo_bin("did").expect("binary");
    cmd.current_dir(dir.path());
    cmd.env_remove("DID_FILE");
    cmd.env_remove("RUST_LOG");
    cmd
}
