// Test fixtures for integration testing

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Directory of note files for loading tests
#[allow(dead_code)] // Used in integration tests
pub struct TestCorpus {
    pub dir: TempDir,
    pub files: Vec<PathBuf>,
}

impl TestCorpus {
    /// A small corpus of git and shell notes
    #[allow(dead_code)] // Used in integration tests
    pub fn small() -> Self {
        Self::with_files(&[
            (
                "git.org",
                "* How to undo the last commit\n\
                 git reset --soft HEAD~1\n\
                 \n\
                 * git log 显示乱码\n\
                 git config --global core.quotepath false\n",
            ),
            (
                "shell/bash.org",
                "* Loop over files\n\
                 for f in *.txt; do echo \"$f\"; done\n",
            ),
            (
                "shell/tmux.org",
                "* Split a tmux pane\n\
                 Ctrl-b %\n\
                 * Detach a tmux session\n\
                 Ctrl-b d\n",
            ),
        ])
    }

    /// Create with custom files
    pub fn with_files(files: &[(&str, &str)]) -> Self {
        let dir = TempDir::new().unwrap();
        let mut paths = Vec::new();

        for (path, content) in files {
            let full_path = dir.path().join(path);
            if let Some(parent) = full_path.parent() {
                fs::create_dir_all(parent).unwrap();
            }
            fs::write(&full_path, content).unwrap();
            paths.push(full_path);
        }

        Self { dir, files: paths }
    }

    /// Overwrite or add a file after creation
    #[allow(dead_code)] // Used in integration tests
    pub fn write(&self, path: &str, content: &str) {
        let full_path = self.dir.path().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(full_path, content).unwrap();
    }

    /// Path to the corpus root
    pub fn path(&self) -> &Path {
        self.dir.path()
    }
}
