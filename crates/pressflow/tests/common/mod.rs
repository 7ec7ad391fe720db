use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

pub struct TestProject {
    pub root: TempDir,
}

impl TestProject {
    pub fn new() -> Self {
        let root = tempfile::tempdir().unwrap();
        Self { root }
    }

    #[allow(dead_code)]
    pub fn write_project_file(&self, id: u64, name: &str) {
        let contents = format!("id: {}\nname: {}\nenvironments:\n  - staging\n  - production\n", id, name);
        fs::write(self.root.path().join("pressflow.yml"), contents).unwrap();
    }

    pub fn path(&self) -> PathBuf {
        self.root.path().to_path_buf()
    }
}
