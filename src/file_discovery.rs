use crate::config::Config;
use ignore::WalkBuilder;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileInfo {
    pub path: PathBuf,
    pub size: u64,
    pub extension: Option<String>,
}

pub struct FileDiscovery {
    config: Config,
}

impl FileDiscovery {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Walk every configured root under `base` and collect the script files
    /// to process. Roots that do not exist are skipped.
    pub fn discover_files(&self, base: &Path) -> crate::Result<Vec<FileInfo>> {
        let mut files = Vec::new();

        for root in &self.config.root_directories {
            let root = base.join(root);
            if !root.exists() {
                continue;
            }

            let walker = WalkBuilder::new(&root)
                .standard_filters(true)
                .hidden(false)
                .git_ignore(true)
                .build();

            for result in walker {
                let entry = result?;
                let path = entry.path();

                if !path.is_file() {
                    continue;
                }

                if let Some(file_info) = self.process_file(path)? {
                    files.push(file_info);
                }
            }
        }

        // Walk order is platform dependent; sort for stable output.
        files.sort_by(|a, b| a.path.cmp(&b.path));

        Ok(files)
    }

    fn process_file(&self, path: &Path) -> crate::Result<Option<FileInfo>> {
        let metadata = fs::metadata(path)?;
        let size = metadata.len();

        if size > self.config.max_file_size as u64 {
            return Ok(None);
        }

        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|s| s.to_lowercase());

        match extension {
            Some(ref ext) if self.config.file_extensions.contains(ext) => {}
            _ => return Ok(None),
        }

        Ok(Some(FileInfo {
            path: path.to_path_buf(),
            size,
            extension,
        }))
    }

    pub fn get_stats(&self, files: &[FileInfo]) -> FileStats {
        let mut stats = FileStats::default();

        for file in files {
            stats.total_files += 1;
            stats.total_size += file.size;

            if let Some(ref ext) = file.extension {
                *stats.extensions.entry(ext.clone()).or_insert(0) += 1;
            }
        }

        stats
    }
}

#[derive(Debug, Default)]
pub struct FileStats {
    pub total_files: usize,
    pub total_size: u64,
    pub extensions: HashMap<String, usize>,
}

impl FileStats {
    pub fn print_summary(&self) {
        println!(
            "Found {} script files ({:.2} KB)",
            self.total_files,
            self.total_size as f64 / 1024.0
        );

        let mut exts: Vec<_> = self.extensions.iter().collect();
        exts.sort_by(|a, b| b.1.cmp(a.1));

        for (ext, count) in exts {
            println!("  .{}: {} files", ext, count);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write(path: &Path, content: &str) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    #[test]
    fn discovers_only_matching_extensions() {
        let dir = tempfile::tempdir().unwrap();
        write(&dir.path().join("script/player.gd"), "extends Node\n");
        write(&dir.path().join("script/notes.txt"), "not a script\n");

        let discovery = FileDiscovery::new(Config::default());
        let files = discovery.discover_files(dir.path()).unwrap();

        assert_eq!(files.len(), 1);
        assert!(files[0].path.ends_with("script/player.gd"));
        assert_eq!(files[0].extension.as_deref(), Some("gd"));
    }

    #[test]
    fn walks_roots_recursively() {
        let dir = tempfile::tempdir().unwrap();
        write(&dir.path().join("script/ui/menu.gd"), "extends Control\n");
        write(&dir.path().join("scene/level/boss.gd"), "extends Node2D\n");
        write(&dir.path().join("addons/tool.gd"), "extends EditorPlugin\n");

        let discovery = FileDiscovery::new(Config::default());
        let files = discovery.discover_files(dir.path()).unwrap();

        assert_eq!(files.len(), 3);
    }

    #[test]
    fn skips_missing_roots() {
        let dir = tempfile::tempdir().unwrap();
        write(&dir.path().join("script/a.gd"), "extends Node\n");

        let discovery = FileDiscovery::new(Config::default());
        let files = discovery.discover_files(dir.path()).unwrap();

        assert_eq!(files.len(), 1);
    }

    #[test]
    fn empty_tree_yields_no_files() {
        let dir = tempfile::tempdir().unwrap();

        let discovery = FileDiscovery::new(Config::default());
        let files = discovery.discover_files(dir.path()).unwrap();

        assert!(files.is_empty());
    }

    #[test]
    fn skips_files_over_size_limit() {
        let dir = tempfile::tempdir().unwrap();
        write(&dir.path().join("script/big.gd"), &"x".repeat(64));
        write(&dir.path().join("script/small.gd"), "extends Node\n");

        let mut config = Config::default();
        config.max_file_size = 32;

        let discovery = FileDiscovery::new(config);
        let files = discovery.discover_files(dir.path()).unwrap();

        assert_eq!(files.len(), 1);
        assert!(files[0].path.ends_with("script/small.gd"));
    }

    #[test]
    fn stats_count_files_by_extension() {
        let dir = tempfile::tempdir().unwrap();
        write(&dir.path().join("script/a.gd"), "extends Node\n");
        write(&dir.path().join("script/b.gd"), "extends Node\n");

        let discovery = FileDiscovery::new(Config::default());
        let files = discovery.discover_files(dir.path()).unwrap();
        let stats = discovery.get_stats(&files);

        assert_eq!(stats.total_files, 2);
        assert_eq!(stats.extensions.get("gd"), Some(&2));
    }
}
