use crate::{config::Config, file_discovery::FileInfo, transformer::Transformer};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FileStatus {
    Modified,
    Unchanged,
    Failed(String),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileOutcome {
    pub path: PathBuf,
    pub status: FileStatus,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct RunOutcome {
    pub outcomes: Vec<FileOutcome>,
    pub processed: usize,
    pub modified: usize,
    pub failed: usize,
}

impl RunOutcome {
    pub fn print_summary(&self) {
        println!(
            "\nProcessed {} files, modified {} files",
            self.processed, self.modified
        );
    }
}

pub struct Processor {
    transformer: Transformer,
    dry_run: bool,
}

impl Processor {
    pub fn new(config: &Config, dry_run: bool) -> crate::Result<Self> {
        Ok(Self {
            transformer: Transformer::new(&config.flags)?,
            dry_run,
        })
    }

    /// Transform one file in place. The file is fully read and closed before
    /// any write happens, so a read failure never leaves a partial write.
    /// Returns true if the transformed text differed from the original.
    pub fn process_file(&self, path: &Path) -> crate::Result<bool> {
        let original = fs::read_to_string(path)?;
        let outcome = self.transformer.transform(&original)?;

        if !outcome.changed {
            return Ok(false);
        }

        if !self.dry_run {
            fs::write(path, &outcome.content)?;
        }

        Ok(true)
    }

    /// Process every discovered file sequentially. Per-file errors are logged
    /// to stderr and recorded; they never abort the run.
    pub fn run(&self, files: &[FileInfo]) -> RunOutcome {
        let mut run = RunOutcome::default();

        for file in files {
            run.processed += 1;

            match self.process_file(&file.path) {
                Ok(true) => {
                    run.modified += 1;
                    println!("✓ {}", file.path.display());
                    run.outcomes.push(FileOutcome {
                        path: file.path.clone(),
                        status: FileStatus::Modified,
                    });
                }
                Ok(false) => {
                    println!("  {}", file.path.display());
                    run.outcomes.push(FileOutcome {
                        path: file.path.clone(),
                        status: FileStatus::Unchanged,
                    });
                }
                Err(e) => {
                    eprintln!("Error processing {}: {}", file.path.display(), e);
                    run.failed += 1;
                    run.outcomes.push(FileOutcome {
                        path: file.path.clone(),
                        status: FileStatus::Failed(e.to_string()),
                    });
                }
            }
        }

        run
    }
}
