use crate::processor::{FileOutcome, FileStatus, RunOutcome};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};

#[derive(Debug, Serialize, Deserialize)]
pub struct Report {
    pub metadata: ReportMetadata,
    pub files: Vec<FileOutcome>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ReportMetadata {
    pub generated_at: String,
    pub version: String,
    pub processed: usize,
    pub modified: usize,
    pub failed: usize,
    pub duration_ms: u128,
    pub dry_run: bool,
}

pub struct Reporter;

impl Reporter {
    pub fn new() -> Self {
        Self
    }

    pub fn generate_report(&self, run: &RunOutcome, duration_ms: u128, dry_run: bool) -> Report {
        Report {
            metadata: ReportMetadata {
                generated_at: chrono::Utc::now().to_rfc3339(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                processed: run.processed,
                modified: run.modified,
                failed: run.failed,
                duration_ms,
                dry_run,
            },
            files: run.outcomes.clone(),
        }
    }

    pub fn export_report(&self, report: &Report, output_path: &PathBuf) -> Result<Vec<PathBuf>> {
        fs::create_dir_all(output_path)?;
        let mut exported = Vec::new();

        let json_path = output_path.join("report.json");
        fs::write(&json_path, serde_json::to_string_pretty(report)?)?;
        exported.push(json_path);

        let md_path = output_path.join("report.md");
        fs::write(&md_path, self.render_markdown(report))?;
        exported.push(md_path);

        Ok(exported)
    }

    fn render_markdown(&self, report: &Report) -> String {
        let mut out = String::new();

        out.push_str("# Print Guard Report\n\n");
        out.push_str(&format!("Generated: {}\n\n", report.metadata.generated_at));
        if report.metadata.dry_run {
            out.push_str("**Dry run** — no files were rewritten.\n\n");
        }
        out.push_str(&format!(
            "Processed {} files, modified {}, failed {} ({} ms)\n\n",
            report.metadata.processed,
            report.metadata.modified,
            report.metadata.failed,
            report.metadata.duration_ms
        ));

        out.push_str("| File | Status |\n");
        out.push_str("|------|--------|\n");
        for file in &report.files {
            let status = match &file.status {
                FileStatus::Modified => "modified".to_string(),
                FileStatus::Unchanged => "unchanged".to_string(),
                FileStatus::Failed(message) => format!("failed: {}", message),
            };
            out.push_str(&format!("| {} | {} |\n", file.path.display(), status));
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn sample_run() -> RunOutcome {
        RunOutcome {
            outcomes: vec![
                FileOutcome {
                    path: PathBuf::from("script/a.gd"),
                    status: FileStatus::Modified,
                },
                FileOutcome {
                    path: PathBuf::from("script/b.gd"),
                    status: FileStatus::Unchanged,
                },
            ],
            processed: 2,
            modified: 1,
            failed: 0,
        }
    }

    #[test]
    fn report_carries_run_counts() {
        let reporter = Reporter::new();
        let report = reporter.generate_report(&sample_run(), 12, false);

        assert_eq!(report.metadata.processed, 2);
        assert_eq!(report.metadata.modified, 1);
        assert_eq!(report.metadata.failed, 0);
        assert_eq!(report.files.len(), 2);
    }

    #[test]
    fn export_writes_json_and_markdown() {
        let dir = tempfile::tempdir().unwrap();
        let reporter = Reporter::new();
        let report = reporter.generate_report(&sample_run(), 12, true);

        let exported = reporter
            .export_report(&report, &dir.path().to_path_buf())
            .unwrap();

        assert_eq!(exported.len(), 2);
        let json = std::fs::read_to_string(&exported[0]).unwrap();
        let parsed: Report = serde_json::from_str(&json).unwrap();
        assert!(parsed.metadata.dry_run);

        let markdown = std::fs::read_to_string(&exported[1]).unwrap();
        assert!(markdown.contains("script/a.gd"));
        assert!(markdown.contains("Dry run"));
    }
}
