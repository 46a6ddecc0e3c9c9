use print_guard::{Config, FileDiscovery, Processor, Reporter};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "print-guard")]
#[command(about = "Disable debug print statements in GDScript files for production release")]
#[command(version = env!("CARGO_PKG_VERSION"))]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Process script files under the configured root directories
    Run {
        /// Base directory containing the project roots
        #[arg(short, long, default_value = ".")]
        path: PathBuf,

        /// Configuration file path
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Report what would change without rewriting any file
        #[arg(long)]
        dry_run: bool,

        /// Export a JSON/Markdown run report to this directory
        #[arg(long)]
        report: Option<PathBuf>,
    },
    /// Generate a default configuration file
    Config {
        /// Output path for the config file (defaults to ~/.print-guard.toml)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            path,
            config,
            dry_run,
            report,
        } => {
            run_transform(path, config, dry_run, report)?;
        }
        Commands::Config { output } => {
            generate_config(output)?;
        }
    }

    Ok(())
}

fn run_transform(
    base_path: PathBuf,
    config_path: Option<PathBuf>,
    dry_run: bool,
    report_path: Option<PathBuf>,
) -> anyhow::Result<()> {
    println!("🚀 Starting Print Guard");
    println!("=======================");

    let start_time = Instant::now();

    let config = if let Some(config_path) = config_path {
        Config::from_file(&config_path)?
    } else {
        Config::load()?
    };

    println!("🎯 Base directory: {}", base_path.display());
    if dry_run {
        println!("👀 Dry run: no files will be rewritten");
    }

    println!("\n🔍 Discovering script files...");
    let discovery = FileDiscovery::new(config.clone());
    let files = discovery.discover_files(&base_path)?;
    let stats = discovery.get_stats(&files);
    stats.print_summary();
    println!();

    let processor = Processor::new(&config, dry_run)?;
    let run = processor.run(&files);
    run.print_summary();

    if let Some(report_path) = report_path {
        let duration = start_time.elapsed();
        let reporter = Reporter::new();
        let report = reporter.generate_report(&run, duration.as_millis(), dry_run);
        let exported_files = reporter.export_report(&report, &report_path)?;

        println!("\n📁 Report exported to:");
        for file in exported_files {
            println!("   - {}", file.display());
        }
    }

    Ok(())
}

fn generate_config(output_path: Option<PathBuf>) -> anyhow::Result<()> {
    let config_path = output_path.unwrap_or_else(|| {
        Config::default_config_path().unwrap_or_else(|_| PathBuf::from("print-guard.toml"))
    });

    println!("📝 Generating configuration file: {}", config_path.display());

    let documented_config = Config::create_documented_config();
    std::fs::write(&config_path, documented_config)?;

    println!("✅ Configuration file created successfully!");
    println!("💡 Edit the file to customize which directories, extensions and flag names are used.");

    Ok(())
}
