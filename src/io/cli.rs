//! Command-line interface for reassembling a directory of strips

use crate::algorithm::assembler::{Assembly, AssemblyConfig, GreedyAssembler};
use crate::io::configuration::{
    CONTACT_SHEET_BUFFER_WIDTH, DEFAULT_OUTPUT, GIF_FRAME_DELAY_MS, VISUALIZATION_SUFFIX,
};
use crate::io::error::Result;
use crate::io::progress::ProgressManager;
use crate::io::store::{FileSystemStore, ImageStore};
use crate::io::visualization::AssemblyCapture;
use crate::model::strip::Strip;
use clap::Parser;
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Parser)]
#[command(name = "unshred")]
#[command(
    author,
    version,
    about = "Reassemble an image cut into vertical strips"
)]
/// Command-line arguments for the reassembly tool
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Directory holding one image file per strip
    #[arg(value_name = "SOURCE")]
    pub source: PathBuf,

    /// Where to write the reassembled PNG
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Write a preview of the result to the temporary directory
    #[arg(short, long)]
    pub show: bool,

    /// Score candidates in parallel
    #[arg(short, long)]
    pub parallel: bool,

    /// Record every merge round as an animated GIF next to the output
    #[arg(short, long)]
    pub visualize: bool,

    /// Suppress progress output and the summary
    #[arg(short, long)]
    pub quiet: bool,

    /// Log every merge decision
    #[arg(long)]
    pub verbose: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Assembly parameters selected on the command line
    pub const fn assembly_config(&self) -> AssemblyConfig {
        AssemblyConfig {
            parallel: self.parallel,
        }
    }

    /// Path of the assembly animation, derived from the output path
    pub fn visualization_path(&self) -> PathBuf {
        let stem = self.output.file_stem().unwrap_or_default();
        let name = format!("{}{VISUALIZATION_SUFFIX}.gif", stem.to_string_lossy());

        if let Some(parent) = self.output.parent() {
            parent.join(name)
        } else {
            PathBuf::from(name)
        }
    }
}

/// Runs one reassembly from source directory to output file
pub struct Reassembler<S = FileSystemStore> {
    cli: Cli,
    store: S,
    progress_manager: Option<ProgressManager>,
}

impl Reassembler {
    /// Create a reassembler reading and writing the local file system
    pub fn new(cli: Cli) -> Self {
        Self::with_store(cli, FileSystemStore::new())
    }
}

impl<S: ImageStore> Reassembler<S> {
    /// Create a reassembler over a custom image store
    pub fn with_store(cli: Cli, store: S) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            store,
            progress_manager,
        }
    }

    /// Load, assemble and save according to the CLI arguments
    ///
    /// Nothing is written unless assembly succeeds.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The source directory is missing or unreadable
    /// - A source file cannot be decoded
    /// - The directory holds no files
    /// - Two strips differ in height
    /// - The result cannot be written
    pub fn process(&mut self) -> Result<Assembly> {
        let result = self.run_pipeline();

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        result
    }

    fn run_pipeline(&mut self) -> Result<Assembly> {
        let start_time = Instant::now();
        let files = self.store.list_files(&self.cli.source)?;
        let strips = self.load_strips(&files)?;

        let mut assembler = GreedyAssembler::new(strips, self.cli.assembly_config())?;
        let mut capture = self
            .cli
            .visualize
            .then(|| AssemblyCapture::new(CONTACT_SHEET_BUFFER_WIDTH));

        if let Some(ref mut capture) = capture {
            capture.record(assembler.working_set())?;
        }
        if let Some(ref mut pm) = self.progress_manager {
            pm.start_merging(assembler.remaining().saturating_sub(1));
        }

        while let Some(record) = assembler.merge_round()? {
            if let Some(ref pm) = self.progress_manager {
                pm.round_completed(&record);
            }
            if let Some(ref mut capture) = capture {
                capture.record(assembler.working_set())?;
            }
        }

        let assembly = assembler.run()?;

        let animation = self.cli.visualization_path();
        let written = self.write_results(&assembly, capture.as_ref(), &animation);
        if written.is_err() && capture.is_some() {
            let _ = std::fs::remove_file(&animation);
        }
        written?;

        if !self.cli.quiet {
            self.report(&files, &assembly, start_time);
        }

        Ok(assembly)
    }

    // The result is written last so an earlier failure leaves no output file
    fn write_results(
        &self,
        assembly: &Assembly,
        capture: Option<&AssemblyCapture>,
        animation: &Path,
    ) -> Result<()> {
        if let Some(capture) = capture {
            capture.export_gif(animation, GIF_FRAME_DELAY_MS)?;
        }

        if self.cli.show {
            self.store.show(&assembly.strip)?;
        }

        self.store.save(&assembly.strip, &self.cli.output)
    }

    fn load_strips(&mut self, files: &[PathBuf]) -> Result<Vec<Strip>> {
        if let Some(ref mut pm) = self.progress_manager {
            pm.start_loading(files.len());
        }

        files
            .iter()
            .map(|path| -> Result<Strip> {
                let strip = self.store.load(path)?;
                if let Some(ref pm) = self.progress_manager {
                    pm.file_loaded(path);
                }
                Ok(strip)
            })
            .collect()
    }

    // Allow print for the user-facing summary
    #[allow(clippy::print_stderr)]
    fn report(&self, files: &[PathBuf], assembly: &Assembly, start_time: Instant) {
        let names: Vec<String> = assembly
            .order
            .iter()
            .filter_map(|&index| files.get(index))
            .map(|path| display_name(path))
            .collect();

        eprintln!(
            "Reassembled {} strips into {} ({}x{}, total cost {}) in {:.2?}",
            files.len(),
            self.cli.output.display(),
            assembly.strip.width(),
            assembly.strip.height(),
            assembly.total_cost,
            start_time.elapsed()
        );
        eprintln!("Order: {}", names.join(" | "));
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .unwrap_or_default()
        .to_string_lossy()
        .to_string()
}
