//! Command-line interface for batch style analysis of image files

use crate::analysis::{ColorAnalysis, metrics, palette};
use crate::catalog::{Product, catalog};
use crate::curation::StyleCurator;
use crate::curation::profile::StyleProfile;
use crate::io::configuration::{DEFAULT_SEED, DEFAULT_STORE_FILE, MAX_RECOMMENDATIONS};
use crate::io::error::Result;
use crate::io::image::{has_supported_extension, load_pixel_grid};
use crate::io::progress::ProgressManager;
use crate::io::store::JsonFileStore;
use clap::Parser;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "elanvir")]
#[command(
    author,
    version,
    about = "Analyze inspiration images and curate matching ElanVir products"
)]
/// Command-line arguments for the style analysis tool
pub struct Cli {
    /// Input image file or directory to analyze
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Random seed for reproducible recommendation shuffles
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Maximum number of recommended products
    #[arg(short, long, default_value_t = MAX_RECOMMENDATIONS)]
    pub limit: usize,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Preference store file holding the style profile and related entries
    #[arg(long, default_value = DEFAULT_STORE_FILE)]
    pub store: PathBuf,

    /// Also print recommendations biased by the stored style profile
    #[arg(short, long)]
    pub profile: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Orchestrates batch analysis of image files with progress tracking
pub struct FileProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
    curator: StyleCurator<'static>,
}

impl FileProcessor {
    /// Create a new file processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);
        let curator = StyleCurator::new(catalog(), cli.seed).with_limit(cli.limit);

        Self {
            cli,
            progress_manager,
            curator,
        }
    }

    /// Process files according to CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if target validation, file collection or the
    /// preference store fails
    pub fn process(&mut self) -> Result<()> {
        let files = self.collect_files()?;

        if files.is_empty() {
            return Ok(());
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        for (index, file) in files.iter().enumerate() {
            self.process_file(file, index);
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.finish();
        }

        if self.cli.profile {
            self.report_profile_picks()?;
        }

        Ok(())
    }

    fn collect_files(&self) -> Result<Vec<PathBuf>> {
        if self.cli.target.is_file() {
            if has_supported_extension(&self.cli.target) {
                Ok(vec![self.cli.target.clone()])
            } else {
                Err(crate::io::error::io_error(
                    "Target file must be a JPEG, PNG or GIF image",
                ))
            }
        } else if self.cli.target.is_dir() {
            let mut files = Vec::new();
            for entry in std::fs::read_dir(&self.cli.target)? {
                let path = entry?.path();
                if has_supported_extension(&path) {
                    files.push(path);
                }
            }
            files.sort();
            Ok(files)
        } else {
            Err(crate::io::error::io_error(
                "Target must be an image file or directory",
            ))
        }
    }

    fn process_file(&mut self, input_path: &Path, index: usize) {
        if let Some(ref mut pm) = self.progress_manager {
            pm.start_file(index, input_path);
        }

        // Decode failures substitute the fallback analysis rather than
        // aborting the batch
        let analysis = match load_pixel_grid(input_path) {
            Ok(grid) => {
                self.update_stage(index, 1);
                let dominant_colors = palette::dominant_colors(&grid);
                self.update_stage(index, 2);
                let brightness = metrics::brightness(&grid);
                let saturation = metrics::saturation(&grid);
                self.update_stage(index, 3);
                ColorAnalysis {
                    dominant_colors,
                    brightness,
                    saturation,
                }
            }
            Err(_) => ColorAnalysis::fallback(),
        };

        let picks = self.curator.recommend(&analysis);
        self.update_stage(index, 4);

        if let Some(ref mut pm) = self.progress_manager {
            pm.complete_file(index);
        }

        Self::report_analysis(input_path, &analysis, &picks);
    }

    fn update_stage(&mut self, index: usize, stage: usize) {
        if let Some(ref mut pm) = self.progress_manager {
            pm.update_stage(index, stage);
        }
    }

    // Allow print for the user-facing analysis report
    #[allow(clippy::print_stdout)]
    fn report_analysis(input_path: &Path, analysis: &ColorAnalysis, picks: &[&Product]) {
        println!("{}", input_path.display());
        println!("  Palette:    {}", analysis.dominant_colors.join(" "));
        println!("  Brightness: {:.0}%", analysis.brightness * 100.0);
        println!("  Saturation: {:.0}%", analysis.saturation * 100.0);
        println!("  Curated matches:");
        for (rank, product) in picks.iter().enumerate() {
            println!("    {}. {product}", rank + 1);
        }
    }

    // Allow print for the user-facing profile report
    #[allow(clippy::print_stdout)]
    fn report_profile_picks(&mut self) -> Result<()> {
        let store = JsonFileStore::open(&self.cli.store)?;
        let Some(profile) = StyleProfile::load(&store)? else {
            println!("No style profile stored at {}", self.cli.store.display());
            return Ok(());
        };

        let persona = profile.persona();
        let picks = self.curator.recommend_for_profile(&profile);

        println!("Style profile: {}", persona.title());
        println!("  {}", persona.description());
        println!("  Profile picks:");
        for (rank, product) in picks.iter().enumerate() {
            println!("    {}. {product}", rank + 1);
        }

        Ok(())
    }
}
