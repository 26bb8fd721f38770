use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use log::{error, info, warn};

use crate::alignment::{minimal_align, strict_align};
use crate::app_config::{AlignmentMode, Config};
use crate::edl_processor;
use crate::file_utils::FileManager;
use crate::subtitle_processor::SubtitleCollection;

// @module: Application controller for subtitle alignment

/// Tag inserted into generated output filenames (movie.srt -> movie.aligned.srt)
const OUTPUT_TAG: &str = "aligned";

/// Main application controller for subtitle alignment
pub struct Controller {
    // @field: App configuration
    config: Config,
}

impl Controller {
    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        Ok(Self { config })
    }

    /// Align a single subtitle file against an edit decision list.
    ///
    /// When `output` is absent the result lands next to the input file with
    /// the `aligned` tag in its name. An existing output is left untouched
    /// unless `force_overwrite` is set.
    pub async fn run(
        &self,
        edl_file: PathBuf,
        subtitle_file: PathBuf,
        output: Option<PathBuf>,
        force_overwrite: bool,
    ) -> Result<()> {
        // Start timing the process
        let start_time = std::time::Instant::now();

        if !edl_file.exists() {
            return Err(anyhow!("Edit list file does not exist: {:?}", edl_file));
        }
        if !subtitle_file.exists() {
            return Err(anyhow!("Subtitle file does not exist: {:?}", subtitle_file));
        }

        let output_path = match output {
            Some(path) => path,
            None => FileManager::generate_output_path(
                &subtitle_file,
                subtitle_file.parent().unwrap_or(Path::new(".")),
                OUTPUT_TAG,
                "srt",
            ),
        };

        if output_path.exists() && !force_overwrite {
            warn!("Skipping file, aligned output already exists (use -f to force overwrite)");
            return Ok(());
        }

        // Read both inputs up front; the alignment itself is pure computation
        let (edl_text, srt_text) = tokio::try_join!(
            Self::read_input(&edl_file),
            Self::read_input(&subtitle_file),
        )?;

        let cuts = edl_processor::extract_cuts(&edl_text, self.config.frame_rate);
        let entries = SubtitleCollection::parse_srt_string(&srt_text)
            .with_context(|| format!("Failed to parse subtitle file: {:?}", subtitle_file))?;

        info!("Frame rate: {}", self.config.frame_rate);
        info!("Cut points: {}", cuts.len());
        info!("Subtitle cues: {}", entries.len());
        info!("Mode: {}", self.config.mode.display_name());

        if cuts.is_empty() {
            warn!("No cut points found in edit list, timing will pass through unchanged");
        }

        let aligned = match self.config.mode {
            AlignmentMode::Strict => strict_align(&entries, &cuts),
            AlignmentMode::Minimal => minimal_align(&entries, &cuts),
        };

        let content = SubtitleCollection::compose_srt(&aligned);
        tokio::fs::write(&output_path, content)
            .await
            .with_context(|| format!("Failed to write aligned subtitle: {:?}", output_path))?;

        info!(
            "Aligned subtitle written to {:?} in {:.2}s",
            output_path,
            start_time.elapsed().as_secs_f64()
        );

        Ok(())
    }

    /// Align every subtitle file under a directory against one edit list.
    ///
    /// Previously generated outputs are skipped; a failure on one file is
    /// logged and does not stop the rest of the batch.
    pub async fn run_folder(
        &self,
        edl_file: PathBuf,
        input_dir: PathBuf,
        force_overwrite: bool,
    ) -> Result<()> {
        info!("Starting alignment for directory: {:?}", input_dir);

        let subtitle_files: Vec<PathBuf> = FileManager::find_files(&input_dir, "srt")?
            .into_iter()
            .filter(|path| !Self::is_aligned_output(path))
            .collect();

        if subtitle_files.is_empty() {
            warn!("No subtitle files found in directory: {:?}", input_dir);
            return Ok(());
        }

        let progress_bar = ProgressBar::new(subtitle_files.len() as u64);
        let template_result = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files ({percent}%) {msg} {eta}")
            .unwrap_or_else(|_| ProgressStyle::default_bar());
        progress_bar.set_style(template_result);

        let mut processed_count = 0;
        for subtitle_file in &subtitle_files {
            if let Err(e) = self
                .run(edl_file.clone(), subtitle_file.clone(), None, force_overwrite)
                .await
            {
                error!("Error processing {:?}: {}", subtitle_file, e);
            } else {
                processed_count += 1;
            }
            progress_bar.inc(1);
        }
        progress_bar.finish_and_clear();

        info!(
            "Finished processing {} of {} subtitle files",
            processed_count,
            subtitle_files.len()
        );

        Ok(())
    }

    /// Read one input file as text
    async fn read_input(path: &Path) -> Result<String> {
        tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read file: {:?}", path))
    }

    /// True for files this tool generated itself (movie.aligned.srt)
    fn is_aligned_output(path: &Path) -> bool {
        path.file_stem()
            .map(|stem| stem.to_string_lossy().ends_with(&format!(".{}", OUTPUT_TAG)))
            .unwrap_or(false)
    }
}
