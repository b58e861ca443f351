use indicatif::{ProgressBar, ProgressStyle};
use log::{error, info, warn};
use std::fmt;
use std::path::{Path, PathBuf};

use crate::app_config::Config;
use crate::document_processor::{Document, HeaderRewriter};
use crate::errors::AppError;
use crate::file_utils::FileManager;

// @module: Application controller for batch document translation

/// Counts reported after a processing run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProcessingSummary {
    /// Source documents matched by discovery
    pub discovered: usize,

    /// Documents for which a translation was written
    pub translated: usize,

    /// Documents skipped because their translation already exists
    pub skipped: usize,

    /// Documents that failed with a file access error
    pub failed: usize,
}

impl fmt::Display for ProcessingSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} discovered, {} translated, {} skipped, {} failed",
            self.discovered, self.translated, self.skipped, self.failed
        )
    }
}

/// Main application controller for placeholder translation
pub struct Controller {
    // @field: App configuration
    config: Config,

    // @field: Header rewriter for the configured target language
    rewriter: HeaderRewriter,

    // @field: Language code inserted into output filenames
    language_infix: String,
}

impl Controller {
    /// Create a new controller for test purposes with default configuration
    pub fn new_for_test() -> Result<Self, AppError> {
        Self::with_config(Config::default())
    }

    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self, AppError> {
        let language_infix = config
            .language_infix()
            .map_err(|e| AppError::Config(e.to_string()))?;
        let rewriter = HeaderRewriter::new(&language_infix);

        Ok(Self {
            config,
            rewriter,
            language_infix,
        })
    }

    /// Check if the controller is properly initialized with configuration
    pub fn is_initialized(&self) -> bool {
        !self.config.source_language.is_empty() && !self.config.target_language.is_empty()
    }

    /// The destination path for a given source document: same directory,
    /// language infix inserted before the extension
    pub fn output_path_for(&self, source_file: &Path) -> PathBuf {
        let output_dir = source_file.parent().unwrap_or(Path::new("."));

        FileManager::generate_output_path(
            source_file,
            output_dir,
            &self.language_infix,
            self.config.document_extension.trim_start_matches('.'),
        )
    }

    /// Process a single source document
    pub fn run(&self, input_file: &Path) -> Result<ProcessingSummary, AppError> {
        if !FileManager::file_exists(input_file) {
            return Err(AppError::file_access(input_file, "file does not exist"));
        }

        let mut summary = ProcessingSummary::default();

        if FileManager::is_translated_output(input_file) {
            warn!(
                "Skipping {}, it is already a translated output",
                Self::display_name(input_file)
            );
            return Ok(summary);
        }

        summary.discovered = 1;
        self.process_document(input_file, &mut summary);

        info!("Translation completed: {}", summary);
        Ok(summary)
    }

    /// Run the workflow in folder mode, translating all source documents in a
    /// directory. Documents that already have a translation are skipped.
    pub fn run_folder(&self, input_dir: &Path) -> Result<ProcessingSummary, AppError> {
        // Check if the input directory exists
        if !FileManager::dir_exists(input_dir) {
            return Err(AppError::DirectoryNotFound {
                path: input_dir.to_path_buf(),
            });
        }

        let documents =
            FileManager::find_source_documents(input_dir, &self.config.document_extension)
                .map_err(|e| AppError::file_access(input_dir, e))?;

        let mut summary = ProcessingSummary {
            discovered: documents.len(),
            ..ProcessingSummary::default()
        };

        info!("Found {} documentation files to translate", summary.discovered);

        // Create a progress bar for folder processing
        let folder_pb = ProgressBar::new(documents.len() as u64);
        let template_result = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files ({percent}%) {msg} {eta}")
            .or_else(|_| ProgressStyle::default_bar().template("{spinner} [{elapsed_precise}] [{bar:40}] {pos}/{len} ({percent}%) {msg}"))
            .unwrap_or_else(|_| ProgressStyle::default_bar());
        folder_pb.set_style(template_result.progress_chars("█▓▒░"));
        folder_pb.set_message("Processing files");

        for document in &documents {
            folder_pb.set_message(format!("Processing: {}", Self::display_name(document)));
            self.process_document(document, &mut summary);
            folder_pb.inc(1);
        }

        folder_pb.finish_with_message("Folder processing complete");

        info!("Translation completed: {}", summary);
        Ok(summary)
    }

    /// Translate one document, updating the summary counters.
    ///
    /// A failure on one document is reported and counted but does not abort
    /// the rest of the batch.
    fn process_document(&self, source_file: &Path, summary: &mut ProcessingSummary) {
        let output_path = self.output_path_for(source_file);

        if output_path.exists() {
            warn!(
                "Skipping {}, translation already exists",
                Self::display_name(source_file)
            );
            summary.skipped += 1;
            return;
        }

        match self.translate_document(source_file, &output_path) {
            Ok(true) => {
                info!(
                    "Translated: {} -> {}",
                    Self::display_name(source_file),
                    Self::display_name(&output_path)
                );
                summary.translated += 1;
            }
            Ok(false) => {
                // Destination appeared between the existence check and the write
                warn!(
                    "Skipping {}, translation already exists",
                    Self::display_name(source_file)
                );
                summary.skipped += 1;
            }
            Err(e) => {
                error!("Error processing {}: {}", Self::display_name(source_file), e);
                summary.failed += 1;
            }
        }
    }

    /// Read, rewrite, and write one document. Returns `Ok(false)` when the
    /// destination already existed and nothing was written.
    fn translate_document(
        &self,
        source_file: &Path,
        output_path: &Path,
    ) -> Result<bool, AppError> {
        let document =
            Document::load(source_file).map_err(|e| AppError::file_access(source_file, e))?;

        let translated = self.rewriter.rewrite_document(&document);

        FileManager::write_new(output_path, &translated)
            .map_err(|e| AppError::file_access(output_path, e))
    }

    // Filename for display in progress and log messages
    fn display_name(path: &Path) -> String {
        path.file_name()
            .map(|f| f.to_string_lossy().to_string())
            .unwrap_or_else(|| "unknown".to_string())
    }
}
