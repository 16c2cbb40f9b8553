use crate::svg::{SvgTarget, compose_svg_with};
use crate::wave::WaveConfig;
use crate::wave::generators::RandomSource;
use std::fs;
use std::path::{Path, PathBuf};

/// File name used when downloading a wave
pub const DOWNLOAD_FILE_NAME: &str = "wave.svg";

/// Media type of the exported document
pub const SVG_MIME_TYPE: &str = "image/svg+xml";

/// Errors that can occur when exporting a wave
#[derive(thiserror::Error, Debug)]
pub enum ExportError {
    #[error("cannot write to {0}: {1}")]
    Write(PathBuf, std::io::Error),

    #[error("export directory {0} does not exist")]
    MissingDirectory(PathBuf),
}

/// Compose the export document for `config` and write it to `path`.
pub fn export_svg(config: &WaveConfig, path: &Path, rng: &mut dyn RandomSource) -> Result<PathBuf, ExportError> {
    let document = compose_svg_with(config, SvgTarget::Export, rng);
    write_document(&document, path)
}

/// Write the export document to [DOWNLOAD_FILE_NAME] inside `directory`.
pub fn download_svg(
    config: &WaveConfig,
    directory: &Path,
    rng: &mut dyn RandomSource,
) -> Result<PathBuf, ExportError> {
    if !directory.is_dir() {
        return Err(ExportError::MissingDirectory(directory.to_path_buf()));
    }
    export_svg(config, &directory.join(DOWNLOAD_FILE_NAME), rng)
}

/// Write an already composed document to `path`.
pub fn write_document(document: &str, path: &Path) -> Result<PathBuf, ExportError> {
    fs::write(path, document).map_err(|e| ExportError::Write(path.to_path_buf(), e))?;
    log::debug!("wrote {} bytes of {SVG_MIME_TYPE} to {}", document.len(), path.display());
    Ok(path.to_path_buf())
}
