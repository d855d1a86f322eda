use fractic_server_error::ServerError;

use crate::errors::ExportWriteError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExportFormat {
    Spreadsheet,
    Document,
    Csv,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Spreadsheet => "xlsx",
            ExportFormat::Document => "pdf",
            ExportFormat::Csv => "csv",
        }
    }
}

/// A rendered export, ready to be handed to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedFile {
    pub file_name: String,
    pub format: ExportFormat,
    pub bytes: Vec<u8>,
}

impl ExportedFile {
    /// Writes the file into `dir` under its file name.
    pub fn write_to_dir<P>(&self, dir: P) -> Result<std::path::PathBuf, ServerError>
    where
        P: AsRef<std::path::Path>,
    {
        let path = dir.as_ref().join(&self.file_name);
        std::fs::write(&path, &self.bytes)
            .map_err(|e| ExportWriteError::with_debug(&self.file_name, &e))?;
        Ok(path)
    }
}
