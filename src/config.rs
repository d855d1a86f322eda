use std::{fs, path::PathBuf};

use fractic_server_error::ServerError;

use crate::errors::{InvalidRon, ReadError};

/// Runtime settings, usually read from a RON file such as:
///
/// ```ron
/// (
///     data_dir: "/var/lib/stock-ledger",
///     export_file_name: "relatorio_estoque",
/// )
/// ```
///
/// Omitted fields keep their defaults.
#[derive(Debug, Clone, PartialEq, Eq, serde_derive::Deserialize)]
#[serde(default)]
pub struct StockLedgerConfig {
    /// Directory holding one `<key>.json` file per stored key.
    pub data_dir: PathBuf,
    /// Base name of exported files, without extension.
    pub export_file_name: String,
    /// Title line of the pdf report.
    pub report_title: String,
}

impl Default for StockLedgerConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("./stock-ledger-data"),
            export_file_name: "relatorio_estoque".to_string(),
            report_title: "Relatório de Movimentação de Estoque".to_string(),
        }
    }
}

impl StockLedgerConfig {
    pub fn from_ron_str(s: &str) -> Result<Self, ServerError> {
        ron::from_str(s).map_err(|e| InvalidRon::with_debug("StockLedgerConfig", &e))
    }

    pub fn from_file<P>(path: P) -> Result<Self, ServerError>
    where
        P: AsRef<std::path::Path>,
    {
        Self::from_ron_str(&fs::read_to_string(path).map_err(|e| ReadError::with_debug(&e))?)
    }
}
