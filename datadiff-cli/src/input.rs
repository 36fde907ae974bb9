//! Loading JSON record files into tables.

use std::path::{Path, PathBuf};

use datadiff_core::{ExtractError, Table};
use thiserror::Error;

/// Errors raised while turning a file into a [`Table`].
#[derive(Error, Debug)]
pub enum InputError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON in {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("{}: {source}", path.display())]
    Extract {
        path: PathBuf,
        #[source]
        source: ExtractError,
    },
}

/// Read `path` as a JSON array of objects and extract a table labelled `name`.
pub fn load_table(path: &Path, name: &str) -> Result<Table, InputError> {
    let content = std::fs::read_to_string(path).map_err(|source| InputError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_table(&content, path, name)
}

fn parse_table(content: &str, path: &Path, name: &str) -> Result<Table, InputError> {
    let json: serde_json::Value =
        serde_json::from_str(content).map_err(|source| InputError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    let table = Table::from_json(name, &json).map_err(|source| InputError::Extract {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!(
        path = %path.display(),
        rows = table.len(),
        columns = table.columns.len(),
        "Loaded table"
    );

    Ok(table)
}
