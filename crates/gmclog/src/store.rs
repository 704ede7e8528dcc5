use std::fs;
use std::io;
use std::path::PathBuf;

use thiserror::Error;
use uuid::Uuid;

const TOKEN_LEN: usize = 8;
const DATA_FILE: &str = "data.csv";
const FLAGS_FILE: &str = "flags.csv";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Bad request.")]
    BadToken,

    #[error("File not found.")]
    NotFound,

    #[error("storage I/O failed: {0}")]
    Io(#[from] io::Error),
}

/// Flat-file store mapping short random tokens to a stored log pair:
/// `<root>/<token>/data.csv` plus an optional `flags.csv`.
#[derive(Debug, Clone)]
pub struct LogStore {
    root: PathBuf,
}

impl LogStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Stores a data/flags pair under a fresh token and returns the token.
    pub fn store(&self, data: &str, flags: Option<&str>) -> Result<String, StoreError> {
        let mut token = Uuid::new_v4().simple().to_string();
        token.truncate(TOKEN_LEN);

        let dir = self.root.join(&token);
        fs::create_dir_all(&dir)?;
        fs::write(dir.join(DATA_FILE), data)?;
        if let Some(flags) = flags {
            fs::write(dir.join(FLAGS_FILE), flags)?;
        }

        Ok(token)
    }

    /// Loads the stored pair for a token. The token is reduced to its
    /// alphanumeric characters before lookup, so it can never escape the
    /// store root. A missing flags file is not an error.
    pub fn load(&self, token: &str) -> Result<(String, Option<String>), StoreError> {
        let clean: String = token
            .chars()
            .filter(char::is_ascii_alphanumeric)
            .collect();
        if clean.is_empty() {
            return Err(StoreError::BadToken);
        }

        let dir = self.root.join(&clean);
        let data = match fs::read_to_string(dir.join(DATA_FILE)) {
            Ok(data) => data,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                return Err(StoreError::NotFound)
            }
            Err(err) => return Err(err.into()),
        };
        let flags = match fs::read_to_string(dir.join(FLAGS_FILE)) {
            Ok(flags) => Some(flags),
            Err(err) if err.kind() == io::ErrorKind::NotFound => None,
            Err(err) => return Err(err.into()),
        };

        Ok((data, flags))
    }
}
