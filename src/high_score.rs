use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use log::{info, warn};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Key the best score is stored under.
pub const HIGH_SCORE_KEY: &str = "highScore";

pub trait ScoreStore {
    fn load(&self) -> Result<u32>;
    fn save(&mut self, best: u32) -> Result<()>;
}

#[derive(Serialize, Deserialize, Default)]
struct ScoreFile {
    #[serde(rename = "highScore", default, skip_serializing_if = "Option::is_none")]
    high_score: Option<Value>,
    /// Entries written by anything else sharing the file
    #[serde(flatten)]
    other: Map<String, Value>,
}

/// A JSON object on disk used as a small key-value store.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonFileStore { path: path.into() }
    }

    /// Anything short of a readable JSON object comes back as an empty file.
    fn read_file(&self) -> ScoreFile {
        if !self.path.exists() {
            return ScoreFile::default();
        }
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(err) => {
                warn!("cannot read {}: {}", self.path.display(), err);
                return ScoreFile::default();
            }
        };
        match serde_json::from_str::<ScoreFile>(&text) {
            Ok(file) => file,
            Err(err) => {
                warn!("ignoring contents of {}: {}", self.path.display(), err);
                ScoreFile::default()
            }
        }
    }
}

impl ScoreStore for JsonFileStore {
    fn load(&self) -> Result<u32> {
        let file = self.read_file();
        let best = match &file.high_score {
            None => 0,
            Some(value) => parse_score(value).unwrap_or_else(|| {
                warn!("unreadable {} entry {}, starting from 0", HIGH_SCORE_KEY, value);
                0
            }),
        };
        info!("loaded best score {} from {}", best, self.path.display());
        Ok(best)
    }

    fn save(&mut self, best: u32) -> Result<()> {
        let mut file = self.read_file();
        file.high_score = Some(Value::from(best));

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("creating {}", parent.display()))?;
            }
        }
        let text = serde_json::to_string_pretty(&file)?;
        fs::write(&self.path, text).with_context(|| format!("writing {}", self.path.display()))?;
        info!("saved best score {} to {}", best, self.path.display());
        Ok(())
    }
}

// browser storage keeps strings, so accept "128" as well as 128
fn parse_score(value: &Value) -> Option<u32> {
    match value {
        Value::Number(n) => n.as_u64().and_then(|n| u32::try_from(n).ok()),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

#[derive(Default)]
pub struct MemoryStore {
    best: u32,
}

impl MemoryStore {
    pub fn new(best: u32) -> Self {
        MemoryStore { best }
    }
}

impl ScoreStore for MemoryStore {
    fn load(&self) -> Result<u32> {
        Ok(self.best)
    }

    fn save(&mut self, best: u32) -> Result<()> {
        self.best = best;
        Ok(())
    }
}
