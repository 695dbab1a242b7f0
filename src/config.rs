use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

const CONFIG_PATH: &str = "userconfig.cfg";

#[derive(Debug, Serialize, Deserialize)]
pub struct UserConfig {
    pub quiz_folder: PathBuf,
    /// When set, this file is loaded at startup and the file-selection
    /// screen is skipped.
    #[serde(default)]
    pub questions_file: Option<PathBuf>,
    pub file_history: Vec<(String, i64)>,
}

impl Default for UserConfig {
    fn default() -> Self {
        Self {
            quiz_folder: PathBuf::from("."),
            questions_file: None,
            file_history: Vec::new(),
        }
    }
}

impl UserConfig {
    pub fn load() -> Self {
        match fs::read_to_string(CONFIG_PATH) {
            Ok(contents) => serde_json::from_str(&contents).unwrap_or_default(),
            Err(_) => Self::default(),
        }
    }

    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        let contents = serde_json::to_string_pretty(self)?;
        fs::write(CONFIG_PATH, contents)?;
        Ok(())
    }

    pub fn update_file_history(&mut self, filename: String) {
        let timestamp = chrono::Utc::now().timestamp();
        self.file_history.retain(|(f, _)| f != &filename);
        self.file_history.insert(0, (filename, timestamp));
        if self.file_history.len() > 10 {
            self.file_history.truncate(10);
        }
    }
}
