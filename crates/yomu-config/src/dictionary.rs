use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DictionaryConfig {
    /// jmdict-simplified JSON snapshot
    pub path: String,
    /// Snapshots merged on top of `path`, later files win on duplicate ids
    #[serde(default)]
    pub extra_paths: Vec<String>,
}

impl DictionaryConfig {
    pub fn from_vars<F>(var: &F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let path = var("JMDICT_PATH")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| "jmdict-eng.json".to_string());

        let extra_paths = var("JMDICT_EXTRA_PATHS")
            .map(|v| {
                v.split(':')
                    .map(str::trim)
                    .filter(|p| !p.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        Self { path, extra_paths }
    }
}
