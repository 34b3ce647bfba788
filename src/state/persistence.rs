use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::{FoodEntry, FoodTemplate};

/// On-disk layout of the food journal.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JournalFile {
    #[serde(default)]
    pub entries: Vec<FoodEntry>,

    #[serde(default)]
    pub templates: Vec<FoodTemplate>,
}

/// Load the journal from a JSON file. A missing file is an empty journal.
///
/// Templates are deduplicated by lowercase name (last occurrence wins).
pub fn load_journal<P: AsRef<Path>>(path: P) -> Result<JournalFile> {
    let path = path.as_ref();
    if !path.exists() {
        return Ok(JournalFile::default());
    }

    let content = fs::read_to_string(path)?;
    let mut journal: JournalFile = serde_json::from_str(&content)?;
    journal.templates = dedup_templates(journal.templates);
    Ok(journal)
}

/// Save the journal to a JSON file.
pub fn save_journal<P: AsRef<Path>>(path: P, journal: &JournalFile) -> Result<()> {
    let json = serde_json::to_string_pretty(journal)?;
    fs::write(path, json)?;
    Ok(())
}

fn dedup_templates(templates: Vec<FoodTemplate>) -> Vec<FoodTemplate> {
    let mut order: Vec<String> = Vec::new();
    let mut seen: HashMap<String, FoodTemplate> = HashMap::new();
    for template in templates {
        let key = template.key();
        if !seen.contains_key(&key) {
            order.push(key.clone());
        }
        seen.insert(key, template);
    }

    order
        .into_iter()
        .filter_map(|key| seen.remove(&key))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_and_save_roundtrip() {
        let json = r#"{
            "entries": [{"date": "2024-06-23", "name": "Apple", "grams": 100, "calories": 52}],
            "templates": [{"name": "Rice", "grams": 100, "calories": 130}]
        }"#;

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let journal = load_journal(file.path()).unwrap();
        assert_eq!(journal.entries.len(), 1);
        assert_eq!(journal.entries[0].name, "Apple");
        assert_eq!(journal.templates[0].name, "Rice");

        let out_file = NamedTempFile::new().unwrap();
        save_journal(out_file.path(), &journal).unwrap();

        let reloaded = load_journal(out_file.path()).unwrap();
        assert_eq!(reloaded.entries, journal.entries);
        assert_eq!(reloaded.templates.len(), 1);
    }

    #[test]
    fn test_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let journal = load_journal(dir.path().join("nope.json")).unwrap();
        assert!(journal.entries.is_empty());
        assert!(journal.templates.is_empty());
    }

    #[test]
    fn test_template_deduplication() {
        let json = r#"{
            "templates": [
                {"name": "Rice", "grams": 100, "calories": 130},
                {"name": "Oats", "grams": 40, "calories": 150},
                {"name": "rice", "grams": 200, "calories": 260}
            ]
        }"#;

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let journal = load_journal(file.path()).unwrap();
        assert_eq!(journal.templates.len(), 2);
        // Last occurrence wins, first position kept
        assert_eq!(journal.templates[0].grams, 200.0);
        assert_eq!(journal.templates[1].name, "Oats");
    }

    #[test]
    fn test_malformed_json_is_error() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"{ not json").unwrap();
        assert!(load_journal(file.path()).is_err());
    }
}
