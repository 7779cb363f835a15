use crate::config::Config;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

pub fn list(config: &Config) -> Result<()> {
    let toml_str = toml::to_string_pretty(config).context("Failed to serialize config")?;
    println!("{}", toml_str);
    Ok(())
}

/// Look up a dotted key such as `business_hours.opens_at`.
pub fn lookup(key: &str, config: &Config) -> Result<serde_json::Value> {
    let value = serde_json::to_value(config).context("Failed to serialize config")?;

    let mut current = &value;
    for part in key.split('.') {
        current = current
            .get(part)
            .with_context(|| format!("Key not found: {}", part))?;
    }

    Ok(current.clone())
}

pub fn get(key: &str, config: &Config) -> Result<()> {
    match lookup(key, config)? {
        serde_json::Value::String(s) => println!("{}", s),
        serde_json::Value::Null => println!("(not set)"),
        v => println!("{}", v),
    }
    Ok(())
}

/// Update a dotted key in the config file, keeping every other entry.
///
/// The result is validated before anything is written.
pub fn set(path: &Path, key: &str, value: &str) -> Result<()> {
    let mut table: toml::Table = if path.exists() {
        fs::read_to_string(path)
            .context("Failed to read config file")?
            .parse()
            .context("Failed to parse config file")?
    } else {
        toml::Table::new()
    };

    let parts: Vec<&str> = key.split('.').collect();
    let (last, parents) = parts.split_last().context("Empty config key")?;

    let mut current = &mut table;
    for part in parents {
        current = current
            .entry(part.to_string())
            .or_insert(toml::Value::Table(toml::Table::new()))
            .as_table_mut()
            .with_context(|| format!("Key is not a table: {}", part))?;
    }
    current.insert(last.to_string(), parse_value(value));

    let rendered = toml::to_string_pretty(&table).context("Failed to serialize config")?;
    let updated: Config = toml::from_str(&rendered)
        .with_context(|| format!("Invalid value for {}: {}", key, value))?;
    updated.validate()?;
    lookup(key, &updated).with_context(|| format!("Unknown config key: {}", key))?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    fs::write(path, rendered).context("Failed to write config file")?;

    println!("✓ Set {} = {}", key, value);
    Ok(())
}

fn parse_value(value: &str) -> toml::Value {
    match value.parse::<i64>() {
        Ok(n) => toml::Value::Integer(n),
        Err(_) => toml::Value::String(value.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::unit::Unit;
    use tempfile::TempDir;

    #[test]
    fn test_lookup_nested_key() {
        let mut config = Config::default();
        config.business_hours.opens_at = Some(9);

        assert_eq!(
            lookup("business_hours.opens_at", &config).unwrap(),
            serde_json::json!(9)
        );
        assert_eq!(
            lookup("business_hours.unit", &config).unwrap(),
            serde_json::json!("minutes")
        );
        assert!(lookup("business_hours.lunch", &config).is_err());
    }

    #[test]
    fn test_set_creates_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nested").join("config.toml");

        set(&path, "business_hours.opens_at", "9").unwrap();
        set(&path, "business_hours.closes_at", "17").unwrap();
        set(&path, "business_hours.unit", "min").unwrap();

        let config = crate::config::load_from_path(&path).unwrap();
        assert_eq!(config.business_hours.opens_at, Some(9));
        assert_eq!(config.business_hours.closes_at, Some(17));
        assert_eq!(config.business_hours.unit, Unit::Minutes);
    }

    #[test]
    fn test_set_rejects_invalid_window() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(&path, "[business_hours]\nopens_at = 9\ncloses_at = 17\n").unwrap();

        assert!(set(&path, "business_hours.closes_at", "8").is_err());
        assert!(set(&path, "business_hours.unit", "seconds").is_err());

        // File untouched
        let config = crate::config::load_from_path(&path).unwrap();
        assert_eq!(config.business_hours.closes_at, Some(17));
    }

    #[test]
    fn test_set_rejects_unknown_key() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(&path, "[business_hours]\nopens_at = 9\ncloses_at = 17\n").unwrap();

        let err = set(&path, "business_hours.lunch", "12").unwrap_err();
        assert!(format!("{:#}", err).contains("Unknown config key"));
        assert!(set(&path, "lunch", "12").is_err());

        let content = fs::read_to_string(&path).unwrap();
        assert!(!content.contains("lunch"));
    }
}
