// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result, anyhow, bail};
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_VERSION: i64 = 1;
const DEFAULT_BASE_URL: &str = "http://localhost:3000";
const DEFAULT_SEED: i64 = 42;

/// Where the list screens load their records from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataSource {
    Demo,
    Remote,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub version: i64,
    #[serde(default)]
    pub data: Data,
    #[serde(default)]
    pub table: Table,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            data: Data::default(),
            table: Table::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Data {
    pub source: Option<String>,
    pub base_url: Option<String>,
    pub timeout: Option<String>,
    pub seed: Option<i64>,
}

impl Default for Data {
    fn default() -> Self {
        Self {
            source: Some("demo".to_owned()),
            base_url: Some(DEFAULT_BASE_URL.to_owned()),
            timeout: Some("5s".to_owned()),
            seed: Some(DEFAULT_SEED),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Table {
    pub page_size: Option<i64>,
    pub debounce: Option<String>,
}

impl Default for Table {
    fn default() -> Self {
        Self {
            page_size: Some(fleetdeck_table::DEFAULT_PAGE_SIZE as i64),
            debounce: Some("500ms".to_owned()),
        }
    }
}

impl Config {
    pub fn default_path() -> Result<PathBuf> {
        if let Some(path) = env::var_os("FLEETDECK_CONFIG_PATH") {
            return Ok(PathBuf::from(path));
        }

        let config_root = dirs::config_dir().ok_or_else(|| {
            anyhow!("cannot resolve config directory; set FLEETDECK_CONFIG_PATH to the config file")
        })?;

        let app_dir = config_root.join("fleetdeck");
        fs::create_dir_all(&app_dir)
            .with_context(|| format!("create config directory {}", app_dir.display()))?;
        Ok(app_dir.join("config.toml"))
    }

    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let raw = fs::read_to_string(path)
            .with_context(|| format!("read config file {}", path.display()))?;
        let value: toml::Value = toml::from_str(&raw)
            .with_context(|| format!("parse TOML config {}", path.display()))?;

        let version = value
            .get("version")
            .and_then(toml::Value::as_integer)
            .ok_or_else(|| {
                anyhow!(
                    "config file {} is not versioned. Add `version = 1` and move values under [data] and [table]",
                    path.display()
                )
            })?;

        if version != CONFIG_VERSION {
            bail!(
                "unsupported config version {} in {}; expected version = 1",
                version,
                path.display()
            );
        }

        let config: Config = value
            .try_into()
            .with_context(|| format!("decode config {}", path.display()))?;
        config.validate(path)?;
        Ok(config)
    }

    fn validate(&self, path: &Path) -> Result<()> {
        if self.version != CONFIG_VERSION {
            bail!(
                "config {} has version {}; expected 1",
                path.display(),
                self.version
            );
        }

        if let Some(source) = &self.data.source
            && source != "demo"
            && source != "remote"
        {
            bail!(
                "data.source in {} must be \"demo\" or \"remote\", got {:?}",
                path.display(),
                source
            );
        }

        if let Some(seed) = self.data.seed
            && seed < 0
        {
            bail!(
                "data.seed in {} must be non-negative, got {}",
                path.display(),
                seed
            );
        }

        if let Some(timeout) = &self.data.timeout {
            let parsed = parse_duration(timeout)?;
            if parsed <= Duration::ZERO {
                bail!(
                    "data.timeout in {} must be positive, got {}",
                    path.display(),
                    timeout
                );
            }
        }

        if let Some(page_size) = self.table.page_size
            && page_size <= 0
        {
            bail!(
                "table.page_size in {} must be positive, got {}",
                path.display(),
                page_size
            );
        }

        if let Some(debounce) = &self.table.debounce {
            parse_duration(debounce)?;
        }

        Ok(())
    }

    pub fn source(&self) -> DataSource {
        match self.data.source.as_deref() {
            Some("remote") => DataSource::Remote,
            _ => DataSource::Demo,
        }
    }

    pub fn base_url(&self) -> &str {
        self.data
            .base_url
            .as_deref()
            .unwrap_or(DEFAULT_BASE_URL)
            .trim_end_matches('/')
    }

    pub fn timeout(&self) -> Result<Duration> {
        parse_duration(self.data.timeout.as_deref().unwrap_or("5s"))
    }

    pub fn seed(&self) -> u64 {
        self.data.seed.unwrap_or(DEFAULT_SEED).max(0) as u64
    }

    pub fn page_size(&self) -> usize {
        self.table
            .page_size
            .filter(|size| *size > 0)
            .unwrap_or(fleetdeck_table::DEFAULT_PAGE_SIZE as i64) as usize
    }

    pub fn debounce(&self) -> Result<Duration> {
        parse_duration(self.table.debounce.as_deref().unwrap_or("500ms"))
    }

    pub fn example_config(path: &Path) -> String {
        format!(
            "# fleetdeck config\n# Place this file at: {}\n\nversion = 1\n\n[data]\n# \"demo\" serves deterministic generated records; \"remote\" fetches from base_url\nsource = \"demo\"\nbase_url = \"{}\"\ntimeout = \"5s\"\nseed = {}\n\n[table]\npage_size = {}\ndebounce = \"500ms\"\n",
            path.display(),
            DEFAULT_BASE_URL,
            DEFAULT_SEED,
            fleetdeck_table::DEFAULT_PAGE_SIZE,
        )
    }
}

pub fn parse_duration(raw: &str) -> Result<Duration> {
    if let Some(value) = raw.strip_suffix("ms") {
        let millis: u64 = value
            .parse()
            .with_context(|| format!("invalid duration {raw:?}"))?;
        return Ok(Duration::from_millis(millis));
    }
    if let Some(value) = raw.strip_suffix('s') {
        let secs: u64 = value
            .parse()
            .with_context(|| format!("invalid duration {raw:?}"))?;
        return Ok(Duration::from_secs(secs));
    }
    if let Some(value) = raw.strip_suffix('m') {
        let mins: u64 = value
            .parse()
            .with_context(|| format!("invalid duration {raw:?}"))?;
        return Ok(Duration::from_secs(mins * 60));
    }

    bail!("invalid duration {raw:?}; use one of: <N>ms, <N>s, <N>m (for example 500ms or 5s)")
}
