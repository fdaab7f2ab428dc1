use crate::form::FieldTargets;
use crate::mapping::HeaderDictionary;
use crate::sheet::ColumnRef;
use crate::store::constants::{DEFAULT_SHEET_NAME, DEFAULT_TIMEOUT, SHEETS_API_BASE};
use anyhow::{Context, Result};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const APP_DIR: &str = "sheet-autofill";
const ENV_PREFIX: &str = "SHEET_AUTOFILL_";

/// Where the rows come from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum StoreConfig {
    /// Relay web app answering `?id=` requests
    Relay { url: String },
    /// Spreadsheet values API with an API key
    SheetsApi {
        api_key: String,
        spreadsheet_id: String,
        #[serde(default = "default_sheet_name")]
        sheet_name: String,
        #[serde(default)]
        id_column: ColumnRef,
        #[serde(default = "default_api_base")]
        api_base: String,
    },
    /// Local .xlsx/.xls/.ods/.csv file
    Workbook {
        path: PathBuf,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        sheet_name: Option<String>,
        #[serde(default)]
        id_column: ColumnRef,
    },
}

fn default_sheet_name() -> String {
    DEFAULT_SHEET_NAME.to_string()
}

fn default_api_base() -> String {
    SHEETS_API_BASE.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT.as_secs()
}

impl StoreConfig {
    pub fn kind(&self) -> &'static str {
        match self {
            StoreConfig::Relay { .. } => "relay",
            StoreConfig::SheetsApi { .. } => "sheets-api",
            StoreConfig::Workbook { .. } => "workbook",
        }
    }

    /// Store selected through `SHEET_AUTOFILL_*` variables.
    ///
    /// `SHEET_AUTOFILL_STORE` names the kind; the remaining variables fill it
    /// in. Returns `None` when no kind is selected.
    pub fn from_vars<F>(var: F) -> Result<Option<Self>>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| var(format!("{}{}", ENV_PREFIX, name).as_str());
        let require = |name: &str| {
            get(name).with_context(|| format!("{}{} is not set", ENV_PREFIX, name))
        };
        let id_column = |name: &str| -> Result<ColumnRef> {
            match get(name) {
                Some(label) => label
                    .parse()
                    .with_context(|| format!("Invalid {}{}: '{}'", ENV_PREFIX, name, label)),
                None => Ok(ColumnRef::default()),
            }
        };

        let Some(kind) = get("STORE") else {
            return Ok(None);
        };

        let store = match kind.as_str() {
            "relay" => StoreConfig::Relay {
                url: require("RELAY_URL")?,
            },
            "sheets-api" => StoreConfig::SheetsApi {
                api_key: require("API_KEY")?,
                spreadsheet_id: require("SPREADSHEET_ID")?,
                sheet_name: get("SHEET_NAME").unwrap_or_else(default_sheet_name),
                id_column: id_column("ID_COLUMN")?,
                api_base: get("API_BASE").unwrap_or_else(default_api_base),
            },
            "workbook" => StoreConfig::Workbook {
                path: PathBuf::from(require("WORKBOOK")?),
                sheet_name: get("SHEET_NAME"),
                id_column: id_column("ID_COLUMN")?,
            },
            other => anyhow::bail!(
                "Unknown {}STORE '{}' (expected relay, sheets-api or workbook)",
                ENV_PREFIX,
                other
            ),
        };
        Ok(Some(store))
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub store: Option<StoreConfig>,
    /// Extra header label → canonical key entries, on top of the built-in table
    #[serde(default)]
    pub headers: HashMap<String, String>,
    /// Canonical key → form target overrides
    #[serde(default)]
    pub fields: HashMap<String, String>,
    /// Store selected by `SHEET_AUTOFILL_*` for this process; never saved
    #[serde(skip)]
    env_store: Option<StoreConfig>,
    #[serde(skip)]
    path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            store: None,
            headers: HashMap::new(),
            fields: HashMap::new(),
            env_store: None,
            path: None,
        }
    }
}

impl Config {
    pub fn config_dir() -> Result<PathBuf> {
        let dir = if cfg!(target_os = "linux") {
            // Use XDG config directory on Linux
            dirs::config_dir()
                .context("Failed to get XDG config directory")?
                .join(APP_DIR)
        } else {
            dirs::home_dir()
                .context("Failed to get home directory")?
                .join(format!(".{}", APP_DIR))
        };

        if !dir.exists() {
            fs::create_dir_all(&dir)
                .with_context(|| format!("Failed to create config directory: {:?}", dir))?;
            info!("Created config directory: {:?}", dir);
        }

        Ok(dir)
    }

    pub fn default_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    pub fn load() -> Result<Self> {
        Self::load_from(&Self::default_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        debug!("Loading config from: {:?}", path);

        if !path.exists() {
            info!("Config file doesn't exist, using defaults");
            return Ok(Self {
                path: Some(path.to_path_buf()),
                ..Self::default()
            });
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        let mut config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;
        config.path = Some(path.to_path_buf());

        debug!(
            "Loaded config: store={:?}, {} header entries, {} field overrides",
            config.store.as_ref().map(|s| s.kind()),
            config.headers.len(),
            config.fields.len()
        );
        Ok(config)
    }

    /// Overlay the store selected by environment variables, if any.
    ///
    /// The overlay takes precedence over the saved store but stays out of
    /// the file written by [`Config::save`].
    pub fn apply_env(&mut self) -> Result<()> {
        self.apply_vars(|name| std::env::var(name).ok())
    }

    fn apply_vars<F>(&mut self, var: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(store) = StoreConfig::from_vars(var)? {
            info!("Store overridden from environment: {}", store.kind());
            self.env_store = Some(store);
        }
        Ok(())
    }

    /// Store used for lookups: the environment overlay, else the saved one
    pub fn active_store(&self) -> Option<&StoreConfig> {
        self.env_store.as_ref().or(self.store.as_ref())
    }

    pub fn store_from_env(&self) -> bool {
        self.env_store.is_some()
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn save(&self) -> Result<()> {
        let path = match &self.path {
            Some(path) => path.clone(),
            None => Self::default_path()?,
        };
        debug!("Saving config to: {:?}", path);

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create directory: {:?}", parent))?;
            }
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize config to TOML")?;
        fs::write(&path, content)
            .with_context(|| format!("Failed to write config file: {:?}", path))?;

        info!("Config saved successfully");
        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.max(1))
    }

    pub fn require_store(&self) -> Result<&StoreConfig> {
        self.active_store()
            .context("No record store configured. Run 'sheet-autofill config init' first")
    }

    pub fn set_store(&mut self, store: StoreConfig) -> Result<()> {
        info!("Setting store: {}", store.kind());
        if let Some(previous) = &self.store {
            if previous.kind() != store.kind() {
                warn!("Replacing {} store with {}", previous.kind(), store.kind());
            }
        }
        self.store = Some(store);
        self.save()
    }

    pub fn set_timeout(&mut self, secs: u64) -> Result<()> {
        if secs == 0 {
            anyhow::bail!("Timeout must be at least one second");
        }
        info!("Updating timeout to: {}s", secs);
        self.timeout_secs = secs;
        self.save()
    }

    pub fn map_header(&mut self, header: String, key: String) -> Result<()> {
        info!("Adding header mapping: {} -> {}", header, key);
        self.headers.insert(header.trim().to_string(), key);
        self.save()
    }

    pub fn unmap_header(&mut self, header: &str) -> Result<()> {
        if self.headers.remove(header.trim()).is_some() {
            info!("Removed header mapping: {}", header);
            self.save()
        } else {
            anyhow::bail!("Header mapping '{}' not found", header);
        }
    }

    pub fn map_field(&mut self, key: String, target: String) -> Result<()> {
        info!("Adding field target: {} -> {}", key, target);
        self.fields.insert(key, target);
        self.save()
    }

    pub fn unmap_field(&mut self, key: &str) -> Result<()> {
        if self.fields.remove(key).is_some() {
            info!("Removed field target: {}", key);
            self.save()
        } else {
            anyhow::bail!("Field target '{}' not found", key);
        }
    }

    /// Built-in header table with this config's entries laid over it
    pub fn header_dictionary(&self) -> HeaderDictionary {
        let mut dictionary = HeaderDictionary::default();
        dictionary.extend(self.headers.iter().map(|(h, k)| (h.clone(), k.clone())));
        dictionary
    }

    pub fn field_overrides(&self) -> FieldTargets {
        self.fields.clone()
    }
}
