//! City catalog configuration.
//!
//! The catalog maps every city to the CSV file holding its trips. It is built
//! once at startup from the built-in defaults, an optional YAML file and the
//! command-line overrides, and is not changed afterwards.

use std::collections::HashMap;
use std::fs::File;
use std::path::{Path, PathBuf};

use log::{debug, warn};
use serde::Deserialize;

use crate::criteria::City;
use crate::error::{Error, Result};

/// Default path for the city catalog file
const DEFAULT_CONFIG_PATH: &str = "~/.bikeshare/cities.yml";

/// Default directory holding the city CSV files
pub const DEFAULT_DATA_DIRECTORY: &str = ".";

/// Contents of the YAML catalog file.
///
/// ```yaml
/// data_directory: ~/bikeshare
/// cities:
///   chicago: chicago.csv
///   new york city: nyc_2017.csv
/// ```
#[derive(Deserialize, Debug, Clone, Default)]
pub struct CatalogConfig {
    pub data_directory: Option<String>,
    #[serde(default)]
    pub cities: HashMap<String, String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CityCatalog {
    data_directory: PathBuf,
    files: HashMap<City, String>,
}

impl CityCatalog {
    /// A catalog using the default file name of every city.
    pub fn new(data_directory: impl Into<PathBuf>) -> Self {
        let files = City::ALL
            .iter()
            .map(|city| (*city, city.default_file_name().to_string()))
            .collect();

        Self {
            data_directory: data_directory.into(),
            files,
        }
    }

    /// Builds a catalog from a parsed config file.
    ///
    /// `data_directory_arg` takes precedence over the file's `data_directory`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file names a city that does not exist.
    pub fn from_config(
        config: &CatalogConfig,
        data_directory_arg: &Option<String>,
    ) -> Result<Self> {
        let data_directory = get_data_directory(
            data_directory_arg
                .as_ref()
                .or(config.data_directory.as_ref()),
        );

        let mut catalog = Self::new(data_directory);
        for (name, file_name) in &config.cities {
            let city: City = name.parse()?;
            if file_name.trim().is_empty() {
                warn!("Ignoring empty file name for {city} in the city catalog");
                continue;
            }
            catalog.files.insert(city, file_name.clone());
        }

        Ok(catalog)
    }

    #[must_use]
    pub fn data_directory(&self) -> &Path {
        &self.data_directory
    }

    /// Full path of the CSV file for a city.
    #[must_use]
    pub fn path_for(&self, city: City) -> PathBuf {
        let file_name = self
            .files
            .get(&city)
            .map_or(city.default_file_name(), String::as_str);

        self.data_directory
            .join(shellexpand::tilde(file_name).into_owned())
    }
}

impl Default for CityCatalog {
    fn default() -> Self {
        Self::new(DEFAULT_DATA_DIRECTORY)
    }
}

fn get_data_directory(data_directory: Option<&String>) -> PathBuf {
    let data_directory = match data_directory {
        Some(data_directory) => data_directory.as_str(),
        None => DEFAULT_DATA_DIRECTORY,
    };

    PathBuf::from(shellexpand::tilde(data_directory).into_owned())
}

/// Resolves the catalog file path.
///
/// If a custom path is provided, uses that path. Otherwise, uses the default
/// catalog path. Shell expansions like `~` are resolved.
#[must_use]
pub fn get_config_path(config_path_arg: &Option<String>) -> String {
    let config_path = match config_path_arg {
        Some(config_path) => config_path.as_str(),
        None => DEFAULT_CONFIG_PATH,
    };

    shellexpand::tilde(config_path).to_string()
}

/// Reads a YAML catalog file.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or is not a valid catalog.
pub fn read_catalog_config(config_path: &str) -> Result<CatalogConfig> {
    let reader = File::open(config_path).map_err(|e| {
        Error::io_error("city catalog".to_string(), config_path.to_string(), e)
    })?;

    serde_yaml::from_reader(reader).map_err(|e| {
        Error::yaml_error(
            "reading".to_string(),
            "city catalog".to_string(),
            config_path.to_string(),
            e,
        )
    })
}

/// Builds the city catalog from the command-line arguments.
///
/// An explicitly given config path must exist. The default path is only read
/// when a file is present there.
///
/// # Errors
///
/// Returns an error if a catalog file exists but cannot be read or parsed.
pub fn load_catalog(
    config_path_arg: &Option<String>,
    data_directory_arg: &Option<String>,
) -> Result<CityCatalog> {
    let config_path = get_config_path(config_path_arg);

    let config = if config_path_arg.is_some() || Path::new(&config_path).exists() {
        debug!("Reading city catalog from `{}`", config_path);
        read_catalog_config(&config_path)?
    } else {
        debug!("No city catalog at `{}`, using defaults", config_path);
        CatalogConfig::default()
    };

    CityCatalog::from_config(&config, data_directory_arg)
}
