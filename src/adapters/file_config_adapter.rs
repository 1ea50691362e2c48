//! INI file configuration adapter.

use crate::domain::error::MortgageError;
use crate::ports::config_port::ConfigPort;
use configparser::ini::Ini;
use std::path::Path;

#[derive(Debug)]
pub struct FileConfigAdapter {
    config: Ini,
}

impl FileConfigAdapter {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, MortgageError> {
        let path = path.as_ref();
        let mut config = Ini::new();
        config
            .load(path)
            .map_err(|reason| MortgageError::ConfigParse {
                file: path.display().to_string(),
                reason,
            })?;
        Ok(Self { config })
    }

    pub fn from_string(content: &str) -> Result<Self, MortgageError> {
        let mut config = Ini::new();
        config
            .read(content.to_string())
            .map_err(|reason| MortgageError::ConfigParse {
                file: "<string>".to_string(),
                reason,
            })?;
        Ok(Self { config })
    }

    fn invalid(section: &str, key: &str, reason: String) -> MortgageError {
        MortgageError::ConfigInvalid {
            section: section.to_string(),
            key: key.to_string(),
            reason,
        }
    }
}

impl ConfigPort for FileConfigAdapter {
    fn get_int(&self, section: &str, key: &str) -> Result<Option<i64>, MortgageError> {
        self.config
            .getint(section, key)
            .map_err(|reason| Self::invalid(section, key, reason))
    }

    fn get_double(&self, section: &str, key: &str) -> Result<Option<f64>, MortgageError> {
        self.config
            .getfloat(section, key)
            .map_err(|reason| Self::invalid(section, key, reason))
    }
}
