use config::{Config, File};
use serde::Deserialize;
use std::convert::{TryFrom, TryInto};
use std::env::var;
use std::fmt;
use std::time::Duration;

#[derive(Deserialize)]
pub struct Settings {
    pub api: ApiSettings,
    pub storage: StorageSettings,
}

#[derive(Deserialize)]
pub struct ApiSettings {
    /// Base URL the pipeline prefixes onto every path, e.g.
    /// `http://localhost:5001/api`
    pub base_url: String,
    pub timeout_seconds: u64,
}

#[derive(Deserialize)]
pub struct StorageSettings {
    /// Location of the durable storage document holding the session and cart
    pub path: String,
}

#[derive(Debug)]
pub enum Environment {
    Local,
    CI,
    Production,
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    let mut settings = Config::default();
    let base_path = std::env::current_dir().expect("failed to determine current directory");
    let configuration_directory = base_path.join("configuration");

    settings.merge(File::from(configuration_directory.join("base")).required(true))?;

    let environment: Environment = var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "local".into())
        .try_into()
        .expect("failed to parse APP_ENVIRONMENT");

    settings
        .merge(File::from(configuration_directory.join(environment.as_str())).required(true))?;

    settings.merge(config::Environment::with_prefix("app").separator("__"))?;

    settings.try_into()
}

impl Settings {
    pub fn set_storage_path(&mut self, path: String) {
        self.storage.path = path;
    }
}

impl ApiSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Local => "local",
            Environment::CI => "ci",
            Environment::Production => "production",
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl TryFrom<String> for Environment {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        match s.to_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "ci" => Ok(Self::CI),
            "production" => Ok(Self::Production),
            other => Err(format!("{} is not a supported environment", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use claims::{assert_err, assert_ok};

    #[test]
    fn reads_the_layered_configuration() {
        let settings = get_configuration().expect("failed to read configuration");
        assert!(settings.api.base_url.starts_with("http"));
        assert!(settings.api.timeout() >= Duration::from_secs(1));
        assert!(!settings.storage.path.is_empty());
    }

    #[test]
    fn environments_parse_case_insensitively() {
        assert_ok!(Environment::try_from("Production".to_string()));
        assert_ok!(Environment::try_from("ci".to_string()));
        assert_err!(Environment::try_from("staging".to_string()));
    }
}
