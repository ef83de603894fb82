use std::collections::HashMap;

use config::{Config, File};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    pub variables: Option<HashMap<String, String>>,
}

pub fn load_config() -> Result<AppConfig, config::ConfigError> {
    let mut config: AppConfig = Config::builder()
        .add_source(File::with_name("config.toml").required(false))
        .build()?
        .try_deserialize()?;

    set_defaults(&mut config);

    Ok(config)
}

pub fn set_defaults(config: &mut AppConfig) {
    if config.variables.is_none() {
        config.variables = Some(HashMap::from([(
            "DISTRO_FEATURES".to_string(),
            "systemd pam usrmerge".to_string(),
        )]));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_fill_missing_variables() {
        let mut config = AppConfig { variables: None };
        set_defaults(&mut config);

        let variables = config.variables.unwrap();
        assert_eq!(
            variables.get("DISTRO_FEATURES").map(String::as_str),
            Some("systemd pam usrmerge")
        );
    }

    #[test]
    fn defaults_keep_configured_variables() {
        let mut config = AppConfig {
            variables: Some(HashMap::from([("MACHINE".to_string(), "qemuarm64".to_string())])),
        };
        set_defaults(&mut config);

        let variables = config.variables.unwrap();
        assert_eq!(variables.len(), 1);
        assert_eq!(variables.get("MACHINE").map(String::as_str), Some("qemuarm64"));
    }
}
