use crate::{
    error::{Error, Result},
    sim::Scenario,
};
use log::*;
use serde::{Deserialize, Serialize};
use std::{collections::HashSet, fs, path::Path};

/// Configuration of the `sird` driver program.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    pub verbose: bool,

    /// Directory receiving one `<name>.csv` file per scenario.
    pub output_dir: String,

    /// Height of vertical ASCII plots, in lines.
    pub plot_height: usize,

    /// Width of horizontal ASCII plots, in characters.
    pub plot_width: usize,

    /// The first scenario is the baseline all others are compared against.
    pub scenarios: Vec<Scenario>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            verbose: false,
            output_dir: ".".to_string(),
            plot_height: 20,
            plot_width: 60,
            scenarios: vec![Scenario::baseline(), Scenario::lockdown()],
        }
    }
}

impl Config {
    pub fn from_toml(data: &str) -> Result<Self> {
        let cfg: Config = toml::from_str(data)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Read configuration from path, or use defaults if the file does not
    /// exist.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            info!("{} not found, using default scenarios", path.display());
            return Ok(Config::default());
        }
        Config::from_toml(&fs::read_to_string(path)?)
    }

    /// Scenario names are used as output file names and must be unique.
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for scenario in &self.scenarios {
            if !seen.insert(scenario.name()) {
                return Err(Error::DuplicateScenario(scenario.name().clone()));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::{InterventionWindow, LOCKDOWN_REDUCTION};

    #[test]
    fn roundtrip() {
        let cfg = Config::default();
        let data = toml::to_string(&cfg).unwrap();
        let cfg_ = Config::from_toml(&data).unwrap();
        assert_eq!(cfg, cfg_);
    }

    #[test]
    fn partial_scenarios() {
        let data = r#"
            verbose = true

            [[scenarios]]
            name = "none"

            [[scenarios]]
            name = "strict"
            intervention = { start = 5, end = 30, reduction = 0.9 }
        "#;
        let cfg = Config::from_toml(data).unwrap();
        assert!(cfg.verbose);
        assert_eq!(cfg.plot_height, 20);
        assert_eq!(cfg.scenarios.len(), 2);
        assert_eq!(*cfg.scenarios[0].horizon(), 200);
        assert_eq!(
            *cfg.scenarios[1].intervention(),
            InterventionWindow::new(5, 30, 0.9)
        );
        assert_ne!(cfg.scenarios[1].intervention().reduction(), LOCKDOWN_REDUCTION);
    }

    #[test]
    fn duplicate_names_rejected() {
        let data = r#"
            [[scenarios]]
            name = "a"

            [[scenarios]]
            name = "a"
        "#;
        assert!(matches!(
            Config::from_toml(data),
            Err(Error::DuplicateScenario(name)) if name == "a"
        ));
    }

    #[test]
    fn missing_file_uses_defaults() {
        let cfg = Config::load_or_default("this/file/does/not/exist.toml").unwrap();
        assert_eq!(cfg, Config::default());
    }
}
