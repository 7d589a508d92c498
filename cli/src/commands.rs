use clap::Subcommand;

use crate::config::{AppConfig, ConfigFile};

#[derive(Subcommand, PartialEq, Debug)]
pub enum Commands {
    /// Write the effective configuration to the config file
    Init {
        /// Overwrite an existing config file
        #[arg(long, default_value_t = false)]
        force: bool,
    },

    /// Print the effective configuration as TOML
    Show,
}

impl Commands {
    pub fn run(self, config: &AppConfig) -> Result<(), String> {
        match self {
            Commands::Init { force } => {
                let path = &config.config_path;
                if path.exists() && !force {
                    return Err(format!(
                        "config file already exists at {}, pass --force to overwrite",
                        path.display()
                    ));
                }
                ConfigFile::from(config).save_to(path)?;
                println!("Config written to {}", path.display());
                Ok(())
            }
            Commands::Show => {
                let rendered = toml::to_string_pretty(&ConfigFile::from(config))
                    .map_err(|e| format!("{}", e))?;
                println!("# {}", config.config_path.display());
                print!("{}", rendered);
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]

    use super::*;
    use crate::config::CliOverrides;
    use tempfile::TempDir;

    fn config_in(dir: &TempDir) -> AppConfig {
        let path = dir.path().join("config.toml");
        AppConfig::load(Some(&path), &CliOverrides::default()).unwrap()
    }

    #[test]
    fn init_writes_defaults() {
        let dir = TempDir::new().unwrap();
        let config = config_in(&dir);

        Commands::Init { force: false }.run(&config).unwrap();

        let written = std::fs::read_to_string(&config.config_path).unwrap();
        assert!(written.contains("delay_ms = 2500"));
        assert!(written.contains("start_screen = \"splash_screen\""));
    }

    #[test]
    fn init_refuses_to_overwrite_without_force() {
        let dir = TempDir::new().unwrap();
        let config = config_in(&dir);
        std::fs::write(&config.config_path, "[splash]\n").unwrap();

        let err = Commands::Init { force: false }.run(&config).unwrap_err();
        assert!(err.contains("--force"));
        assert!(Commands::Init { force: true }.run(&config).is_ok());
    }
}
