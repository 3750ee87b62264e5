//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};

/// Project-level config file names, checked in order
const PROJECT_CONFIG_FILES: [&str; 2] = ["agenda.toml", ".agenda.toml"];

/// Environment variable prefix (`AGENDA_API__BASE_URL` sets `api.base_url`)
pub const ENV_PREFIX: &str = "AGENDA_";

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables prefixed with `AGENDA_`
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./agenda.toml` or `./.agenda.toml`
    /// 4. XDG config: `$XDG_CONFIG_HOME/conference-agenda/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&PathBuf>) -> Result<FileConfig, Box<figment::Error>> {
        Self::file_figment(
            Self::global_config_path().as_deref(),
            Self::project_config_path().as_deref(),
            config_path.map(PathBuf::as_path),
        )
        .merge(Env::prefixed(ENV_PREFIX).split("__"))
        .extract()
        .map_err(Box::new)
    }

    /// Defaults, then the global, project and explicit files.
    ///
    /// Missing files are skipped.
    fn file_figment(
        global: Option<&Path>,
        project: Option<&Path>,
        explicit: Option<&Path>,
    ) -> Figment {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        for path in [global, project, explicit].into_iter().flatten() {
            if path.exists() {
                figment = figment.merge(Toml::file(path));
            }
        }

        figment
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    /// Get the global config file path
    ///
    /// Returns XDG_CONFIG_HOME/conference-agenda/config.toml if set,
    /// otherwise falls back to ~/.config/conference-agenda/config.toml
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("conference-agenda").join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_CONFIG_FILES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Whether any `AGENDA_*` environment variable is set
    pub fn env_overrides_present() -> bool {
        std::env::vars_os()
            .any(|(key, _)| key.to_str().is_some_and(|key| key.starts_with(ENV_PREFIX)))
    }

    /// Print the config file locations being used (for debugging)
    pub fn print_config_sources(explicit: Option<&Path>) {
        println!("Configuration sources (in priority order):");

        if Self::env_overrides_present() {
            println!("  [FOUND] Env:     {}*", ENV_PREFIX);
        } else {
            println!("  [     ] Env:     {}*", ENV_PREFIX);
        }

        // Explicit --config
        if let Some(path) = explicit {
            let status = if path.exists() { "FOUND" } else { "MISSING" };
            println!("  [{:<5}] Config:  {}", status, path.display());
        }

        // Project config
        if let Some(path) = Self::project_config_path() {
            println!("  [FOUND] Project: {}", path.display());
        } else {
            println!("  [     ] Project: ./agenda.toml or ./.agenda.toml");
        }

        // Global config
        if let Some(path) = Self::global_config_path() {
            if path.exists() {
                println!("  [FOUND] Global:  {}", path.display());
            } else {
                println!("  [     ] Global:  {}", path.display());
            }
        }

        println!("  [     ] Default: built-in defaults");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_defaults() {
        let config = ConfigLoader::load_defaults();
        assert_eq!(config.api.base_url, "http://localhost:5000");
        assert!(config.output.color);
    }

    #[test]
    fn test_global_config_path_returns_some() {
        // Should return a path (even if file doesn't exist)
        let path = ConfigLoader::global_config_path();
        assert!(path.is_some());
        let path = path.unwrap();
        assert!(path.to_string_lossy().contains("conference-agenda"));
    }

    #[test]
    fn test_explicit_file_overrides_global() {
        let dir = tempfile::tempdir().unwrap();

        let global = dir.path().join("global.toml");
        std::fs::write(
            &global,
            "[api]\nbase_url = \"http://global.example\"\n[output]\ncolor = false\n",
        )
        .unwrap();

        let explicit = dir.path().join("explicit.toml");
        let mut file = std::fs::File::create(&explicit).unwrap();
        writeln!(file, "[api]\nbase_url = \"http://explicit.example\"").unwrap();

        let config: FileConfig =
            ConfigLoader::file_figment(Some(global.as_path()), None, Some(explicit.as_path()))
                .extract()
                .unwrap();
        assert_eq!(config.api.base_url, "http://explicit.example");
        // Untouched keys keep the global value
        assert!(!config.output.color);
    }

    #[test]
    fn test_env_overrides_project_file() {
        figment::Jail::expect_with(|jail| {
            let home = jail.directory().to_path_buf();
            jail.set_env("XDG_CONFIG_HOME", home.display());
            jail.create_file(
                "agenda.toml",
                "[api]\nbase_url = \"http://project.example\"\n[output]\ncolor = false\n",
            )?;
            jail.set_env("AGENDA_API__BASE_URL", "http://env.example");

            let config = ConfigLoader::load(None).map_err(|e| *e)?;
            assert_eq!(config.api.base_url, "http://env.example");
            // Keys the environment leaves alone come from the project file
            assert!(!config.output.color);
            Ok(())
        });
    }

    #[test]
    fn test_env_overrides_explicit_file() {
        figment::Jail::expect_with(|jail| {
            let home = jail.directory().to_path_buf();
            jail.set_env("XDG_CONFIG_HOME", home.display());
            jail.create_file("custom.toml", "[api]\nbase_url = \"http://custom.example\"\n")?;

            let explicit = PathBuf::from("custom.toml");
            let config = ConfigLoader::load(Some(&explicit)).map_err(|e| *e)?;
            assert_eq!(config.api.base_url, "http://custom.example");

            jail.set_env("AGENDA_API__BASE_URL", "http://env.example");
            let config = ConfigLoader::load(Some(&explicit)).map_err(|e| *e)?;
            assert_eq!(config.api.base_url, "http://env.example");
            Ok(())
        });
    }

    #[test]
    fn test_env_overrides_detected() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("AGENDA_OUTPUT__COLOR", "false");
            assert!(ConfigLoader::env_overrides_present());
            Ok(())
        });
    }

    #[test]
    fn test_missing_global_file_is_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");

        let config: FileConfig = ConfigLoader::file_figment(Some(missing.as_path()), None, None)
            .extract()
            .unwrap();
        assert_eq!(config.api.base_url, "http://localhost:5000");
    }
}
