//! Configuration loader with multi-source merging

use super::error::ConfigError;
use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};

const PROJECT_FILES: [&str; 2] = ["resolver.toml", ".resolver.toml"];

/// Environment variables and the config keys they override
pub const ENV_BINDINGS: &[(&str, &str)] = &[
    ("BACKEND_HOST", "backend.host"),
    ("BACKEND_PORT", "backend.port"),
    ("CACHE_HOST", "cache.host"),
    ("CACHE_PORT", "cache.port"),
    ("CACHE_USERNAME", "cache.username"),
    ("CACHE_PASSWORD", "cache.password"),
    ("CACHE_TLS", "cache.tls"),
    ("RESOLVER_STRATEGY", "engine.strategy"),
];

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (see [`ENV_BINDINGS`])
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./resolver.toml` or `./.resolver.toml`
    /// 4. XDG config: `$XDG_CONFIG_HOME/prompt-resolver/config.toml`
    /// 5. Default values
    ///
    /// With `skip_files` only the environment and defaults are used.
    pub fn load(config_path: Option<&Path>, skip_files: bool) -> Result<FileConfig, ConfigError> {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        if !skip_files {
            if let Some(global_path) = Self::global_config_path() {
                if global_path.exists() {
                    figment = figment.merge(Toml::file(&global_path));
                }
            }

            if let Some(path) = Self::project_config_path() {
                figment = figment.merge(Toml::file(path));
            }

            if let Some(path) = config_path {
                if !path.exists() {
                    return Err(ConfigError::Invalid(format!(
                        "config file not found: {}",
                        path.display()
                    )));
                }
                figment = figment.merge(Toml::file(path));
            }
        }

        let figment = Self::merge_env(figment)?;
        figment.extract().map_err(|e| ConfigError::Figment(Box::new(e)))
    }

    /// Load only default configuration
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    /// Overlay every bound environment variable that is set and non-empty
    fn merge_env(mut figment: Figment) -> Result<Figment, ConfigError> {
        for (var, key) in ENV_BINDINGS {
            let Ok(raw) = std::env::var(var) else {
                continue;
            };
            let raw = raw.trim();
            if raw.is_empty() {
                continue;
            }

            figment = match *key {
                "backend.port" | "cache.port" => {
                    let port: u16 = raw.parse().map_err(|_| {
                        ConfigError::Invalid(format!("{} must be a port number, got '{}'", var, raw))
                    })?;
                    figment.merge((*key, port))
                }
                "cache.tls" => figment.merge((*key, parse_flag(var, raw)?)),
                _ => figment.merge((*key, raw.to_string())),
            };
        }
        Ok(figment)
    }

    /// Get the global config file path
    ///
    /// Returns XDG_CONFIG_HOME/prompt-resolver/config.toml if set,
    /// otherwise falls back to the platform config directory.
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("prompt-resolver").join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_FILES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Print the config file locations being used (for debugging)
    pub fn print_config_sources(config_path: Option<&Path>) {
        println!("Configuration sources (in priority order):");

        for (var, key) in ENV_BINDINGS {
            let state = match std::env::var(var) {
                Ok(v) if !v.trim().is_empty() => "SET  ",
                _ => "     ",
            };
            println!("  [{}] Env:     {} -> {}", state, var, key);
        }

        if let Some(path) = config_path {
            let state = if path.exists() { "FOUND" } else { "MISS " };
            println!("  [{}] Explicit: {}", state, path.display());
        }

        if let Some(path) = Self::project_config_path() {
            println!("  [FOUND] Project: {}", path.display());
        } else {
            println!("  [     ] Project: ./resolver.toml or ./.resolver.toml");
        }

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

fn parse_flag(var: &str, raw: &str) -> Result<bool, ConfigError> {
    match raw.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::Invalid(format!(
            "{} must be true or false, got '{}'",
            var, raw
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;
    use resolver_domain::ResolutionStrategy;

    fn clear_env(jail: &mut Jail) {
        for (var, _) in ENV_BINDINGS {
            jail.set_env(var, "");
        }
    }

    #[test]
    fn test_load_defaults() {
        let config = ConfigLoader::load_defaults();
        assert!(config.cache.host.is_none());
        assert_eq!(config.backend.port, 11434);
    }

    #[test]
    fn test_global_config_path_returns_some() {
        let path = ConfigLoader::global_config_path();
        assert!(path.is_some());
        assert!(path.unwrap().to_string_lossy().contains("prompt-resolver"));
    }

    #[test]
    fn test_project_file_is_read() {
        Jail::expect_with(|jail| {
            clear_env(jail);
            jail.create_file(
                "resolver.toml",
                r#"
[backend]
host = "10.0.0.2"

[engine]
strategy = "majority"
"#,
            )?;

            let config = ConfigLoader::load(None, false).unwrap();
            assert_eq!(config.backend.host.as_deref(), Some("10.0.0.2"));
            assert_eq!(
                config.to_engine_config().unwrap().strategy,
                ResolutionStrategy::Majority
            );
            Ok(())
        });
    }

    #[test]
    fn test_env_overrides_file() {
        Jail::expect_with(|jail| {
            clear_env(jail);
            jail.create_file(
                "resolver.toml",
                r#"
[cache]
host = "file-host"
port = 6000
password = "from-file"
"#,
            )?;
            jail.set_env("CACHE_HOST", "env-host");
            jail.set_env("CACHE_PORT", "16379");
            jail.set_env("CACHE_PASSWORD", "12345");
            jail.set_env("CACHE_TLS", "true");
            jail.set_env("RESOLVER_STRATEGY", "routed");

            let config = ConfigLoader::load(None, false).unwrap();
            assert_eq!(config.cache.host.as_deref(), Some("env-host"));
            assert_eq!(config.cache.port, 16379);
            // Numeric-looking secrets stay strings
            assert_eq!(config.cache.password.as_deref(), Some("12345"));
            assert!(config.cache.tls);
            assert_eq!(config.engine.strategy.as_deref(), Some("routed"));
            Ok(())
        });
    }

    #[test]
    fn test_explicit_path_wins_over_project_file() {
        Jail::expect_with(|jail| {
            clear_env(jail);
            jail.create_file("resolver.toml", "[backend]\nhost = \"project\"\n")?;
            jail.create_file("custom.toml", "[backend]\nhost = \"custom\"\n")?;

            let config = ConfigLoader::load(Some(Path::new("custom.toml")), false).unwrap();
            assert_eq!(config.backend.host.as_deref(), Some("custom"));
            Ok(())
        });
    }

    #[test]
    fn test_explicit_absolute_path() {
        Jail::expect_with(|jail| {
            clear_env(jail);
            let dir = tempfile::tempdir().unwrap();
            let path = dir.path().join("deploy.toml");
            std::fs::write(&path, "[monitor]\nenabled = false\npoll_secs = 30\n").unwrap();

            let config = ConfigLoader::load(Some(path.as_path()), false).unwrap();
            assert!(!config.monitor.enabled);
            assert_eq!(config.monitor.poll_secs, 30);
            Ok(())
        });
    }

    #[test]
    fn test_missing_explicit_path_is_an_error() {
        Jail::expect_with(|jail| {
            clear_env(jail);
            let err = ConfigLoader::load(Some(Path::new("nope.toml")), false).unwrap_err();
            assert!(matches!(err, ConfigError::Invalid(_)));
            Ok(())
        });
    }

    #[test]
    fn test_skip_files_still_reads_env() {
        Jail::expect_with(|jail| {
            clear_env(jail);
            jail.create_file("resolver.toml", "[backend]\nhost = \"project\"\n")?;
            jail.set_env("BACKEND_HOST", "from-env");

            let config = ConfigLoader::load(None, true).unwrap();
            assert_eq!(config.backend.host.as_deref(), Some("from-env"));
            Ok(())
        });
    }

    #[test]
    fn test_missing_password_reported_after_load() {
        Jail::expect_with(|jail| {
            clear_env(jail);
            jail.set_env("BACKEND_HOST", "localhost");
            jail.set_env("CACHE_HOST", "localhost");

            let config = ConfigLoader::load(None, true).unwrap();
            let err = config.validate().unwrap_err();
            assert!(matches!(
                err,
                ConfigError::Missing {
                    field: "cache.password",
                    env: "CACHE_PASSWORD"
                }
            ));
            Ok(())
        });
    }

    #[test]
    fn test_bad_port_rejected() {
        Jail::expect_with(|jail| {
            clear_env(jail);
            jail.set_env("CACHE_PORT", "not-a-port");
            assert!(matches!(
                ConfigLoader::load(None, true),
                Err(ConfigError::Invalid(_))
            ));
            Ok(())
        });
    }

    #[test]
    fn test_parse_flag() {
        assert!(parse_flag("X", "YES").unwrap());
        assert!(!parse_flag("X", "0").unwrap());
        assert!(parse_flag("X", "maybe").is_err());
    }
}
