use serde::Deserialize;
use std::env;
use std::fs;
use std::path::PathBuf;

/// Default config template created when no config exists
const DEFAULT_CONFIG: &str = r#"
[paths]
skills_dir = "skills"                       # Root of the skill directories
frontend_data_dir = "frontend/public/data"  # Where skills.json lands
plugin_dir = ".claude-plugin"               # Where index.json and marketplace.json land

[marketplace]
name = "skillmart"
owner = "Skillmart Maintainers"

[logging]
level = "info"  # trace, debug, info, warn, error
json = false    # JSON log lines for CI
"#;

#[derive(Debug, Deserialize, Clone)]
pub struct PathsConfig {
    pub skills_dir: String,
    pub frontend_data_dir: String,
    pub plugin_dir: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct MarketplaceConfig {
    pub name: String,
    pub owner: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
    #[serde(default)]
    pub json: bool,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub paths: PathsConfig,
    pub marketplace: MarketplaceConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Get the global config path: ~/.skillmart/skillmart.toml
    fn global_config_path() -> anyhow::Result<PathBuf> {
        let home = dirs::home_dir().ok_or_else(|| anyhow::anyhow!("Could not find home directory"))?;
        Ok(home.join(".skillmart").join("skillmart.toml"))
    }

    /// Ensure global config directory and file exist, creating defaults if needed
    fn ensure_global_config() -> anyhow::Result<PathBuf> {
        let config_path = Self::global_config_path()?;
        if let Some(config_dir) = config_path.parent() {
            if !config_dir.exists() {
                fs::create_dir_all(config_dir)?;
                eprintln!("Created config directory: {}", config_dir.display());
            }
        }

        if !config_path.exists() {
            fs::write(&config_path, DEFAULT_CONFIG.trim())?;
            eprintln!("Created default config: {}", config_path.display());
        }

        Ok(config_path)
    }

    /// Load configuration with layered approach:
    /// 1. Global config: ~/.skillmart/skillmart.toml (auto-created if missing)
    /// 2. Local override: ./skillmart.toml (per marketplace checkout, optional)
    /// 3. Environment variables (highest priority)
    pub fn load() -> anyhow::Result<Self> {
        // Load .env file from current directory
        dotenvy::dotenv().ok();

        // Ensure global config exists
        let global_config_path = Self::ensure_global_config()?;

        // Build config with layered sources (later sources override earlier ones)
        let mut config_builder = config::Config::builder()
            // Layer 1: Global config (required - we just created it if missing)
            .add_source(config::File::from(global_config_path))
            // Layer 2: Local checkout config (optional override)
            .add_source(config::File::with_name("skillmart").required(false))
            // Layer 3: Environment variables with SKILLMART__ prefix
            .add_source(config::Environment::with_prefix("SKILLMART").separator("__"));

        // Layer 4: Apply convenience env var overrides (highest priority)
        if let Ok(dir) = env::var("SKILLMART_SKILLS_DIR") {
            config_builder = config_builder.set_override("paths.skills_dir", dir)?;
        }

        if let Ok(level) = env::var("SKILLMART_LOG_LEVEL") {
            config_builder = config_builder.set_override("logging.level", level)?;
        }

        let config = config_builder.build()?;

        let config: Self = config.try_deserialize()?;
        Ok(config)
    }
}
