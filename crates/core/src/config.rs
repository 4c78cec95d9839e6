use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub organise: OrganiseConfig,
    pub tagging: TaggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrganiseConfig {
    /// Project root the scanner walks and the organised tree is built under.
    pub root: String,
    #[serde(default = "default_organised_root")]
    pub organised_root: String,
    #[serde(default = "default_duplicates_folder")]
    pub duplicates_folder: String,
    /// Glob patterns pruned during the scan, e.g. "**/Library/**".
    #[serde(default)]
    pub exclude: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaggingConfig {
    /// TOML file holding the TagRuleSet. Tagging refuses to run without it.
    pub rules_path: String,
    /// Valid tag vocabulary; rules naming anything else are inert.
    #[serde(default)]
    pub known_tags: Vec<String>,
    /// Default scene file, overridable on the command line.
    #[serde(default)]
    pub scene_path: Option<String>,
}

fn default_organised_root() -> String {
    "OrganisedAssets".to_string()
}

fn default_duplicates_folder() -> String {
    "Duplicates".to_string()
}

pub fn load(path: Option<&str>) -> anyhow::Result<AppConfig> {
    let mut settings = config::Config::builder();
    if let Some(p) = path {
        settings = settings.add_source(config::File::with_name(p));
    } else {
        settings = settings.add_source(config::File::with_name("config/default").required(false));
    }
    let cfg = settings.build()?;
    Ok(cfg.try_deserialize()?)
}
