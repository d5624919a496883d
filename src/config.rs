use serde::Deserialize;

const DEFAULT_NAMESPACE: &str = "Peripherals";
const DEFAULT_BLOCK_COMMENT: &str = "Generated by svd-map.";

#[derive(Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub host: HostConfig,
}

#[derive(Debug, Default, Deserialize)]
pub struct GeneralConfig {
    /// Log every peripheral span while building the region list.
    #[serde(default)]
    pub trace_regions: bool,

    /// Overrides the fallback register width used when the description
    /// declares neither a device default nor an explicit register size.
    #[serde(default)]
    pub default_register_size_bits: Option<u32>,
}

#[derive(Debug, Deserialize)]
pub struct HostConfig {
    #[serde(default = "default_namespace")]
    pub namespace: String,

    #[serde(default = "default_block_comment")]
    pub block_comment: String,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            namespace: default_namespace(),
            block_comment: default_block_comment(),
        }
    }
}

fn default_namespace() -> String {
    DEFAULT_NAMESPACE.to_string()
}

fn default_block_comment() -> String {
    DEFAULT_BLOCK_COMMENT.to_string()
}
