use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::core::moduli;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AggregationConfig {
    #[serde(default = "AggregationConfig::default_batch_size")]
    pub batch_size: usize,
    #[serde(default = "AggregationConfig::default_tail_count")]
    pub tail_count: usize,
}

impl AggregationConfig {
    fn default_batch_size() -> usize {
        12
    }
    fn default_tail_count() -> usize {
        12
    }
}

impl Default for AggregationConfig {
    fn default() -> Self {
        Self {
            batch_size: Self::default_batch_size(),
            tail_count: Self::default_tail_count(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TargetsConfig {
    #[serde(default = "TargetsConfig::default_l11_modulus")]
    pub l11_modulus: f64,
    #[serde(default = "TargetsConfig::default_l13_modulus")]
    pub l13_modulus: f64,
}

impl TargetsConfig {
    fn default_l11_modulus() -> f64 {
        moduli::L11_MODULUS as f64
    }
    fn default_l13_modulus() -> f64 {
        moduli::L13_MODULUS as f64
    }
}

impl Default for TargetsConfig {
    fn default() -> Self {
        Self {
            l11_modulus: Self::default_l11_modulus(),
            l13_modulus: Self::default_l13_modulus(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditConfig {
    #[serde(default = "AuditConfig::default_tolerance")]
    pub tolerance: f64,
}

impl AuditConfig {
    fn default_tolerance() -> f64 {
        1e-12
    }
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            tolerance: Self::default_tolerance(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathsConfig {
    #[serde(default = "PathsConfig::default_output_root")]
    pub output_root: String,
}

impl PathsConfig {
    fn default_output_root() -> String {
        "output".to_string()
    }
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            output_root: Self::default_output_root(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SummaryConfig {
    #[serde(default)]
    pub aggregation: AggregationConfig,
    #[serde(default)]
    pub targets: TargetsConfig,
    #[serde(default)]
    pub audit: AuditConfig,
    #[serde(default)]
    pub paths: PathsConfig,
}

impl SummaryConfig {
    pub fn load_or_default(path: &str) -> Self {
        let path_obj = Path::new(path);
        if !path_obj.exists() {
            return Self::default();
        }
        match fs::read_to_string(path_obj) {
            Ok(contents) => match toml::from_str(&contents) {
                Ok(cfg) => cfg,
                Err(err) => {
                    eprintln!("Failed to parse config {path}: {err}. Using defaults.");
                    Self::default()
                }
            },
            Err(err) => {
                eprintln!("Failed to read config {path}: {err}. Using defaults.");
                Self::default()
            }
        }
    }
}
