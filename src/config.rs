use serde::Deserialize;
use std::fs;
use std::path::Path;
use thiserror::Error;

const DEFAULT_PROGRAM_START: u32 = 0x0080;
const DEFAULT_MEMORY_SIZE: u32 = 0x0100;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub machine: MachineConfig,
}

impl Config {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            general: GeneralConfig::default(),
            machine: MachineConfig::default(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct GeneralConfig {
    #[serde(default)]
    pub trace_execution: bool,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            trace_execution: false,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct MachineConfig {
    #[serde(default = "default_program_start")]
    pub program_start: String,

    #[serde(default = "default_memory_size")]
    pub memory_size: String,
}

impl MachineConfig {
    pub fn program_start_val(&self) -> u32 {
        parse_hex(&self.program_start, DEFAULT_PROGRAM_START)
    }

    pub fn memory_size_val(&self) -> usize {
        parse_hex(&self.memory_size, DEFAULT_MEMORY_SIZE) as usize
    }
}

impl Default for MachineConfig {
    fn default() -> Self {
        Self {
            program_start: default_program_start(),
            memory_size: default_memory_size(),
        }
    }
}

fn parse_hex(s: &str, default: u32) -> u32 {
    let s = s.trim_start_matches("0x");
    u32::from_str_radix(s, 16).unwrap_or(default)
}

fn default_program_start() -> String {
    format!("{:#x}", DEFAULT_PROGRAM_START)
}

fn default_memory_size() -> String {
    format!("{:#x}", DEFAULT_MEMORY_SIZE)
}
