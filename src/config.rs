use anyhow::Result;
use std::path::{Path, PathBuf};

use crate::cli::{Cli, OutputFormat, normalize_class_name};
use crate::error::ConfigError;
use crate::imports::ImportFilter;
use crate::report::Mode;

/// Where the used-class set comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UsedInput {
    Sources(PathBuf),
    Class(String),
}

/// Validated, immutable settings for one audit run.
#[derive(Debug, Clone)]
pub struct AuditConfig {
    pub lib_dir: PathBuf,
    pub input: UsedInput,
    pub mode: Mode,
    pub format: OutputFormat,
    pub filter: ImportFilter,
}

impl AuditConfig {
    pub fn new(lib_dir: PathBuf, input: UsedInput) -> Self {
        Self {
            lib_dir,
            input,
            mode: Mode::default(),
            format: OutputFormat::Text,
            filter: ImportFilter::default(),
        }
    }

    pub fn from_cli(cli: &Cli) -> Result<Self> {
        require_dir(&cli.lib)?;

        let input = match (&cli.src, &cli.class) {
            (_, Some(class)) => {
                let class = normalize_class_name(class);
                if class.is_empty() {
                    return Err(ConfigError::EmptyClassName.into());
                }
                UsedInput::Class(class)
            }
            (Some(src), None) => {
                require_exists(src)?;
                UsedInput::Sources(src.clone())
            }
            (None, None) => anyhow::bail!("either --src or --class must be given"),
        };

        let mode = if cli.useless { Mode::Useless } else { Mode::Useful };

        Ok(Self {
            lib_dir: cli.lib.clone(),
            input,
            mode,
            format: cli.format,
            filter: ImportFilter::new(cli.exclude.clone()),
        })
    }
}

fn require_exists(path: &Path) -> Result<(), ConfigError> {
    if !path.exists() {
        return Err(ConfigError::MissingPath(path.to_path_buf()));
    }
    Ok(())
}

fn require_dir(path: &Path) -> Result<(), ConfigError> {
    require_exists(path)?;
    if !path.is_dir() {
        return Err(ConfigError::NotADirectory(path.to_path_buf()));
    }
    Ok(())
}
