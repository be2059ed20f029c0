use crate::backends::Backend;
use crate::error::{GenError, Result};
use crate::model::{parse_names, NameSource, TypeName};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Contents of an `encoder-gen.toml` file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GenConfig {
    /// backend id -> names generated in batch mode
    #[serde(default)]
    pub names: BTreeMap<String, Vec<TypeName>>,
}

impl GenConfig {
    pub fn from_toml(s: &str) -> Result<Self> {
        let cfg: GenConfig = toml::from_str(s)?;
        for (backend, names) in &cfg.names {
            if names.is_empty() {
                return Err(GenError::Config(format!("empty name list for backend '{backend}'")));
            }
        }
        Ok(cfg)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let s = fs::read_to_string(path)?;
        let cfg = Self::from_toml(&s)?;
        log::debug!("loaded config {} ({} name lists)", path.display(), cfg.names.len());
        Ok(cfg)
    }

    pub fn names_for(&self, backend_id: &str) -> Option<&[TypeName]> {
        self.names.get(backend_id).map(|v| v.as_slice())
    }

    /// Warn about lists keyed by a backend this build does not know.
    pub fn warn_unknown(&self, known: &[&str]) {
        for key in self.names.keys() {
            if !known.contains(&key.as_str()) {
                log::warn!("config: ignoring names for unknown backend '{key}'");
            }
        }
    }
}

/// Pick the name list for a run: positional argument, then `--names`,
/// then the config file, then the backend's built-in list.
pub fn resolve_names(
    backend: &dyn Backend,
    arg: Option<&str>,
    flag: &[String],
    cfg: Option<&GenConfig>,
) -> Result<(Vec<TypeName>, NameSource)> {
    if let Some(name) = arg {
        return Ok((vec![TypeName::parse(name)?], NameSource::Argument));
    }
    if !flag.is_empty() {
        return Ok((parse_names(flag)?, NameSource::Flag));
    }
    if let Some(names) = cfg.and_then(|c| c.names_for(backend.id())) {
        return Ok((names.to_vec(), NameSource::Config));
    }
    match backend.default_names() {
        Some(names) => Ok((parse_names(names)?, NameSource::BuiltIn)),
        None => Err(GenError::MissingTypeName),
    }
}
