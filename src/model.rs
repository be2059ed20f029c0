use crate::error::{GenError, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;

fn ident_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[A-Za-z][A-Za-z0-9_]*$").expect("valid regex"))
}

/// Name of a data structure as written in the target package (e.g. "userMeta").
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TypeName(String);

impl TypeName {
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();
        if !ident_re().is_match(s) {
            return Err(GenError::InvalidTypeName(s.to_string()));
        }
        Ok(Self(s.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// First character upper-cased, the rest unchanged.
    pub fn capitalized(&self) -> String {
        let mut chars = self.0.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

impl fmt::Display for TypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for TypeName {
    type Error = GenError;

    fn try_from(s: String) -> Result<Self> {
        Self::parse(&s)
    }
}

impl From<TypeName> for String {
    fn from(t: TypeName) -> Self {
        t.0
    }
}

pub fn parse_names<S: AsRef<str>>(names: &[S]) -> Result<Vec<TypeName>> {
    names.iter().map(|n| TypeName::parse(n.as_ref())).collect()
}

/// Where the name list for a run came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameSource {
    Argument,
    Flag,
    Config,
    BuiltIn,
}

#[derive(Debug, Clone)]
pub struct GenerateRequest {
    pub backend: String,
    pub layout: String,
    pub package: String,
    pub names: Vec<TypeName>,
}

#[derive(Debug, Clone, Serialize)]
pub struct BackendInfo {
    pub id: &'static str,
    pub about: &'static str,
    pub default_names: Option<Vec<&'static str>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capitalizes_first_char_only() {
        let t = TypeName::parse("roundUserPostMeta").unwrap();
        assert_eq!(t.capitalized(), "RoundUserPostMeta");
        assert_eq!(t.as_str(), "roundUserPostMeta");
    }

    #[test]
    fn already_capitalized_is_unchanged() {
        let t = TypeName::parse("GameMeta").unwrap();
        assert_eq!(t.capitalized(), "GameMeta");
    }

    #[test]
    fn rejects_empty_and_non_alpha_start() {
        assert!(matches!(TypeName::parse(""), Err(GenError::InvalidTypeName(_))));
        assert!(matches!(TypeName::parse("9lives"), Err(GenError::InvalidTypeName(_))));
        assert!(matches!(TypeName::parse("_meta"), Err(GenError::InvalidTypeName(_))));
        assert!(matches!(TypeName::parse("user-meta"), Err(GenError::InvalidTypeName(_))));
    }

    #[test]
    fn parse_names_stops_on_first_bad_name() {
        let err = parse_names(&["userMeta", "", "gameMeta"]).unwrap_err();
        assert!(matches!(err, GenError::InvalidTypeName(s) if s.is_empty()));
    }
}
