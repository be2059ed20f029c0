// src/backends.rs
use crate::error::{GenError, Result};
use crate::model::BackendInfo;

/// Known meta types of the reputation store.
pub const FULL_NAMES: &[&str] = &[
    "userMeta",
    "postMeta",
    "roundMeta",
    "userPostMeta",
    "roundPostMeta",
    "roundUserPostMeta",
    "gameMeta",
];

/// Meta types kept by the second reputation revision.
pub const SHORT_NAMES: &[&str] = &["userMeta", "roundMeta", "roundPostMeta", "gameMeta"];

pub trait Backend: Send + Sync {
    fn id(&self) -> &'static str;

    fn about(&self) -> &'static str;

    /// Decoder + encoder for one type.
    /// Placeholders:
    /// - `^@` => capitalized type name
    /// - `@`  => type name as written
    fn template(&self) -> &'static str;

    /// Imports and package-level declarations the generated functions need.
    fn preamble(&self) -> &'static str;

    /// Names generated when none is given. `None` means a name is required.
    fn default_names(&self) -> Option<&'static [&'static str]> {
        None
    }

    fn info(&self) -> BackendInfo {
        BackendInfo {
            id: self.id(),
            about: self.about(),
            default_names: self.default_names().map(|n| n.to_vec()),
        }
    }
}

#[cfg(feature = "backend_codec_json")]
pub mod codec_json;
#[cfg(feature = "backend_std_json")]
pub mod std_json;
#[cfg(feature = "backend_gob")]
pub mod gob;
#[cfg(feature = "backend_codec_binary")]
pub mod codec_binary;

pub fn get_backend(id: &str) -> Result<Box<dyn Backend>> {
    match id {
        #[cfg(feature = "backend_codec_json")]
        "codec-json" => Ok(Box::new(codec_json::CodecJsonBackend)),
        #[cfg(feature = "backend_std_json")]
        "std-json" | "json" => Ok(Box::new(std_json::StdJsonBackend)),
        #[cfg(feature = "backend_gob")]
        "gob" => Ok(Box::new(gob::GobBackend)),
        #[cfg(feature = "backend_codec_binary")]
        "codec-binary" | "binary" => Ok(Box::new(codec_binary::CodecBinaryBackend)),
        _ => Err(GenError::Unsupported(format!("backend '{id}' not available"))),
    }
}

pub fn all_backends() -> Vec<Box<dyn Backend>> {
    let mut v: Vec<Box<dyn Backend>> = vec![];
    #[cfg(feature = "backend_codec_json")]
    v.push(Box::new(codec_json::CodecJsonBackend));
    #[cfg(feature = "backend_std_json")]
    v.push(Box::new(std_json::StdJsonBackend));
    #[cfg(feature = "backend_gob")]
    v.push(Box::new(gob::GobBackend));
    #[cfg(feature = "backend_codec_binary")]
    v.push(Box::new(codec_binary::CodecBinaryBackend));
    v
}
