use super::{Backend, SHORT_NAMES};

/// Binary codec; the `Must*` calls panic on malformed input themselves.
pub struct CodecBinaryBackend;

impl Backend for CodecBinaryBackend {
    fn id(&self) -> &'static str { "codec-binary" }

    fn about(&self) -> &'static str { "codec binary (cdc.MustUnmarshalBinaryBare / cdc.MustMarshalBinaryBare)" }

    fn template(&self) -> &'static str {
        include_str!("../../templates/codec_binary.go.tpl")
    }

    fn preamble(&self) -> &'static str {
        include_str!("../../templates/codec_binary.preamble.go.tpl")
    }

    fn default_names(&self) -> Option<&'static [&'static str]> {
        Some(SHORT_NAMES)
    }
}
