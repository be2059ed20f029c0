use super::{Backend, FULL_NAMES};

pub struct CodecJsonBackend;

impl Backend for CodecJsonBackend {
    fn id(&self) -> &'static str { "codec-json" }

    fn about(&self) -> &'static str { "codec JSON (cdc.UnmarshalJSON / cdc.MarshalJSON)" }

    fn template(&self) -> &'static str {
        include_str!("../../templates/codec_json.go.tpl")
    }

    fn preamble(&self) -> &'static str {
        include_str!("../../templates/codec_json.preamble.go.tpl")
    }

    fn default_names(&self) -> Option<&'static [&'static str]> {
        Some(FULL_NAMES)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expand::expand;
    use crate::model::TypeName;

    #[test]
    fn user_meta_matches_codec_json_shape() {
        let out = expand(CodecJsonBackend.template(), &TypeName::parse("userMeta").unwrap());
        assert!(out.starts_with("func decodeUserMeta(data []byte) *userMeta {\n"));
        assert!(out.contains("\trst := &userMeta{}\n"));
        assert!(out.contains("err := cdc.UnmarshalJSON(data, rst)"));
        assert!(out.contains("panic(\"error in json decode userMeta\" + err.Error())"));
        assert!(out.contains("func encodeUserMeta(dt *userMeta) []byte {"));
        assert!(out.contains("rst, err := cdc.MarshalJSON(dt)"));
        assert!(out.contains("return []byte(rst)"));
    }
}
