use super::{Backend, FULL_NAMES};

pub struct StdJsonBackend;

impl Backend for StdJsonBackend {
    fn id(&self) -> &'static str { "std-json" }

    fn about(&self) -> &'static str { "standard library encoding/json" }

    fn template(&self) -> &'static str {
        include_str!("../../templates/std_json.go.tpl")
    }

    fn preamble(&self) -> &'static str {
        include_str!("../../templates/std_json.preamble.go.tpl")
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
    fn user_meta_decoder_and_encoder() {
        let out = expand(StdJsonBackend.template(), &TypeName::parse("userMeta").unwrap());
        assert!(out.contains("func decodeuserMeta(data []byte) *UserMeta {"));
        assert!(out.contains("err := json.Unmarshal(data, &rst)"));
        assert!(out.contains("panic(\"error in json decode userMeta\" + err.Error())"));
        assert!(out.contains("func encodeuserMeta(dt *UserMeta) []byte {"));
        assert!(out.contains("rst, err := json.Marshal(dt)"));
    }
}
