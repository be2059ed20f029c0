use super::Backend;

/// gob has no built-in name list; every run needs an explicit name.
pub struct GobBackend;

impl Backend for GobBackend {
    fn id(&self) -> &'static str { "gob" }

    fn about(&self) -> &'static str { "encoding/gob" }

    fn template(&self) -> &'static str {
        include_str!("../../templates/gob.go.tpl")
    }

    fn preamble(&self) -> &'static str {
        include_str!("../../templates/gob.preamble.go.tpl")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expand::expand;
    use crate::model::TypeName;

    #[test]
    fn post_meta_uses_gob_streams() {
        let out = expand(GobBackend.template(), &TypeName::parse("postMeta").unwrap());
        assert!(out.contains("func decodePostMeta(data []byte) *postMeta {"));
        assert!(out.contains("dec := gob.NewDecoder(bytes.NewBuffer(data))"));
        assert!(out.contains("panic(\"error in gob decode postMeta\" + err.Error())"));
        assert!(out.contains("enc := gob.NewEncoder(&buf)"));
        assert!(out.contains("return buf.Bytes()"));
    }
}
