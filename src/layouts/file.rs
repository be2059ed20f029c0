use super::{Layout, DO_NOT_CHANGE_BANNER, GENERATED_BANNER};
use crate::backends::Backend;

/// Complete Go source file: package clause, backend preamble, banner, functions.
pub struct FileLayout;

impl Layout for FileLayout {
    fn id(&self) -> &'static str { "file" }

    fn render(&self, backend: &dyn Backend, package: &str, body: &str) -> String {
        let mut out = String::new();
        out.push_str(&format!("package {package}\n\n"));
        out.push_str(backend.preamble());
        out.push('\n');
        out.push_str(GENERATED_BANNER);
        out.push('\n');
        out.push_str(DO_NOT_CHANGE_BANNER);
        out.push('\n');
        out.push_str(body);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backends::get_backend;

    #[test]
    fn file_starts_with_package_and_imports() {
        let backend = get_backend("gob").unwrap();
        let out = FileLayout.render(backend.as_ref(), "internal", "func decodeX() {}\n");
        let expected = "package internal\n\n\
            import (\n\t\"bytes\"\n\t\"encoding/gob\"\n)\n\n\
            // ------ following codes are generated from encoder-gen --------\n\
            // ------------------------- DO NOT CHANGE --------------------------------\n\
            func decodeX() {}\n";
        assert_eq!(out, expected);
    }

    #[test]
    fn codec_preamble_declares_cdc() {
        let backend = get_backend("codec-binary").unwrap();
        let out = FileLayout.render(backend.as_ref(), "repv2", "");
        assert!(out.contains("wire \"github.com/cosmos/cosmos-sdk/codec\""));
        assert!(out.contains("var cdc = wire.New()\n"));
    }
}
