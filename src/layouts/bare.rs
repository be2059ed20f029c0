use super::Layout;
use crate::backends::Backend;

/// Functions only, ready to paste below an existing banner.
pub struct BareLayout;

impl Layout for BareLayout {
    fn id(&self) -> &'static str { "bare" }

    fn render(&self, _backend: &dyn Backend, _package: &str, body: &str) -> String {
        body.to_string()
    }
}
