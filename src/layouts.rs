use crate::backends::Backend;
use crate::error::{GenError, Result};

pub const GENERATED_BANNER: &str = "// ------ following codes are generated from encoder-gen --------";
pub const DO_NOT_CHANGE_BANNER: &str = "// ------------------------- DO NOT CHANGE --------------------------------";

pub trait Layout: Send + Sync {
    fn id(&self) -> &'static str;

    /// Wrap the generated functions (`body`) for output.
    fn render(&self, backend: &dyn Backend, package: &str, body: &str) -> String;
}

pub mod bare;
pub mod file;

pub fn get_layout(id: &str) -> Result<Box<dyn Layout>> {
    match id {
        "bare" => Ok(Box::new(bare::BareLayout)),
        "file" => Ok(Box::new(file::FileLayout)),
        _ => Err(GenError::Unsupported(format!("layout '{id}' not available"))),
    }
}
