use crate::{
    backends::get_backend,
    check::{check_against, CheckReport},
    error::{GenError, Result},
    expand::expand_batch,
    layouts::get_layout,
    model::GenerateRequest,
};
use std::fs;
use std::path::Path;

/// Expand the backend template for every requested name and wrap it in the layout.
pub fn run_generate(req: &GenerateRequest) -> Result<String> {
    if req.names.is_empty() {
        return Err(GenError::MissingTypeName);
    }
    let backend = get_backend(&req.backend)?;
    let layout = get_layout(&req.layout)?;

    log::debug!(
        "generating {} type(s) with backend={} layout={}",
        req.names.len(),
        backend.id(),
        layout.id()
    );

    let body = expand_batch(backend.template(), &req.names);
    Ok(layout.render(backend.as_ref(), &req.package, &body))
}

/// Compare the generated region of `path` with what `req` would produce.
pub fn run_check(req: &GenerateRequest, path: &Path) -> Result<CheckReport> {
    let backend = get_backend(&req.backend)?;
    let existing = fs::read_to_string(path)?;
    let body = expand_batch(backend.template(), &req.names);
    let report = check_against(&existing, &body)?;
    log::debug!(
        "check {}: up_to_date={} +{} -{}",
        path.display(),
        report.up_to_date,
        report.added_lines,
        report.removed_lines
    );
    Ok(report)
}
