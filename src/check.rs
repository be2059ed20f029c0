use crate::error::{GenError, Result};
use crate::layouts::DO_NOT_CHANGE_BANNER;
use similar::{ChangeTag, TextDiff};

#[derive(Debug, Clone)]
pub struct CheckReport {
    pub up_to_date: bool,
    pub added_lines: usize,
    pub removed_lines: usize,
    /// unified diff from the file's region to the fresh output; empty when up to date
    pub diff: String,
}

/// Text after the `DO NOT CHANGE` banner line.
pub fn generated_region(existing: &str) -> Option<&str> {
    let at = existing.find(DO_NOT_CHANGE_BANNER)?;
    let rest = &existing[at + DO_NOT_CHANGE_BANNER.len()..];
    Some(rest.strip_prefix("\r\n").or_else(|| rest.strip_prefix('\n')).unwrap_or(rest))
}

/// Compare the generated region of `existing` against `generated`.
pub fn check_against(existing: &str, generated: &str) -> Result<CheckReport> {
    let region = generated_region(existing)
        .ok_or_else(|| GenError::Unsupported("no DO NOT CHANGE banner found".into()))?;

    let old = format!("{}\n", region.trim_end());
    let new = format!("{}\n", generated.trim_end());

    if old == new {
        return Ok(CheckReport { up_to_date: true, added_lines: 0, removed_lines: 0, diff: String::new() });
    }

    let diff = TextDiff::from_lines(&old, &new);
    let mut add = 0usize;
    let mut rem = 0usize;
    for change in diff.iter_all_changes() {
        match change.tag() {
            ChangeTag::Insert => add += 1,
            ChangeTag::Delete => rem += 1,
            ChangeTag::Equal => {}
        }
    }

    let rendered = diff
        .unified_diff()
        .context_radius(3)
        .header("existing", "generated")
        .to_string();

    Ok(CheckReport { up_to_date: false, added_lines: add, removed_lines: rem, diff: rendered })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file_with(body: &str) -> String {
        format!("package model\n\n{DO_NOT_CHANGE_BANNER}\n{body}")
    }

    #[test]
    fn identical_region_is_up_to_date() {
        let body = "func decodeA() {}\n\n";
        let r = check_against(&file_with(body), body).unwrap();
        assert!(r.up_to_date);
        assert!(r.diff.is_empty());
    }

    #[test]
    fn edited_region_reports_diff() {
        let r = check_against(&file_with("func decodeA() {}\n"), "func decodeB() {}\n").unwrap();
        assert!(!r.up_to_date);
        assert_eq!((r.added_lines, r.removed_lines), (1, 1));
        assert!(r.diff.contains("-func decodeA() {}"));
        assert!(r.diff.contains("+func decodeB() {}"));
    }

    #[test]
    fn missing_banner_is_unsupported() {
        let err = check_against("package model\n", "").unwrap_err();
        assert!(matches!(err, GenError::Unsupported(_)));
    }

    #[test]
    fn region_skips_banner_line() {
        assert_eq!(generated_region(&file_with("x\n")), Some("x\n"));
    }
}
