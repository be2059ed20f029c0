use crate::model::TypeName;

/// Placeholder for the type name as written.
pub const BARE_MARKER: &str = "@";
/// Placeholder for the capitalized type name. Contains [`BARE_MARKER`].
pub const CAP_MARKER: &str = "^@";

#[derive(Debug, Clone, Copy)]
enum Form {
    Capitalized,
    AsWritten,
}

/// Substitution pipeline, applied in order. `CAP_MARKER` must come first:
/// the bare pass would otherwise eat the `@` inside every `^@`.
const SUBSTITUTIONS: &[(&str, Form)] = &[
    (CAP_MARKER, Form::Capitalized),
    (BARE_MARKER, Form::AsWritten),
];

/// Resolve both markers in `template` for one type.
pub fn expand(template: &str, name: &TypeName) -> String {
    let capitalized = name.capitalized();
    SUBSTITUTIONS
        .iter()
        .fold(template.to_string(), |acc, (marker, form)| {
            let value = match form {
                Form::Capitalized => capitalized.as_str(),
                Form::AsWritten => name.as_str(),
            };
            acc.replace(marker, value)
        })
}

/// Expand `template` once per name, concatenated in list order.
pub fn expand_batch(template: &str, names: &[TypeName]) -> String {
    let mut out = String::new();
    for n in names {
        log::trace!("expanding {n}");
        out.push_str(&expand(template, n));
    }
    out
}
