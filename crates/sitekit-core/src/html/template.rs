//! Minimal `${name}` placeholder substitution.
//!
//! The template is a trusted, static asset. Placeholders resolve against a
//! closed set of named values; nothing else is evaluated, so template content
//! can never trigger code execution.

use crate::error::Error;

/// Substitute `${name}` placeholders with the given named values.
///
/// A `$` not followed by `{` passes through literally. Whitespace inside the
/// braces is ignored (`${ title }` is `${title}`).
///
/// # Errors
/// `TemplateSyntax` if a placeholder is unterminated or names a value outside
/// the given set.
pub(crate) fn substitute(template: &str, vars: &[(&str, &str)]) -> Result<String, Error> {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(idx) = rest.find("${") {
        out.push_str(&rest[..idx]);
        let after = &rest[idx + 2..];
        let Some(end) = after.find('}') else {
            return Err(Error::template_syntax("unterminated placeholder `${`"));
        };
        let name = after[..end].trim();
        match vars.iter().find(|(n, _)| *n == name) {
            Some((_, value)) => out.push_str(value),
            None => {
                return Err(Error::template_syntax(format!(
                    "unknown placeholder `${{{name}}}`"
                )));
            }
        }
        rest = &after[end + 1..];
    }

    out.push_str(rest);
    Ok(out)
}
