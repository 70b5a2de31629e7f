//! Directive header parsing.
//!
//! A template may start with directive lines declaring where its output goes:
//!
//! ```text
//! #path = internal/{{lower_entity_name}}
//! #fileName: {{lower_entity_name}}_repo.go
//!
//! package {{lower_entity_name}}
//! ```
//!
//! Blank lines are absorbed while still in the header. The first other line
//! starts the body, and directives are not recognised after that.

/// The two directive forms a header may declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectiveKind {
    /// `#path = <expr>`
    Path,
    /// `#fileName: <expr>` or `#fileName = <expr>`
    FileName,
}

impl DirectiveKind {
    /// Leading keyword, also the suffix of the expression's registry name
    pub(crate) fn keyword(&self) -> &'static str {
        match self {
            DirectiveKind::Path => "#path",
            DirectiveKind::FileName => "#fileName",
        }
    }

    fn accepts(&self, op: char) -> bool {
        match self {
            DirectiveKind::Path => op == '=',
            DirectiveKind::FileName => op == '=' || op == ':',
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DirectiveKind::Path => "path",
            DirectiveKind::FileName => "fileName",
        }
    }
}

/// A template split into its directive header and body.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedTemplate {
    pub path_expr: Option<String>,
    pub file_name_expr: Option<String>,
    pub body: String,
}

/// Split template source into directives and body.
///
/// Every body line is terminated with `\n`. Directive values are trimmed and
/// an empty value counts as absent. A repeated directive overrides the
/// earlier one.
pub fn parse_template(source: &str) -> ParsedTemplate {
    let mut parsed = ParsedTemplate::default();
    let mut in_header = true;

    for line in source.lines() {
        if in_header {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            if let Some((kind, value)) = parse_directive(trimmed) {
                let value = (!value.is_empty()).then(|| value.to_string());
                match kind {
                    DirectiveKind::Path => parsed.path_expr = value,
                    DirectiveKind::FileName => parsed.file_name_expr = value,
                }
                continue;
            }
            in_header = false;
        }
        parsed.body.push_str(line);
        parsed.body.push('\n');
    }

    parsed
}

/// Recognise a single trimmed directive line.
fn parse_directive(line: &str) -> Option<(DirectiveKind, &str)> {
    [DirectiveKind::Path, DirectiveKind::FileName]
        .into_iter()
        .find_map(|kind| {
            let rest = line.strip_prefix(kind.keyword())?.trim_start();
            let mut chars = rest.chars();
            let op = chars.next()?;
            kind.accepts(op).then(|| (kind, chars.as_str().trim()))
        })
}
