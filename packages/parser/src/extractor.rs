//! Declaration extractor: turns a [`SourceModel`]'s raw lines into a
//! [`Model`] with an ordered field list and an optional base type.

use crate::model::{Field, Model, SourceModel};
use crate::predicates::{
    is_field_line, is_inheritance_line, strip_trailing_comment, INHERITANCE_SEPARATOR,
    MODIFIER_KEYWORDS,
};
use mtt_common::{Diagnostic, Location};
use tracing::{debug, info, instrument, warn};

/// Generic wrappers that mark a field as a collection of their argument
pub const COLLECTION_MARKERS: &[&str] = &["ICollection", "IEnumerable"];

/// Suffix marking an array type, e.g. `int[]`
pub const ARRAY_MARKER: &str = "[]";

pub const MALFORMED_FIELD_RULE: &str = "malformed-field";

/// Result of extracting a single model
#[derive(Debug, Clone)]
pub struct Extraction {
    pub model: Model,
    pub diagnostics: Vec<Diagnostic>,
}

/// Extract every model. Malformed lines are reported and skipped; they never
/// stop the batch.
#[instrument(skip_all, fields(models = sources.len()))]
pub fn extract_all(sources: Vec<SourceModel>) -> (Vec<Model>, Vec<Diagnostic>) {
    let mut models = Vec::with_capacity(sources.len());
    let mut diagnostics = Vec::new();

    for source in sources {
        let extraction = extract(source);
        models.push(extraction.model);
        diagnostics.extend(extraction.diagnostics);
    }

    let fields: usize = models.iter().map(|m| m.fields.len()).sum();
    info!(
        models = models.len(),
        fields,
        warnings = diagnostics.len(),
        "Extraction complete"
    );

    (models, diagnostics)
}

/// Scan one model's lines for its inheritance line and public fields.
pub fn extract(source: SourceModel) -> Extraction {
    let SourceModel {
        name,
        structure_group,
        path,
        raw_lines,
    } = source;

    let mut base_type_name = None;
    let mut fields = Vec::new();
    let mut diagnostics = Vec::new();

    for (index, line) in raw_lines.iter().enumerate() {
        if is_inheritance_line(line) {
            if let Some(base) = parse_base_type(strip_trailing_comment(line)) {
                if base_type_name.is_none() {
                    base_type_name = Some(base);
                } else {
                    debug!(model = %name, ignored = %base, "Ignoring additional inheritance line");
                }
            }
            continue;
        }

        if !is_field_line(line) {
            continue;
        }

        match parse_field(line) {
            Ok(field) => fields.push(field),
            Err(reason) => {
                let location = Location::line(path.clone(), index + 1);
                warn!(%location, reason = %reason, "Skipping malformed field line");
                diagnostics.push(
                    Diagnostic::warning(
                        MALFORMED_FIELD_RULE,
                        format!("{}: `{}`", reason, line.trim()),
                        location,
                    )
                    .with_suggestion("declare fields as `public <Type> <Name>;`"),
                );
            }
        }
    }

    debug!(model = %name, fields = fields.len(), base = ?base_type_name, "Extracted model");

    Extraction {
        model: Model {
            name,
            structure_group,
            path,
            base_type_name,
            fields,
        },
        diagnostics,
    }
}

/// Parent type named on an inheritance line, e.g. `Base` from
/// `public class Child : Base<T>, IThing {`.
pub fn parse_base_type(line: &str) -> Option<String> {
    let (head, tail) = line.split_once(INHERITANCE_SEPARATOR)?;

    // `class Box<T> where T : Item` constrains a parameter, it names no parent
    if head.split_whitespace().any(|w| w == "where") {
        return None;
    }

    let token = tail.split_whitespace().next()?;
    let base = token
        .split(|c: char| matches!(c, '<' | '[' | ',' | '{' | '('))
        .next()
        .unwrap_or_default()
        .trim();

    if base.is_empty() {
        None
    } else {
        Some(base.to_string())
    }
}

/// Tokenize a field line into its declared type and member name.
///
/// Returns the reason on failure so the caller can report it with the
/// file and line number.
pub fn parse_field(line: &str) -> Result<Field, String> {
    let tokens: Vec<&str> = strip_trailing_comment(line)
        .split_whitespace()
        .filter(|t| !MODIFIER_KEYWORDS.contains(t))
        .collect();

    if tokens.len() < 2 {
        return Err("expected `<type> <name>` after modifiers".to_string());
    }

    let declared = tokens[0];
    if declared.matches('<').count() != declared.matches('>').count() {
        return Err(format!("unsupported generic type `{}`", declared));
    }

    let variable_name = tokens[1]
        .split(|c: char| matches!(c, ';' | '=' | '{'))
        .next()
        .unwrap_or_default()
        .trim();
    if variable_name.is_empty() {
        return Err("missing member name".to_string());
    }

    let (type_name, is_array) = clean_type(declared);
    if type_name.is_empty() {
        return Err(format!("cannot determine type from `{}`", declared));
    }

    Ok(Field::new(variable_name, declared, type_name, is_array))
}

/// Strip array, collection and generic decorations from a declared type.
///
/// `int[]` → (`int`, true), `ICollection<Tag>` → (`Tag`, true),
/// `int?` → (`int`, false).
pub fn clean_type(declared: &str) -> (String, bool) {
    let mut ty = declared.trim().trim_end_matches('?');
    let mut is_array = false;

    if let Some(element) = ty.strip_suffix(ARRAY_MARKER) {
        ty = element;
        is_array = true;
    }

    for marker in COLLECTION_MARKERS {
        if let Some(rest) = ty.strip_prefix(*marker) {
            if rest.is_empty() {
                return ("object".to_string(), true);
            }
            if let Some(inner) = rest.strip_prefix('<').and_then(|r| r.strip_suffix('>')) {
                ty = inner;
                is_array = true;
                break;
            }
        }
    }

    let cleaned = ty
        .replace(ARRAY_MARKER, "")
        .chars()
        .filter(|c| !matches!(c, '<' | '>' | '?'))
        .collect();

    (cleaned, is_array)
}
