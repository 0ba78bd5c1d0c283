use serde::{Deserialize, Serialize};

/// Target-language primitive a source type name maps onto
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Primitive {
    Number,
    Boolean,
    String,
    Date,

    /// Permissive placeholder for anything unrecognised
    Any,
}

impl Primitive {
    pub fn as_str(&self) -> &'static str {
        match self {
            Primitive::Number => "number",
            Primitive::Boolean => "boolean",
            Primitive::String => "string",
            Primitive::Date => "Date",
            Primitive::Any => "any",
        }
    }
}

/// A reference to another model in the batch plus where to import it from
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TypeReference {
    pub name: String,
    pub import_path: String,
}

/// Outcome of resolving one field type
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResolvedType {
    Primitive(Primitive),
    UserDefined(TypeReference),
}

impl ResolvedType {
    pub fn name(&self) -> &str {
        match self {
            ResolvedType::Primitive(p) => p.as_str(),
            ResolvedType::UserDefined(r) => &r.name,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedField {
    pub variable_name: String,
    pub declared_type_name: String,
    pub is_array: bool,
    pub resolved: ResolvedType,
}

impl ResolvedField {
    pub fn is_user_defined(&self) -> bool {
        matches!(self.resolved, ResolvedType::UserDefined(_))
    }

    /// Primitive name or referenced model name
    pub fn resolved_type(&self) -> &str {
        self.resolved.name()
    }

    /// Present only for user-defined references
    pub fn import_path(&self) -> Option<&str> {
        match &self.resolved {
            ResolvedType::UserDefined(r) => Some(&r.import_path),
            ResolvedType::Primitive(_) => None,
        }
    }

    pub fn reference(&self) -> Option<&TypeReference> {
        match &self.resolved {
            ResolvedType::UserDefined(r) => Some(r),
            ResolvedType::Primitive(_) => None,
        }
    }
}

/// A model with every reference resolved against the batch, ready to emit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedModel {
    pub name: String,
    pub structure_group: String,

    /// Present only when the base type names a model in the batch
    pub base: Option<TypeReference>,

    pub fields: Vec<ResolvedField>,
}
