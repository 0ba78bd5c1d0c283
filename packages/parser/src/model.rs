use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// One input file as read by the loader, before extraction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceModel {
    /// Type name derived from the file name
    pub name: String,

    /// Immediate parent subdirectory of the working root, empty for root files
    pub structure_group: String,

    pub path: PathBuf,

    pub raw_lines: Vec<String>,
}

/// One extracted type definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Model {
    pub name: String,
    pub structure_group: String,
    pub path: PathBuf,

    /// Single parent type named on the inheritance line
    pub base_type_name: Option<String>,

    /// Public members in declaration order
    pub fields: Vec<Field>,
}

impl Model {
    pub fn new(name: impl Into<String>, structure_group: impl Into<String>) -> Self {
        let name = name.into();
        let structure_group = structure_group.into();
        let path = if structure_group.is_empty() {
            PathBuf::from(&name)
        } else {
            PathBuf::from(&structure_group).join(&name)
        };

        Self {
            name,
            structure_group,
            path,
            base_type_name: None,
            fields: Vec::new(),
        }
    }

    pub fn with_base(mut self, base: impl Into<String>) -> Self {
        self.base_type_name = Some(base.into());
        self
    }

    pub fn with_field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }
}

/// One public member extracted from a declaration line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    pub variable_name: String,

    /// Type token as written, e.g. `ICollection<Tag>`
    pub declared_type_name: String,

    /// Type token with collection, array and generic decorations removed, e.g. `Tag`
    pub type_name: String,

    pub is_array: bool,
}

impl Field {
    pub fn new(
        variable_name: impl Into<String>,
        declared_type_name: impl Into<String>,
        type_name: impl Into<String>,
        is_array: bool,
    ) -> Self {
        Self {
            variable_name: variable_name.into(),
            declared_type_name: declared_type_name.into(),
            type_name: type_name.into(),
            is_array,
        }
    }
}
