use crate::batch::ModelBatch;
use crate::options::ResolverOptions;
use crate::primitive::map_primitive;
use crate::types::{ResolvedField, ResolvedModel, ResolvedType, TypeReference};
use mtt_common::{to_camel_case, Diagnostic, Location};
use mtt_parser::{Field, Model};
use tracing::{debug, info, instrument};

pub const UNRESOLVED_BASE_RULE: &str = "unresolved-base";

/// Relative import path from a file in `from_group` to the emitted file of
/// `target_name` in `target_group`.
///
/// - same group → `./target`
/// - from the root group → `./group/target`
/// - between two different groups → `../group/target`
/// - from a group up to the root group → `../target`
///
/// Groups are one directory deep, so one `../` always reaches the root.
pub fn import_path(from_group: &str, target_group: &str, target_name: &str) -> String {
    let file_name = to_camel_case(target_name);

    if from_group == target_group {
        format!("./{}", file_name)
    } else if from_group.is_empty() {
        format!("./{}/{}", target_group, file_name)
    } else if target_group.is_empty() {
        format!("../{}", file_name)
    } else {
        format!("../{}/{}", target_group, file_name)
    }
}

/// Output of resolving a whole batch
#[derive(Debug, Clone)]
pub struct Resolution {
    pub models: Vec<ResolvedModel>,
    pub diagnostics: Vec<Diagnostic>,
}

/// Resolves field and base type names against a complete [`ModelBatch`]
pub struct Resolver<'a> {
    batch: &'a ModelBatch,
    options: ResolverOptions,
}

impl<'a> Resolver<'a> {
    pub fn new(batch: &'a ModelBatch, options: ResolverOptions) -> Self {
        Self { batch, options }
    }

    /// Resolve every model in batch order.
    #[instrument(skip_all, fields(models = self.batch.len()))]
    pub fn resolve_all(&self) -> Resolution {
        let mut diagnostics = self.batch.duplicates().to_vec();

        let models: Vec<ResolvedModel> = self
            .batch
            .models()
            .iter()
            .map(|model| {
                let resolved = self.resolve_model(model);
                if let (Some(base), None) = (&model.base_type_name, &resolved.base) {
                    diagnostics.push(Diagnostic::info(
                        UNRESOLVED_BASE_RULE,
                        format!("base type `{}` is not a known model; no `extends` emitted", base),
                        Location::file(model.path.clone()),
                    ));
                }
                resolved
            })
            .collect();

        let references: usize = models
            .iter()
            .map(|m| m.fields.iter().filter(|f| f.is_user_defined()).count())
            .sum();
        info!(models = models.len(), references, "Resolution complete");

        Resolution {
            models,
            diagnostics,
        }
    }

    /// Resolve one model's base type and fields.
    pub fn resolve_model(&self, model: &Model) -> ResolvedModel {
        let base = model
            .base_type_name
            .as_deref()
            .and_then(|name| self.resolve_reference(model, name));

        let fields = model
            .fields
            .iter()
            .map(|field| self.resolve_field(model, field))
            .collect();

        ResolvedModel {
            name: model.name.clone(),
            structure_group: model.structure_group.clone(),
            base,
            fields,
        }
    }

    /// User-defined reference when the field type names a model, primitive
    /// mapping otherwise. The two outcomes never overlap.
    pub fn resolve_field(&self, owner: &Model, field: &Field) -> ResolvedField {
        let resolved = match self.resolve_reference(owner, &field.type_name) {
            Some(reference) => ResolvedType::UserDefined(reference),
            None => ResolvedType::Primitive(map_primitive(&field.type_name, &self.options)),
        };

        debug!(
            model = %owner.name,
            field = %field.variable_name,
            resolved = %resolved.name(),
            "Resolved field"
        );

        ResolvedField {
            variable_name: field.variable_name.clone(),
            declared_type_name: field.declared_type_name.clone(),
            is_array: field.is_array,
            resolved,
        }
    }

    /// Look `name` up in the batch and compute the import path from `from`.
    pub fn resolve_reference(&self, from: &Model, name: &str) -> Option<TypeReference> {
        self.batch.find(name).map(|target| TypeReference {
            name: target.name.clone(),
            import_path: import_path(&from.structure_group, &target.structure_group, &target.name),
        })
    }
}
