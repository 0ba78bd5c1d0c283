use mtt_common::{Diagnostic, Location};
use mtt_parser::Model;
use std::collections::HashMap;
use tracing::warn;

pub const DUPLICATE_MODEL_RULE: &str = "duplicate-model";

/// Immutable snapshot of every extracted model.
///
/// Resolution only ever sees a complete batch: a `ModelBatch` is built from
/// the finished extraction output and never changes afterwards.
#[derive(Debug, Clone)]
pub struct ModelBatch {
    models: Vec<Model>,

    /// Name → index of the first model with that name
    index: HashMap<String, usize>,

    duplicates: Vec<Diagnostic>,
}

impl ModelBatch {
    pub fn new(models: Vec<Model>) -> Self {
        let mut index = HashMap::with_capacity(models.len());
        let mut duplicates = Vec::new();

        for (i, model) in models.iter().enumerate() {
            match index.get(&model.name) {
                None => {
                    index.insert(model.name.clone(), i);
                }
                Some(&first) => {
                    let first: &Model = &models[first];
                    warn!(
                        name = %model.name,
                        kept = %first.path.display(),
                        shadowed = %model.path.display(),
                        "Duplicate model name, references resolve to the first one"
                    );
                    duplicates.push(
                        Diagnostic::warning(
                            DUPLICATE_MODEL_RULE,
                            format!(
                                "model `{}` is also defined in {}; references resolve to that one",
                                model.name,
                                first.path.display()
                            ),
                            Location::file(model.path.clone()),
                        )
                        .with_suggestion("rename one of the files"),
                    );
                }
            }
        }

        Self {
            models,
            index,
            duplicates,
        }
    }

    /// First model whose name equals `name` (case-sensitive)
    pub fn find(&self, name: &str) -> Option<&Model> {
        self.index.get(name).map(|&i| &self.models[i])
    }

    pub fn models(&self) -> &[Model] {
        &self.models
    }

    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }

    /// One warning per model shadowed by an earlier model of the same name
    pub fn duplicates(&self) -> &[Diagnostic] {
        &self.duplicates
    }
}
