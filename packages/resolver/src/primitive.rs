use crate::options::ResolverOptions;
use crate::types::Primitive;

const NUMERIC_TYPES: &[&str] = &[
    "byte", "sbyte", "decimal", "double", "float", "int", "uint", "long", "ulong", "short",
    "ushort",
];

/// Map a cleaned source type name onto a target primitive.
///
/// Depends only on the name and the options, never on the batch.
pub fn map_primitive(type_name: &str, options: &ResolverOptions) -> Primitive {
    match type_name {
        t if NUMERIC_TYPES.contains(&t) => Primitive::Number,
        "bool" => Primitive::Boolean,
        "string" => Primitive::String,
        "DateTime" if options.map_date_time => Primitive::Date,
        _ => Primitive::Any,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_types() {
        let options = ResolverOptions::default();
        for t in NUMERIC_TYPES {
            assert_eq!(map_primitive(t, &options), Primitive::Number, "{}", t);
        }
    }

    #[test]
    fn test_scalar_types() {
        let options = ResolverOptions::default();
        assert_eq!(map_primitive("bool", &options), Primitive::Boolean);
        assert_eq!(map_primitive("string", &options), Primitive::String);
        assert_eq!(map_primitive("DateTime", &options), Primitive::Date);
        assert_eq!(map_primitive("Guid", &options), Primitive::Any);
        assert_eq!(map_primitive("String", &options), Primitive::Any);
        assert_eq!(map_primitive("", &options), Primitive::Any);
    }

    #[test]
    fn test_date_mapping_can_be_disabled() {
        let options = ResolverOptions::without_dates();
        assert_eq!(map_primitive("DateTime", &options), Primitive::Any);
        assert_eq!(map_primitive("int", &options), Primitive::Number);
    }

    #[test]
    fn test_mapping_is_pure() {
        let options = ResolverOptions::default();
        for t in ["int", "bool", "Thing", "DateTime"] {
            assert_eq!(map_primitive(t, &options), map_primitive(t, &options));
        }
    }
}
