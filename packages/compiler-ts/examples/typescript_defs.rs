use mtt_compiler_ts::{compile_model, output_path, CompileOptions};
use mtt_parser::{extract_all, SourceModel};
use mtt_resolver::{ModelBatch, Resolver, ResolverOptions};
use std::path::PathBuf;

fn source(group: &str, name: &str, code: &str) -> SourceModel {
    SourceModel {
        name: name.to_string(),
        structure_group: group.to_string(),
        path: PathBuf::from(group).join(format!("{}.cs", name)),
        raw_lines: code.lines().map(str::to_string).collect(),
    }
}

fn main() {
    let sources = vec![
        source(
            "",
            "Entity",
            r#"
public abstract class Entity
{
    public int Id { get; set; }
    public DateTime CreatedAt { get; set; }
}
"#,
        ),
        source(
            "people",
            "User",
            r#"
public class User : Entity
{
    public string Email { get; set; }
    public bool IsActive { get; set; }
    public virtual ICollection<Order> Orders { get; set; }
}
"#,
        ),
        source(
            "sales",
            "Order",
            r#"
public class Order : Entity
{
    public User Customer { get; set; }
    public decimal Total { get; set; }
    public string[] Notes { get; set; }

    public Order() { }
}
"#,
        ),
    ];

    let (models, diagnostics) = extract_all(sources);
    for diagnostic in &diagnostics {
        eprintln!("{}", diagnostic);
    }

    let batch = ModelBatch::new(models);
    let resolution = Resolver::new(&batch, ResolverOptions::default()).resolve_all();

    for model in &resolution.models {
        let options = CompileOptions::default();
        let path = output_path(model, &options.file_extension);
        println!("// ---- {} ----", path.display());
        println!("{}", compile_model(model, options));
    }
}
