use crate::{collect_imports, compile_model, output_path, CompileOptions};
use mtt_parser::{extract_all, SourceModel};
use mtt_resolver::{ModelBatch, ResolvedModel, Resolver, ResolverOptions};
use std::path::PathBuf;

fn source(group: &str, name: &str, lines: &[&str]) -> SourceModel {
    SourceModel {
        name: name.to_string(),
        structure_group: group.to_string(),
        path: PathBuf::from(group).join(format!("{}.cs", name)),
        raw_lines: lines.iter().map(|l| l.to_string()).collect(),
    }
}

fn resolve(sources: Vec<SourceModel>) -> Vec<ResolvedModel> {
    let (models, _) = extract_all(sources);
    let batch = ModelBatch::new(models);
    Resolver::new(&batch, ResolverOptions::default())
        .resolve_all()
        .models
}

fn no_banner() -> CompileOptions {
    CompileOptions {
        auto_generated_tag: false,
        ..Default::default()
    }
}

#[test]
fn test_single_primitive_field() {
    let models = resolve(vec![source("", "User", &["public int Age;"])]);
    let result = compile_model(&models[0], no_banner());

    println!("Generated code:\n{}", result);

    assert_eq!(result, "export interface User {\n\tage: number;\n}\n");
    assert_eq!(output_path(&models[0], "ts"), PathBuf::from("user.ts"));
}

#[test]
fn test_banner() {
    let models = resolve(vec![source("", "User", &["public int Age;"])]);
    let result = compile_model(&models[0], CompileOptions::default());

    assert!(result.starts_with("/* Auto Generated */\n\nexport interface User {"));
}

#[test]
fn test_root_model_imports_from_group() {
    let models = resolve(vec![
        source("", "Profile", &["public User Owner;"]),
        source("people", "User", &["public string Name;"]),
    ]);
    let result = compile_model(&models[0], no_banner());

    println!("Generated code:\n{}", result);

    assert_eq!(
        result,
        "import { User } from \"./people/user\"\n\nexport interface Profile {\n\towner: User;\n}\n"
    );
}

#[test]
fn test_inheritance_across_groups() {
    let models = resolve(vec![
        source("a", "Child", &["public class Child : Base", "{", "}"]),
        source("b", "Base", &["public int Id;"]),
    ]);
    let child = &models[0];
    let result = compile_model(child, no_banner());

    println!("Generated code:\n{}", result);

    assert!(result.contains("import { Base } from \"../b/base\""));
    assert!(result.contains("export interface Child extends Base {"));
    assert_eq!(output_path(child, "ts"), PathBuf::from("a/child.ts"));
}

#[test]
fn test_collection_field() {
    let models = resolve(vec![
        source("", "Post", &["public ICollection<Tag> Tags { get; set; }"]),
        source("", "Tag", &["public string Label;"]),
    ]);
    let result = compile_model(&models[0], no_banner());

    assert!(result.contains("import { Tag } from \"./tag\""));
    assert!(result.contains("\ttags: Tag[];"));
}

#[test]
fn test_imports_are_deduplicated() {
    let models = resolve(vec![
        source(
            "blog",
            "Post",
            &[
                "public class Post : Entity",
                "public User Author;",
                "public User Editor;",
                "public Entity Parent;",
                "public IEnumerable<User> Readers;",
            ],
        ),
        source("people", "User", &[]),
        source("", "Entity", &[]),
    ]);
    let post = &models[0];
    let result = compile_model(post, no_banner());

    println!("Generated code:\n{}", result);

    assert_eq!(result.matches("import { User } from \"../people/user\"").count(), 1);
    assert_eq!(result.matches("import { Entity } from \"../entity\"").count(), 1);
    assert_eq!(collect_imports(post).len(), 2);

    // Base type import comes first
    let entity_at = result.find("import { Entity }").unwrap();
    let user_at = result.find("import { User }").unwrap();
    assert!(entity_at < user_at);
}

#[test]
fn test_base_import_without_fields() {
    let models = resolve(vec![
        source("", "Admin", &["public class Admin : User", "{", "}"]),
        source("", "User", &[]),
    ]);
    let result = compile_model(&models[0], no_banner());

    assert_eq!(
        result,
        "import { User } from \"./user\"\n\nexport interface Admin extends User {\n}\n"
    );
}

#[test]
fn test_self_reference_is_not_imported() {
    let models = resolve(vec![source(
        "tree",
        "Node",
        &["public Node Parent;", "public ICollection<Node> Children;"],
    )]);
    let result = compile_model(&models[0], no_banner());

    println!("Generated code:\n{}", result);

    assert!(!result.contains("import"));
    assert!(result.contains("\tparent: Node;"));
    assert!(result.contains("\tchildren: Node[];"));
}

#[test]
fn test_duplicate_name_in_other_group_is_not_imported() {
    let models = resolve(vec![
        source("a", "Node", &["public int Id;"]),
        source("b", "Node", &["public Node Next;", "public string Label;"]),
    ]);
    let shadowed = &models[1];
    let result = compile_model(shadowed, no_banner());

    println!("Generated code:\n{}", result);

    assert!(collect_imports(shadowed).is_empty());
    assert!(!result.contains("import"));
    assert!(result.contains("export interface Node {"));
    assert_eq!(output_path(shadowed, "ts"), PathBuf::from("b/node.ts"));
}

#[test]
fn test_unresolved_base_is_dropped() {
    let models = resolve(vec![source("", "Widget", &["public class Widget : Component", "public bool Visible;"])]);
    let result = compile_model(&models[0], no_banner());

    assert_eq!(result, "export interface Widget {\n\tvisible: boolean;\n}\n");
}

#[test]
fn test_field_order_is_preserved() {
    let models = resolve(vec![source(
        "",
        "Order",
        &[
            "public string Zeta;",
            "public DateTime PlacedAt;",
            "public decimal Total;",
            "public Guid Ref;",
        ],
    )]);
    let result = compile_model(&models[0], no_banner());

    assert_eq!(
        result,
        "export interface Order {\n\tzeta: string;\n\tplacedAt: Date;\n\ttotal: number;\n\tref: any;\n}\n"
    );
}
