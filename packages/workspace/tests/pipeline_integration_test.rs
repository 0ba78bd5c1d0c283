/// End-to-end tests for the conversion pipeline
/// Tests the complete flow: load → extract → resolve → compile → write
use mtt_workspace::{
    convert, generate, ConvertError, ConvertOptions, MockFileSystem, RealFileSystem,
};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn write(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

fn read(root: &Path, relative: &str) -> String {
    fs::read_to_string(root.join(relative)).unwrap()
}

/// A working directory with a sibling convert directory, no banner
fn project() -> (TempDir, ConvertOptions) {
    let temp = TempDir::new().unwrap();
    let mut options = ConvertOptions::new(temp.path().join("models"), temp.path().join("out"));
    options.compile.auto_generated_tag = false;
    fs::create_dir_all(&options.working_dir).unwrap();
    (temp, options)
}

#[test]
fn test_single_model_with_primitive_field() {
    let (_temp, options) = project();
    write(&options.working_dir, "user.txt", "public int Age;\n");

    let report = convert(&options, &RealFileSystem).unwrap();

    assert_eq!(report.written, vec![options.convert_dir.join("user.ts")]);
    let output = read(&options.convert_dir, "user.ts");
    assert_eq!(output, "export interface User {\n\tage: number;\n}\n");
    assert!(!output.contains("import"));
}

#[test]
fn test_root_model_references_group_model() {
    let (_temp, options) = project();
    write(&options.working_dir, "profile.txt", "public User Owner;\n");
    write(&options.working_dir, "people/user.txt", "public string Name;\n");

    convert(&options, &RealFileSystem).unwrap();

    let profile = read(&options.convert_dir, "profile.ts");
    assert!(profile.contains("import { User } from \"./people/user\""));
    assert!(profile.contains("\towner: User;"));

    let user = read(&options.convert_dir, "people/user.ts");
    assert_eq!(user, "export interface User {\n\tname: string;\n}\n");
}

#[test]
fn test_inheritance_between_sibling_groups() {
    let (_temp, options) = project();
    write(
        &options.working_dir,
        "a/child.txt",
        "public class Child : Base\n{\n    public bool Active { get; set; }\n}\n",
    );
    write(
        &options.working_dir,
        "b/base.txt",
        "public class Base\n{\n    public int Id { get; set; }\n}\n",
    );

    convert(&options, &RealFileSystem).unwrap();

    let child = read(&options.convert_dir, "a/child.ts");
    assert_eq!(
        child,
        "import { Base } from \"../b/base\"\n\nexport interface Child extends Base {\n\tactive: boolean;\n}\n"
    );
}

#[test]
fn test_collection_of_known_model() {
    let (_temp, options) = project();
    write(&options.working_dir, "post.txt", "public ICollection<Tag> Tags;\n");
    write(&options.working_dir, "tag.txt", "public string Label;\n");

    convert(&options, &RealFileSystem).unwrap();

    let post = read(&options.convert_dir, "post.ts");
    assert!(post.contains("import { Tag } from \"./tag\""));
    assert!(post.contains("\ttags: Tag[];"));
}

#[test]
fn test_banner_and_suffix() {
    let (_temp, mut options) = project();
    options.compile.auto_generated_tag = true;
    write(&options.working_dir, "orderResource.cs", "public decimal Total;\n");

    convert(&options, &RealFileSystem).unwrap();

    let order = read(&options.convert_dir, "order.ts");
    assert!(order.starts_with("/* Auto Generated */\n\nexport interface Order {"));
}

#[test]
fn test_malformed_line_is_reported_and_skipped() {
    let (_temp, options) = project();
    write(
        &options.working_dir,
        "user.cs",
        "public class User\n{\n    public\n    public int Age;\n}\n",
    );

    let report = convert(&options, &RealFileSystem).unwrap();

    assert_eq!(report.warnings(), 1);
    let diagnostic = &report.diagnostics[0];
    assert_eq!(diagnostic.rule, "malformed-field");
    assert_eq!(diagnostic.location.line, Some(3));
    assert!(diagnostic.location.path.ends_with("user.cs"));

    let user = read(&options.convert_dir, "user.ts");
    assert_eq!(user, "export interface User {\n\tage: number;\n}\n");
}

#[test]
fn test_stale_output_is_cleared() {
    let (_temp, options) = project();
    write(&options.convert_dir, "old/stale.ts", "stale");
    write(&options.working_dir, "user.cs", "public int Age;\n");

    convert(&options, &RealFileSystem).unwrap();

    assert!(!options.convert_dir.join("old").exists());
    assert!(options.convert_dir.join("user.ts").exists());
}

#[test]
fn test_convert_dir_above_working_dir_is_never_cleared() {
    let temp = TempDir::new().unwrap();
    let models = temp.path().join("models");
    write(&models, "user.cs", "public int Age;\n");

    for convert_dir in [models.join(".."), models.join("."), temp.path().join("models/../models")] {
        let options = ConvertOptions::new(&models, &convert_dir);

        let err = convert(&options, &RealFileSystem).unwrap_err();

        assert!(matches!(err, ConvertError::Config(_)), "{}", convert_dir.display());
        assert!(models.join("user.cs").exists());
    }
}

#[test]
fn test_convert_dir_inside_working_dir_parent_is_cleared() {
    let temp = TempDir::new().unwrap();
    let models = temp.path().join("models");
    write(&models, "user.cs", "public int Age;\n");
    write(temp.path(), "out/stale.ts", "stale");

    let options = ConvertOptions::new(&models, models.join("../out"));
    convert(&options, &RealFileSystem).unwrap();

    assert!(!temp.path().join("out/stale.ts").exists());
    assert!(temp.path().join("out/user.ts").exists());
    assert!(models.join("user.cs").exists());
}

#[test]
fn test_missing_working_directory_is_created() {
    let temp = TempDir::new().unwrap();
    let options = ConvertOptions::new(temp.path().join("models"), temp.path().join("out"));

    let report = convert(&options, &RealFileSystem).unwrap();

    assert!(options.working_dir.is_dir());
    assert!(report.written.is_empty());
}

#[test]
fn test_missing_working_directory_fails_generation() {
    let temp = TempDir::new().unwrap();
    let options = ConvertOptions::new(temp.path().join("missing"), temp.path().join("out"));

    let err = generate(&options).unwrap_err();
    assert!(matches!(err, ConvertError::Load(_)));
}

#[test]
fn test_write_failure_aborts_batch() {
    let (_temp, options) = project();
    write(&options.working_dir, "alpha.cs", "public int A;\n");
    write(&options.working_dir, "beta.cs", "public int B;\n");
    write(&options.working_dir, "gamma.cs", "public int C;\n");

    let fs = MockFileSystem {
        fail_on_write: Some(options.convert_dir.join("beta.ts")),
        ..Default::default()
    };

    let err = convert(&options, &fs).unwrap_err();

    match err {
        ConvertError::Write { path, .. } => assert_eq!(path, options.convert_dir.join("beta.ts")),
        other => panic!("expected write error, got {:?}", other),
    }
    assert!(fs.read(&options.convert_dir.join("alpha.ts")).is_some());
    assert!(fs.read(&options.convert_dir.join("gamma.ts")).is_none());
}

#[test]
fn test_generate_does_not_write() {
    let (_temp, options) = project();
    write(&options.working_dir, "people/user.cs", "public int Age;\n");

    let generation = generate(&options).unwrap();

    assert_eq!(generation.files.len(), 1);
    assert_eq!(generation.files[0].relative_path, PathBuf::from("people/user.ts"));
    assert!(!options.convert_dir.exists());
}
