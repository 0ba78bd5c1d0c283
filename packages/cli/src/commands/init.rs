use crate::config::{Config, DEFAULT_CONFIG_NAME};
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Directory containing model files
    #[arg(short, long, default_value = "Models")]
    pub working_dir: String,

    /// Directory to write interfaces to
    #[arg(short = 'o', long, default_value = "models")]
    pub convert_dir: String,

    /// Force overwrite existing config
    #[arg(short, long)]
    pub force: bool,
}

pub fn init(args: InitArgs, cwd: &str) -> Result<()> {
    let config_path = PathBuf::from(cwd).join(DEFAULT_CONFIG_NAME);

    // Check if config already exists
    if config_path.exists() && !args.force {
        println!(
            "{} {} already exists",
            "⚠️".yellow(),
            DEFAULT_CONFIG_NAME.bright_white()
        );
        println!("Use --force to overwrite");
        return Ok(());
    }

    println!("{}", "📝 Initializing MTT project...".bright_blue().bold());

    // Create working directory if it doesn't exist
    let working_dir = PathBuf::from(cwd).join(&args.working_dir);
    if !working_dir.exists() {
        fs::create_dir_all(&working_dir)?;
        println!("  {} Created {}/", "✓".green(), args.working_dir);
    }

    // Create example model file
    let example_file = working_dir.join("ExampleResource.cs");
    if !example_file.exists() {
        let example_content = r#"public class Example
{
    public int Id { get; set; }
    public string Name { get; set; }
    public DateTime CreatedAt { get; set; }
    public ICollection<string> Tags { get; set; }
}
"#;
        fs::write(&example_file, example_content)?;
        println!("  {} Created ExampleResource.cs", "✓".green());
    }

    let config = Config {
        working_directory: Some(args.working_dir.clone()),
        convert_directory: Some(args.convert_dir.clone()),
        extensions: vec!["cs".to_string()],
        ..Default::default()
    };

    // Write config file
    let config_json = serde_json::to_string_pretty(&config)?;
    fs::write(&config_path, config_json)?;

    println!("  {} Created {}", "✓".green(), DEFAULT_CONFIG_NAME);
    println!();
    println!("{}", "✅ Project initialized!".green().bold());
    println!();
    println!("Next steps:");
    println!("  1. Add model classes to {}/", args.working_dir);
    println!("  2. Run: mtt convert");
    println!("  3. Check output in {}/", args.convert_dir);

    Ok(())
}
