use crate::config::Config;
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use mtt_common::{Diagnostic, DiagnosticLevel};
use mtt_compiler_ts::CompileOptions;
use mtt_parser::LoaderOptions;
use mtt_resolver::ResolverOptions;
use mtt_workspace::{convert as run_convert, generate, ConvertOptions, RealFileSystem};
use std::path::Path;

#[derive(Debug, Args)]
pub struct ConvertArgs {
    /// Directory containing model files (overrides config)
    #[arg(short = 'w', long)]
    pub working_dir: Option<String>,

    /// Directory to write interfaces to (overrides config)
    #[arg(short = 'o', long)]
    pub convert_dir: Option<String>,

    /// Omit the auto-generated banner
    #[arg(long)]
    pub no_banner: bool,

    /// Suffix stripped from model file names (overrides config)
    #[arg(long)]
    pub suffix: Option<String>,

    /// Map DateTime to `any` instead of `Date`
    #[arg(long)]
    pub no_date: bool,

    /// Print generated files to stdout instead of writing them
    #[arg(long)]
    pub stdout: bool,

    /// Show info-level diagnostics too
    #[arg(short, long)]
    pub verbose: bool,
}

pub fn convert(args: ConvertArgs, cwd: &str) -> Result<()> {
    let mut config = Config::load(cwd)?;
    if args.working_dir.is_some() {
        config.working_directory = args.working_dir.clone();
    }
    if args.convert_dir.is_some() {
        config.convert_directory = args.convert_dir.clone();
    }
    if args.no_banner {
        config.auto_generated_tag = false;
    }
    if let Some(suffix) = &args.suffix {
        config.name_suffix = Some(suffix.clone()).filter(|s| !s.is_empty());
    }
    if args.no_date {
        config.map_date_time = false;
    }

    let options = build_options(&config, cwd);

    println!("{}", "🔨 Converting models...".bright_blue().bold());
    println!("   Models: {}", options.working_dir.display());

    if args.stdout {
        let generation = generate(&options)?;
        print_diagnostics(&generation.diagnostics, args.verbose);

        for file in &generation.files {
            println!();
            println!("{}", format!("// {}", file.relative_path.display()).dimmed());
            print!("{}", file.contents);
        }
        return Ok(());
    }

    println!("   Output: {}", options.convert_dir.display());

    let report = run_convert(&options, &RealFileSystem)?;

    print_diagnostics(&report.diagnostics, args.verbose);

    if report.written.is_empty() {
        println!("{}", "⚠️  No model files found".yellow());
        return Ok(());
    }

    for path in &report.written {
        println!("  {} {}", "✓".green(), relative(path, &options.convert_dir).display());
    }

    println!();
    let warnings = report.warnings();
    if warnings == 0 {
        println!(
            "{} Converted {} models successfully",
            "✅".green(),
            report.written.len()
        );
    } else {
        println!(
            "{} Converted {} models, {} warnings",
            "⚠️".yellow(),
            report.written.len(),
            warnings
        );
    }

    Ok(())
}

/// Turn the merged config into pipeline options rooted at `cwd`
pub fn build_options(config: &Config, cwd: &str) -> ConvertOptions {
    let (convert_dir, explicit) = config.get_convert_dir(cwd);

    ConvertOptions {
        working_dir: config.get_working_dir(cwd),
        convert_dir,
        clean_convert_dir: explicit,
        loader: LoaderOptions {
            name_suffix: config.name_suffix.clone(),
            extensions: config.extensions.clone(),
        },
        resolver: ResolverOptions {
            map_date_time: config.map_date_time,
        },
        compile: CompileOptions {
            auto_generated_tag: config.auto_generated_tag,
            file_extension: config.output_extension.clone(),
            ..Default::default()
        },
    }
}

fn print_diagnostics(diagnostics: &[Diagnostic], verbose: bool) {
    for diagnostic in diagnostics {
        let level_str = match diagnostic.level {
            DiagnosticLevel::Warning => "warning".yellow().bold(),
            DiagnosticLevel::Info => "info".blue().bold(),
        };

        if !verbose && matches!(diagnostic.level, DiagnosticLevel::Info) {
            continue;
        }

        eprintln!(
            "  {} [{}] {}: {}",
            level_str, diagnostic.rule, diagnostic.location, diagnostic.message
        );

        if let Some(suggestion) = &diagnostic.suggestion {
            eprintln!("    {} {}", "💡".dimmed(), suggestion.dimmed());
        }
    }
}

fn relative<'a>(path: &'a Path, root: &Path) -> &'a Path {
    path.strip_prefix(root).unwrap_or(path)
}
