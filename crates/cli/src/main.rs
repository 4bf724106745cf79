//! Code Builder command-line harness.
//!
//! Wraps the generator for use outside the collaborator UI: generate
//! source from a saved project file, list the supported languages and
//! toolbox blocks, or write a starter project to edit by hand.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use codebuilder_codegen::generate;
use codebuilder_domain::{catalog, export, ProjectData, TargetLanguage};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "codebuilder", author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate source code from a project file
    Generate {
        /// Path to the project JSON
        #[arg(value_name = "PROJECT_FILE")]
        project: PathBuf,

        /// Directory to write the generated file into
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print to stdout instead of writing a file
        #[arg(long)]
        stdout: bool,

        /// Override the project's target language
        #[arg(short, long)]
        language: Option<String>,
    },
    /// List the supported target languages
    Languages,
    /// List the toolbox blocks by category
    Blocks {
        /// Show the labels the toolbox uses for this language
        #[arg(short, long)]
        language: Option<String>,
    },
    /// Write a starter project file
    Init {
        /// Where to write the project JSON
        #[arg(value_name = "PROJECT_FILE", default_value = "project.json")]
        path: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Generate {
            project,
            output,
            stdout,
            language,
        } => run_generate(&project, output, stdout, language),
        Commands::Languages => {
            run_languages();
            Ok(())
        }
        Commands::Blocks { language } => {
            run_blocks(language.as_deref());
            Ok(())
        }
        Commands::Init { path } => run_init(&path),
    }
}

fn run_generate(
    project_path: &Path,
    output: Option<PathBuf>,
    to_stdout: bool,
    language: Option<String>,
) -> anyhow::Result<()> {
    let json = fs::read_to_string(project_path)
        .with_context(|| format!("reading {}", project_path.display()))?;
    let mut project = ProjectData::from_json(&json)
        .with_context(|| format!("parsing {}", project_path.display()))?;
    if let Some(tag) = language {
        project.language = TargetLanguage::from_tag(&tag);
    }

    tracing::debug!(
        class = %project.class_name,
        language = %project.language,
        "generating"
    );
    let code = generate(&project);

    if to_stdout {
        println!("{code}");
        return Ok(());
    }

    let directory = output.unwrap_or_else(|| PathBuf::from("."));
    fs::create_dir_all(&directory)
        .with_context(|| format!("creating {}", directory.display()))?;
    let target = directory.join(export::suggested_file_name(&project));
    fs::write(&target, code).with_context(|| format!("writing {}", target.display()))?;
    tracing::info!("wrote {}", target.display());
    Ok(())
}

fn run_languages() {
    for language in TargetLanguage::all() {
        println!(
            "{:<12} {} (.{})",
            language.tag(),
            language.display_name(),
            language.file_extension()
        );
    }
}

fn run_blocks(language_tag: Option<&str>) {
    let language = language_tag.map(TargetLanguage::from_tag);
    let mut current_category = None;
    for block in catalog::all() {
        if current_category != Some(block.category) {
            current_category = Some(block.category);
            println!("{}:", block.category.display_name());
        }
        let label = language.map_or(block.label, |lang| catalog::label_for(block.tag, lang));
        println!("  {:<22} {label}", block.tag);
    }
}

fn run_init(path: &Path) -> anyhow::Result<()> {
    if path.exists() {
        bail!("{} already exists", path.display());
    }
    let json = ProjectData::starter().to_json()?;
    fs::write(path, json).with_context(|| format!("writing {}", path.display()))?;
    tracing::info!("wrote starter project to {}", path.display());
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_generate_writes_named_file() {
        let dir = tempfile::tempdir().unwrap();
        let project_path = dir.path().join("project.json");
        let json = ProjectData::starter().to_json().unwrap();
        fs::write(&project_path, json).unwrap();

        run_generate(
            &project_path,
            Some(dir.path().to_path_buf()),
            false,
            Some("python".to_owned()),
        )
        .unwrap();

        let generated = fs::read_to_string(dir.path().join("MyClass.py")).unwrap();
        assert!(generated.starts_with("# Namespace: MyProject"));
    }

    #[test]
    fn test_init_refuses_to_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("project.json");

        run_init(&path).unwrap();
        let written = ProjectData::from_json(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written, ProjectData::starter());

        assert!(run_init(&path).is_err());
    }
}
