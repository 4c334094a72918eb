//! Initialize a new project

use clap::Args;
use console::style;
use miette::Result;
use std::path::PathBuf;

use crate::cli::GlobalOpts;
use crate::core::{Project, ProjectError, RecordKind};

#[derive(Args)]
pub struct InitArgs {
    /// Directory to initialize (default: current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Reinitialize even if a project already exists
    #[arg(long)]
    pub force: bool,
}

pub fn run(args: InitArgs, global: &GlobalOpts) -> Result<()> {
    let result = if args.force {
        Project::init_force(&args.path)
    } else {
        Project::init(&args.path)
    };

    let project = match result {
        Ok(project) => project,
        Err(ProjectError::AlreadyExists(path)) => {
            println!(
                "{} project already exists at {}",
                style("!").yellow(),
                path.display()
            );
            println!("  Use --force to reinitialize.");
            return Ok(());
        }
        Err(e) => return Err(miette::miette!("{}", e)),
    };

    if global.quiet {
        return Ok(());
    }

    println!(
        "{} Initialized eiq project at {}",
        style("✓").green(),
        project.root().display()
    );
    println!();
    println!("Created structure:");
    println!("  .eiq/config.yaml");
    for kind in RecordKind::ALL {
        println!("  {}/", kind.directory());
    }
    println!();
    println!("Next steps:");
    println!(
        "  {}  generate sample records",
        style("eiq seed --assets 50").yellow()
    );
    println!(
        "  {}  import operational exports",
        style("eiq import asset data.csv").yellow()
    );
    println!(
        "  {}  check everything parses",
        style("eiq validate").yellow()
    );

    Ok(())
}
