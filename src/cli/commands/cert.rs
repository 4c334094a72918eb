//! Certification record commands

use clap::{Args, Subcommand};
use console::style;
use miette::{IntoDiagnostic, Result};

use crate::cli::helpers::{display_opt, resolve_project, truncate_str};
use crate::cli::output::ListView;
use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::{loader, RecordKind};
use crate::entities::{Certification, CertificationStatus};

#[derive(Subcommand)]
pub enum CertCommands {
    /// List certification records
    List(ListArgs),
    /// Show a single certification record as YAML
    Show(ShowArgs),
}

#[derive(Args)]
pub struct ListArgs {
    /// Filter by manufacturer (exact match)
    #[arg(long)]
    pub manufacturer: Option<String>,

    /// Filter by certification status (PASS or CONDITIONAL)
    #[arg(long)]
    pub status: Option<CertificationStatus>,

    /// Filter by equipment type (exact match)
    #[arg(long = "type")]
    pub equipment_type: Option<String>,
}

#[derive(Args)]
pub struct ShowArgs {
    /// Certification ID or source file stem (matched against the file name)
    pub key: String,
}

pub fn run(cmd: CertCommands, global: &GlobalOpts) -> Result<()> {
    match cmd {
        CertCommands::List(args) => run_list(args, global),
        CertCommands::Show(args) => run_show(args, global),
    }
}

fn run_list(args: ListArgs, global: &GlobalOpts) -> Result<()> {
    let project = resolve_project(global)?;
    let mut certs: Vec<Certification> =
        loader::load_all(&project.record_dir(RecordKind::Certification))?;

    if let Some(manufacturer) = &args.manufacturer {
        certs.retain(|c| c.manufacturer == *manufacturer);
    }
    if let Some(status) = args.status {
        certs.retain(|c| c.certification_status == Some(status));
    }
    if let Some(equipment_type) = &args.equipment_type {
        certs.retain(|c| c.equipment_type == *equipment_type);
    }

    certs.sort_by(|a, b| a.source_file.cmp(&b.source_file));

    if certs.is_empty() {
        if !global.quiet {
            println!("No certifications found.");
        }
        return Ok(());
    }

    match global.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&certs).into_diagnostic()?);
        }
        OutputFormat::Yaml => {
            print!("{}", serde_yml::to_string(&certs).into_diagnostic()?);
        }
        OutputFormat::Id => {
            for c in &certs {
                println!(
                    "{}",
                    c.certification_id.as_deref().unwrap_or(&c.source_file)
                );
            }
        }
        format => {
            let mut view = ListView::new(vec![
                "CERT ID",
                "MANUFACTURER",
                "TYPE",
                "STATUS",
                "SAFETY",
                "SOURCE",
            ]);
            for c in &certs {
                view.push_row(vec![
                    c.certification_id.clone().unwrap_or_else(|| "-".into()),
                    truncate_str(&c.manufacturer, 28),
                    truncate_str(&c.equipment_type, 32),
                    display_opt(&c.certification_status),
                    c.safety_rating.clone().unwrap_or_else(|| "-".into()),
                    truncate_str(&c.source_file, 44),
                ]);
            }
            match format {
                OutputFormat::Csv => view.print_csv(),
                OutputFormat::Md => view.print_md(),
                _ => view.print_tsv("certification", global.quiet),
            }
        }
    }

    Ok(())
}

fn run_show(args: ShowArgs, global: &GlobalOpts) -> Result<()> {
    let project = resolve_project(global)?;
    let dir = project.record_dir(RecordKind::Certification);

    let Some((path, cert)) = loader::load_record::<Certification>(&dir, &args.key)? else {
        return Err(miette::miette!("certification '{}' not found", args.key));
    };

    if global.verbose {
        eprintln!("{}", style(format!("# {}", path.display())).dim());
    }

    match global.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&cert).into_diagnostic()?);
        }
        OutputFormat::Id => println!(
            "{}",
            cert.certification_id.as_deref().unwrap_or(&cert.source_file)
        ),
        _ => print!("{}", serde_yml::to_string(&cert).into_diagnostic()?),
    }

    Ok(())
}
