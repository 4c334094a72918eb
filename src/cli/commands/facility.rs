//! Facility record commands

use clap::{Args, Subcommand};
use console::style;
use miette::{IntoDiagnostic, Result};

use crate::cli::helpers::resolve_project;
use crate::cli::output::ListView;
use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::{loader, RecordKind};
use crate::entities::Facility;

#[derive(Subcommand)]
pub enum FacilityCommands {
    /// List facility records
    List(ListArgs),
    /// Show a single facility record as YAML
    Show(ShowArgs),
}

#[derive(Args)]
pub struct ListArgs {
    /// Filter by region (exact match)
    #[arg(long)]
    pub region: Option<String>,

    /// Filter by country (exact match)
    #[arg(long)]
    pub country: Option<String>,

    /// Search facility name and city (case-insensitive substring)
    #[arg(long, short = 's')]
    pub search: Option<String>,
}

#[derive(Args)]
pub struct ShowArgs {
    /// Facility ID (e.g. FAC-001)
    pub id: String,
}

pub fn run(cmd: FacilityCommands, global: &GlobalOpts) -> Result<()> {
    match cmd {
        FacilityCommands::List(args) => run_list(args, global),
        FacilityCommands::Show(args) => run_show(args, global),
    }
}

fn run_list(args: ListArgs, global: &GlobalOpts) -> Result<()> {
    let project = resolve_project(global)?;
    let mut facilities: Vec<Facility> =
        loader::load_all(&project.record_dir(RecordKind::Facility))?;

    if let Some(region) = &args.region {
        facilities.retain(|f| f.region == *region);
    }
    if let Some(country) = &args.country {
        facilities.retain(|f| f.country == *country);
    }
    if let Some(search) = &args.search {
        let needle = search.to_lowercase();
        facilities.retain(|f| {
            f.facility_name.to_lowercase().contains(&needle)
                || f.city.to_lowercase().contains(&needle)
        });
    }

    facilities.sort_by(|a, b| a.facility_id.cmp(&b.facility_id));

    if facilities.is_empty() {
        if !global.quiet {
            println!("No facilities found.");
        }
        return Ok(());
    }

    match global.format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(&facilities).into_diagnostic()?
            );
        }
        OutputFormat::Yaml => {
            print!("{}", serde_yml::to_string(&facilities).into_diagnostic()?);
        }
        OutputFormat::Id => {
            for f in &facilities {
                println!("{}", f.facility_id);
            }
        }
        format => {
            let mut view = ListView::new(vec![
                "ID", "NAME", "CITY", "COUNTRY", "REGION", "TYPE",
            ]);
            for f in &facilities {
                view.push_row(vec![
                    f.facility_id.clone(),
                    f.facility_name.clone(),
                    f.city.clone(),
                    f.country.clone(),
                    f.region.clone(),
                    f.facility_type.to_string(),
                ]);
            }
            match format {
                OutputFormat::Csv => view.print_csv(),
                OutputFormat::Md => view.print_md(),
                _ => view.print_tsv("facility", global.quiet),
            }
        }
    }

    Ok(())
}

fn run_show(args: ShowArgs, global: &GlobalOpts) -> Result<()> {
    let project = resolve_project(global)?;
    let dir = project.record_dir(RecordKind::Facility);

    let Some((path, facility)) = loader::load_record::<Facility>(&dir, &args.id)? else {
        return Err(miette::miette!("facility '{}' not found", args.id));
    };

    if global.verbose {
        eprintln!("{}", style(format!("# {}", path.display())).dim());
    }

    match global.format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(&facility).into_diagnostic()?
            );
        }
        OutputFormat::Id => println!("{}", facility.facility_id),
        _ => print!("{}", serde_yml::to_string(&facility).into_diagnostic()?),
    }

    Ok(())
}
