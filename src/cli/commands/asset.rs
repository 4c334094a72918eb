//! Asset inventory commands

use clap::{Args, Subcommand};
use console::style;
use miette::{IntoDiagnostic, Result};

use crate::cli::helpers::{display_opt, resolve_project, truncate_str};
use crate::cli::output::ListView;
use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::{loader, RecordKind};
use crate::entities::{Asset, OperationalStatus};

#[derive(Subcommand)]
pub enum AssetCommands {
    /// List asset records
    List(ListArgs),
    /// Show a single asset record as YAML
    Show(ShowArgs),
}

#[derive(Args)]
pub struct ListArgs {
    /// Filter by operational status (e.g. "Active", "Under Maintenance")
    #[arg(long)]
    pub status: Option<OperationalStatus>,

    /// Filter by owning facility ID
    #[arg(long)]
    pub facility: Option<String>,

    /// Filter by manufacturer (exact match)
    #[arg(long)]
    pub manufacturer: Option<String>,

    /// Filter by equipment type code (e.g. PLC, VFD)
    #[arg(long = "type")]
    pub equipment_type_code: Option<String>,

    /// Search model number and equipment type (case-insensitive substring)
    #[arg(long, short = 's')]
    pub search: Option<String>,
}

#[derive(Args)]
pub struct ShowArgs {
    /// Asset ID (e.g. AST-000001)
    pub id: String,
}

pub fn run(cmd: AssetCommands, global: &GlobalOpts) -> Result<()> {
    match cmd {
        AssetCommands::List(args) => run_list(args, global),
        AssetCommands::Show(args) => run_show(args, global),
    }
}

fn run_list(args: ListArgs, global: &GlobalOpts) -> Result<()> {
    let project = resolve_project(global)?;
    let mut assets: Vec<Asset> = loader::load_all(&project.record_dir(RecordKind::Asset))?;

    if let Some(status) = args.status {
        assets.retain(|a| a.operational_status == status);
    }
    if let Some(facility) = &args.facility {
        assets.retain(|a| a.facility_id == *facility);
    }
    if let Some(manufacturer) = &args.manufacturer {
        assets.retain(|a| a.manufacturer == *manufacturer);
    }
    if let Some(code) = &args.equipment_type_code {
        assets.retain(|a| a.equipment_type_code.eq_ignore_ascii_case(code));
    }
    if let Some(search) = &args.search {
        let needle = search.to_lowercase();
        assets.retain(|a| {
            a.model_number.to_lowercase().contains(&needle)
                || a.equipment_type.to_lowercase().contains(&needle)
        });
    }

    assets.sort_by(|a, b| a.asset_id.cmp(&b.asset_id));

    if assets.is_empty() {
        if !global.quiet {
            println!("No assets found.");
        }
        return Ok(());
    }

    match global.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&assets).into_diagnostic()?);
        }
        OutputFormat::Yaml => {
            print!("{}", serde_yml::to_string(&assets).into_diagnostic()?);
        }
        OutputFormat::Id => {
            for a in &assets {
                println!("{}", a.asset_id);
            }
        }
        format => {
            let mut view = ListView::new(vec![
                "ID",
                "MODEL",
                "TYPE",
                "MANUFACTURER",
                "FACILITY",
                "STATUS",
                "NEXT INSPECTION",
            ]);
            for a in &assets {
                view.push_row(vec![
                    a.asset_id.clone(),
                    a.model_number.clone(),
                    a.equipment_type_code.clone(),
                    truncate_str(&a.manufacturer, 28),
                    a.facility_id.clone(),
                    a.operational_status.to_string(),
                    display_opt(&a.next_inspection_due),
                ]);
            }
            match format {
                OutputFormat::Csv => view.print_csv(),
                OutputFormat::Md => view.print_md(),
                _ => view.print_tsv("asset", global.quiet),
            }
        }
    }

    Ok(())
}

fn run_show(args: ShowArgs, global: &GlobalOpts) -> Result<()> {
    let project = resolve_project(global)?;
    let dir = project.record_dir(RecordKind::Asset);

    let Some((path, asset)) = loader::load_record::<Asset>(&dir, &args.id)? else {
        return Err(miette::miette!("asset '{}' not found", args.id));
    };

    if global.verbose {
        eprintln!("{}", style(format!("# {}", path.display())).dim());
    }

    match global.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&asset).into_diagnostic()?);
        }
        OutputFormat::Id => println!("{}", asset.asset_id),
        _ => print!("{}", serde_yml::to_string(&asset).into_diagnostic()?),
    }

    Ok(())
}
