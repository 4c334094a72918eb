//! Certification-centric equipment report

use chrono::NaiveDate;
use clap::Args;
use miette::{IntoDiagnostic, Result};
use std::path::PathBuf;

use crate::cli::commands::report::{render_table, resolve_as_of, write_output, Snapshot};
use crate::cli::helpers::resolve_project;
use crate::cli::{GlobalOpts, OutputFormat};
use crate::views::build_equipment_360;

#[derive(Args)]
pub struct EquipmentArgs {
    /// Reference date for warranty/inspection status (default: configured or today)
    #[arg(long)]
    pub as_of: Option<NaiveDate>,

    /// Filter by owning facility ID
    #[arg(long)]
    pub facility: Option<String>,

    /// Filter by manufacturer (exact match)
    #[arg(long)]
    pub manufacturer: Option<String>,

    /// Only rows with an attached certification
    #[arg(long)]
    pub certified: bool,

    /// Write the report to a file instead of stdout
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,
}

pub fn run(args: EquipmentArgs, global: &GlobalOpts) -> Result<()> {
    let project = resolve_project(global)?;
    let snapshot = Snapshot::load(&project)?;
    let as_of = resolve_as_of(args.as_of);

    let mut rows = build_equipment_360(
        &snapshot.facilities,
        &snapshot.assets,
        &snapshot.certifications,
        &snapshot.contracts,
        as_of,
    );

    if let Some(facility) = &args.facility {
        rows.retain(|r| r.facility_id == *facility);
    }
    if let Some(manufacturer) = &args.manufacturer {
        rows.retain(|r| r.manufacturer == *manufacturer);
    }
    if args.certified {
        rows.retain(|r| r.has_certification);
    }

    let content = match global.format {
        OutputFormat::Json => {
            format!("{}\n", serde_json::to_string_pretty(&rows).into_diagnostic()?)
        }
        OutputFormat::Yaml => serde_yml::to_string(&rows).into_diagnostic()?,
        OutputFormat::Id => {
            let mut out = String::new();
            for row in &rows {
                out.push_str(&row.asset_id);
                out.push('\n');
            }
            out
        }
        format => {
            let headers = [
                "ASSET",
                "MODEL",
                "MANUFACTURER",
                "FACILITY",
                "REGION",
                "CERT ID",
                "CERT STATUS",
                "CONTRACT",
                "WARRANTY",
                "INSPECTION",
            ];
            let cells: Vec<Vec<String>> = rows
                .iter()
                .map(|r| {
                    vec![
                        r.asset_id.clone(),
                        r.model_number.clone(),
                        r.manufacturer.clone(),
                        r.facility_id.clone(),
                        r.region.clone(),
                        r.certification_id.clone().unwrap_or_else(|| "-".into()),
                        r.certification_status
                            .map(|s| s.to_string())
                            .unwrap_or_else(|| "-".into()),
                        r.contract_id.clone().unwrap_or_else(|| "-".into()),
                        r.warranty_status.to_string(),
                        r.inspection_status.to_string(),
                    ]
                })
                .collect();
            render_table(&headers, &cells, format)
        }
    };

    write_output(&content, args.output.as_deref(), global.quiet)
}
