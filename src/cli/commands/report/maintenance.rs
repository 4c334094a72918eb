//! Maintenance-centric report with risk levels

use chrono::NaiveDate;
use clap::Args;
use miette::{IntoDiagnostic, Result};
use std::path::PathBuf;

use crate::cli::commands::report::{render_table, resolve_as_of, write_output, Snapshot};
use crate::cli::helpers::{display_opt, resolve_project};
use crate::cli::{GlobalOpts, OutputFormat};
use crate::views::{build_maintenance_insights, RiskLevel};

#[derive(Args)]
pub struct MaintenanceArgs {
    /// Reference date for status/risk classification (default: configured or today)
    #[arg(long)]
    pub as_of: Option<NaiveDate>,

    /// Filter by risk band (high, medium, elevated, normal)
    #[arg(long, value_parser = parse_risk_band)]
    pub risk: Option<RiskBand>,

    /// Filter by owning facility ID
    #[arg(long)]
    pub facility: Option<String>,

    /// Write the report to a file instead of stdout
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug)]
pub enum RiskBand {
    High,
    Medium,
    Elevated,
    Normal,
}

fn parse_risk_band(s: &str) -> Result<RiskBand, String> {
    match s.to_lowercase().as_str() {
        "high" => Ok(RiskBand::High),
        "medium" => Ok(RiskBand::Medium),
        "elevated" => Ok(RiskBand::Elevated),
        "normal" => Ok(RiskBand::Normal),
        _ => Err(format!(
            "unknown risk band '{}' (expected high, medium, elevated, or normal)",
            s
        )),
    }
}

impl RiskBand {
    fn matches(self, level: RiskLevel) -> bool {
        match self {
            RiskBand::High => level.is_high(),
            RiskBand::Medium => level.is_medium(),
            RiskBand::Elevated => level.is_elevated(),
            RiskBand::Normal => level == RiskLevel::Normal,
        }
    }
}

pub fn run(args: MaintenanceArgs, global: &GlobalOpts) -> Result<()> {
    let project = resolve_project(global)?;
    let snapshot = Snapshot::load(&project)?;
    let as_of = resolve_as_of(args.as_of);

    let mut rows = build_maintenance_insights(
        &snapshot.facilities,
        &snapshot.assets,
        &snapshot.work_orders,
        &snapshot.certifications,
        &snapshot.contracts,
        as_of,
    );

    if let Some(band) = args.risk {
        rows.retain(|r| band.matches(r.risk_level));
    }
    if let Some(facility) = &args.facility {
        rows.retain(|r| r.facility_id == *facility);
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
                "FACILITY",
                "WOS",
                "OPEN",
                "EMERGENCY",
                "LABOR HRS",
                "MAINT COST",
                "NEXT INSPECTION",
                "RISK",
            ];
            let cells: Vec<Vec<String>> = rows
                .iter()
                .map(|r| {
                    vec![
                        r.asset_id.clone(),
                        r.model_number.clone(),
                        r.facility_id.clone(),
                        r.summary.total_work_orders.to_string(),
                        r.summary.open_work_orders.to_string(),
                        r.summary.emergency_repairs.to_string(),
                        format!("{:.1}", r.summary.total_labor_hours),
                        format!("{:.2}", r.total_maintenance_cost_usd),
                        display_opt(&r.next_inspection_due),
                        r.risk_level.to_string(),
                    ]
                })
                .collect();
            render_table(&headers, &cells, format)
        }
    };

    write_output(&content, args.output.as_deref(), global.quiet)
}
