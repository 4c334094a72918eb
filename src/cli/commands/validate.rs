//! Validate project record files.
//!
//! Every `.eiq.yaml` file is checked against the embedded JSON Schema for
//! its record kind. With `--refs`, cross-record references are also
//! checked; reference problems are warnings because the derived views
//! drop unresolvable rows rather than failing.

use clap::Args;
use console::style;
use miette::Result;
use std::collections::{HashMap, HashSet};

use crate::cli::commands::import::parse_kind;
use crate::cli::helpers::resolve_project;
use crate::cli::GlobalOpts;
use crate::core::{loader, Project, RecordKind};
use crate::entities::{Asset, Certification, Contract, Facility, WorkOrder};
use crate::schema::Validator;

#[derive(Args)]
pub struct ValidateArgs {
    /// Only validate this record kind (facility, asset, wo, contract, cert)
    #[arg(value_parser = parse_kind)]
    pub kind: Option<RecordKind>,

    /// Also check cross-record references
    #[arg(long)]
    pub refs: bool,
}

pub fn run(args: ValidateArgs, global: &GlobalOpts) -> Result<()> {
    let project = resolve_project(global)?;
    let validator = Validator::default();

    let kinds: Vec<RecordKind> = match args.kind {
        Some(kind) => vec![kind],
        None => RecordKind::ALL.to_vec(),
    };

    let mut files_checked = 0usize;
    let mut files_failed = 0usize;
    let mut violation_total = 0usize;

    for kind in &kinds {
        for path in project.iter_record_files(*kind) {
            files_checked += 1;
            let content = match std::fs::read_to_string(&path) {
                Ok(c) => c,
                Err(e) => {
                    files_failed += 1;
                    violation_total += 1;
                    eprintln!("{} {}: {}", style("✗").red(), path.display(), e);
                    continue;
                }
            };

            let filename = path
                .file_name()
                .map(|s| s.to_string_lossy().to_string())
                .unwrap_or_else(|| path.display().to_string());

            match validator.iter_errors(&content, &filename, *kind) {
                Ok(_) => {
                    if global.verbose {
                        println!("{} {}", style("✓").green(), path.display());
                    }
                }
                Err(e) => {
                    files_failed += 1;
                    violation_total += e.violation_count();
                    eprintln!("{} {}", style("✗").red(), path.display());
                    eprintln!("{:?}", miette::Report::new(e));
                }
            }
        }
    }

    let mut warnings = 0usize;
    if args.refs {
        warnings = check_references(&project, global)?;
    }

    if !global.quiet {
        println!();
        if files_failed == 0 {
            println!(
                "{} {} file(s) validated",
                style("✓").green(),
                files_checked
            );
        } else {
            println!(
                "{} {} of {} file(s) failed ({} violation(s))",
                style("✗").red(),
                files_failed,
                files_checked,
                violation_total
            );
        }
        if warnings > 0 {
            println!("{} {} reference warning(s)", style("!").yellow(), warnings);
        }
    }

    if files_failed > 0 {
        return Err(miette::miette!(
            "validation failed for {} file(s)",
            files_failed
        ));
    }
    Ok(())
}

/// Cross-record reference checks. Returns the number of warnings printed.
fn check_references(project: &Project, global: &GlobalOpts) -> Result<usize> {
    let facilities: Vec<Facility> = loader::load_all(&project.record_dir(RecordKind::Facility))?;
    let assets: Vec<Asset> = loader::load_all(&project.record_dir(RecordKind::Asset))?;
    let work_orders: Vec<WorkOrder> =
        loader::load_all(&project.record_dir(RecordKind::WorkOrder))?;
    let contracts: Vec<Contract> = loader::load_all(&project.record_dir(RecordKind::Contract))?;
    let certs: Vec<Certification> =
        loader::load_all(&project.record_dir(RecordKind::Certification))?;

    let mut warnings = 0usize;
    let mut warn = |msg: String| {
        warnings += 1;
        println!("{} {}", style("!").yellow(), msg);
    };

    // Duplicate facility IDs silently shadow each other in the index.
    let mut seen = HashSet::new();
    for facility in &facilities {
        if !seen.insert(facility.facility_id.as_str()) {
            warn(format!(
                "duplicate facility ID {} (later record wins in joins)",
                facility.facility_id
            ));
        }
    }

    let facility_ids: HashSet<&str> = facilities.iter().map(|f| f.facility_id.as_str()).collect();
    for asset in &assets {
        if !facility_ids.contains(asset.facility_id.as_str()) {
            warn(format!(
                "asset {} references unknown facility {} (dropped from reports)",
                asset.asset_id, asset.facility_id
            ));
        }
    }

    let asset_ids: HashSet<&str> = assets.iter().map(|a| a.asset_id.as_str()).collect();
    for wo in &work_orders {
        if !asset_ids.contains(wo.asset_id.as_str()) {
            warn(format!(
                "work order {} references unknown asset {}",
                wo.work_order_id, wo.asset_id
            ));
        }
    }

    // More than one contract per manufacturer fans out every matching
    // asset row in the derived views.
    let mut per_manufacturer: HashMap<&str, usize> = HashMap::new();
    for contract in &contracts {
        *per_manufacturer.entry(contract.manufacturer.as_str()).or_default() += 1;
    }
    for (manufacturer, count) in &per_manufacturer {
        if *count > 1 {
            warn(format!(
                "{} contracts for manufacturer '{}' (rows will fan out in reports)",
                count, manufacturer
            ));
        }
    }

    // Same fan-out hazard for certifications sharing a join key.
    let mut per_cert_key: HashMap<(&str, &str), usize> = HashMap::new();
    for cert in &certs {
        *per_cert_key.entry(cert.join_key()).or_default() += 1;
    }
    for ((manufacturer, equipment_type), count) in &per_cert_key {
        if *count > 1 {
            warn(format!(
                "{} certifications for '{}' / '{}' (rows will fan out in reports)",
                count, manufacturer, equipment_type
            ));
        }
    }

    if global.verbose {
        let asset_keys: HashSet<(&str, &str)> = assets
            .iter()
            .map(|a| (a.manufacturer.as_str(), a.equipment_type.as_str()))
            .collect();
        for cert in &certs {
            if !asset_keys.contains(&cert.join_key()) {
                println!(
                    "{} certification {} matches no inventory ({} / {})",
                    style("○").dim(),
                    cert.certification_id.as_deref().unwrap_or(&cert.source_file),
                    cert.manufacturer,
                    cert.equipment_type
                );
            }
        }
    }

    Ok(warnings)
}
