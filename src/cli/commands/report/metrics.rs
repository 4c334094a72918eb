//! Metric catalog evaluation.
//!
//! Measures are addressed by their catalog display name, evaluated either
//! over the whole unified relation or grouped by one dimension.

use chrono::NaiveDate;
use clap::Args;
use console::style;
use miette::Result;
use std::collections::BTreeSet;
use std::path::PathBuf;

use crate::cli::commands::report::{render_table, resolve_as_of, write_output, Snapshot};
use crate::cli::helpers::resolve_project;
use crate::cli::{GlobalOpts, OutputFormat};
use crate::metrics::{evaluate_grouped, unify, Dimension, Measure};
use crate::views::{build_equipment_360, build_maintenance_insights};

#[derive(Args)]
pub struct MetricsArgs {
    /// Measure name (repeatable; default: every measure in the catalog)
    #[arg(long, short = 'm')]
    pub measure: Vec<String>,

    /// Group results by this dimension
    #[arg(long, short = 'd')]
    pub dimension: Option<String>,

    /// List available dimensions and measures, then exit
    #[arg(long)]
    pub list: bool,

    /// Reference date for status/risk classification (default: configured or today)
    #[arg(long)]
    pub as_of: Option<NaiveDate>,

    /// Write the report to a file instead of stdout
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,
}

pub fn run(args: MetricsArgs, global: &GlobalOpts) -> Result<()> {
    if args.list {
        print_catalog();
        return Ok(());
    }

    let measures: Vec<Measure> = if args.measure.is_empty() {
        Measure::ALL.to_vec()
    } else {
        args.measure
            .iter()
            .map(|name| {
                Measure::from_name(name).ok_or_else(|| {
                    miette::miette!(
                        "unknown measure '{}' (run 'eiq report metrics --list')",
                        name
                    )
                })
            })
            .collect::<Result<_>>()?
    };

    let dimension = args
        .dimension
        .as_deref()
        .map(|name| {
            Dimension::from_name(name).ok_or_else(|| {
                miette::miette!(
                    "unknown dimension '{}' (run 'eiq report metrics --list')",
                    name
                )
            })
        })
        .transpose()?;

    let project = resolve_project(global)?;
    let snapshot = Snapshot::load(&project)?;
    let as_of = resolve_as_of(args.as_of);

    let equipment = build_equipment_360(
        &snapshot.facilities,
        &snapshot.assets,
        &snapshot.certifications,
        &snapshot.contracts,
        as_of,
    );
    let maintenance = build_maintenance_insights(
        &snapshot.facilities,
        &snapshot.assets,
        &snapshot.work_orders,
        &snapshot.certifications,
        &snapshot.contracts,
        as_of,
    );
    let unified = unify(&equipment, &maintenance);

    let format = match global.format {
        OutputFormat::Auto | OutputFormat::Yaml | OutputFormat::Json | OutputFormat::Id => {
            OutputFormat::Tsv
        }
        other => other,
    };

    let content = match dimension {
        Some(dimension) => {
            let grouped: Vec<_> = measures
                .iter()
                .map(|m| evaluate_grouped(&unified, dimension, *m))
                .collect();

            let mut groups: BTreeSet<&String> = BTreeSet::new();
            for map in &grouped {
                groups.extend(map.keys());
            }

            let mut headers = vec![dimension.name()];
            headers.extend(measures.iter().map(|m| m.name()));

            let rows: Vec<Vec<String>> = groups
                .iter()
                .map(|group| {
                    let mut row = vec![group.to_string()];
                    for map in &grouped {
                        row.push(fmt_value(map.get(*group).copied().flatten()));
                    }
                    row
                })
                .collect();

            render_table(&headers, &rows, format)
        }
        None => {
            let rows: Vec<Vec<String>> = measures
                .iter()
                .map(|m| vec![m.name().to_string(), fmt_value(m.evaluate(&unified))])
                .collect();
            render_table(&["MEASURE", "VALUE"], &rows, format)
        }
    };

    write_output(&content, args.output.as_deref(), global.quiet)
}

fn fmt_value(value: Option<f64>) -> String {
    match value {
        None => "-".to_string(),
        Some(v) if v.fract() == 0.0 => format!("{:.0}", v),
        Some(v) => format!("{:.2}", v),
    }
}

fn print_catalog() {
    println!("{}", style("Dimensions").bold());
    for dimension in Dimension::ALL {
        println!("  {}", dimension.name());
    }
    println!();
    println!("{}", style("Measures").bold());
    for measure in Measure::ALL {
        println!("  {}", measure.name());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fmt_value() {
        assert_eq!(fmt_value(None), "-");
        assert_eq!(fmt_value(Some(60.0)), "60");
        assert_eq!(fmt_value(Some(1050.25)), "1050.25");
    }
}
