//! CSV import for operational exports.
//!
//! Accepts one CSV file per record kind and writes each row as an
//! individual `.eiq.yaml` record. Rows that fail to parse are reported
//! with their row number; by default any error fails the import after
//! the full pass so all problems are reported at once.

use chrono::NaiveDate;
use clap::Args;
use console::style;
use miette::{IntoDiagnostic, Result};
use std::collections::HashMap;
use std::path::PathBuf;
use std::str::FromStr;

use crate::cli::helpers::{resolve_project, truncate_str};
use crate::cli::GlobalOpts;
use crate::core::{loader, Project, RecordKind};
use crate::entities::{Asset, Certification, Contract, Facility, WorkOrder};

#[derive(Args)]
pub struct ImportArgs {
    /// Record kind to import (facility, asset, wo, contract, cert)
    #[arg(value_parser = parse_kind)]
    pub kind: RecordKind,

    /// CSV file to import (omit with --template)
    pub file: Option<PathBuf>,

    /// Print a CSV template with headers and an example row, then exit
    #[arg(long)]
    pub template: bool,

    /// Parse and report without writing any files
    #[arg(long)]
    pub dry_run: bool,

    /// Continue past row errors instead of failing the import
    #[arg(long)]
    pub skip_errors: bool,
}

pub(crate) fn parse_kind(s: &str) -> Result<RecordKind, String> {
    match s.to_lowercase().as_str() {
        "facility" | "facilities" => Ok(RecordKind::Facility),
        "asset" | "assets" | "inventory" => Ok(RecordKind::Asset),
        "wo" | "workorder" | "work-order" | "work_orders" => Ok(RecordKind::WorkOrder),
        "contract" | "contracts" => Ok(RecordKind::Contract),
        "cert" | "certs" | "certification" | "certifications" => Ok(RecordKind::Certification),
        _ => Err(format!(
            "unknown record kind '{}' (expected facility, asset, wo, contract, or cert)",
            s
        )),
    }
}

#[derive(Default)]
struct ImportStats {
    rows_processed: usize,
    records_created: usize,
    records_updated: usize,
    errors: usize,
}

pub fn run(args: ImportArgs, global: &GlobalOpts) -> Result<()> {
    if args.template {
        print_template(args.kind);
        return Ok(());
    }

    let Some(file) = &args.file else {
        return Err(miette::miette!(
            "a CSV file is required (or use --template to print one)"
        ));
    };

    let project = resolve_project(global)?;

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(file)
        .into_diagnostic()?;

    let headers = reader.headers().into_diagnostic()?.clone();
    let header_map = build_header_map(&headers);

    let mut stats = ImportStats::default();

    for (idx, record) in reader.records().enumerate() {
        let row_num = idx + 2; // 1-based, after the header row
        stats.rows_processed += 1;

        let record = match record {
            Ok(r) => r,
            Err(e) => {
                report_error(&mut stats, row_num, &e.to_string());
                continue;
            }
        };

        let parsed = match args.kind {
            RecordKind::Facility => {
                parse_facility(&header_map, &record).map(|f| (f.facility_id.clone(), to_yaml(&f)))
            }
            RecordKind::Asset => {
                parse_asset(&header_map, &record).map(|a| (a.asset_id.clone(), to_yaml(&a)))
            }
            RecordKind::WorkOrder => parse_work_order(&header_map, &record)
                .map(|w| (w.work_order_id.clone(), to_yaml(&w))),
            RecordKind::Contract => {
                parse_contract(&header_map, &record).map(|c| (c.contract_id.clone(), to_yaml(&c)))
            }
            RecordKind::Certification => {
                parse_certification(&header_map, &record).map(|c| (cert_key(&c), to_yaml(&c)))
            }
        };

        match parsed {
            Ok((key, record)) => {
                write_row(&project, args.kind, &key, record?, args.dry_run, &mut stats, global)?;
            }
            Err(msg) => report_error(&mut stats, row_num, &msg),
        }
    }

    if !global.quiet {
        println!();
        println!("{}", style("─".repeat(50)).dim());
        println!("Rows processed:  {}", stats.rows_processed);
        println!("Records created: {}", stats.records_created);
        println!("Records updated: {}", stats.records_updated);
        if stats.errors > 0 {
            println!("Errors:          {}", style(stats.errors).red());
        }
        if args.dry_run {
            println!("{}", style("Dry run: no files were written.").yellow());
        }
    }

    if stats.errors > 0 && !args.skip_errors {
        return Err(miette::miette!(
            "{} row(s) failed to import (use --skip-errors to import the rest anyway)",
            stats.errors
        ));
    }

    Ok(())
}

fn to_yaml<T: serde::Serialize>(record: &T) -> Result<serde_yml::Value> {
    serde_yml::to_value(record).into_diagnostic()
}

fn write_row(
    project: &Project,
    kind: RecordKind,
    key: &str,
    record: serde_yml::Value,
    dry_run: bool,
    stats: &mut ImportStats,
    global: &GlobalOpts,
) -> Result<()> {
    let path = project.record_path(kind, key);
    let existed = path.exists();

    if !dry_run {
        loader::write_record(&path, &record)?;
    }

    if existed {
        stats.records_updated += 1;
        if global.verbose {
            println!("{} {} (updated)", style("○").dim(), key);
        }
    } else {
        stats.records_created += 1;
        if !global.quiet {
            println!("{} {}", style("✓").green(), key);
        }
    }
    Ok(())
}

fn report_error(stats: &mut ImportStats, row_num: usize, msg: &str) {
    stats.errors += 1;
    eprintln!(
        "{} Row {}: {}",
        style("✗").red(),
        row_num,
        truncate_str(msg, 120)
    );
}

/// Lowercased, trimmed header name -> column index
fn build_header_map(headers: &csv::StringRecord) -> HashMap<String, usize> {
    headers
        .iter()
        .enumerate()
        .map(|(i, h)| (h.trim().to_lowercase(), i))
        .collect()
}

fn get_field<'a>(
    map: &HashMap<String, usize>,
    record: &'a csv::StringRecord,
    name: &str,
) -> Option<&'a str> {
    map.get(name)
        .and_then(|&i| record.get(i))
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

fn req_field<'a>(
    map: &HashMap<String, usize>,
    record: &'a csv::StringRecord,
    name: &str,
) -> Result<&'a str, String> {
    get_field(map, record, name).ok_or_else(|| format!("missing required field '{}'", name))
}

fn parse_date(value: &str, name: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| format!("invalid date for '{}': '{}' (expected YYYY-MM-DD)", name, value))
}

fn opt_date(
    map: &HashMap<String, usize>,
    record: &csv::StringRecord,
    name: &str,
) -> Result<Option<NaiveDate>, String> {
    get_field(map, record, name)
        .map(|v| parse_date(v, name))
        .transpose()
}

fn parse_num<T: FromStr>(value: &str, name: &str) -> Result<T, String> {
    value
        .parse()
        .map_err(|_| format!("invalid number for '{}': '{}'", name, value))
}

fn opt_num<T: FromStr>(
    map: &HashMap<String, usize>,
    record: &csv::StringRecord,
    name: &str,
) -> Result<Option<T>, String> {
    get_field(map, record, name)
        .map(|v| parse_num(v, name))
        .transpose()
}

fn parse_enum<T: FromStr<Err = String>>(value: &str) -> Result<T, String> {
    value.parse()
}

fn parse_facility(
    map: &HashMap<String, usize>,
    record: &csv::StringRecord,
) -> Result<Facility, String> {
    Ok(Facility {
        facility_id: req_field(map, record, "facility_id")?.to_string(),
        facility_name: req_field(map, record, "facility_name")?.to_string(),
        city: req_field(map, record, "city")?.to_string(),
        state_province: req_field(map, record, "state_province")?.to_string(),
        country: req_field(map, record, "country")?.to_string(),
        region: req_field(map, record, "region")?.to_string(),
        facility_type: parse_enum(req_field(map, record, "facility_type")?)?,
        square_footage: parse_num(req_field(map, record, "square_footage")?, "square_footage")?,
        employee_count: parse_num(req_field(map, record, "employee_count")?, "employee_count")?,
        opened_date: parse_date(req_field(map, record, "opened_date")?, "opened_date")?,
    })
}

fn parse_asset(map: &HashMap<String, usize>, record: &csv::StringRecord) -> Result<Asset, String> {
    Ok(Asset {
        asset_id: req_field(map, record, "asset_id")?.to_string(),
        model_number: req_field(map, record, "model_number")?.to_string(),
        equipment_type: req_field(map, record, "equipment_type")?.to_string(),
        equipment_type_code: req_field(map, record, "equipment_type_code")?.to_string(),
        manufacturer: req_field(map, record, "manufacturer")?.to_string(),
        facility_id: req_field(map, record, "facility_id")?.to_string(),
        serial_number: req_field(map, record, "serial_number")?.to_string(),
        purchase_date: parse_date(req_field(map, record, "purchase_date")?, "purchase_date")?,
        purchase_price_usd: parse_num(
            req_field(map, record, "purchase_price_usd")?,
            "purchase_price_usd",
        )?,
        warranty_expiration: opt_date(map, record, "warranty_expiration")?,
        operational_status: get_field(map, record, "operational_status")
            .map(parse_enum)
            .transpose()?
            .unwrap_or_default(),
        voltage_rating: req_field(map, record, "voltage_rating")?.to_string(),
        ip_rating: req_field(map, record, "ip_rating")?.to_string(),
        last_inspection_date: opt_date(map, record, "last_inspection_date")?,
        next_inspection_due: opt_date(map, record, "next_inspection_due")?,
        install_location: req_field(map, record, "install_location")?.to_string(),
    })
}

fn parse_work_order(
    map: &HashMap<String, usize>,
    record: &csv::StringRecord,
) -> Result<WorkOrder, String> {
    Ok(WorkOrder {
        work_order_id: req_field(map, record, "work_order_id")?.to_string(),
        asset_id: req_field(map, record, "asset_id")?.to_string(),
        work_order_type: parse_enum(req_field(map, record, "work_order_type")?)?,
        priority: get_field(map, record, "priority")
            .map(parse_enum)
            .transpose()?
            .unwrap_or_default(),
        status: get_field(map, record, "status")
            .map(parse_enum)
            .transpose()?
            .unwrap_or_default(),
        created_at: None,
        scheduled_date: opt_date(map, record, "scheduled_date")?,
        completed_date: opt_date(map, record, "completed_date")?,
        technician: get_field(map, record, "technician").map(String::from),
        description: get_field(map, record, "description").map(String::from),
        labor_hours: opt_num(map, record, "labor_hours")?,
        parts_cost_usd: opt_num(map, record, "parts_cost_usd")?,
        downtime_hours: opt_num(map, record, "downtime_hours")?,
    })
}

fn parse_contract(
    map: &HashMap<String, usize>,
    record: &csv::StringRecord,
) -> Result<Contract, String> {
    Ok(Contract {
        contract_id: req_field(map, record, "contract_id")?.to_string(),
        manufacturer: req_field(map, record, "manufacturer")?.to_string(),
        contract_type: parse_enum(req_field(map, record, "contract_type")?)?,
        start_date: parse_date(req_field(map, record, "start_date")?, "start_date")?,
        end_date: parse_date(req_field(map, record, "end_date")?, "end_date")?,
        annual_value_usd: parse_num(
            req_field(map, record, "annual_value_usd")?,
            "annual_value_usd",
        )?,
        sla_response_hours: parse_num(
            req_field(map, record, "sla_response_hours")?,
            "sla_response_hours",
        )?,
        contract_status: parse_enum(req_field(map, record, "contract_status")?)?,
        primary_contact: get_field(map, record, "primary_contact").map(String::from),
        contact_email: get_field(map, record, "contact_email").map(String::from),
    })
}

fn parse_certification(
    map: &HashMap<String, usize>,
    record: &csv::StringRecord,
) -> Result<Certification, String> {
    Ok(Certification {
        source_file: req_field(map, record, "source_file")?.to_string(),
        manufacturer: req_field(map, record, "manufacturer")?.to_string(),
        equipment_type: req_field(map, record, "equipment_type")?.to_string(),
        model_number: get_field(map, record, "model_number").map(String::from),
        certification_id: get_field(map, record, "certification_id").map(String::from),
        certification_status: get_field(map, record, "certification_status")
            .map(parse_enum)
            .transpose()?,
        safety_rating: get_field(map, record, "safety_rating").map(String::from),
        material_type: get_field(map, record, "material_type").map(String::from),
        weight_kg: opt_num(map, record, "weight_kg")?,
        voltage_rating: get_field(map, record, "voltage_rating").map(String::from),
        ip_rating: get_field(map, record, "ip_rating").map(String::from),
        operating_temp_min_c: opt_num(map, record, "operating_temp_min_c")?,
        operating_temp_max_c: opt_num(map, record, "operating_temp_max_c")?,
        compliance_standards: get_field(map, record, "compliance_standards").map(String::from),
    })
}

/// File key for a certification record: the certification ID when extraction
/// produced one, otherwise the sanitized source document path.
pub fn cert_key(cert: &Certification) -> String {
    match &cert.certification_id {
        Some(id) => id.clone(),
        None => cert
            .source_file
            .chars()
            .map(|c| if c.is_alphanumeric() || c == '-' { c } else { '_' })
            .collect(),
    }
}

fn print_template(kind: RecordKind) {
    let (headers, example) = match kind {
        RecordKind::Facility => (
            "facility_id,facility_name,city,state_province,country,region,facility_type,square_footage,employee_count,opened_date",
            "FAC-001,Chicago Manufacturing Complex,Chicago,IL,United States,North America,Manufacturing Plant,285000,1420,1998-03-15",
        ),
        RecordKind::Asset => (
            "asset_id,model_number,equipment_type,equipment_type_code,manufacturer,facility_id,serial_number,purchase_date,purchase_price_usd,warranty_expiration,operational_status,voltage_rating,ip_rating,last_inspection_date,next_inspection_due,install_location",
            "AST-000001,PLC-4821-C3,Programmable Logic Controller,PLC,Siemens Industrial Systems,FAC-001,SI-2023-000001,2021-03-14,8450.00,2024-03-13,Active,480V AC,IP54,2025-11-02,2026-05-01,Control Room",
        ),
        RecordKind::WorkOrder => (
            "work_order_id,asset_id,work_order_type,priority,status,scheduled_date,completed_date,technician,description,labor_hours,parts_cost_usd,downtime_hours",
            "WO-000001,AST-000001,Preventive Maintenance,Medium,Completed,2025-04-02,2025-04-03,Sarah Chen,Quarterly PM,3.5,120.00,0.0",
        ),
        RecordKind::Contract => (
            "contract_id,manufacturer,contract_type,start_date,end_date,annual_value_usd,sla_response_hours,contract_status,primary_contact,contact_email",
            "CTR-0001,Siemens Industrial Systems,Service Agreement,2024-01-01,2026-12-31,185000.00,4,Active,David Park,david.park@example.com",
        ),
        RecordKind::Certification => (
            "source_file,manufacturer,equipment_type,model_number,certification_id,certification_status,safety_rating,material_type,weight_kg,voltage_rating,ip_rating,operating_temp_min_c,operating_temp_max_c,compliance_standards",
            "equipment_docs/cert_UL-2024-018452.pdf,Siemens Industrial Systems,Programmable Logic Controller,PLC-4821-C3,UL-2024-018452,PASS,UL 508A,Galvanized Steel,18.4,480V AC,IP54,-10,55,\"IEC 61131-2, NFPA 79\"",
        ),
    };
    println!("{}", headers);
    println!("{}", example);
    eprintln!(
        "{}",
        style("Fill in one row per record, then run: eiq import <kind> <file.csv>").dim()
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::CertificationStatus;

    fn record(fields: &[&str]) -> csv::StringRecord {
        csv::StringRecord::from(fields.to_vec())
    }

    fn header_map(fields: &[&str]) -> HashMap<String, usize> {
        build_header_map(&record(fields))
    }

    #[test]
    fn test_header_map_is_case_insensitive() {
        let map = header_map(&["Facility_ID", " City "]);
        let rec = record(&["FAC-001", "Chicago"]);
        assert_eq!(get_field(&map, &rec, "facility_id"), Some("FAC-001"));
        assert_eq!(get_field(&map, &rec, "city"), Some("Chicago"));
    }

    #[test]
    fn test_empty_cells_read_as_missing() {
        let map = header_map(&["asset_id", "warranty_expiration"]);
        let rec = record(&["AST-000001", "  "]);
        assert_eq!(get_field(&map, &rec, "warranty_expiration"), None);
        assert!(opt_date(&map, &rec, "warranty_expiration").unwrap().is_none());
    }

    #[test]
    fn test_parse_facility_row() {
        let map = header_map(&[
            "facility_id",
            "facility_name",
            "city",
            "state_province",
            "country",
            "region",
            "facility_type",
            "square_footage",
            "employee_count",
            "opened_date",
        ]);
        let rec = record(&[
            "FAC-001",
            "Chicago Manufacturing Complex",
            "Chicago",
            "IL",
            "United States",
            "North America",
            "Manufacturing Plant",
            "285000",
            "1420",
            "1998-03-15",
        ]);
        let facility = parse_facility(&map, &rec).unwrap();
        assert_eq!(facility.facility_id, "FAC-001");
        assert_eq!(facility.square_footage, 285_000);
    }

    #[test]
    fn test_parse_facility_missing_field() {
        let map = header_map(&["facility_id"]);
        let rec = record(&["FAC-001"]);
        let err = parse_facility(&map, &rec).unwrap_err();
        assert!(err.contains("facility_name"));
    }

    #[test]
    fn test_parse_work_order_defaults() {
        let map = header_map(&["work_order_id", "asset_id", "work_order_type"]);
        let rec = record(&["WO-000001", "AST-000001", "Inspection"]);
        let wo = parse_work_order(&map, &rec).unwrap();
        assert_eq!(wo.priority, crate::entities::WorkOrderPriority::Medium);
        assert_eq!(wo.status, crate::entities::WorkOrderStatus::Open);
        assert!(wo.labor_hours.is_none());
    }

    #[test]
    fn test_invalid_date_reports_field() {
        let map = header_map(&["work_order_id", "asset_id", "work_order_type", "scheduled_date"]);
        let rec = record(&["WO-000001", "AST-000001", "Inspection", "04/02/2025"]);
        let err = parse_work_order(&map, &rec).unwrap_err();
        assert!(err.contains("scheduled_date"));
    }

    #[test]
    fn test_cert_key_prefers_certification_id() {
        let cert = Certification {
            source_file: "equipment_docs/cert_a.pdf".to_string(),
            manufacturer: "ABB Power Solutions".to_string(),
            equipment_type: "Variable Frequency Drive".to_string(),
            model_number: None,
            certification_id: Some("UL-2024-000001".to_string()),
            certification_status: Some(CertificationStatus::Pass),
            safety_rating: None,
            material_type: None,
            weight_kg: None,
            voltage_rating: None,
            ip_rating: None,
            operating_temp_min_c: None,
            operating_temp_max_c: None,
            compliance_standards: None,
        };
        assert_eq!(cert_key(&cert), "UL-2024-000001");

        let anon = Certification {
            certification_id: None,
            ..cert
        };
        assert_eq!(cert_key(&anon), "equipment_docs_cert_a_pdf");
    }
}
