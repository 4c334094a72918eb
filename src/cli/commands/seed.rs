//! Deterministic synthetic data generation.
//!
//! Produces a reproducible record set from a fixed RNG seed so reports
//! and demos can be regenerated byte-for-byte. All generated dates are
//! placed relative to a fixed base date rather than the wall clock.

use chrono::{Duration, NaiveDate};
use clap::Args;
use console::style;
use miette::Result;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::cli::commands::import::cert_key;
use crate::cli::helpers::resolve_project;
use crate::cli::GlobalOpts;
use crate::core::{loader, Project, RecordKind};
use crate::entities::{
    Asset, Certification, CertificationStatus, Contract, ContractStatus, ContractType, Facility,
    FacilityType, OperationalStatus, WorkOrder, WorkOrderPriority, WorkOrderStatus, WorkOrderType,
};

#[derive(Args)]
pub struct SeedArgs {
    /// Number of assets to generate
    #[arg(long, default_value_t = 120)]
    pub assets: usize,

    /// RNG seed; the same seed always produces the same records
    #[arg(long, default_value_t = 42)]
    pub seed: u64,
}

/// All generated dates are placed relative to this date so output is
/// independent of when the command runs.
const BASE_DATE: (i32, u32, u32) = (2026, 1, 1);

const MANUFACTURERS: &[(&str, &str)] = &[
    ("Siemens Industrial Systems", "SI"),
    ("ABB Power Solutions", "AP"),
    ("Schneider Electric", "SE"),
    ("Eaton Corporation", "EC"),
    ("Rockwell Automation", "RA"),
    ("Honeywell Process Solutions", "HP"),
    ("Emerson Electric", "EE"),
    ("GE Industrial", "GI"),
    ("Mitsubishi Electric", "ME"),
    ("Yokogawa Electric", "YE"),
];

/// (name, code, price range in USD)
const EQUIPMENT_TYPES: &[(&str, &str, (f64, f64))] = &[
    ("Industrial Motor Controller", "IMC", (2_500.0, 18_000.0)),
    ("Power Distribution Unit", "PDU", (8_000.0, 35_000.0)),
    ("Programmable Logic Controller", "PLC", (2_000.0, 15_000.0)),
    ("Variable Frequency Drive", "VFD", (3_000.0, 22_000.0)),
    ("Circuit Breaker Assembly", "CBA", (1_500.0, 12_000.0)),
    ("Transformer Unit", "TRU", (18_000.0, 85_000.0)),
    ("Motor Starter Panel", "MSP", (4_000.0, 25_000.0)),
    ("Switchgear Assembly", "SGA", (25_000.0, 120_000.0)),
    ("Uninterruptible Power Supply", "UPS", (5_000.0, 40_000.0)),
    ("Industrial Relay Module", "IRM", (800.0, 6_000.0)),
];

const VOLTAGES: &[&str] = &["120V AC", "240V AC", "480V AC", "24V DC", "48V DC", "600V AC"];

const IP_RATINGS: &[&str] = &["IP20", "IP44", "IP54", "IP55", "IP65", "IP66", "IP67"];

const SAFETY_RATINGS: &[&str] = &[
    "UL 508A", "UL 891", "UL 1558", "UL 67", "UL 489", "UL 508", "UL 61010-1",
];

const MATERIALS: &[&str] = &[
    "Galvanized Steel",
    "Stainless Steel",
    "Powder-Coated Steel",
    "Cast Aluminum",
    "Polycarbonate",
];

const INSTALL_LOCATIONS: &[&str] = &[
    "Control Room",
    "Production Floor A",
    "Production Floor B",
    "Substation",
    "Utility Room",
    "Warehouse Bay 3",
    "Rooftop Enclosure",
    "Basement Electrical Room",
];

const TECHNICIANS: &[&str] = &[
    "Sarah Chen",
    "Miguel Torres",
    "Priya Nair",
    "James Okafor",
    "Anna Kowalski",
    "Tom Reeves",
];

pub fn run(args: SeedArgs, global: &GlobalOpts) -> Result<()> {
    let project = resolve_project(global)?;
    let mut rng = StdRng::seed_from_u64(args.seed);

    let facilities = facility_fixtures();
    for facility in &facilities {
        write(&project, RecordKind::Facility, &facility.facility_id, facility)?;
    }

    let assets = generate_assets(&mut rng, args.assets, &facilities);
    for asset in &assets {
        write(&project, RecordKind::Asset, &asset.asset_id, asset)?;
    }

    let work_orders = generate_work_orders(&mut rng, &assets);
    for wo in &work_orders {
        write(&project, RecordKind::WorkOrder, &wo.work_order_id, wo)?;
    }

    let contracts = generate_contracts(&mut rng);
    for contract in &contracts {
        write(&project, RecordKind::Contract, &contract.contract_id, contract)?;
    }

    let certs = generate_certifications(&mut rng);
    for cert in &certs {
        write(&project, RecordKind::Certification, &cert_key(cert), cert)?;
    }

    if !global.quiet {
        println!("{} Seeded project (seed {})", style("✓").green(), args.seed);
        println!("  {} facilities", facilities.len());
        println!("  {} assets", assets.len());
        println!("  {} work orders", work_orders.len());
        println!("  {} contracts", contracts.len());
        println!("  {} certifications", certs.len());
    }

    Ok(())
}

fn write<T: serde::Serialize>(
    project: &Project,
    kind: RecordKind,
    key: &str,
    record: &T,
) -> Result<()> {
    loader::write_record(&project.record_path(kind, key), record)
}

fn base_date() -> NaiveDate {
    let (y, m, d) = BASE_DATE;
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn pick<'a, T>(rng: &mut StdRng, items: &'a [T]) -> &'a T {
    &items[rng.random_range(0..items.len())]
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}

fn facility_fixtures() -> Vec<Facility> {
    let rows: &[(&str, &str, &str, &str, &str, &str, FacilityType, u32, u32, (i32, u32, u32))] = &[
        ("FAC-001", "Chicago Manufacturing Complex", "Chicago", "IL", "United States", "North America", FacilityType::ManufacturingPlant, 285_000, 1_420, (1998, 3, 15)),
        ("FAC-002", "Houston Energy Center", "Houston", "TX", "United States", "North America", FacilityType::ManufacturingPlant, 342_000, 1_850, (2002, 7, 22)),
        ("FAC-003", "Detroit Automation Hub", "Detroit", "MI", "United States", "North America", FacilityType::ManufacturingPlant, 198_000, 980, (2005, 11, 1)),
        ("FAC-004", "Charlotte Distribution Center", "Charlotte", "NC", "United States", "North America", FacilityType::DistributionCenter, 156_000, 420, (2010, 4, 18)),
        ("FAC-005", "San Jose R&D Laboratory", "San Jose", "CA", "United States", "North America", FacilityType::RdLaboratory, 78_000, 310, (2012, 9, 30)),
        ("FAC-006", "Toronto Systems Integration", "Toronto", "ON", "Canada", "North America", FacilityType::ManufacturingPlant, 165_000, 720, (2008, 1, 10)),
        ("FAC-007", "Monterrey Assembly Plant", "Monterrey", "NL", "Mexico", "North America", FacilityType::ManufacturingPlant, 210_000, 1_100, (2015, 6, 25)),
        ("FAC-008", "Frankfurt European Operations", "Frankfurt", "HE", "Germany", "EMEA", FacilityType::ManufacturingPlant, 230_000, 1_280, (2001, 8, 14)),
    ];

    rows.iter()
        .map(|&(id, name, city, state, country, region, ftype, sqft, emp, (y, m, d))| Facility {
            facility_id: id.to_string(),
            facility_name: name.to_string(),
            city: city.to_string(),
            state_province: state.to_string(),
            country: country.to_string(),
            region: region.to_string(),
            facility_type: ftype,
            square_footage: sqft,
            employee_count: emp,
            opened_date: NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default(),
        })
        .collect()
}

fn generate_assets(rng: &mut StdRng, count: usize, facilities: &[Facility]) -> Vec<Asset> {
    let base = base_date();
    let mut assets = Vec::with_capacity(count);

    for i in 1..=count {
        let &(equipment_type, code, (price_min, price_max)) = pick(rng, EQUIPMENT_TYPES);
        let &(manufacturer, mfr_code) = pick(rng, MANUFACTURERS);
        let facility = pick(rng, facilities);

        let purchase_date = base - Duration::days(rng.random_range(200..3800));
        let warranty_years = *pick(rng, &[1_i64, 2, 3, 5]);
        // A slice of older records never carried warranty data.
        let warranty_expiration = if rng.random_range(0..10) < 9 {
            Some(purchase_date + Duration::days(365 * warranty_years))
        } else {
            None
        };

        let operational_status = match rng.random_range(0..20) {
            0 => OperationalStatus::Decommissioned,
            1 => OperationalStatus::Standby,
            2 | 3 => OperationalStatus::UnderMaintenance,
            _ => OperationalStatus::Active,
        };

        let last_inspection_date = if rng.random_range(0..10) < 9 {
            Some(base - Duration::days(rng.random_range(10..400)))
        } else {
            None
        };
        let next_inspection_due = last_inspection_date.map(|d| d + Duration::days(180));

        assets.push(Asset {
            asset_id: format!("AST-{:06}", i),
            model_number: format!(
                "{}-{}-{}{}",
                code,
                rng.random_range(1000..10000),
                (b'A' + rng.random_range(0..8) as u8) as char,
                rng.random_range(1..10)
            ),
            equipment_type: equipment_type.to_string(),
            equipment_type_code: code.to_string(),
            manufacturer: manufacturer.to_string(),
            facility_id: facility.facility_id.clone(),
            serial_number: format!(
                "{}-{}-{:06}",
                mfr_code,
                purchase_date.format("%Y"),
                i
            ),
            purchase_date,
            purchase_price_usd: round2(rng.random_range(price_min..price_max)),
            warranty_expiration,
            operational_status,
            voltage_rating: pick(rng, VOLTAGES).to_string(),
            ip_rating: pick(rng, IP_RATINGS).to_string(),
            last_inspection_date,
            next_inspection_due,
            install_location: pick(rng, INSTALL_LOCATIONS).to_string(),
        });
    }

    assets
}

fn generate_work_orders(rng: &mut StdRng, assets: &[Asset]) -> Vec<WorkOrder> {
    let base = base_date();
    let mut work_orders = Vec::new();
    let mut seq = 0usize;

    let type_weights = [
        WorkOrderType::PreventiveMaintenance,
        WorkOrderType::PreventiveMaintenance,
        WorkOrderType::PreventiveMaintenance,
        WorkOrderType::CorrectiveRepair,
        WorkOrderType::CorrectiveRepair,
        WorkOrderType::Inspection,
        WorkOrderType::Inspection,
        WorkOrderType::Calibration,
        WorkOrderType::EmergencyRepair,
    ];
    let status_weights = [
        WorkOrderStatus::Completed,
        WorkOrderStatus::Completed,
        WorkOrderStatus::Completed,
        WorkOrderStatus::Completed,
        WorkOrderStatus::InProgress,
        WorkOrderStatus::Open,
        WorkOrderStatus::Cancelled,
    ];

    for asset in assets {
        let count = rng.random_range(0..=8);
        for _ in 0..count {
            seq += 1;
            let work_order_type = *pick(rng, &type_weights);
            let status = *pick(rng, &status_weights);

            let priority = match work_order_type {
                WorkOrderType::EmergencyRepair => *pick(
                    rng,
                    &[
                        WorkOrderPriority::Critical,
                        WorkOrderPriority::Critical,
                        WorkOrderPriority::High,
                    ],
                ),
                _ => *pick(
                    rng,
                    &[
                        WorkOrderPriority::Low,
                        WorkOrderPriority::Medium,
                        WorkOrderPriority::Medium,
                        WorkOrderPriority::High,
                    ],
                ),
            };

            let scheduled_date = base - Duration::days(rng.random_range(-60..700));
            let completed_date = match status {
                WorkOrderStatus::Completed => {
                    Some(scheduled_date + Duration::days(rng.random_range(0..14)))
                }
                _ => None,
            };

            let downtime = match work_order_type {
                WorkOrderType::EmergencyRepair => rng.random_range(1.0..48.0),
                WorkOrderType::CorrectiveRepair => rng.random_range(0.0..12.0),
                _ => rng.random_range(0.0..2.0),
            };

            work_orders.push(WorkOrder {
                work_order_id: format!("WO-{:06}", seq),
                asset_id: asset.asset_id.clone(),
                work_order_type,
                priority,
                status,
                created_at: None,
                scheduled_date: Some(scheduled_date),
                completed_date,
                technician: Some(pick(rng, TECHNICIANS).to_string()),
                description: Some(describe(work_order_type, asset)),
                labor_hours: Some(round1(rng.random_range(0.5..24.0))),
                parts_cost_usd: Some(round2(rng.random_range(0.0..5000.0))),
                downtime_hours: Some(round1(downtime)),
            });
        }
    }

    work_orders
}

fn describe(wo_type: WorkOrderType, asset: &Asset) -> String {
    match wo_type {
        WorkOrderType::PreventiveMaintenance => {
            format!("Scheduled PM on {}", asset.model_number)
        }
        WorkOrderType::CorrectiveRepair => {
            format!("Fault reported on {} at {}", asset.model_number, asset.install_location)
        }
        WorkOrderType::Inspection => format!("Routine inspection of {}", asset.model_number),
        WorkOrderType::Calibration => format!("Calibration cycle for {}", asset.model_number),
        WorkOrderType::EmergencyRepair => {
            format!("Unplanned outage on {} at {}", asset.model_number, asset.install_location)
        }
    }
}

fn generate_contracts(rng: &mut StdRng) -> Vec<Contract> {
    let base = base_date();
    let contacts = [
        ("David Park", "david.park"),
        ("Lena Fischer", "lena.fischer"),
        ("Raj Patel", "raj.patel"),
        ("Emily Watson", "emily.watson"),
    ];

    MANUFACTURERS
        .iter()
        .enumerate()
        .map(|(i, &(manufacturer, _))| {
            let start_date = base - Duration::days(rng.random_range(100..1200));
            let duration_years = *pick(rng, &[1_i64, 2, 3, 5]);
            let end_date = start_date + Duration::days(365 * duration_years);

            let contract_status = if end_date < base {
                ContractStatus::Expired
            } else if end_date < base + Duration::days(90) {
                ContractStatus::ExpiringSoon
            } else {
                ContractStatus::Active
            };

            let (contact, email_user) = *pick(rng, &contacts);
            let domain = manufacturer
                .split_whitespace()
                .next()
                .unwrap_or("supplier")
                .to_lowercase();

            Contract {
                contract_id: format!("CTR-{:04}", i + 1),
                manufacturer: manufacturer.to_string(),
                contract_type: *pick(
                    rng,
                    &[
                        ContractType::ServiceAgreement,
                        ContractType::PartsSupply,
                        ContractType::ExtendedWarranty,
                    ],
                ),
                start_date,
                end_date,
                annual_value_usd: round2(rng.random_range(25_000.0..350_000.0)),
                sla_response_hours: *pick(rng, &[2_u32, 4, 4, 8, 8, 24]),
                contract_status,
                primary_contact: Some(contact.to_string()),
                contact_email: Some(format!("{}@{}.example.com", email_user, domain)),
            }
        })
        .collect()
}

fn generate_certifications(rng: &mut StdRng) -> Vec<Certification> {
    let mut certs = Vec::new();
    let mut seq = 0usize;

    for &(manufacturer, _) in MANUFACTURERS {
        // Each manufacturer certifies a handful of its equipment lines.
        let start = rng.random_range(0..EQUIPMENT_TYPES.len());
        for offset in 0..4 {
            seq += 1;
            let &(equipment_type, code, _) =
                &EQUIPMENT_TYPES[(start + offset * 3) % EQUIPMENT_TYPES.len()];
            let cert_id = format!("UL-2024-{:06}", seq);
            let source_file = format!("equipment_docs/cert_{}.pdf", cert_id);

            // Extraction occasionally yields only the join key.
            if rng.random_range(0..10) == 0 {
                certs.push(Certification {
                    source_file,
                    manufacturer: manufacturer.to_string(),
                    equipment_type: equipment_type.to_string(),
                    model_number: None,
                    certification_id: None,
                    certification_status: None,
                    safety_rating: None,
                    material_type: None,
                    weight_kg: None,
                    voltage_rating: None,
                    ip_rating: None,
                    operating_temp_min_c: None,
                    operating_temp_max_c: None,
                    compliance_standards: None,
                });
                continue;
            }

            let certification_status = if rng.random_range(0..10) < 8 {
                CertificationStatus::Pass
            } else {
                CertificationStatus::Conditional
            };

            certs.push(Certification {
                source_file,
                manufacturer: manufacturer.to_string(),
                equipment_type: equipment_type.to_string(),
                model_number: Some(format!(
                    "{}-{}-{}{}",
                    code,
                    rng.random_range(1000..10000),
                    (b'A' + rng.random_range(0..8) as u8) as char,
                    rng.random_range(1..10)
                )),
                certification_id: Some(cert_id),
                certification_status: Some(certification_status),
                safety_rating: Some(pick(rng, SAFETY_RATINGS).to_string()),
                material_type: Some(pick(rng, MATERIALS).to_string()),
                weight_kg: Some(round1(rng.random_range(2.5..150.0))),
                voltage_rating: Some(pick(rng, VOLTAGES).to_string()),
                ip_rating: Some(pick(rng, IP_RATINGS).to_string()),
                operating_temp_min_c: Some(round1(rng.random_range(-40.0..0.0))),
                operating_temp_max_c: Some(round1(rng.random_range(40.0..85.0))),
                compliance_standards: Some("IEC 61439-1, NFPA 79, CSA C22.2".to_string()),
            });
        }
    }

    certs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_assets() {
        let facilities = facility_fixtures();
        let mut a = StdRng::seed_from_u64(7);
        let mut b = StdRng::seed_from_u64(7);
        let first = generate_assets(&mut a, 20, &facilities);
        let second = generate_assets(&mut b, 20, &facilities);
        assert_eq!(first, second);
    }

    #[test]
    fn test_facility_fixtures_are_stable() {
        let facilities = facility_fixtures();
        assert_eq!(facilities.len(), 8);
        assert_eq!(facilities[0].facility_name, "Chicago Manufacturing Complex");
        assert_eq!(facilities[1].facility_name, "Houston Energy Center");
        assert_eq!(facilities[1].square_footage, 342_000);
        assert_eq!(facilities[4].facility_type, FacilityType::RdLaboratory);
        assert_eq!(facilities[7].facility_id, "FAC-008");
        assert_eq!(facilities[7].region, "EMEA");
        assert_eq!(
            facilities[7].facility_type,
            FacilityType::ManufacturingPlant
        );
        // FAC-001 through FAC-007 are North American sites.
        for facility in &facilities[..7] {
            assert_eq!(facility.region, "North America");
        }
    }

    #[test]
    fn test_assets_reference_known_facilities() {
        let facilities = facility_fixtures();
        let mut rng = StdRng::seed_from_u64(42);
        let assets = generate_assets(&mut rng, 50, &facilities);
        for asset in &assets {
            assert!(facilities.iter().any(|f| f.facility_id == asset.facility_id));
        }
    }

    #[test]
    fn test_work_orders_reference_generated_assets() {
        let facilities = facility_fixtures();
        let mut rng = StdRng::seed_from_u64(42);
        let assets = generate_assets(&mut rng, 30, &facilities);
        let work_orders = generate_work_orders(&mut rng, &assets);
        for wo in &work_orders {
            assert!(assets.iter().any(|a| a.asset_id == wo.asset_id));
            if wo.status == WorkOrderStatus::Completed {
                assert!(wo.completed_date.is_some());
            }
        }
    }

    #[test]
    fn test_one_contract_per_manufacturer() {
        let mut rng = StdRng::seed_from_u64(42);
        let contracts = generate_contracts(&mut rng);
        assert_eq!(contracts.len(), MANUFACTURERS.len());
        let mut manufacturers: Vec<&str> =
            contracts.iter().map(|c| c.manufacturer.as_str()).collect();
        manufacturers.dedup();
        assert_eq!(manufacturers.len(), MANUFACTURERS.len());
    }

    #[test]
    fn test_certifications_carry_join_key_even_when_sparse() {
        let mut rng = StdRng::seed_from_u64(42);
        let certs = generate_certifications(&mut rng);
        assert!(!certs.is_empty());
        for cert in &certs {
            assert!(!cert.manufacturer.is_empty());
            assert!(!cert.equipment_type.is_empty());
            assert!(cert.source_file.starts_with("equipment_docs/"));
        }
    }
}
