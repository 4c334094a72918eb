//! The wide certification-centric relation, one row per
//! (asset x facility x matching certification x matching contract)
//! combination.
//!
//! Joins:
//! - asset to facility: inner join on `facility_id`. Assets pointing at an
//!   unknown facility are excluded entirely, never null-padded.
//! - asset to certification: left join on `(manufacturer, equipment_type)`,
//!   fanning out one row per matching certification record.
//! - asset to contract: left join on `manufacturer`, same fan-out.

use chrono::NaiveDate;
use serde::Serialize;

use crate::entities::{
    Asset, Certification, CertificationStatus, Contract, ContractStatus, ContractType, Facility,
    FacilityType, OperationalStatus,
};
use crate::views::join::{CertificationIndex, ContractIndex, FacilityIndex};
use crate::views::status::{inspection_status, warranty_status, InspectionStatus, WarrantyStatus};

/// One joined row of the equipment view.
///
/// Certification and contract columns are null when the respective left
/// join found no match. The asset's own `voltage_rating`/`ip_rating` keep
/// their names; the certification's copies are prefixed `certified_` so
/// both survive in one row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Equipment360Row {
    // Asset
    pub asset_id: String,
    pub model_number: String,
    pub serial_number: String,
    pub equipment_type: String,
    pub equipment_type_code: String,
    pub manufacturer: String,
    pub purchase_date: NaiveDate,
    pub purchase_price_usd: f64,
    pub warranty_expiration: Option<NaiveDate>,
    pub operational_status: OperationalStatus,
    pub voltage_rating: String,
    pub ip_rating: String,
    pub last_inspection_date: Option<NaiveDate>,
    pub next_inspection_due: Option<NaiveDate>,
    pub install_location: String,

    // Facility
    pub facility_id: String,
    pub facility_name: String,
    pub city: String,
    pub state_province: String,
    pub country: String,
    pub region: String,
    pub facility_type: FacilityType,

    // Certification (left join)
    pub has_certification: bool,
    pub certification_id: Option<String>,
    pub certification_status: Option<CertificationStatus>,
    pub safety_rating: Option<String>,
    pub material_type: Option<String>,
    pub weight_kg: Option<f64>,
    pub certified_voltage_rating: Option<String>,
    pub certified_ip_rating: Option<String>,
    pub operating_temp_min_c: Option<f64>,
    pub operating_temp_max_c: Option<f64>,
    pub compliance_standards: Option<String>,
    pub cert_source_file: Option<String>,

    // Contract (left join)
    pub contract_id: Option<String>,
    pub contract_type: Option<ContractType>,
    pub contract_status: Option<ContractStatus>,
    pub contract_annual_value_usd: Option<f64>,
    pub sla_response_hours: Option<u32>,

    // Derived
    pub warranty_status: WarrantyStatus,
    pub inspection_status: InspectionStatus,
}

/// Build the equipment view from a snapshot of the record sets.
///
/// Pure and deterministic: output order follows asset input order, then
/// certification input order, then contract input order within each asset.
pub fn build_equipment_360(
    facilities: &[Facility],
    assets: &[Asset],
    certifications: &[Certification],
    contracts: &[Contract],
    as_of: NaiveDate,
) -> Vec<Equipment360Row> {
    let facility_index = FacilityIndex::new(facilities);
    let cert_index = CertificationIndex::new(certifications);
    let contract_index = ContractIndex::new(contracts);

    let mut rows = Vec::new();
    for asset in assets {
        let facility = match facility_index.get(&asset.facility_id) {
            Some(f) => f,
            None => continue,
        };

        for cert in left_side(cert_index.matches(&asset.manufacturer, &asset.equipment_type)) {
            for contract in left_side(contract_index.matches(&asset.manufacturer)) {
                rows.push(make_row(asset, facility, cert, contract, as_of));
            }
        }
    }
    rows
}

/// Left-join adapter: an empty match set still yields one null slot.
fn left_side<'a, T>(matches: &'a [&'a T]) -> Vec<Option<&'a T>> {
    if matches.is_empty() {
        vec![None]
    } else {
        matches.iter().map(|m| Some(*m)).collect()
    }
}

fn make_row(
    asset: &Asset,
    facility: &Facility,
    cert: Option<&Certification>,
    contract: Option<&Contract>,
    as_of: NaiveDate,
) -> Equipment360Row {
    Equipment360Row {
        asset_id: asset.asset_id.clone(),
        model_number: asset.model_number.clone(),
        serial_number: asset.serial_number.clone(),
        equipment_type: asset.equipment_type.clone(),
        equipment_type_code: asset.equipment_type_code.clone(),
        manufacturer: asset.manufacturer.clone(),
        purchase_date: asset.purchase_date,
        purchase_price_usd: asset.purchase_price_usd,
        warranty_expiration: asset.warranty_expiration,
        operational_status: asset.operational_status,
        voltage_rating: asset.voltage_rating.clone(),
        ip_rating: asset.ip_rating.clone(),
        last_inspection_date: asset.last_inspection_date,
        next_inspection_due: asset.next_inspection_due,
        install_location: asset.install_location.clone(),

        facility_id: facility.facility_id.clone(),
        facility_name: facility.facility_name.clone(),
        city: facility.city.clone(),
        state_province: facility.state_province.clone(),
        country: facility.country.clone(),
        region: facility.region.clone(),
        facility_type: facility.facility_type,

        has_certification: cert.and_then(|c| c.certification_id.as_ref()).is_some(),
        certification_id: cert.and_then(|c| c.certification_id.clone()),
        certification_status: cert.and_then(|c| c.certification_status),
        safety_rating: cert.and_then(|c| c.safety_rating.clone()),
        material_type: cert.and_then(|c| c.material_type.clone()),
        weight_kg: cert.and_then(|c| c.weight_kg),
        certified_voltage_rating: cert.and_then(|c| c.voltage_rating.clone()),
        certified_ip_rating: cert.and_then(|c| c.ip_rating.clone()),
        operating_temp_min_c: cert.and_then(|c| c.operating_temp_min_c),
        operating_temp_max_c: cert.and_then(|c| c.operating_temp_max_c),
        compliance_standards: cert.and_then(|c| c.compliance_standards.clone()),
        cert_source_file: cert.map(|c| c.source_file.clone()),

        contract_id: contract.map(|c| c.contract_id.clone()),
        contract_type: contract.map(|c| c.contract_type),
        contract_status: contract.map(|c| c.contract_status),
        contract_annual_value_usd: contract.map(|c| c.annual_value_usd),
        sla_response_hours: contract.map(|c| c.sla_response_hours),

        warranty_status: warranty_status(asset.warranty_expiration, as_of),
        inspection_status: inspection_status(asset.next_inspection_due, as_of),
    }
}
