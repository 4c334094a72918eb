//! Record type definitions
//!
//! eiq manages five record sets:
//!
//! **Operational (ERP/CMMS) records:**
//! - [`Facility`] - Plant locations where equipment is deployed
//! - [`Asset`] - Equipment inventory with facility assignments and lifecycle dates
//! - [`WorkOrder`] - Maintenance and service history per asset
//! - [`Contract`] - Manufacturer service agreements and SLAs
//!
//! **Extracted records:**
//! - [`Certification`] - Structured fields extracted from certification
//!   reports, keyed by source document path. Joined to inventory on
//!   `(manufacturer, equipment_type)` - not by asset identity, since no
//!   document-to-asset mapping exists.

pub mod asset;
pub mod certification;
pub mod contract;
pub mod facility;
pub mod work_order;

pub use asset::{Asset, OperationalStatus};
pub use certification::{Certification, CertificationStatus};
pub use contract::{Contract, ContractStatus, ContractType};
pub use facility::{Facility, FacilityType};
pub use work_order::{WorkOrder, WorkOrderPriority, WorkOrderStatus, WorkOrderType};
