//! Field (and rule) names.
//!
//! A profile stores each rule under the same name its top-level label uses, so
//! these constants serve both as rule keys and as the field names reported on
//! an [`AddressMatch`](crate::AddressMatch).

pub const FULL_ADDRESS: &str = "full_address";
pub const FULL_STREET: &str = "full_street";

pub const STREET_NUMBER: &str = "street_number";
pub const STREET_NAME: &str = "street_name";
pub const STREET_TYPE: &str = "street_type";
pub const ROUTE_ID: &str = "route_id";
pub const POST_DIRECTION: &str = "post_direction";
pub const FLOOR: &str = "floor";
pub const BUILDING_ID: &str = "building_id";
pub const OCCUPANCY: &str = "occupancy";
pub const PO_BOX: &str = "po_box";

pub const CITY: &str = "city";
pub const REGION1: &str = "region1";
pub const POSTAL_CODE: &str = "postal_code";
pub const COUNTRY: &str = "country";

/// Unlabeled separator rule placed between address parts.
pub const DIVIDER: &str = "divider";
