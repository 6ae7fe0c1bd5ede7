use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{Collection, Resource, str_field};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SupplierStatus {
    #[default]
    Active,
    Inactive,
    #[serde(rename = "Under Review")]
    UnderReview,
}

impl SupplierStatus {
    pub const ALL: [SupplierStatus; 3] = [Self::Active, Self::Inactive, Self::UnderReview];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Inactive => "Inactive",
            Self::UnderReview => "Under Review",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.as_str() == s)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Supplier {
    pub id: String,
    pub name: String,
    pub country: String,
    /// Raw status text; see [`SupplierStatus`] for the known values
    pub status: String,
    pub contact_email: String,
}

impl Resource for Supplier {
    const COLLECTION: Collection = Collection::Suppliers;

    fn from_json(json: &Value) -> Self {
        Self {
            id: str_field(json, "id"),
            name: str_field(json, "name"),
            country: str_field(json, "country"),
            status: str_field(json, "status"),
            contact_email: str_field(json, "contactEmail"),
        }
    }

    fn id(&self) -> &str {
        &self.id
    }
}
