//! Frontend Models
//!
//! Data structures matching backend records, plus request payloads.

use leptos_datatable::{SortKey, TableRow};
use serde::{Deserialize, Serialize};

/// Signed-in user type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    #[serde(alias = "custodian")]
    PropertyCustodian,
    #[serde(alias = "faculty")]
    Teacher,
    #[serde(alias = "ict", alias = "ict_administrator")]
    IctAdmin,
    #[serde(alias = "finance")]
    Accounting,
}

impl Role {
    pub const ALL: [Role; 4] = [
        Role::PropertyCustodian,
        Role::Teacher,
        Role::IctAdmin,
        Role::Accounting,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::PropertyCustodian => "property_custodian",
            Role::Teacher => "teacher",
            Role::IctAdmin => "ict_admin",
            Role::Accounting => "accounting",
        }
    }

    /// Parse a stored `user_type`, accepting the short aliases too
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "property_custodian" | "custodian" => Some(Role::PropertyCustodian),
            "teacher" | "faculty" => Some(Role::Teacher),
            "ict_admin" | "ict" | "ict_administrator" => Some(Role::IctAdmin),
            "accounting" | "finance" => Some(Role::Accounting),
            _ => None,
        }
    }

    /// First path segment of this role's routes
    pub fn prefix(&self) -> &'static str {
        match self {
            Role::PropertyCustodian => "custodian",
            Role::Teacher => "faculty",
            Role::IctAdmin => "ict",
            Role::Accounting => "finance",
        }
    }

    pub fn from_prefix(prefix: &str) -> Option<Self> {
        Role::ALL.into_iter().find(|r| r.prefix() == prefix)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Role::PropertyCustodian => "Property Custodian",
            Role::Teacher => "Teacher",
            Role::IctAdmin => "ICT Administrator",
            Role::Accounting => "Accounting",
        }
    }
}

/// Inventory item status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemStatus {
    Available,
    Assigned,
    UnderRepair,
    Condemned,
    Lost,
}

impl ItemStatus {
    pub const ALL: [ItemStatus; 5] = [
        ItemStatus::Available,
        ItemStatus::Assigned,
        ItemStatus::UnderRepair,
        ItemStatus::Condemned,
        ItemStatus::Lost,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ItemStatus::Available => "available",
            ItemStatus::Assigned => "assigned",
            ItemStatus::UnderRepair => "under_repair",
            ItemStatus::Condemned => "condemned",
            ItemStatus::Lost => "lost",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        ItemStatus::ALL.into_iter().find(|st| st.as_str() == s)
    }

    pub fn label(&self) -> &'static str {
        match self {
            ItemStatus::Available => "Available",
            ItemStatus::Assigned => "Assigned",
            ItemStatus::UnderRepair => "Under Repair",
            ItemStatus::Condemned => "Condemned",
            ItemStatus::Lost => "Lost",
        }
    }

    /// No longer part of usable stock
    pub fn is_written_off(&self) -> bool {
        matches!(self, ItemStatus::Condemned | ItemStatus::Lost)
    }
}

/// Condition a teacher reports for an assigned item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Condition {
    Good,
    Fair,
    NeedsRepair,
    Damaged,
}

impl Condition {
    pub const ALL: [Condition; 4] = [
        Condition::Good,
        Condition::Fair,
        Condition::NeedsRepair,
        Condition::Damaged,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Condition::Good => "good",
            Condition::Fair => "fair",
            Condition::NeedsRepair => "needs_repair",
            Condition::Damaged => "damaged",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        Condition::ALL.into_iter().find(|c| c.as_str() == s)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Condition::Good => "Good",
            Condition::Fair => "Fair",
            Condition::NeedsRepair => "Needs Repair",
            Condition::Damaged => "Damaged",
        }
    }

    pub fn needs_attention(&self) -> bool {
        matches!(self, Condition::NeedsRepair | Condition::Damaged)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub id: u32,
    pub property_no: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub category: String,
    pub unit: String,
    pub quantity: u32,
    pub unit_cost: f64,
    pub date_acquired: String,
    pub status: ItemStatus,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub school_id: Option<u32>,
}

impl InventoryItem {
    pub fn total_cost(&self) -> f64 {
        self.quantity as f64 * self.unit_cost
    }
}

impl TableRow for InventoryItem {
    fn search_text(&self) -> String {
        format!(
            "{} {} {} {} {}",
            self.property_no,
            self.name,
            self.category,
            self.location.as_deref().unwrap_or(""),
            self.description.as_deref().unwrap_or("")
        )
    }

    fn sort_key(&self, column: &str) -> SortKey {
        match column {
            "property_no" => SortKey::text(&self.property_no),
            "name" => SortKey::text(&self.name),
            "category" => SortKey::text(&self.category),
            "quantity" => self.quantity.into(),
            "unit_cost" => self.unit_cost.into(),
            "total_cost" => self.total_cost().into(),
            "date_acquired" => SortKey::text(&self.date_acquired),
            "status" => SortKey::text(self.status.label()),
            "location" => SortKey::opt_text(self.location.as_deref()),
            _ => SortKey::Missing,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssignedItem {
    pub id: u32,
    pub item_id: u32,
    pub property_no: String,
    pub item_name: String,
    pub teacher_id: u32,
    pub teacher_name: String,
    pub quantity: u32,
    pub date_assigned: String,
    pub condition: Condition,
    #[serde(default)]
    pub remarks: Option<String>,
}

impl TableRow for AssignedItem {
    fn search_text(&self) -> String {
        format!(
            "{} {} {} {}",
            self.property_no,
            self.item_name,
            self.teacher_name,
            self.remarks.as_deref().unwrap_or("")
        )
    }

    fn sort_key(&self, column: &str) -> SortKey {
        match column {
            "property_no" => SortKey::text(&self.property_no),
            "item_name" => SortKey::text(&self.item_name),
            "teacher_name" => SortKey::text(&self.teacher_name),
            "quantity" => self.quantity.into(),
            "date_assigned" => SortKey::text(&self.date_assigned),
            "condition" => SortKey::text(self.condition.label()),
            _ => SortKey::Missing,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Personnel {
    pub id: u32,
    pub employee_no: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    pub position: String,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub school_id: Option<u32>,
}

impl Personnel {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl TableRow for Personnel {
    fn search_text(&self) -> String {
        format!(
            "{} {} {} {} {} {}",
            self.employee_no,
            self.first_name,
            self.last_name,
            self.email,
            self.position,
            self.department.as_deref().unwrap_or("")
        )
    }

    fn sort_key(&self, column: &str) -> SortKey {
        match column {
            "employee_no" => SortKey::text(&self.employee_no),
            "name" => SortKey::text(format!("{} {}", self.last_name, self.first_name)),
            "email" => SortKey::text(&self.email),
            "position" => SortKey::text(&self.position),
            "department" => SortKey::opt_text(self.department.as_deref()),
            _ => SortKey::Missing,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct School {
    pub id: u32,
    pub school_code: String,
    pub name: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub district: Option<String>,
}

impl TableRow for School {
    fn search_text(&self) -> String {
        format!(
            "{} {} {} {}",
            self.school_code,
            self.name,
            self.address.as_deref().unwrap_or(""),
            self.district.as_deref().unwrap_or("")
        )
    }

    fn sort_key(&self, column: &str) -> SortKey {
        match column {
            "school_code" => SortKey::text(&self.school_code),
            "name" => SortKey::text(&self.name),
            "district" => SortKey::opt_text(self.district.as_deref()),
            _ => SortKey::Missing,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackupRecord {
    pub id: u32,
    pub filename: String,
    pub size_bytes: u64,
    pub created_at: String,
    #[serde(default)]
    pub created_by: Option<String>,
}

impl TableRow for BackupRecord {
    fn search_text(&self) -> String {
        format!("{} {}", self.filename, self.created_by.as_deref().unwrap_or(""))
    }

    fn sort_key(&self, column: &str) -> SortKey {
        match column {
            "filename" => SortKey::text(&self.filename),
            "size" => SortKey::Number(self.size_bytes as f64),
            "created_at" => SortKey::text(&self.created_at),
            _ => SortKey::Missing,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub id: u32,
    pub username: String,
    pub email: String,
    pub full_name: String,
    pub user_type: Role,
    pub is_active: bool,
}

impl TableRow for Account {
    fn search_text(&self) -> String {
        format!(
            "{} {} {} {}",
            self.username,
            self.email,
            self.full_name,
            self.user_type.label()
        )
    }

    fn sort_key(&self, column: &str) -> SortKey {
        match column {
            "username" => SortKey::text(&self.username),
            "full_name" => SortKey::text(&self.full_name),
            "email" => SortKey::text(&self.email),
            "user_type" => SortKey::text(self.user_type.label()),
            "is_active" => SortKey::Number(if self.is_active { 1.0 } else { 0.0 }),
            _ => SortKey::Missing,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub username: String,
    pub email: String,
    pub full_name: String,
    #[serde(default)]
    pub phone: Option<String>,
}

// ========================
// Request / Response Payloads
// ========================

#[derive(Serialize)]
pub struct LoginRequest<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub user_type: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InventoryPayload {
    pub property_no: String,
    pub name: String,
    pub description: Option<String>,
    pub category: String,
    pub unit: String,
    pub quantity: u32,
    pub unit_cost: f64,
    pub date_acquired: String,
    pub status: ItemStatus,
    pub location: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssignmentPayload {
    pub item_id: u32,
    pub teacher_id: u32,
    pub quantity: u32,
    pub date_assigned: String,
    pub remarks: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConditionPayload {
    pub condition: Condition,
    pub remarks: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PersonnelPayload {
    pub employee_no: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub position: String,
    pub department: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SchoolPayload {
    pub school_code: String,
    pub name: String,
    pub address: Option<String>,
    pub district: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AccountPayload {
    pub username: String,
    pub email: String,
    pub full_name: String,
    pub user_type: Role,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfilePayload {
    pub email: String,
    pub full_name: String,
    pub phone: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PasswordPayload {
    pub current_password: String,
    pub new_password: String,
    pub new_password_confirmation: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_aliases_deserialize() {
        let r: Role = serde_json::from_str("\"custodian\"").unwrap();
        assert_eq!(r, Role::PropertyCustodian);
        let r: Role = serde_json::from_str("\"ict_administrator\"").unwrap();
        assert_eq!(r, Role::IctAdmin);
        assert_eq!(Role::parse(" Finance "), Some(Role::Accounting));
        assert_eq!(Role::parse("janitor"), None);
    }

    #[test]
    fn test_role_prefix_round_trip() {
        for role in Role::ALL {
            assert_eq!(Role::from_prefix(role.prefix()), Some(role));
        }
    }

    #[test]
    fn test_inventory_item_decodes_with_optional_fields_missing() {
        let json = r#"{
            "id": 7, "property_no": "PN-2024-007", "name": "Projector",
            "category": "ICT Equipment", "unit": "unit", "quantity": 2,
            "unit_cost": 24500.5, "date_acquired": "2024-03-15", "status": "under_repair"
        }"#;
        let item: InventoryItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.status, ItemStatus::UnderRepair);
        assert_eq!(item.location, None);
        assert_eq!(item.total_cost(), 49001.0);
    }

    #[test]
    fn test_account_payload_omits_blank_password() {
        let payload = AccountPayload {
            username: "jdelacruz".into(),
            email: "jdc@school.edu.ph".into(),
            full_name: "Juan Dela Cruz".into(),
            user_type: Role::Accounting,
            password: None,
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert!(json.get("password").is_none());
        assert_eq!(json["user_type"], "accounting");
    }
}
