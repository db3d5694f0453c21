//! Form State
//!
//! Raw string state behind each CRUD form and its conversion into request
//! payloads. Conversion validates first, so an invalid form never reaches
//! the network.

use crate::error::FieldErrors;
use crate::models::{
    Account, AccountPayload, AssignmentPayload, Condition, ConditionPayload, InventoryItem,
    InventoryPayload, ItemStatus, PasswordPayload, Personnel, PersonnelPayload, Profile,
    ProfilePayload, Role, School, SchoolPayload,
};
use crate::validation::{normalize_phone, optional, Validator, MIN_PASSWORD_LEN};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

impl LoginForm {
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut v = Validator::new();
        v.required("username", &self.username, "Username")
            .required("password", &self.password, "Password");
        v.finish()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct InventoryForm {
    pub property_no: String,
    pub name: String,
    pub description: String,
    pub category: String,
    pub unit: String,
    pub quantity: String,
    pub unit_cost: String,
    pub date_acquired: String,
    pub status: ItemStatus,
    pub location: String,
}

impl Default for InventoryForm {
    fn default() -> Self {
        Self {
            property_no: String::new(),
            name: String::new(),
            description: String::new(),
            category: String::new(),
            unit: "unit".to_string(),
            quantity: "1".to_string(),
            unit_cost: String::new(),
            date_acquired: String::new(),
            status: ItemStatus::Available,
            location: String::new(),
        }
    }
}

impl InventoryForm {
    pub fn from_item(item: &InventoryItem) -> Self {
        Self {
            property_no: item.property_no.clone(),
            name: item.name.clone(),
            description: item.description.clone().unwrap_or_default(),
            category: item.category.clone(),
            unit: item.unit.clone(),
            quantity: item.quantity.to_string(),
            unit_cost: item.unit_cost.to_string(),
            date_acquired: item.date_acquired.clone(),
            status: item.status,
            location: item.location.clone().unwrap_or_default(),
        }
    }

    pub fn to_payload(&self) -> Result<InventoryPayload, FieldErrors> {
        let mut v = Validator::new();
        v.required("property_no", &self.property_no, "Property number")
            .property_no("property_no", &self.property_no)
            .required("name", &self.name, "Item name")
            .required("category", &self.category, "Category")
            .required("unit", &self.unit, "Unit");
        let quantity = v.positive_int("quantity", &self.quantity, "Quantity");
        let unit_cost = v.non_negative_decimal("unit_cost", &self.unit_cost, "Unit cost");
        let date = v.iso_date("date_acquired", &self.date_acquired, "Date acquired");
        v.finish()?;

        match (quantity, unit_cost, date) {
            (Some(quantity), Some(unit_cost), Some(date)) => Ok(InventoryPayload {
                property_no: self.property_no.trim().to_uppercase(),
                name: self.name.trim().to_string(),
                description: optional(&self.description),
                category: self.category.trim().to_string(),
                unit: self.unit.trim().to_string(),
                quantity,
                unit_cost,
                date_acquired: date.format("%Y-%m-%d").to_string(),
                status: self.status,
                location: optional(&self.location),
            }),
            _ => Err(FieldErrors::new()),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AssignmentForm {
    pub item_id: String,
    pub teacher_id: String,
    pub quantity: String,
    pub date_assigned: String,
    pub remarks: String,
}

impl AssignmentForm {
    /// `available` is the stock the item must come from
    pub fn to_payload(&self, available: &[InventoryItem]) -> Result<AssignmentPayload, FieldErrors> {
        let mut v = Validator::new();
        v.required("item_id", &self.item_id, "Item")
            .required("teacher_id", &self.teacher_id, "Teacher");
        let quantity = v.positive_int("quantity", &self.quantity, "Quantity");
        let date = v.iso_date("date_assigned", &self.date_assigned, "Date assigned");

        let item = self
            .item_id
            .parse::<u32>()
            .ok()
            .and_then(|id| available.iter().find(|i| i.id == id && i.status == ItemStatus::Available));
        if !self.item_id.is_empty() {
            v.check(item.is_some(), "item_id", "Item is no longer available");
        }
        if let (Some(item), Some(qty)) = (item, quantity) {
            v.check(
                qty <= item.quantity,
                "quantity",
                &format!("Only {} {} in stock", item.quantity, item.unit),
            );
        }
        let teacher_id = self.teacher_id.parse::<u32>().ok();
        if !self.teacher_id.is_empty() {
            v.check(teacher_id.is_some(), "teacher_id", "Select a teacher");
        }
        v.finish()?;

        match (item, teacher_id, quantity, date) {
            (Some(item), Some(teacher_id), Some(quantity), Some(date)) => Ok(AssignmentPayload {
                item_id: item.id,
                teacher_id,
                quantity,
                date_assigned: date.format("%Y-%m-%d").to_string(),
                remarks: optional(&self.remarks),
            }),
            _ => Err(FieldErrors::new()),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConditionForm {
    pub condition: Condition,
    pub remarks: String,
}

impl ConditionForm {
    pub fn to_payload(&self) -> Result<ConditionPayload, FieldErrors> {
        let mut v = Validator::new();
        // Anything other than good/fair needs an explanation
        if self.condition.needs_attention() {
            v.required("remarks", &self.remarks, "Remarks");
        }
        v.finish()?;
        Ok(ConditionPayload {
            condition: self.condition,
            remarks: optional(&self.remarks),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PersonnelForm {
    pub employee_no: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub position: String,
    pub department: String,
}

impl PersonnelForm {
    pub fn from_personnel(p: &Personnel) -> Self {
        Self {
            employee_no: p.employee_no.clone(),
            first_name: p.first_name.clone(),
            last_name: p.last_name.clone(),
            email: p.email.clone(),
            phone: p.phone.clone().unwrap_or_default(),
            position: p.position.clone(),
            department: p.department.clone().unwrap_or_default(),
        }
    }

    pub fn to_payload(&self) -> Result<PersonnelPayload, FieldErrors> {
        let mut v = Validator::new();
        v.required("employee_no", &self.employee_no, "Employee number")
            .required("first_name", &self.first_name, "First name")
            .required("last_name", &self.last_name, "Last name")
            .required("email", &self.email, "Email")
            .email("email", &self.email)
            .phone("phone", &self.phone)
            .required("position", &self.position, "Position");
        v.finish()?;
        Ok(PersonnelPayload {
            employee_no: self.employee_no.trim().to_string(),
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: optional(&normalize_phone(&self.phone)),
            position: self.position.trim().to_string(),
            department: optional(&self.department),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SchoolForm {
    pub school_code: String,
    pub name: String,
    pub address: String,
    pub district: String,
}

impl SchoolForm {
    pub fn from_school(s: &School) -> Self {
        Self {
            school_code: s.school_code.clone(),
            name: s.name.clone(),
            address: s.address.clone().unwrap_or_default(),
            district: s.district.clone().unwrap_or_default(),
        }
    }

    pub fn to_payload(&self) -> Result<SchoolPayload, FieldErrors> {
        let mut v = Validator::new();
        v.required("school_code", &self.school_code, "School ID")
            .check(
                self.school_code.trim().chars().all(|c| c.is_ascii_digit()),
                "school_code",
                "School ID must contain digits only",
            )
            .required("name", &self.name, "School name");
        v.finish()?;
        Ok(SchoolPayload {
            school_code: self.school_code.trim().to_string(),
            name: self.name.trim().to_string(),
            address: optional(&self.address),
            district: optional(&self.district),
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AccountForm {
    pub username: String,
    pub email: String,
    pub full_name: String,
    pub user_type: Role,
    pub password: String,
    pub password_confirm: String,
}

impl Default for AccountForm {
    fn default() -> Self {
        Self {
            username: String::new(),
            email: String::new(),
            full_name: String::new(),
            user_type: Role::PropertyCustodian,
            password: String::new(),
            password_confirm: String::new(),
        }
    }
}

impl AccountForm {
    pub fn from_account(a: &Account) -> Self {
        Self {
            username: a.username.clone(),
            email: a.email.clone(),
            full_name: a.full_name.clone(),
            user_type: a.user_type,
            password: String::new(),
            password_confirm: String::new(),
        }
    }

    /// Password is mandatory when creating, optional when editing
    pub fn to_payload(&self, creating: bool) -> Result<AccountPayload, FieldErrors> {
        let mut v = Validator::new();
        v.required("username", &self.username, "Username")
            .username("username", &self.username)
            .required("email", &self.email, "Email")
            .email("email", &self.email)
            .required("full_name", &self.full_name, "Full name");
        if creating {
            v.required("password", &self.password, "Password");
        }
        if creating || !self.password.is_empty() {
            v.min_len("password", &self.password, MIN_PASSWORD_LEN, "Password")
                .same_as(
                    "password_confirm",
                    &self.password_confirm,
                    &self.password,
                    "Passwords do not match",
                );
        }
        v.finish()?;
        Ok(AccountPayload {
            username: self.username.trim().to_string(),
            email: self.email.trim().to_string(),
            full_name: self.full_name.trim().to_string(),
            user_type: self.user_type,
            password: if self.password.is_empty() {
                None
            } else {
                Some(self.password.clone())
            },
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileForm {
    pub email: String,
    pub full_name: String,
    pub phone: String,
}

impl ProfileForm {
    pub fn from_profile(p: &Profile) -> Self {
        Self {
            email: p.email.clone(),
            full_name: p.full_name.clone(),
            phone: p.phone.clone().unwrap_or_default(),
        }
    }

    pub fn to_payload(&self) -> Result<ProfilePayload, FieldErrors> {
        let mut v = Validator::new();
        v.required("full_name", &self.full_name, "Full name")
            .required("email", &self.email, "Email")
            .email("email", &self.email)
            .phone("phone", &self.phone);
        v.finish()?;
        Ok(ProfilePayload {
            email: self.email.trim().to_string(),
            full_name: self.full_name.trim().to_string(),
            phone: optional(&normalize_phone(&self.phone)),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PasswordForm {
    pub current_password: String,
    pub new_password: String,
    pub confirm_password: String,
}

impl PasswordForm {
    pub fn to_payload(&self) -> Result<PasswordPayload, FieldErrors> {
        let mut v = Validator::new();
        v.required("current_password", &self.current_password, "Current password")
            .required("new_password", &self.new_password, "New password")
            .min_len("new_password", &self.new_password, MIN_PASSWORD_LEN, "New password")
            .check(
                self.new_password.is_empty() || self.new_password != self.current_password,
                "new_password",
                "New password must differ from the current one",
            )
            .same_as(
                "confirm_password",
                &self.confirm_password,
                &self.new_password,
                "Passwords do not match",
            );
        v.finish()?;
        Ok(PasswordPayload {
            current_password: self.current_password.clone(),
            new_password: self.new_password.clone(),
            new_password_confirmation: self.confirm_password.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stock(id: u32, quantity: u32, status: ItemStatus) -> InventoryItem {
        InventoryItem {
            id,
            property_no: format!("PN-{}", id),
            name: "Monoblock chair".to_string(),
            description: None,
            category: "Furniture".to_string(),
            unit: "pcs".to_string(),
            quantity,
            unit_cost: 450.0,
            date_acquired: "2023-06-01".to_string(),
            status,
            location: None,
            school_id: None,
        }
    }

    #[test]
    fn test_empty_login_is_rejected() {
        let errors = LoginForm::default().validate().unwrap_err();
        assert!(errors.contains_key("username"));
        assert!(errors.contains_key("password"));

        let form = LoginForm {
            username: "custodian1".into(),
            password: "secret".into(),
        };
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_inventory_form_payload() {
        let form = InventoryForm {
            property_no: " pn-2024-010 ".into(),
            name: "Desktop Computer".into(),
            category: "ICT Equipment".into(),
            quantity: "4".into(),
            unit_cost: "35,000".into(),
            date_acquired: "2024-01-20".into(),
            ..Default::default()
        };
        let payload = form.to_payload().unwrap();
        assert_eq!(payload.property_no, "PN-2024-010");
        assert_eq!(payload.quantity, 4);
        assert_eq!(payload.unit_cost, 35000.0);
        assert_eq!(payload.description, None);
    }

    #[test]
    fn test_phone_sent_without_separators() {
        let personnel = PersonnelForm {
            employee_no: "EMP-0042".into(),
            first_name: "Jose".into(),
            last_name: "Rizal".into(),
            email: "jose@school.edu.ph".into(),
            phone: "0917-123-4567".into(),
            position: "Teacher I".into(),
            department: String::new(),
        };
        assert_eq!(personnel.to_payload().unwrap().phone.as_deref(), Some("09171234567"));

        let profile = ProfileForm {
            email: "jose@school.edu.ph".into(),
            full_name: "Jose Rizal".into(),
            phone: "+63 917 123 4567".into(),
        };
        assert_eq!(profile.to_payload().unwrap().phone.as_deref(), Some("+639171234567"));

        let blank = ProfileForm { phone: " - ".into(), ..profile };
        assert_eq!(blank.to_payload().unwrap().phone, None);
    }

    #[test]
    fn test_inventory_form_reports_each_bad_field() {
        let form = InventoryForm {
            quantity: "0".into(),
            unit_cost: "abc".into(),
            ..Default::default()
        };
        let errors = form.to_payload().unwrap_err();
        for field in ["property_no", "name", "category", "quantity", "unit_cost", "date_acquired"] {
            assert!(errors.contains_key(field), "missing error for {}", field);
        }
    }

    #[test]
    fn test_assignment_quantity_limited_by_stock() {
        let items = vec![stock(1, 5, ItemStatus::Available), stock(2, 9, ItemStatus::Condemned)];
        let form = AssignmentForm {
            item_id: "1".into(),
            teacher_id: "12".into(),
            quantity: "6".into(),
            date_assigned: "2024-08-01".into(),
            remarks: String::new(),
        };
        let errors = form.to_payload(&items).unwrap_err();
        assert_eq!(errors.get("quantity").map(String::as_str), Some("Only 5 pcs in stock"));

        let ok = AssignmentForm { quantity: "5".into(), ..form.clone() };
        assert_eq!(ok.to_payload(&items).unwrap().teacher_id, 12);

        let condemned = AssignmentForm { item_id: "2".into(), quantity: "1".into(), ..form };
        let errors = condemned.to_payload(&items).unwrap_err();
        assert!(errors.contains_key("item_id"));
    }

    #[test]
    fn test_condition_needs_remarks_when_damaged() {
        let form = ConditionForm {
            condition: Condition::Damaged,
            remarks: " ".into(),
        };
        assert!(form.to_payload().unwrap_err().contains_key("remarks"));

        let form = ConditionForm {
            condition: Condition::Good,
            remarks: String::new(),
        };
        assert_eq!(form.to_payload().unwrap().remarks, None);
    }

    #[test]
    fn test_account_password_rules_differ_for_edit() {
        let form = AccountForm {
            username: "acct.maria".into(),
            email: "maria@school.edu.ph".into(),
            full_name: "Maria Santos".into(),
            user_type: Role::Accounting,
            ..Default::default()
        };
        assert!(form.to_payload(true).unwrap_err().contains_key("password"));
        assert_eq!(form.to_payload(false).unwrap().password, None);

        let mismatched = AccountForm {
            password: "longenough1".into(),
            password_confirm: "longenough2".into(),
            ..form
        };
        assert!(mismatched.to_payload(false).unwrap_err().contains_key("password_confirm"));
    }

    #[test]
    fn test_password_change_must_differ() {
        let form = PasswordForm {
            current_password: "samepassword".into(),
            new_password: "samepassword".into(),
            confirm_password: "samepassword".into(),
        };
        assert!(form.to_payload().unwrap_err().contains_key("new_password"));
    }

    #[test]
    fn test_school_code_digits_only() {
        let form = SchoolForm {
            school_code: "30A123".into(),
            name: "San Isidro NHS".into(),
            ..Default::default()
        };
        assert!(form.to_payload().unwrap_err().contains_key("school_code"));
    }
}
