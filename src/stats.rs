//! Dashboard Aggregation
//!
//! Summaries computed client-side from the fetched lists.

use std::collections::HashMap;

use chrono::DateTime;

use crate::models::{Account, AssignedItem, BackupRecord, InventoryItem, ItemStatus, Role};

/// Items grouped under one label
#[derive(Debug, Clone, PartialEq)]
pub struct GroupTotal {
    pub label: String,
    pub count: usize,
    pub value: f64,
}

/// Group by `key`; sorted by value (then count, then label)
pub fn group_by<F>(items: &[InventoryItem], key: F) -> Vec<GroupTotal>
where
    F: Fn(&InventoryItem) -> String,
{
    let mut groups: HashMap<String, GroupTotal> = HashMap::new();
    for item in items {
        let label = key(item);
        let entry = groups.entry(label.clone()).or_insert(GroupTotal {
            label,
            count: 0,
            value: 0.0,
        });
        entry.count += 1;
        entry.value += item.total_cost();
    }
    let mut out: Vec<GroupTotal> = groups.into_values().collect();
    out.sort_by(|a, b| {
        b.value
            .partial_cmp(&a.value)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then(b.count.cmp(&a.count))
            .then(a.label.cmp(&b.label))
    });
    out
}

pub fn by_category(items: &[InventoryItem]) -> Vec<GroupTotal> {
    group_by(items, |i| {
        let c = i.category.trim();
        if c.is_empty() {
            "Uncategorized".to_string()
        } else {
            c.to_string()
        }
    })
}

/// One entry per status in declaration order, zeros included
pub fn by_status(items: &[InventoryItem]) -> Vec<GroupTotal> {
    ItemStatus::ALL
        .iter()
        .map(|status| {
            let matching = items.iter().filter(|i| i.status == *status);
            GroupTotal {
                label: status.label().to_string(),
                count: matching.clone().count(),
                value: matching.map(InventoryItem::total_cost).sum(),
            }
        })
        .collect()
}

/// Newest acquisitions first
pub fn recent_acquisitions(items: &[InventoryItem], n: usize) -> Vec<InventoryItem> {
    let mut sorted = items.to_vec();
    sorted.sort_by(|a, b| b.date_acquired.cmp(&a.date_acquired).then(b.id.cmp(&a.id)));
    sorted.truncate(n);
    sorted
}

/// Highest total cost first
pub fn top_by_value(items: &[InventoryItem], n: usize) -> Vec<InventoryItem> {
    let mut sorted = items.to_vec();
    sorted.sort_by(|a, b| {
        b.total_cost()
            .partial_cmp(&a.total_cost())
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    sorted.truncate(n);
    sorted
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CustodianSummary {
    pub items: usize,
    pub units: u64,
    pub total_value: f64,
    pub available: usize,
    pub assigned: usize,
    pub under_repair: usize,
    pub written_off: usize,
    pub assignments: usize,
}

pub fn custodian_summary(items: &[InventoryItem], assigned: &[AssignedItem]) -> CustodianSummary {
    let count = |s: ItemStatus| items.iter().filter(|i| i.status == s).count();
    CustodianSummary {
        items: items.len(),
        units: items.iter().map(|i| i.quantity as u64).sum(),
        total_value: items.iter().map(InventoryItem::total_cost).sum(),
        available: count(ItemStatus::Available),
        assigned: count(ItemStatus::Assigned),
        under_repair: count(ItemStatus::UnderRepair),
        written_off: items.iter().filter(|i| i.status.is_written_off()).count(),
        assignments: assigned.len(),
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FacultySummary {
    pub items: usize,
    pub units: u64,
    pub good: usize,
    pub needs_attention: usize,
}

pub fn faculty_summary(assigned: &[AssignedItem]) -> FacultySummary {
    FacultySummary {
        items: assigned.len(),
        units: assigned.iter().map(|a| a.quantity as u64).sum(),
        good: assigned.iter().filter(|a| !a.condition.needs_attention()).count(),
        needs_attention: assigned.iter().filter(|a| a.condition.needs_attention()).count(),
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct IctSummary {
    pub accounts: usize,
    pub active_accounts: usize,
    pub by_role: Vec<(Role, usize)>,
    pub personnel: usize,
    pub schools: usize,
    pub backups: usize,
    pub backup_bytes: u64,
    pub last_backup: Option<String>,
}

pub fn ict_summary(
    accounts: &[Account],
    personnel: usize,
    schools: usize,
    backups: &[BackupRecord],
) -> IctSummary {
    IctSummary {
        accounts: accounts.len(),
        active_accounts: accounts.iter().filter(|a| a.is_active).count(),
        by_role: Role::ALL
            .iter()
            .map(|r| (*r, accounts.iter().filter(|a| a.user_type == *r).count()))
            .collect(),
        personnel,
        schools,
        backups: backups.len(),
        backup_bytes: backups.iter().map(|b| b.size_bytes).sum(),
        last_backup: latest_timestamp(backups.iter().map(|b| b.created_at.as_str())),
    }
}

/// Chronologically latest RFC 3339 timestamp; unparseable values rank last
fn latest_timestamp<'a>(stamps: impl Iterator<Item = &'a str>) -> Option<String> {
    stamps
        .max_by_key(|s| DateTime::parse_from_rfc3339(s).ok())
        .map(str::to_string)
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FinanceSummary {
    pub total_value: f64,
    pub in_service_value: f64,
    pub written_off_value: f64,
    pub by_category: Vec<GroupTotal>,
}

pub fn finance_summary(items: &[InventoryItem]) -> FinanceSummary {
    let (written_off, in_service): (Vec<&InventoryItem>, Vec<&InventoryItem>) =
        items.iter().partition(|i| i.status.is_written_off());
    FinanceSummary {
        total_value: items.iter().map(InventoryItem::total_cost).sum(),
        in_service_value: in_service.iter().map(|i| i.total_cost()).sum(),
        written_off_value: written_off.iter().map(|i| i.total_cost()).sum(),
        by_category: by_category(items),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Condition;

    fn item(id: u32, category: &str, qty: u32, cost: f64, status: ItemStatus, date: &str) -> InventoryItem {
        InventoryItem {
            id,
            property_no: format!("PN-{}", id),
            name: format!("Item {}", id),
            description: None,
            category: category.to_string(),
            unit: "pcs".to_string(),
            quantity: qty,
            unit_cost: cost,
            date_acquired: date.to_string(),
            status,
            location: None,
            school_id: None,
        }
    }

    fn sample() -> Vec<InventoryItem> {
        vec![
            item(1, "Furniture", 30, 500.0, ItemStatus::Available, "2023-01-10"),
            item(2, "ICT Equipment", 2, 30000.0, ItemStatus::Assigned, "2024-02-01"),
            item(3, "Furniture", 5, 1200.0, ItemStatus::Condemned, "2020-07-15"),
            item(4, "", 1, 800.0, ItemStatus::UnderRepair, "2024-02-01"),
            item(5, "ICT Equipment", 1, 15000.0, ItemStatus::Lost, "2022-11-30"),
        ]
    }

    #[test]
    fn test_by_category_sorted_by_value() {
        let groups = by_category(&sample());
        let labels: Vec<&str> = groups.iter().map(|g| g.label.as_str()).collect();
        assert_eq!(labels, vec!["ICT Equipment", "Furniture", "Uncategorized"]);
        assert_eq!(groups[0].count, 2);
        assert_eq!(groups[0].value, 75000.0);
        assert_eq!(groups[1].value, 21000.0);
    }

    #[test]
    fn test_by_status_includes_zero_groups() {
        let items = vec![item(1, "Furniture", 1, 10.0, ItemStatus::Available, "2024-01-01")];
        let groups = by_status(&items);
        assert_eq!(groups.len(), ItemStatus::ALL.len());
        assert_eq!(groups[0].count, 1);
        assert!(groups[1..].iter().all(|g| g.count == 0));
    }

    #[test]
    fn test_custodian_summary() {
        let s = custodian_summary(&sample(), &[]);
        assert_eq!(s.items, 5);
        assert_eq!(s.units, 39);
        assert_eq!(s.total_value, 96800.0);
        assert_eq!(s.available, 1);
        assert_eq!(s.assigned, 1);
        assert_eq!(s.under_repair, 1);
        assert_eq!(s.written_off, 2);
    }

    #[test]
    fn test_recent_and_top() {
        let recent = recent_acquisitions(&sample(), 2);
        assert_eq!(recent.iter().map(|i| i.id).collect::<Vec<_>>(), vec![4, 2]);
        let top = top_by_value(&sample(), 1);
        assert_eq!(top[0].id, 2);
    }

    #[test]
    fn test_finance_split() {
        let f = finance_summary(&sample());
        assert_eq!(f.written_off_value, 21000.0);
        assert_eq!(f.in_service_value, 75800.0);
        assert_eq!(f.total_value, f.in_service_value + f.written_off_value);
    }

    #[test]
    fn test_faculty_summary() {
        let assigned = vec![
            AssignedItem {
                id: 1,
                item_id: 1,
                property_no: "PN-1".into(),
                item_name: "Chair".into(),
                teacher_id: 3,
                teacher_name: "Ana Reyes".into(),
                quantity: 25,
                date_assigned: "2024-06-01".into(),
                condition: Condition::Good,
                remarks: None,
            },
            AssignedItem {
                id: 2,
                item_id: 2,
                property_no: "PN-2".into(),
                item_name: "Laptop".into(),
                teacher_id: 3,
                teacher_name: "Ana Reyes".into(),
                quantity: 1,
                date_assigned: "2024-06-01".into(),
                condition: Condition::NeedsRepair,
                remarks: Some("Broken hinge".into()),
            },
        ];
        let s = faculty_summary(&assigned);
        assert_eq!((s.items, s.units, s.good, s.needs_attention), (2, 26, 1, 1));
    }

    #[test]
    fn test_ict_summary_last_backup() {
        let backups = vec![
            BackupRecord {
                id: 1,
                filename: "a.sql".into(),
                size_bytes: 100,
                created_at: "2024-05-01T10:00:00Z".into(),
                created_by: None,
            },
            BackupRecord {
                id: 2,
                filename: "b.sql".into(),
                size_bytes: 300,
                created_at: "2024-06-01T09:00:00Z".into(),
                created_by: None,
            },
        ];
        let s = ict_summary(&[], 4, 2, &backups);
        assert_eq!(s.last_backup.as_deref(), Some("2024-06-01T09:00:00Z"));
        assert_eq!(s.backup_bytes, 400);
        assert_eq!(s.by_role.len(), 4);
    }

    #[test]
    fn test_latest_timestamp_across_offsets() {
        // 08:00+08:00 is 00:00Z, earlier than 01:00Z
        let stamps = ["2024-06-01T08:00:00+08:00", "2024-06-01T01:00:00Z", "garbage"];
        assert_eq!(
            latest_timestamp(stamps.into_iter()).as_deref(),
            Some("2024-06-01T01:00:00Z")
        );
        assert_eq!(latest_timestamp(["not a date"].into_iter()).as_deref(), Some("not a date"));
        assert_eq!(latest_timestamp(std::iter::empty()), None);
    }
}
