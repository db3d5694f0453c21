//! Sidebar Navigation Model
//!
//! Per-role menu entries and active-route matching.

use crate::models::Role;
use crate::routes::{Page, Route};

#[derive(Debug, Clone, PartialEq)]
pub struct NavLink {
    pub label: &'static str,
    pub route: Route,
}

#[derive(Debug, Clone, PartialEq)]
pub enum NavEntry {
    Link(NavLink),
    Group {
        label: &'static str,
        links: Vec<NavLink>,
    },
}

fn link(label: &'static str, role: Role, page: Page) -> NavLink {
    NavLink {
        label,
        route: Route::Page(role, page),
    }
}

/// Sidebar entries for a role, in display order
pub fn menu(role: Role) -> Vec<NavEntry> {
    let r = role;
    match role {
        Role::PropertyCustodian => vec![
            NavEntry::Link(link("Dashboard", r, Page::Dashboard)),
            NavEntry::Group {
                label: "Inventory",
                links: vec![
                    link("All Items", r, Page::Inventory),
                    link("Add Item", r, Page::InventoryNew),
                ],
            },
            NavEntry::Group {
                label: "Assignments",
                links: vec![
                    link("Assigned Items", r, Page::Assignments),
                    link("Assign Item", r, Page::AssignItem),
                ],
            },
            NavEntry::Link(link("Reports", r, Page::Reports)),
            NavEntry::Link(link("Profile", r, Page::Profile)),
        ],
        Role::Teacher => vec![
            NavEntry::Link(link("Dashboard", r, Page::Dashboard)),
            NavEntry::Link(link("My Items", r, Page::MyItems)),
            NavEntry::Link(link("Profile", r, Page::Profile)),
        ],
        Role::IctAdmin => vec![
            NavEntry::Link(link("Dashboard", r, Page::Dashboard)),
            NavEntry::Group {
                label: "User Management",
                links: vec![
                    link("Accounts", r, Page::Accounts),
                    link("Personnel", r, Page::Personnel),
                ],
            },
            NavEntry::Link(link("Schools", r, Page::Schools)),
            NavEntry::Link(link("Backups", r, Page::Backups)),
            NavEntry::Link(link("Profile", r, Page::Profile)),
        ],
        Role::Accounting => vec![
            NavEntry::Link(link("Dashboard", r, Page::Dashboard)),
            NavEntry::Group {
                label: "Reports",
                links: vec![
                    link("Inventory Report", r, Page::InventoryReport),
                    link("Valuation", r, Page::Valuation),
                ],
            },
            NavEntry::Link(link("Profile", r, Page::Profile)),
        ],
    }
}

/// True when `prefix` equals `path` or is a whole-segment prefix of it
fn is_segment_prefix(prefix: &str, path: &str) -> bool {
    path == prefix
        || (path.starts_with(prefix) && path[prefix.len()..].starts_with('/'))
}

/// The single active link: exact path match, else the longest segment prefix
pub fn active_route(entries: &[NavEntry], current: &Route) -> Option<Route> {
    let current_path = current.path();
    let all_links = entries.iter().flat_map(|entry| match entry {
        NavEntry::Link(l) => std::slice::from_ref(l).iter(),
        NavEntry::Group { links, .. } => links.iter(),
    });

    all_links
        .map(|l| (l.route, l.route.path()))
        .filter(|(_, path)| is_segment_prefix(path, &current_path))
        .max_by_key(|(_, path)| path.len())
        .map(|(route, _)| route)
}

/// Label of the group that holds the active link, if the link is grouped
pub fn active_group(entries: &[NavEntry], current: &Route) -> Option<&'static str> {
    let active = active_route(entries, current)?;
    entries.iter().find_map(|entry| match entry {
        NavEntry::Group { label, links } if links.iter().any(|l| l.route == active) => Some(*label),
        _ => None,
    })
}

/// Open or close a group in the expanded-group list
pub fn toggle_group(open: &mut Vec<String>, label: &str) {
    if let Some(pos) = open.iter().position(|g| g == label) {
        open.remove(pos);
    } else {
        open.push(label.to_string());
    }
}

/// Make sure the group containing the active link is expanded
pub fn ensure_open(open: &mut Vec<String>, label: Option<&str>) {
    if let Some(label) = label {
        if !open.iter().any(|g| g == label) {
            open.push(label.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_match_wins() {
        let entries = menu(Role::PropertyCustodian);
        let current = Route::Page(Role::PropertyCustodian, Page::InventoryNew);
        assert_eq!(active_route(&entries, &current), Some(current));
    }

    #[test]
    fn test_sub_page_activates_parent_link() {
        let entries = menu(Role::PropertyCustodian);
        let current = Route::Page(Role::PropertyCustodian, Page::InventoryEdit(12));
        assert_eq!(
            active_route(&entries, &current),
            Some(Route::Page(Role::PropertyCustodian, Page::Inventory))
        );
        assert_eq!(active_group(&entries, &current), Some("Inventory"));
    }

    #[test]
    fn test_prefix_requires_segment_boundary() {
        assert!(is_segment_prefix("/custodian/inventory", "/custodian/inventory/3/edit"));
        assert!(!is_segment_prefix("/custodian/inventory", "/custodian/inventory-x"));
        assert!(is_segment_prefix("/ict/schools", "/ict/schools"));
    }

    #[test]
    fn test_ungrouped_active_has_no_group() {
        let entries = menu(Role::IctAdmin);
        let current = Route::Page(Role::IctAdmin, Page::Backups);
        assert_eq!(active_route(&entries, &current), Some(current));
        assert_eq!(active_group(&entries, &current), None);
    }

    #[test]
    fn test_other_role_route_matches_nothing() {
        let entries = menu(Role::Teacher);
        let current = Route::Page(Role::IctAdmin, Page::Dashboard);
        assert_eq!(active_route(&entries, &current), None);
    }

    #[test]
    fn test_group_toggle_and_ensure_open() {
        let mut open = Vec::new();
        toggle_group(&mut open, "Reports");
        assert_eq!(open, vec!["Reports".to_string()]);
        ensure_open(&mut open, Some("Reports"));
        assert_eq!(open.len(), 1);
        toggle_group(&mut open, "Reports");
        assert!(open.is_empty());
        ensure_open(&mut open, None);
        assert!(open.is_empty());
    }
}
