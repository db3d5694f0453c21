//! Routes
//!
//! Hash-based route table and the role-based route guard.

use crate::models::Role;
use crate::session::Session;

/// A page inside a role's area
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Dashboard,
    Inventory,
    InventoryNew,
    InventoryEdit(u32),
    Assignments,
    AssignItem,
    Reports,
    MyItems,
    Accounts,
    Personnel,
    Schools,
    Backups,
    InventoryReport,
    Valuation,
    Profile,
}

impl Page {
    /// Path below the role prefix
    fn sub_path(&self) -> String {
        match self {
            Page::Dashboard => "dashboard".to_string(),
            Page::Inventory => "inventory".to_string(),
            Page::InventoryNew => "inventory/new".to_string(),
            Page::InventoryEdit(id) => format!("inventory/{}/edit", id),
            Page::Assignments => "assignments".to_string(),
            Page::AssignItem => "assignments/new".to_string(),
            Page::Reports => "reports".to_string(),
            Page::MyItems => "items".to_string(),
            Page::Accounts => "accounts".to_string(),
            Page::Personnel => "personnel".to_string(),
            Page::Schools => "schools".to_string(),
            Page::Backups => "backups".to_string(),
            Page::InventoryReport => "inventory".to_string(),
            Page::Valuation => "valuation".to_string(),
            Page::Profile => "profile".to_string(),
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Page::Dashboard => "Dashboard",
            Page::Inventory => "Inventory",
            Page::InventoryNew => "Add Inventory Item",
            Page::InventoryEdit(_) => "Edit Inventory Item",
            Page::Assignments => "Assigned Items",
            Page::AssignItem => "Assign Item",
            Page::Reports => "Reports",
            Page::MyItems => "My Items",
            Page::Accounts => "Accounts",
            Page::Personnel => "Personnel",
            Page::Schools => "Schools",
            Page::Backups => "Backups",
            Page::InventoryReport => "Inventory Report",
            Page::Valuation => "Valuation",
            Page::Profile => "Profile",
        }
    }
}

/// Parse the path segments after the role prefix for that role
fn parse_page(role: Role, segments: &[&str]) -> Option<Page> {
    let page = match (role, segments) {
        (_, [] | ["dashboard"]) => Page::Dashboard,
        (_, ["profile"]) => Page::Profile,

        (Role::PropertyCustodian, ["inventory"]) => Page::Inventory,
        (Role::PropertyCustodian, ["inventory", "new"]) => Page::InventoryNew,
        (Role::PropertyCustodian, ["inventory", id, "edit"]) => Page::InventoryEdit(id.parse().ok()?),
        (Role::PropertyCustodian, ["assignments"]) => Page::Assignments,
        (Role::PropertyCustodian, ["assignments", "new"]) => Page::AssignItem,
        (Role::PropertyCustodian, ["reports"]) => Page::Reports,

        (Role::Teacher, ["items"]) => Page::MyItems,

        (Role::IctAdmin, ["accounts"]) => Page::Accounts,
        (Role::IctAdmin, ["personnel"]) => Page::Personnel,
        (Role::IctAdmin, ["schools"]) => Page::Schools,
        (Role::IctAdmin, ["backups"]) => Page::Backups,

        (Role::Accounting, ["inventory"]) => Page::InventoryReport,
        (Role::Accounting, ["valuation"]) => Page::Valuation,

        _ => return None,
    };
    Some(page)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Login,
    Unauthorized,
    Page(Role, Page),
}

impl Route {
    /// Parse a path such as `/custodian/inventory/4/edit`; `None` if unknown
    pub fn parse(path: &str) -> Option<Route> {
        let path = path.trim_start_matches('#');
        let path = path.split(['?', '#']).next().unwrap_or("");
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            ["login"] => Some(Route::Login),
            ["unauthorized"] => Some(Route::Unauthorized),
            [prefix, rest @ ..] => {
                let role = Role::from_prefix(prefix)?;
                parse_page(role, rest).map(|page| Route::Page(role, page))
            }
            [] => None,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Login => "/login".to_string(),
            Route::Unauthorized => "/unauthorized".to_string(),
            Route::Page(role, page) => format!("/{}/{}", role.prefix(), page.sub_path()),
        }
    }

    /// Value for `location.hash`
    pub fn hash(&self) -> String {
        format!("#{}", self.path())
    }

    pub fn title(&self) -> &'static str {
        match self {
            Route::Login => "Sign In",
            Route::Unauthorized => "Unauthorized",
            Route::Page(_, page) => page.title(),
        }
    }
}

/// Landing page for a role
pub fn home(role: Role) -> Route {
    Route::Page(role, Page::Dashboard)
}

/// Outcome of checking a route against the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Guard {
    Allow(Route),
    Redirect(Route),
}

/// Decide whether `route` may render for `session`
pub fn guard(route: Option<Route>, session: Option<&Session>) -> Guard {
    match (route, session) {
        (None, Some(s)) => Guard::Redirect(home(s.role)),
        (None, None) => Guard::Redirect(Route::Login),
        (Some(Route::Login), Some(s)) => Guard::Redirect(home(s.role)),
        (Some(Route::Login), None) => Guard::Allow(Route::Login),
        (Some(Route::Unauthorized), _) => Guard::Allow(Route::Unauthorized),
        (Some(Route::Page(_, _)), None) => Guard::Redirect(Route::Login),
        (Some(route @ Route::Page(role, _)), Some(s)) => {
            if role == s.role {
                Guard::Allow(route)
            } else {
                Guard::Redirect(Route::Unauthorized)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(role: Role) -> Session {
        Session {
            access_token: "t".to_string(),
            role,
        }
    }

    #[test]
    fn test_parse_role_pages() {
        assert_eq!(
            Route::parse("#/custodian/inventory/42/edit"),
            Some(Route::Page(Role::PropertyCustodian, Page::InventoryEdit(42)))
        );
        assert_eq!(
            Route::parse("/finance/inventory"),
            Some(Route::Page(Role::Accounting, Page::InventoryReport))
        );
        assert_eq!(
            Route::parse("/ict"),
            Some(Route::Page(Role::IctAdmin, Page::Dashboard))
        );
        assert_eq!(Route::parse("/login?next=x"), Some(Route::Login));
    }

    #[test]
    fn test_parse_rejects_pages_outside_role() {
        assert_eq!(Route::parse("/faculty/backups"), None);
        assert_eq!(Route::parse("/custodian/inventory/abc/edit"), None);
        assert_eq!(Route::parse("/admin/dashboard"), None);
        assert_eq!(Route::parse(""), None);
    }

    #[test]
    fn test_path_round_trip() {
        let routes = [
            Route::Login,
            Route::Unauthorized,
            Route::Page(Role::PropertyCustodian, Page::AssignItem),
            Route::Page(Role::PropertyCustodian, Page::InventoryEdit(7)),
            Route::Page(Role::Teacher, Page::MyItems),
            Route::Page(Role::IctAdmin, Page::Backups),
            Route::Page(Role::Accounting, Page::Valuation),
        ];
        for route in routes {
            assert_eq!(Route::parse(&route.hash()), Some(route));
        }
    }

    #[test]
    fn test_guard_without_session() {
        let dashboard = Route::parse("/custodian/dashboard");
        assert_eq!(guard(dashboard, None), Guard::Redirect(Route::Login));
        assert_eq!(guard(Some(Route::Login), None), Guard::Allow(Route::Login));
        assert_eq!(guard(None, None), Guard::Redirect(Route::Login));
    }

    #[test]
    fn test_guard_with_session() {
        let teacher = session(Role::Teacher);
        assert_eq!(
            guard(Some(Route::Login), Some(&teacher)),
            Guard::Redirect(home(Role::Teacher))
        );
        assert_eq!(
            guard(Route::parse("/ict/backups"), Some(&teacher)),
            Guard::Redirect(Route::Unauthorized)
        );
        let mine = Route::parse("/faculty/items");
        assert_eq!(guard(mine, Some(&teacher)), Guard::Allow(mine.unwrap()));
        assert_eq!(guard(None, Some(&teacher)), Guard::Redirect(home(Role::Teacher)));
        assert_eq!(
            guard(Some(Route::Unauthorized), Some(&teacher)),
            Guard::Allow(Route::Unauthorized)
        );
    }
}
