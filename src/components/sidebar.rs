//! Sidebar Component
//!
//! Role-specific navigation with collapsible groups and active-route highlighting.

use leptos::prelude::*;

use crate::context::use_app;
use crate::nav::{self, NavEntry, NavLink};
use crate::routes::Route;
use crate::store::{use_app_store, AppStateStoreFields};

/// Single navigation link
#[component]
fn NavItem(link: NavLink, active: Memo<Option<Route>>) -> impl IntoView {
    let ctx = use_app();
    let route = link.route;
    let is_active = move || active.get() == Some(route);

    view! {
        <a
            href=route.hash()
            class=move || if is_active() { "nav-link active" } else { "nav-link" }
            on:click=move |ev| {
                ev.prevent_default();
                ctx.navigate(route);
            }
        >
            {link.label}
        </a>
    }
}

/// Collapsible group of links
#[component]
fn NavGroup(label: &'static str, links: Vec<NavLink>, active: Memo<Option<Route>>) -> impl IntoView {
    let store = use_app_store();
    let is_open = move || store.open_groups().with(|open| open.iter().any(|g| g == label));
    let contains_active = {
        let routes: Vec<Route> = links.iter().map(|l| l.route).collect();
        move || active.get().is_some_and(|a| routes.contains(&a))
    };

    view! {
        <div class="nav-group">
            <button
                type="button"
                class=move || if contains_active() { "nav-group-toggle has-active" } else { "nav-group-toggle" }
                on:click=move |_| store.open_groups().update(|open| nav::toggle_group(open, label))
            >
                <span>{label}</span>
                <span class="nav-group-arrow">{move || if is_open() { "▼" } else { "▶" }}</span>
            </button>
            <Show when=is_open>
                <div class="nav-group-links">
                    {links.clone().into_iter().map(|link| view! { <NavItem link=link active=active /> }).collect_view()}
                </div>
            </Show>
        </div>
    }
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_app();
    let store = use_app_store();

    let entries = Memo::new(move |_| ctx.role().map(nav::menu).unwrap_or_default());
    let active = Memo::new(move |_| {
        store
            .route()
            .get()
            .and_then(|route| nav::active_route(&entries.get(), &route))
    });

    // Expand the group holding the active link whenever the route changes
    Effect::new(move |_| {
        let Some(route) = store.route().get() else { return };
        let group = entries.with(|e| nav::active_group(e, &route));
        if group.is_some() {
            store.open_groups().update(|open| nav::ensure_open(open, group));
        }
    });

    view! {
        <nav class=move || if store.sidebar_collapsed().get() { "sidebar collapsed" } else { "sidebar" }>
            <div class="sidebar-brand">"School Property Inventory"</div>
            <div class="sidebar-role">{move || ctx.role().map(|r| r.label()).unwrap_or("")}</div>
            {move || entries.get().into_iter().map(|entry| match entry {
                NavEntry::Link(link) => view! { <NavItem link=link active=active /> }.into_any(),
                NavEntry::Group { label, links } => {
                    view! { <NavGroup label=label links=links active=active /> }.into_any()
                }
            }).collect_view()}
        </nav>
    }
}
