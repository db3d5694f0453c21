//! ICT Administrator Dashboard

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::{BarChart, PageHeader, StatCard};
use crate::context::use_app;
use crate::format;
use crate::stats::{self, IctSummary};

#[component]
pub fn IctDashboard() -> impl IntoView {
    let ctx = use_app();
    let summary = RwSignal::new(IctSummary::default());
    let (loading, set_loading) = signal(true);

    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        set_loading.set(true);
        spawn_local(async move {
            let (accounts, personnel, schools, backups) = futures::join!(
                api::list_accounts(),
                api::list_personnel(),
                api::list_schools(),
                api::list_backups()
            );
            match (accounts, personnel, schools, backups) {
                (Ok(accounts), Ok(personnel), Ok(schools), Ok(backups)) => {
                    summary.set(stats::ict_summary(&accounts, personnel.len(), schools.len(), &backups));
                }
                (Err(e), ..) | (_, Err(e), ..) | (_, _, Err(e), _) | (.., Err(e)) => ctx.report_error(&e),
            }
            set_loading.set(false);
        });
    });

    let stat = move |f: fn(&IctSummary) -> String| {
        Signal::derive(move || if loading.get() { "…".to_string() } else { summary.with(f) })
    };
    let role_chart = Signal::derive(move || {
        summary.with(|s| {
            s.by_role
                .iter()
                .map(|(role, n)| (role.label().to_string(), *n as f64))
                .collect::<Vec<_>>()
        })
    });

    view! {
        <div class="page dashboard">
            <PageHeader title="Dashboard" />

            <div class="stat-grid">
                <StatCard label="User Accounts" value=stat(|s| s.accounts.to_string()) />
                <StatCard label="Active Accounts" value=stat(|s| s.active_accounts.to_string()) tone="stat-success" />
                <StatCard label="Personnel" value=stat(|s| s.personnel.to_string()) />
                <StatCard label="Schools" value=stat(|s| s.schools.to_string()) />
                <StatCard label="Backups" value=stat(|s| format!("{} ({})", s.backups, format::file_size(s.backup_bytes))) />
                <StatCard
                    label="Last Backup"
                    value=stat(|s| s.last_backup.as_deref().map(format::datetime).unwrap_or_else(|| "Never".to_string()))
                    tone="stat-primary"
                />
            </div>

            <BarChart title="Accounts by Role" data=role_chart />
        </div>
    }
}
