//! Database Backups Page

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_datatable::{apply, Paginator, SearchBox, SortDir, SortHeader, TableState};

use crate::api;
use crate::components::{DeleteConfirmButton, EmptyRow, PageHeader};
use crate::config::DEFAULT_PAGE_SIZE;
use crate::context::use_app;
use crate::export;
use crate::format;
use crate::models::BackupRecord;

#[component]
pub fn BackupsPage() -> impl IntoView {
    let ctx = use_app();
    let (backups, set_backups) = signal(Vec::<BackupRecord>::new());
    let (loading, set_loading) = signal(true);
    let (creating, set_creating) = signal(false);
    let table = TableState::new(DEFAULT_PAGE_SIZE).sorted_by("created_at", SortDir::Desc);

    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        set_loading.set(true);
        spawn_local(async move {
            match api::list_backups().await {
                Ok(list) => set_backups.set(list),
                Err(e) => ctx.report_error(&e),
            }
            set_loading.set(false);
        });
    });

    let page = Memo::new(move |_| {
        let query = table.query();
        backups.with(|all| apply(all, &query, |_| true))
    });

    let create = move |_| {
        if creating.get_untracked() {
            return;
        }
        set_creating.set(true);
        spawn_local(async move {
            match api::create_backup().await {
                Ok(message) => {
                    web_sys::console::log_1(&"[Backup] Created".into());
                    ctx.success(message.unwrap_or_else(|| "Backup created".to_string()));
                    ctx.reload();
                }
                Err(e) => ctx.report_error(&e),
            }
            set_creating.set(false);
        });
    };

    let download = move |id: u32, filename: String| {
        spawn_local(async move {
            match api::download_backup(id).await {
                Ok(blob) => {
                    if let Err(e) = export::save_blob(&blob, &filename) {
                        web_sys::console::error_1(&format!("[Backup] {}", e).into());
                        ctx.error(format!("Download failed: {}", e));
                    }
                }
                Err(e) => ctx.report_error(&e),
            }
        });
    };

    let delete = move |id: u32| {
        spawn_local(async move {
            match api::delete_backup(id).await {
                Ok(()) => {
                    ctx.success("Backup deleted");
                    ctx.reload();
                }
                Err(e) => ctx.report_error(&e),
            }
        });
    };

    view! {
        <div class="page">
            <PageHeader title="Backups">
                <button type="button" class="btn btn-primary" disabled=move || creating.get() on:click=create>
                    {move || if creating.get() { "Creating backup..." } else { "+ Create Backup" }}
                </button>
            </PageHeader>

            <div class="table-toolbar">
                <SearchBox state=table placeholder="Search backups..." />
            </div>

            <table class="data-table">
                <thead>
                    <tr>
                        <SortHeader state=table column="filename" label="File" />
                        <SortHeader state=table column="size" label="Size" />
                        <SortHeader state=table column="created_at" label="Created" />
                        <th>"Created By"</th>
                        <th>"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        if loading.get() {
                            return view! { <EmptyRow colspan=5 message="Loading..." /> }.into_any();
                        }
                        let rows = page.with(|p| p.rows.clone());
                        if rows.is_empty() {
                            return view! { <EmptyRow colspan=5 message="No backups yet" /> }.into_any();
                        }
                        rows.into_iter().map(|b| {
                            let id = b.id;
                            let filename = b.filename.clone();
                            view! {
                                <tr>
                                    <td class="mono">{b.filename.clone()}</td>
                                    <td class="num">{format::file_size(b.size_bytes)}</td>
                                    <td>{format::datetime(&b.created_at)}</td>
                                    <td>{b.created_by.clone().unwrap_or_else(|| "-".to_string())}</td>
                                    <td class="row-actions">
                                        <button
                                            type="button"
                                            class="btn btn-sm"
                                            on:click=move |_| download(id, filename.clone())
                                        >
                                            "Download"
                                        </button>
                                        <DeleteConfirmButton on_confirm=move |_: ()| delete(id) />
                                    </td>
                                </tr>
                            }
                        }).collect_view().into_any()
                    }}
                </tbody>
            </table>

            <Paginator state=table page=page />
        </div>
    }
}
