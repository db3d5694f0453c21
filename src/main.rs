//! School Property Inventory Frontend Entry Point

mod config;
mod error;
mod models;
mod session;
mod api;
mod routes;
mod nav;
mod validation;
mod forms;
mod format;
mod export;
mod stats;
mod chart;
mod store;
mod context;
mod components;
mod pages;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
