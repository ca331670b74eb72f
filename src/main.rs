#![allow(warnings)]
//! Far Away Frontend Entry Point

mod error;
mod models;
mod confirm;
mod packing_list;
mod stats;
mod sort;
mod draft;
mod config;
mod logger;
mod store;
mod context;
mod components;
mod app;

use app::App;
use config::AppConfig;
use leptos::prelude::*;
use log::LevelFilter;

fn main() {
    console_error_panic_hook::set_once();
    logger::init(LevelFilter::Info);

    let config = AppConfig::load();
    log::set_max_level(config.level_filter());

    mount_to_body(move || view! { <App config=config /> });
}
