// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use eframe::egui::{IconData, ViewportBuilder};
use quote_scrape::{
    loge,
    config::state::GuiState,
    gui,
    log::{self, LogOptions},
};

const ICON_SIZE: u32 = 32;

/// Small rising bar chart on a dark tile.
fn app_icon() -> IconData {
    let n = ICON_SIZE;
    let mut rgba = Vec::with_capacity((n * n * 4) as usize);
    for y in 0..n {
        for x in 0..n {
            // four bars, each taller than the last
            let bar = x / 8;
            let in_bar = x % 8 >= 2 && x % 8 <= 6;
            let top = n - 6 - bar * 6;
            let px = if in_bar && y >= top && y < n - 3 {
                [0x3C, 0xB4, 0x4B, 0xFF]
            } else {
                [0x20, 0x24, 0x2A, 0xFF]
            };
            rgba.extend_from_slice(&px);
        }
    }
    IconData { rgba, width: n, height: n }
}

fn main() {
    log::init(&LogOptions::default());

    let gs = GuiState::default();
    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_inner_size([gs.window_w as f32, gs.window_h as f32])
            .with_icon(app_icon()),
        ..Default::default()
    };

    if let Err(e) = gui::run(options) {
        loge!("GUI failed: {}", e);
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
