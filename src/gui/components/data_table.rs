// src/gui/components/data_table.rs
//
// Draws the quote table. Purely a view over App::records.

use eframe::egui::{self, Align, Layout, RichText, TextWrapMode};
use egui_extras::{Column, TableBuilder};

use crate::{gui::app::App, record::Field};

/// Starting widths, in Field order
const COLUMN_WIDTHS: [f32; Field::COUNT] = [
    70.0, 220.0, 80.0, 70.0, 80.0, 100.0, 100.0, 100.0, 100.0, 100.0, 140.0,
];

const GAIN: egui::Color32 = egui::Color32::from_rgb(0x3C, 0xB4, 0x4B);
const LOSS: egui::Color32 = egui::Color32::from_rgb(0xDC, 0x61, 0x49);

pub fn draw(ui: &mut egui::Ui, app: &App) {
    {
        let s = &mut ui.style_mut().spacing.scroll;
        s.floating = false;
        s.bar_width = 10.0;
        s.handle_min_length = 48.0;
    }

    let avail_h = ui.available_height();
    egui::ScrollArea::new([true, false])
        .id_salt("quote_table_hscroll")
        .min_scrolled_height(avail_h)
        .max_height(avail_h)
        .show(ui, |ui| inner_table(ui, app));
}

fn inner_table(ui: &mut egui::Ui, app: &App) {
    let mut table = TableBuilder::new(ui).striped(true).min_scrolled_height(0.0);
    for w in COLUMN_WIDTHS {
        table = table.column(Column::initial(w).resizable(true).clip(true).at_least(20.0));
    }

    table
        .header(24.0, |mut header| {
            for field in Field::ALL {
                header.col(|ui| {
                    ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                    let label = RichText::new(field.header()).strong();
                    if field.is_numeric() {
                        ui.centered_and_justified(|ui| { ui.label(label); });
                    } else {
                        ui.with_layout(Layout::left_to_right(Align::Center), |ui| { ui.label(label); });
                    }
                });
            }
        })
        .body(|body| {
            body.rows(20.0, app.records.len(), |mut row| {
                let Some(rec) = app.records.get(row.index()) else { return };
                for field in Field::ALL {
                    let cell = &rec[field];
                    row.col(|ui| {
                        ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                        let mut rt = RichText::new(cell);
                        if matches!(field, Field::Change | Field::ChangePercent | Field::WeekChange52) {
                            if cell.starts_with('-') {
                                rt = rt.color(LOSS);
                            } else if !cell.is_empty() {
                                rt = rt.color(GAIN);
                            }
                        }
                        if field.is_numeric() {
                            ui.centered_and_justified(|ui| { ui.label(rt); });
                        } else {
                            ui.with_layout(Layout::left_to_right(Align::Center), |ui| { ui.label(rt); });
                        }
                    });
                }
            });
        });
}
