use api::domain::ui::ResponseViewMode;
use egui::{CentralPanel, RichText, ScrollArea, TextStyle};
use egui_extras::{Column, TableBuilder};
use egui_json_tree::JsonTree;

use crate::components::status_color;
use crate::Gui;

pub fn response_panel(gui: &mut Gui, ctx: &egui::Context) {
    CentralPanel::default().show(ctx, |ui| {
        if gui.is_loading {
            ui.vertical_centered(|ui| {
                ui.add_space(80.0);
                ui.spinner();
                ui.label("Sending request...");
            });
            return;
        }
        let Some(response) = gui.current_response.clone() else {
            ui.vertical_centered(|ui| {
                ui.add_space(80.0);
                ui.strong("No Response Yet");
                ui.label("Send a request to see the response details here.");
            });
            return;
        };

        ui.horizontal(|ui| {
            ui.label(
                RichText::new(format!("{} {}", response.status, response.status_text))
                    .color(status_color(response.status))
                    .strong(),
            );
            ui.label(format!("{} ms", response.time));
            ui.label(format!("{:.2} KB", response.size as f64 / 1024.0));
            if ui.button("Copy Response").clicked() {
                ui.output_mut(|o| o.copied_text = response.body_text());
            }
        });

        ui.horizontal(|ui| {
            let views = [
                (ResponseViewMode::JSON, "JSON"),
                (ResponseViewMode::RAW, "Raw"),
                (ResponseViewMode::HEADERS, "Headers"),
            ];
            for (view, label) in views {
                if ui
                    .selectable_label(gui.response_view == view, label)
                    .clicked()
                {
                    gui.response_view = view;
                }
            }
        });
        ui.separator();

        match gui.response_view {
            ResponseViewMode::JSON => {
                ScrollArea::vertical().show(ui, |ui| {
                    JsonTree::new("response_json", &response.data).show(ui);
                });
            }
            ResponseViewMode::RAW => {
                ScrollArea::vertical().show(ui, |ui| {
                    ui.label(RichText::new(response.raw_text()).text_style(TextStyle::Monospace));
                });
            }
            ResponseViewMode::HEADERS => {
                let table = TableBuilder::new(ui)
                    .striped(true)
                    .resizable(true)
                    .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
                    .column(Column::auto())
                    .column(Column::remainder());
                table
                    .header(20.0, |mut header| {
                        header.col(|ui| {
                            ui.strong("Key");
                        });
                        header.col(|ui| {
                            ui.strong("Value");
                        });
                    })
                    .body(|mut body| {
                        for (key, value) in &response.headers {
                            body.row(24.0, |mut row| {
                                row.col(|ui| {
                                    ui.label(key);
                                });
                                row.col(|ui| {
                                    ui.label(value);
                                });
                            });
                        }
                    });
            }
        }
    });
}
