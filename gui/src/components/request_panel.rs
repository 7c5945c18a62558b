use api::domain::request::HttpMethod;
use egui::{CentralPanel, ComboBox, ScrollArea, TextEdit, TextStyle};
use egui_extras::{Column, TableBuilder};

use crate::components::saved_requests_section;
use crate::Gui;

pub fn request_panel(gui: &mut Gui, ctx: &egui::Context) {
    CentralPanel::default().show(ctx, |ui| {
        ScrollArea::vertical().show(ui, |ui| {
            ui.horizontal(|ui| {
                ComboBox::from_id_source("http_method")
                    .selected_text(gui.method.to_string())
                    .show_ui(ui, |ui| {
                        let methods = [
                            HttpMethod::GET,
                            HttpMethod::POST,
                            HttpMethod::PUT,
                            HttpMethod::PATCH,
                            HttpMethod::DELETE,
                            HttpMethod::OPTIONS,
                            HttpMethod::HEAD,
                        ];
                        for method in methods {
                            ui.selectable_value(&mut gui.method, method, method.to_string());
                        }
                    });
                ui.label("URL:");
                ui.add(
                    TextEdit::singleline(&mut gui.url)
                        .hint_text("https://api.example.com/endpoint")
                        .desired_width(400.0),
                );
                if ui
                    .add_enabled(!gui.is_loading, egui::Button::new("Send"))
                    .clicked()
                {
                    gui.spawn_submit();
                }
                if ui.button("Save").clicked() {
                    gui.save_window_open = true;
                }
            });

            ui.separator();
            ui.strong("Headers");
            header_table(gui, ui);

            ui.separator();
            ui.horizontal(|ui| {
                ui.strong("Body");
                let blank = gui.body_str.trim().is_empty();
                let valid = blank
                    || serde_json::from_str::<serde_json::Value>(&gui.body_str).is_ok();
                if ui
                    .add_enabled(!blank && valid, egui::Button::new("Format JSON"))
                    .clicked()
                {
                    if let Some(formatted) = format_json_body(&gui.body_str) {
                        gui.body_str = formatted;
                    }
                }
                if !blank {
                    if valid {
                        ui.colored_label(egui::Color32::from_rgb(34, 197, 94), "Valid JSON");
                    } else {
                        ui.colored_label(egui::Color32::from_rgb(239, 68, 68), "Invalid JSON");
                    }
                }
            });
            ui.add(
                TextEdit::multiline(&mut gui.body_str)
                    .code_editor()
                    .desired_rows(8)
                    .desired_width(f32::INFINITY)
                    .font(TextStyle::Monospace),
            );

            ui.separator();
            saved_requests_section(gui, ui);
        });
    });
}

/// Pretty-prints the body text when it parses as JSON, with two-space
/// indentation. A blank or non-JSON body yields `None` and is left alone.
pub fn format_json_body(text: &str) -> Option<String> {
    if text.trim().is_empty() {
        return None;
    }
    let value: serde_json::Value = serde_json::from_str(text).ok()?;
    serde_json::to_string_pretty(&value).ok()
}

fn header_table(gui: &mut Gui, ui: &mut egui::Ui) {
    let mut remove_index = None;
    let table = TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
        .column(Column::auto())
        .column(Column::auto())
        .column(Column::auto())
        .column(Column::auto());
    table
        .header(20.0, |mut header| {
            header.col(|ui| {
                ui.strong("Enabled");
            });
            header.col(|ui| {
                ui.strong("Key");
            });
            header.col(|ui| {
                ui.strong("Value");
            });
            header.col(|_ui| {});
        })
        .body(|mut body| {
            for (index, header) in gui.headers.iter_mut().enumerate() {
                body.row(30.0, |mut row| {
                    let (enabled, key, value) = header;
                    row.col(|ui| {
                        ui.checkbox(enabled, "");
                    });
                    row.col(|ui| {
                        ui.text_edit_singleline(key);
                    });
                    row.col(|ui| {
                        ui.text_edit_singleline(value);
                    });
                    row.col(|ui| {
                        if ui.button("Remove").clicked() {
                            remove_index = Some(index);
                        }
                    });
                });
            }
            body.row(30.0, |mut row| {
                row.col(|ui| {
                    if ui.button("Add").clicked() {
                        gui.headers
                            .push((true, String::from(""), String::from("")));
                    }
                });
            });
        });
    if let Some(index) = remove_index {
        gui.headers.remove(index);
    }
}
