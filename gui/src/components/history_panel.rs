use chrono::DateTime;
use egui::{CentralPanel, RichText, ScrollArea};

use crate::components::method_color;
use crate::Gui;

pub fn history_panel(gui: &mut Gui, ctx: &egui::Context) {
    CentralPanel::default().show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.strong("Request History");
            if ui
                .add_enabled(
                    !gui.history.is_empty(),
                    egui::Button::new("Clear History"),
                )
                .clicked()
            {
                gui.clear_history();
            }
        });
        if gui.history.is_empty() {
            ui.label("Your request history will appear here after you send requests.");
            return;
        }
        ScrollArea::vertical().show(ui, |ui| {
            let entries = gui.history.clone();
            for entry in entries {
                ui.horizontal(|ui| {
                    ui.label(
                        RichText::new(entry.method.to_string())
                            .color(method_color(entry.method))
                            .strong(),
                    );
                    ui.label(&entry.url);
                    if let Some(timestamp) = &entry.timestamp {
                        ui.label(RichText::new(format_timestamp(timestamp)).weak());
                    }
                    if ui.button("Load").clicked() {
                        gui.load_request(&entry);
                    }
                });
            }
        });
    });
}

fn format_timestamp(raw: &str) -> String {
    match DateTime::parse_from_rfc3339(raw) {
        Ok(parsed) => parsed.format("%Y-%m-%d %H:%M:%S").to_string(),
        Err(_) => raw.to_string(),
    }
}
