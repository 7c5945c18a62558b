use api::domain::ui::ActiveTab;
use egui::TopBottomPanel;

use crate::Gui;

pub fn tab_bar(gui: &mut Gui, ctx: &egui::Context) {
    TopBottomPanel::top("tab_bar").show(ctx, |ui| {
        ui.heading("API Playground");
        ui.horizontal(|ui| {
            let tabs = [
                (ActiveTab::REQUEST, "Request"),
                (ActiveTab::RESPONSE, "Response"),
                (ActiveTab::HISTORY, "History"),
                (ActiveTab::ENVIRONMENT, "Environment"),
            ];
            for (tab, label) in tabs {
                if ui.selectable_label(gui.active_tab == tab, label).clicked() {
                    gui.active_tab = tab;
                }
            }
            if gui.is_loading {
                ui.spinner();
                ui.label("Sending request...");
            }
        });
        if let Some(message) = &gui.error_banner {
            ui.colored_label(
                egui::Color32::from_rgb(239, 68, 68),
                format!("Request failed: {message}"),
            );
        }
    });
}
