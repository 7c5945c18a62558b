use api::domain::environment::EnvironmentVariable;
use api::store::StoreKey;
use egui::{CentralPanel, TextEdit};
use egui_extras::{Column, TableBuilder};

use crate::Gui;

pub fn environment_panel(gui: &mut Gui, ctx: &egui::Context) {
    CentralPanel::default().show(ctx, |ui| {
        ui.strong("Environment Variables");
        ui.label("Use {{variableName}} in your requests to reference these variables");
        ui.checkbox(&mut gui.show_env_values, "Show values");
        ui.separator();

        let mut changed = false;
        let mut remove_index = None;
        let show_values = gui.show_env_values;
        let table = TableBuilder::new(ui)
            .striped(true)
            .resizable(true)
            .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
            .column(Column::auto())
            .column(Column::auto())
            .column(Column::auto());
        table
            .header(20.0, |mut header| {
                header.col(|ui| {
                    ui.strong("Key");
                });
                header.col(|ui| {
                    ui.strong("Value");
                });
                header.col(|_ui| {});
            })
            .body(|mut body| {
                for (index, variable) in gui.env_vars.iter_mut().enumerate() {
                    body.row(30.0, |mut row| {
                        row.col(|ui| {
                            if ui.text_edit_singleline(&mut variable.key).changed() {
                                changed = true;
                            }
                        });
                        row.col(|ui| {
                            let edit = TextEdit::singleline(&mut variable.value)
                                .password(!show_values);
                            if ui.add(edit).changed() {
                                changed = true;
                            }
                        });
                        row.col(|ui| {
                            if ui.button("Remove").clicked() {
                                remove_index = Some(index);
                            }
                        });
                    });
                }
            });
        if let Some(index) = remove_index {
            gui.env_vars.remove(index);
            changed = true;
        }

        ui.separator();
        ui.horizontal(|ui| {
            ui.add(
                TextEdit::singleline(&mut gui.new_env_key)
                    .hint_text("Variable name")
                    .desired_width(160.0),
            );
            ui.add(
                TextEdit::singleline(&mut gui.new_env_value)
                    .hint_text("Value")
                    .password(!show_values)
                    .desired_width(240.0),
            );
            let can_add = !gui.new_env_key.trim().is_empty();
            if ui.add_enabled(can_add, egui::Button::new("Add")).clicked() {
                gui.env_vars.push(EnvironmentVariable {
                    key: gui.new_env_key.clone(),
                    value: gui.new_env_value.clone(),
                });
                gui.new_env_key.clear();
                gui.new_env_value.clear();
                changed = true;
            }
        });

        if changed {
            gui.persist(StoreKey::EnvVars);
        }
    });
}
