use api::domain::saved::SavedRequest;
use api::store::StoreKey;

use crate::Gui;

/// Modal capturing a name for the current request. Confirming snapshots the
/// editor state into a SavedRequest.
pub fn save_window(gui: &mut Gui, ctx: &egui::Context) {
    if !gui.save_window_open {
        return;
    }
    let mut open = true;
    let mut saved = false;
    egui::Window::new("Save request")
        .open(&mut open)
        .show(ctx, |ui| {
            ui.label("Name this request");
            ui.text_edit_singleline(&mut gui.save_name);
            let can_save = !gui.save_name.trim().is_empty();
            if ui.add_enabled(can_save, egui::Button::new("Save")).clicked() {
                let entry = SavedRequest::new(
                    gui.save_name.trim().to_string(),
                    gui.current_request(),
                );
                log::info!("saving request '{}'", entry.name);
                gui.saved_requests.push(entry);
                gui.persist(StoreKey::SavedRequests);
                gui.save_name.clear();
                saved = true;
            }
        });
    gui.save_window_open = open && !saved;
}
