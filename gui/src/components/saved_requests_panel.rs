use api::domain::saved;
use api::store::StoreKey;
use egui::RichText;

use crate::components::method_color;
use crate::Gui;

/// Saved requests are listed beneath the request editor, as in the original
/// layout. Load pulls the snapshot back into the editor; Delete removes by id
/// without touching any other entry.
pub fn saved_requests_section(gui: &mut Gui, ui: &mut egui::Ui) {
    ui.strong("Saved Requests");
    if gui.saved_requests.is_empty() {
        ui.label("No saved requests yet. Save a request to see it here.");
        return;
    }
    let entries = gui.saved_requests.clone();
    for entry in entries {
        ui.horizontal(|ui| {
            ui.label(
                RichText::new(entry.request.method.to_string())
                    .color(method_color(entry.request.method))
                    .strong(),
            );
            ui.label(&entry.name);
            ui.label(RichText::new(&entry.request.url).weak());
            if ui.button("Load").clicked() {
                gui.load_request(&entry.request);
            }
            if ui.button("Delete").clicked() {
                saved::delete_by_id(&mut gui.saved_requests, &entry.id);
                gui.persist(StoreKey::SavedRequests);
            }
        });
    }
}
