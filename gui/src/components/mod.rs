mod environment_panel;
mod history_panel;
mod request_panel;
mod response_panel;
mod save_window;
mod saved_requests_panel;
mod tab_bar;

pub use environment_panel::environment_panel;
pub use history_panel::history_panel;
pub use request_panel::request_panel;
pub use response_panel::response_panel;
pub use save_window::save_window;
pub use saved_requests_panel::saved_requests_section;
pub use tab_bar::tab_bar;

use api::domain::request::HttpMethod;
use egui::Color32;

pub fn method_color(method: HttpMethod) -> Color32 {
    match method {
        HttpMethod::GET => Color32::from_rgb(59, 130, 246),
        HttpMethod::POST => Color32::from_rgb(34, 197, 94),
        HttpMethod::PUT => Color32::from_rgb(234, 179, 8),
        HttpMethod::DELETE => Color32::from_rgb(239, 68, 68),
        _ => Color32::GRAY,
    }
}

pub fn status_color(status: u16) -> Color32 {
    match status {
        200..=299 => Color32::from_rgb(34, 197, 94),
        300..=399 => Color32::from_rgb(59, 130, 246),
        400..=499 => Color32::from_rgb(234, 179, 8),
        500..=599 => Color32::from_rgb(239, 68, 68),
        _ => Color32::GRAY,
    }
}
