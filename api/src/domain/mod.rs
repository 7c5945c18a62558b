pub mod environment;
pub mod history;
pub mod request;
pub mod response;
pub mod saved;
pub mod ui;
