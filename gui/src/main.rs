mod components;

use std::sync::Arc;
use std::time::Duration;

use api::domain::environment::EnvironmentVariable;
use api::domain::history;
use api::domain::request::{ApiRequest, HttpMethod};
use api::domain::response::ApiResponse;
use api::domain::saved::SavedRequest;
use api::domain::ui::{ActiveTab, ResponseViewMode};
use api::store::{FileStore, StoreHandle, StoreKey};
use api::utilities::request::remove_duplicate_headers;
use api::PlaygroundApi;
use eframe::{App, NativeOptions};
use tokio::sync::{Mutex, RwLock};

/// Result slot filled by the dispatch task and drained by the update loop.
/// The sequence number identifies the send that produced the result so a
/// stale dispatch can be discarded.
type DispatchSlot = Arc<RwLock<Option<(u64, Result<ApiResponse, String>)>>>;

/// Stores a dispatch outcome unless the slot already holds a newer one, so a
/// slow earlier send can never clobber the result of a later one.
async fn deliver_result(slot: &DispatchSlot, seq: u64, outcome: Result<ApiResponse, String>) {
    let mut guard = slot.write().await;
    match guard.as_ref() {
        Some((stored, _)) if *stored > seq => {
            log::debug!("dropping result of superseded dispatch {seq}");
        }
        _ => *guard = Some((seq, outcome)),
    }
}

pub struct Gui {
    pub method: HttpMethod,
    pub url: String,
    pub body_str: String,
    pub headers: Vec<(bool, String, String)>,
    pub env_vars: Vec<EnvironmentVariable>,
    pub history: Vec<ApiRequest>,
    pub saved_requests: Vec<SavedRequest>,
    pub active_tab: ActiveTab,
    pub response_view: ResponseViewMode,
    pub current_response: Option<ApiResponse>,
    pub error_banner: Option<String>,
    pub is_loading: bool,
    pub dispatch_seq: u64,
    pub dispatch_result: DispatchSlot,
    pub last_sent: Option<ApiRequest>,
    pub save_window_open: bool,
    pub save_name: String,
    pub show_env_values: bool,
    pub new_env_key: String,
    pub new_env_value: String,
    pub store: Arc<Mutex<StoreHandle>>,
}

impl Default for Gui {
    fn default() -> Self {
        Self {
            method: HttpMethod::GET,
            url: String::from(""),
            body_str: String::from(""),
            headers: vec![
                (
                    true,
                    String::from("Content-Type"),
                    String::from("application/json"),
                ),
                (
                    true,
                    String::from("User-Agent"),
                    String::from("api-playground"),
                ),
                (
                    true,
                    String::from("Cache-Control"),
                    String::from("no-cache"),
                ),
            ],
            env_vars: vec![],
            history: vec![],
            saved_requests: vec![],
            active_tab: ActiveTab::REQUEST,
            response_view: ResponseViewMode::JSON,
            current_response: None,
            error_banner: None,
            is_loading: false,
            dispatch_seq: 0,
            dispatch_result: Arc::new(RwLock::new(None)),
            last_sent: None,
            save_window_open: false,
            save_name: String::from(""),
            show_env_values: false,
            new_env_key: String::from(""),
            new_env_value: String::from(""),
            store: Arc::new(Mutex::new(StoreHandle::new(Box::new(FileStore::new())))),
        }
    }
}

impl Gui {
    /// Opens the store, loads the three persisted lists with empty defaults,
    /// and only then allows writes. A broken store never blocks startup.
    async fn new() -> Self {
        let mut store = StoreHandle::open_default().await;
        let history = store.load_list::<ApiRequest>(StoreKey::History).await;
        let saved_requests = store.load_list::<SavedRequest>(StoreKey::SavedRequests).await;
        let env_vars = store.load_list::<EnvironmentVariable>(StoreKey::EnvVars).await;
        store.mark_ready();

        Gui {
            history,
            saved_requests,
            env_vars,
            store: Arc::new(Mutex::new(store)),
            ..Gui::default()
        }
    }

    /// The request as currently edited: enabled header rows only, first
    /// occurrence wins for duplicate keys, no timestamp.
    pub fn current_request(&self) -> ApiRequest {
        let headers = self
            .headers
            .iter()
            .filter(|h| h.0)
            .map(|h| (h.1.clone(), h.2.clone()))
            .collect();
        ApiRequest {
            url: self.url.clone(),
            method: self.method,
            headers: remove_duplicate_headers(headers),
            body: self.body_str.clone(),
            timestamp: None,
        }
    }

    /// Issues the dispatch on a worker task. The unsubstituted request is kept
    /// aside for the history entry written when the result lands.
    pub fn spawn_submit(&mut self) {
        self.error_banner = None;
        self.is_loading = true;
        self.dispatch_seq += 1;
        let seq = self.dispatch_seq;

        let request = self.current_request();
        self.last_sent = Some(request.clone());
        let variables = self.env_vars.clone();
        let slot = Arc::clone(&self.dispatch_result);
        tokio::spawn(async move {
            let api = PlaygroundApi::new();
            let outcome = api
                .send_request(&request, &variables)
                .await
                .map_err(|err| err.to_string());
            deliver_result(&slot, seq, outcome).await;
        });
    }

    /// Drains the dispatch slot. A success installs the response, appends the
    /// original request to history, and forces the response tab; a failure
    /// raises the transient banner and leaves every list untouched. Results
    /// from a superseded send are dropped.
    pub fn poll_dispatch(&mut self) {
        let taken = match self.dispatch_result.try_write() {
            Ok(mut guard) => guard.take(),
            Err(_) => None,
        };
        let Some((seq, outcome)) = taken else {
            return;
        };
        if seq != self.dispatch_seq {
            log::debug!("discarding result of superseded dispatch {seq}");
            return;
        }
        self.is_loading = false;
        match outcome {
            Ok(response) => {
                self.current_response = Some(response);
                if let Some(sent) = self.last_sent.take() {
                    let entry = ApiRequest {
                        timestamp: Some(chrono::Utc::now().to_rfc3339()),
                        ..sent
                    };
                    history::push_entry(&mut self.history, entry);
                    self.persist(StoreKey::History);
                }
                self.active_tab = ActiveTab::RESPONSE;
            }
            Err(message) => {
                log::error!("request failed: {message}");
                self.error_banner = Some(message);
            }
        }
    }

    /// Persists the list behind the key on a worker task. The store handle
    /// logs and swallows failures; the in-memory list stays authoritative.
    pub fn persist(&self, key: StoreKey) {
        let value = match key {
            StoreKey::History => serde_json::to_value(&self.history),
            StoreKey::SavedRequests => serde_json::to_value(&self.saved_requests),
            StoreKey::EnvVars => serde_json::to_value(&self.env_vars),
        };
        let list = match value {
            Ok(serde_json::Value::Array(items)) => items,
            Ok(other) => {
                log::error!("unexpected serialized shape for '{}': {other}", key.as_str());
                return;
            }
            Err(err) => {
                log::error!("could not serialize '{}': {err}", key.as_str());
                return;
            }
        };
        let store = Arc::clone(&self.store);
        tokio::spawn(async move {
            store.lock().await.save_list(key, &list).await;
        });
    }

    /// Loads a history or saved entry into the editor and forces the request
    /// tab.
    pub fn load_request(&mut self, request: &ApiRequest) {
        self.url = request.url.clone();
        self.method = request.method;
        self.body_str = request.body.clone();
        self.headers = request
            .headers
            .iter()
            .map(|(key, value)| (true, key.clone(), value.clone()))
            .collect();
        self.active_tab = ActiveTab::REQUEST;
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
        self.persist(StoreKey::History);
    }
}

impl App for Gui {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_dispatch();
        if self.is_loading {
            // No input arrives while a request is in flight, so ask for a
            // repaint to pick up the landed result.
            ctx.request_repaint_after(Duration::from_millis(100));
        }

        components::tab_bar(self, ctx);
        match self.active_tab {
            ActiveTab::REQUEST => components::request_panel(self, ctx),
            ActiveTab::RESPONSE => components::response_panel(self, ctx),
            ActiveTab::HISTORY => components::history_panel(self, ctx),
            ActiveTab::ENVIRONMENT => components::environment_panel(self, ctx),
        }
        components::save_window(self, ctx);
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        let store = Arc::clone(&self.store);
        tokio::task::block_in_place(|| {
            tokio::runtime::Handle::current().block_on(async move {
                store.lock().await.close().await;
            });
        });
    }
}


#[tokio::main]
async fn main() {
    env_logger::init();
    let app = Gui::new().await;
    let native_options = NativeOptions::default();
    let _ = eframe::run_native(
        "API Playground",
        native_options,
        Box::new(|_cc| Box::new(app)),
    );
}
