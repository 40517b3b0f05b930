//! Common test infrastructure for extguard-panel tests
//!
//! Recording surfaces stand in for a real renderer; a wiremock server stands
//! in for the backend.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use extguard_api::HttpGateway;
use extguard_core::{ApiConfig, Locale, PanelConfig, UiLimits};
use extguard_panel::{
    Confirm, CustomListView, CustomPanelView, FixedPanelView, FixedRow, PageSurface, SettingsPage,
    Toast, ToastSurface,
};
use serde_json::{json, Value};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const FIXED_PATH: &str = "/api/extensions/fixed";
pub const CUSTOM_PATH: &str = "/api/extensions/custom";

/// Records everything the panels draw
#[derive(Default)]
pub struct RecordingView {
    pub fixed_renders: Mutex<Vec<Vec<FixedRow>>>,
    pub custom_renders: Mutex<Vec<CustomListView>>,
    pub inline_error: Mutex<Option<String>>,
    pub input_cleared: Mutex<usize>,
}

impl RecordingView {
    pub fn last_fixed(&self) -> Option<Vec<FixedRow>> {
        self.fixed_renders.lock().unwrap().last().cloned()
    }

    pub fn fixed_render_count(&self) -> usize {
        self.fixed_renders.lock().unwrap().len()
    }

    pub fn last_custom(&self) -> Option<CustomListView> {
        self.custom_renders.lock().unwrap().last().cloned()
    }

    pub fn custom_render_count(&self) -> usize {
        self.custom_renders.lock().unwrap().len()
    }

    pub fn inline_error(&self) -> Option<String> {
        self.inline_error.lock().unwrap().clone()
    }

    pub fn input_cleared(&self) -> usize {
        *self.input_cleared.lock().unwrap()
    }
}

impl FixedPanelView for RecordingView {
    fn render_fixed(&self, rows: &[FixedRow]) {
        self.fixed_renders.lock().unwrap().push(rows.to_vec());
    }
}

impl CustomPanelView for RecordingView {
    fn render_custom(&self, list: &CustomListView) {
        self.custom_renders.lock().unwrap().push(list.clone());
    }

    fn show_inline_error(&self, message: &str) {
        *self.inline_error.lock().unwrap() = Some(message.to_string());
    }

    fn clear_inline_error(&self) {
        *self.inline_error.lock().unwrap() = None;
    }

    fn clear_input(&self) {
        *self.input_cleared.lock().unwrap() += 1;
    }
}

/// Toast surface that only counts calls
#[derive(Default)]
pub struct RecordingToasts {
    pub presented: Mutex<Vec<Toast>>,
}

impl ToastSurface for RecordingToasts {
    fn present(&self, toast: &Toast) {
        self.presented.lock().unwrap().push(toast.clone());
    }

    fn dismiss(&self) {}
}

/// Confirmation with a fixed answer that remembers the prompts it saw
pub struct ScriptedConfirm {
    answer: bool,
    pub prompts: Mutex<Vec<String>>,
}

impl ScriptedConfirm {
    pub fn answering(answer: bool) -> Self {
        Self {
            answer,
            prompts: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl Confirm for ScriptedConfirm {
    async fn confirm(&self, prompt: &str) -> bool {
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.answer
    }
}

/// A page wired to recording surfaces
pub struct Harness {
    pub page: SettingsPage,
    pub view: Arc<RecordingView>,
    pub toasts: Arc<RecordingToasts>,
    pub confirm: Arc<ScriptedConfirm>,
}

pub fn harness(server: &MockServer, confirm_answer: bool) -> Harness {
    harness_with(server, confirm_answer, Locale::En, UiLimits::default())
}

pub fn harness_with(
    server: &MockServer,
    confirm_answer: bool,
    locale: Locale,
    limits: UiLimits,
) -> Harness {
    build_harness(server.uri(), 5, confirm_answer, locale, limits)
}

/// A page whose requests give up after `timeout_secs`
pub fn harness_with_timeout(server: &MockServer, timeout_secs: u64) -> Harness {
    build_harness(server.uri(), timeout_secs, true, Locale::En, UiLimits::default())
}

fn build_harness(
    base_url: String,
    timeout_secs: u64,
    confirm_answer: bool,
    locale: Locale,
    limits: UiLimits,
) -> Harness {
    let config = PanelConfig {
        api: ApiConfig {
            base_url,
            timeout_secs,
            ..Default::default()
        },
        limits,
        locale,
        ..Default::default()
    };
    let gateway = HttpGateway::new(&config.api).expect("mock server uri is a valid base");

    let view = Arc::new(RecordingView::default());
    let toasts = Arc::new(RecordingToasts::default());
    let confirm = Arc::new(ScriptedConfirm::answering(confirm_answer));
    let page = SettingsPage::new(
        &config,
        Arc::new(gateway),
        PageSurface {
            fixed_view: view.clone(),
            custom_view: view.clone(),
            toasts: toasts.clone(),
            confirm: confirm.clone(),
        },
    );

    Harness {
        page,
        view,
        toasts,
        confirm,
    }
}

/// A page asking `confirm`, with default config
pub fn page_with_confirm(
    server: &MockServer,
    confirm: Arc<dyn Confirm>,
) -> (SettingsPage, Arc<RecordingView>) {
    let config = PanelConfig {
        api: ApiConfig {
            base_url: server.uri(),
            timeout_secs: 5,
            ..Default::default()
        },
        ..Default::default()
    };
    let gateway = HttpGateway::new(&config.api).expect("mock server uri is a valid base");
    let view = Arc::new(RecordingView::default());
    let page = SettingsPage::new(
        &config,
        Arc::new(gateway),
        PageSurface {
            fixed_view: view.clone(),
            custom_view: view.clone(),
            toasts: Arc::new(RecordingToasts::default()),
            confirm,
        },
    );
    (page, view)
}

pub fn fixed_json(exe_blocked: bool) -> Value {
    json!([
        {"id": 1, "name": "bat", "blocked": false},
        {"id": 5, "name": "exe", "blocked": exe_blocked},
        {"id": 7, "name": "js", "blocked": false}
    ])
}

pub fn custom_json(extensions: &[&str]) -> Value {
    Value::Array(
        extensions
            .iter()
            .enumerate()
            .map(|(i, ext)| {
                json!({"id": i + 1, "extension": ext, "createdAt": "2025-11-02T10:15:30"})
            })
            .collect(),
    )
}

pub fn error_json(code: &str, message: &str) -> Value {
    json!({"code": code, "message": message, "timestamp": "2025-11-02T10:15:30"})
}

/// Mount a GET answering `body` at most `times` times
pub async fn mock_get_times(server: &MockServer, route: &str, body: Value, times: u64) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .up_to_n_times(times)
        .mount(server)
        .await;
}

/// Mount a GET answering `body` indefinitely
pub async fn mock_get(server: &MockServer, route: &str, body: Value) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

/// Mount an endpoint answering `status`, expected exactly `expected` times
pub async fn mock_status_expect(
    server: &MockServer,
    verb: &str,
    route: &str,
    status: u16,
    expected: u64,
) {
    Mock::given(method(verb))
        .and(path(route))
        .respond_with(ResponseTemplate::new(status))
        .expect(expected)
        .mount(server)
        .await;
}
