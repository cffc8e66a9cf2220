//! Scripted mocks for the browser and HTTP ports
//!
//! Clones share state, so a test can hand a mock to the flow and inspect it
//! afterwards.

#![allow(clippy::missing_panics_doc)]

use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use serde_json::Value;
use sse_auth_domain::{Result, SseAuthError};
use url::Url;

use crate::http::{HttpMethod, HttpRequest, HttpResponse, HttpTransport};
use crate::popup::{BrowserEnvironment, LocationError, PopupHandle, ScreenGeometry};

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// What the popup shows on one poll.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PopupStep {
    /// No navigation yet.
    Pending,
    /// On the provider's origin; reading the location fails.
    CrossOrigin,
    /// Landed on this URL.
    Redirect(String),
    /// The user closed the window.
    Closed,
}

/// Popup that walks through a script of [`PopupStep`]s, one per poll.
///
/// The last step repeats once the script runs out; an empty script stays
/// pending forever.
#[derive(Debug, Clone, Default)]
pub struct MockPopup {
    steps: Arc<Mutex<VecDeque<PopupStep>>>,
    closed: Arc<AtomicBool>,
    closed_by_opener: Arc<AtomicBool>,
    polls: Arc<AtomicUsize>,
}

impl MockPopup {
    pub fn new(steps: impl IntoIterator<Item = PopupStep>) -> Self {
        Self { steps: Arc::new(Mutex::new(steps.into_iter().collect())), ..Self::default() }
    }

    /// A popup that never navigates.
    #[must_use]
    pub fn pending() -> Self {
        Self::default()
    }

    /// Number of location reads so far.
    #[must_use]
    pub fn polls(&self) -> usize {
        self.polls.load(Ordering::SeqCst)
    }

    /// Whether [`PopupHandle::close`] was called.
    #[must_use]
    pub fn closed_by_opener(&self) -> bool {
        self.closed_by_opener.load(Ordering::SeqCst)
    }

    fn current(&self) -> PopupStep {
        lock(&self.steps).front().cloned().unwrap_or(PopupStep::Pending)
    }

    fn advance(&self) -> PopupStep {
        let mut steps = lock(&self.steps);
        if steps.len() > 1 {
            steps.pop_front().unwrap_or(PopupStep::Pending)
        } else {
            steps.front().cloned().unwrap_or(PopupStep::Pending)
        }
    }
}

impl PopupHandle for MockPopup {
    fn is_closed(&self) -> bool {
        if self.current() == PopupStep::Closed {
            self.closed.store(true, Ordering::SeqCst);
        }
        self.closed.load(Ordering::SeqCst)
    }

    fn location(&self) -> std::result::Result<Option<Url>, LocationError> {
        self.polls.fetch_add(1, Ordering::SeqCst);
        match self.advance() {
            PopupStep::Pending | PopupStep::Closed => Ok(None),
            PopupStep::CrossOrigin => Err(LocationError::CrossOrigin),
            PopupStep::Redirect(href) => Url::parse(&href)
                .map(Some)
                .map_err(|e| LocationError::Unavailable(e.to_string())),
        }
    }

    fn close(&self) {
        self.closed_by_opener.store(true, Ordering::SeqCst);
        self.closed.store(true, Ordering::SeqCst);
    }
}

/// A recorded [`BrowserEnvironment::open`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenedPopup {
    pub url: String,
    pub name: String,
    pub features: String,
}

/// Browser that hands out one [`MockPopup`], or blocks when it has none.
#[derive(Debug, Clone)]
pub struct MockBrowser {
    origin: String,
    geometry: ScreenGeometry,
    popup: Option<MockPopup>,
    opened: Arc<Mutex<Vec<OpenedPopup>>>,
}

impl MockBrowser {
    pub fn new(origin: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
            geometry: ScreenGeometry {
                screen_x: 0,
                screen_y: 0,
                outer_width: 1280,
                outer_height: 800,
            },
            popup: None,
            opened: Arc::new(Mutex::new(Vec::new())),
        }
    }

    #[must_use]
    pub fn with_popup(mut self, popup: MockPopup) -> Self {
        self.popup = Some(popup);
        self
    }

    #[must_use]
    pub const fn with_geometry(mut self, geometry: ScreenGeometry) -> Self {
        self.geometry = geometry;
        self
    }

    /// Every open attempt, blocked ones included.
    #[must_use]
    pub fn opened(&self) -> Vec<OpenedPopup> {
        lock(&self.opened).clone()
    }
}

impl BrowserEnvironment for MockBrowser {
    fn origin(&self) -> String {
        self.origin.clone()
    }

    fn geometry(&self) -> ScreenGeometry {
        self.geometry
    }

    fn open(&self, url: &str, name: &str, features: &str) -> Option<Box<dyn PopupHandle>> {
        lock(&self.opened).push(OpenedPopup {
            url: url.to_string(),
            name: name.to_string(),
            features: features.to_string(),
        });
        self.popup.clone().map(|popup| Box::new(popup) as Box<dyn PopupHandle>)
    }
}

#[derive(Debug, Clone)]
struct Route {
    method: Option<HttpMethod>,
    prefix: String,
    response: HttpResponse,
}

/// Transport answering by URL prefix; unmatched requests fail with
/// [`SseAuthError::Network`].
#[derive(Debug, Clone, Default)]
pub struct MockTransport {
    routes: Arc<Mutex<Vec<Route>>>,
    requests: Arc<Mutex<Vec<HttpRequest>>>,
}

impl MockTransport {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer requests whose URL starts with `prefix` with `200` and `body`.
    #[must_use]
    pub fn respond(self, prefix: &str, body: Value) -> Self {
        self.respond_with(prefix, HttpResponse::ok_json(&body))
    }

    #[must_use]
    pub fn respond_with(self, prefix: &str, response: HttpResponse) -> Self {
        lock(&self.routes).push(Route { method: None, prefix: prefix.to_string(), response });
        self
    }

    /// Like [`respond_with`](Self::respond_with), for one method only.
    #[must_use]
    pub fn respond_to(self, method: HttpMethod, prefix: &str, response: HttpResponse) -> Self {
        lock(&self.routes).push(Route {
            method: Some(method),
            prefix: prefix.to_string(),
            response,
        });
        self
    }

    /// Requests received so far, in order.
    #[must_use]
    pub fn requests(&self) -> Vec<HttpRequest> {
        lock(&self.requests).clone()
    }
}

#[async_trait]
impl HttpTransport for MockTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse> {
        lock(&self.requests).push(request.clone());
        lock(&self.routes)
            .iter()
            .find(|route| {
                route.method.map_or(true, |method| method == request.method)
                    && request.url.starts_with(&route.prefix)
            })
            .map(|route| route.response.clone())
            .ok_or_else(|| SseAuthError::Network(format!("no mock response for {}", request.url)))
    }
}
