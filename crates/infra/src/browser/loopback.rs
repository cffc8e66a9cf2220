//! Loopback "popup" for native logins
//!
//! Opens the authorization URL in the system browser and serves the redirect
//! URI on a local port. The first request that reaches the server becomes the
//! popup's location, which the popup controller then reads like a browser
//! window that navigated back to the opener's origin.

use std::io;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr};
use std::sync::{Arc, Mutex, PoisonError};

use axum::extract::{OriginalUri, State};
use axum::http::header::HOST;
use axum::http::HeaderMap;
use axum::response::Html;
use axum::Router;
use sse_auth_core::{BrowserEnvironment, LocationError, PopupHandle, ScreenGeometry};
use sse_auth_domain::SseAuthError;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};
use url::Url;

use crate::errors::InfraError;

const CALLBACK_PAGE: &str = "<!DOCTYPE html>\
<html><head><title>SSE Auth</title></head>\
<body><h1>Login complete</h1><p>You can close this window and return to the application.</p></body></html>";

/// Opens a URL in a browser. Defaults to the system browser.
pub type Launcher = Arc<dyn Fn(&str) -> io::Result<()> + Send + Sync>;

type Captured = Arc<Mutex<Option<Url>>>;

/// [`BrowserEnvironment`] backed by the system browser and a loopback
/// callback server.
///
/// The listener is bound up front so [`origin`](BrowserEnvironment::origin)
/// is known before the login starts. Each bind serves one popup.
pub struct LoopbackBrowser {
    origin: String,
    listener: Mutex<Option<TcpListener>>,
    geometry: ScreenGeometry,
    launcher: Launcher,
}

impl std::fmt::Debug for LoopbackBrowser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoopbackBrowser")
            .field("origin", &self.origin)
            .field("geometry", &self.geometry)
            .finish_non_exhaustive()
    }
}

impl LoopbackBrowser {
    /// Bind the callback server on `addr`. Port 0 picks a free port.
    pub async fn bind(addr: SocketAddr) -> Result<Self, SseAuthError> {
        let listener = TcpListener::bind(addr).await.map_err(InfraError::from)?;
        let local = listener.local_addr().map_err(InfraError::from)?;
        info!(%local, "Loopback callback server bound");

        Ok(Self {
            origin: format!("http://{local}"),
            listener: Mutex::new(Some(listener)),
            geometry: ScreenGeometry { screen_x: 0, screen_y: 0, outer_width: 1280, outer_height: 800 },
            launcher: Arc::new(|url: &str| open::that(url)),
        })
    }

    /// Bind on the address and port of a loopback `redirect_uri`, or a free
    /// IPv4 port when the redirect URI is absent or not on this machine.
    pub async fn for_redirect_uri(redirect_uri: Option<&str>) -> Result<Self, SseAuthError> {
        let addr = match redirect_uri {
            Some(uri) => loopback_addr(&Url::parse(uri).map_err(InfraError::from)?),
            None => None,
        };
        Self::bind(addr.unwrap_or_else(|| SocketAddr::from((Ipv4Addr::LOCALHOST, 0)))).await
    }

    /// Replace the system browser, e.g. with a headless client.
    #[must_use]
    pub fn with_launcher<F>(mut self, launcher: F) -> Self
    where
        F: Fn(&str) -> io::Result<()> + Send + Sync + 'static,
    {
        self.launcher = Arc::new(launcher);
        self
    }

    #[must_use]
    pub const fn with_geometry(mut self, geometry: ScreenGeometry) -> Self {
        self.geometry = geometry;
        self
    }

    fn take_listener(&self) -> Option<TcpListener> {
        self.listener.lock().unwrap_or_else(PoisonError::into_inner).take()
    }
}

impl BrowserEnvironment for LoopbackBrowser {
    fn origin(&self) -> String {
        self.origin.clone()
    }

    fn geometry(&self) -> ScreenGeometry {
        self.geometry
    }

    fn open(&self, url: &str, name: &str, features: &str) -> Option<Box<dyn PopupHandle>> {
        let Ok(runtime) = tokio::runtime::Handle::try_current() else {
            warn!("Loopback browser used outside a Tokio runtime");
            return None;
        };
        let Some(listener) = self.take_listener() else {
            warn!(origin = %self.origin, "Loopback callback server already in use");
            return None;
        };

        let captured: Captured = Arc::new(Mutex::new(None));
        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
        let app = Router::new().fallback(capture_callback).with_state(captured.clone());

        let handle = runtime.spawn(async move {
            let server = axum::serve(listener, app).with_graceful_shutdown(async {
                let _ = shutdown_rx.await;
            });
            if let Err(err) = server.await {
                warn!(error = %err, "Loopback callback server error");
            }
        });

        debug!(window = name, features, "Launching system browser");
        if let Err(err) = (self.launcher)(url) {
            warn!(error = %err, "Failed to launch system browser");
            let _ = shutdown_tx.send(());
            handle.abort();
            return None;
        }

        Some(Box::new(LoopbackPopup {
            captured,
            shutdown_tx: Mutex::new(Some(shutdown_tx)),
            handle,
        }))
    }
}

/// The system browser tab, observed through the callback server.
///
/// A closed tab cannot be detected; only [`close`](PopupHandle::close) marks
/// the popup closed.
pub struct LoopbackPopup {
    captured: Captured,
    shutdown_tx: Mutex<Option<oneshot::Sender<()>>>,
    handle: JoinHandle<()>,
}

impl PopupHandle for LoopbackPopup {
    fn is_closed(&self) -> bool {
        self.shutdown_tx.lock().unwrap_or_else(PoisonError::into_inner).is_none()
    }

    fn location(&self) -> Result<Option<Url>, LocationError> {
        match self.captured.lock().unwrap_or_else(PoisonError::into_inner).clone() {
            Some(url) => Ok(Some(url)),
            None => Err(LocationError::CrossOrigin),
        }
    }

    fn close(&self) {
        if let Some(tx) = self.shutdown_tx.lock().unwrap_or_else(PoisonError::into_inner).take() {
            debug!("Shutting down loopback callback server");
            let _ = tx.send(());
        }
    }
}

impl Drop for LoopbackPopup {
    fn drop(&mut self) {
        self.close();
        self.handle.abort();
    }
}

async fn capture_callback(
    State(captured): State<Captured>,
    headers: HeaderMap,
    OriginalUri(uri): OriginalUri,
) -> Html<&'static str> {
    if uri.path() == "/favicon.ico" {
        return Html("");
    }

    let host = headers.get(HOST).and_then(|value| value.to_str().ok()).unwrap_or("127.0.0.1");
    match Url::parse(&format!("http://{host}{uri}")) {
        Ok(url) => {
            let mut slot = captured.lock().unwrap_or_else(PoisonError::into_inner);
            if slot.is_none() {
                info!(path = url.path(), "Received login redirect");
                *slot = Some(url);
            }
        }
        Err(err) => warn!(error = %err, "Ignoring malformed callback request"),
    }

    Html(CALLBACK_PAGE)
}

/// Socket address to serve a loopback URL on. `[::1]` binds IPv6, `localhost`
/// and `127.0.0.1` bind IPv4.
fn loopback_addr(url: &Url) -> Option<SocketAddr> {
    let ip = match url.host_str()? {
        "localhost" | "127.0.0.1" => IpAddr::V4(Ipv4Addr::LOCALHOST),
        "[::1]" => IpAddr::V6(Ipv6Addr::LOCALHOST),
        _ => return None,
    };
    Some(SocketAddr::new(ip, url.port_or_known_default()?))
}
