use crate::modules::season::{application::ports::Navigator, domain::WatchRoute};
use crate::shared::{errors::AppResult, utils::LogContext};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

/// A route change handed over to the host router
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationRequest {
    pub path: String,
    pub requested_at: DateTime<Utc>,
}

impl NavigationRequest {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            requested_at: Utc::now(),
        }
    }

    /// Parse the requested path back into a watch route
    pub fn route(&self) -> AppResult<WatchRoute> {
        self.path.parse()
    }
}

/// Navigator that forwards requests to a router task over an unbounded channel
///
/// `go_to` never blocks and never waits for the router. If the receiving side
/// is gone the request is dropped and logged.
#[derive(Debug, Clone)]
pub struct ChannelNavigator {
    sender: UnboundedSender<NavigationRequest>,
}

impl ChannelNavigator {
    /// Create a navigator together with the receiver the router should drain
    pub fn new() -> (Self, UnboundedReceiver<NavigationRequest>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self { sender }, receiver)
    }

    pub fn is_connected(&self) -> bool {
        !self.sender.is_closed()
    }
}

impl Navigator for ChannelNavigator {
    fn go_to(&self, path: &str) {
        if let Err(e) = self.sender.send(NavigationRequest::new(path)) {
            LogContext::navigation_dropped(&e.0.path, "router channel closed");
        }
    }
}
