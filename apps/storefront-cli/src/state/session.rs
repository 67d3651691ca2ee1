//! # Session Registry
//!
//! One [`CartState`] per shopping session, keyed by session id.
//!
//! ```text
//! ┌────────────────────────────────────────────┐
//! │  SessionRegistry                           │
//! │  RwLock<HashMap<Uuid, CartState>>          │
//! │                                            │
//! │   session A ──► CartState ──► Cart         │
//! │   session B ──► CartState ──► Cart         │
//! └────────────────────────────────────────────┘
//! ```
//!
//! Carts are never shared between sessions, and closing a session drops
//! its cart. The REPL opens a single session; the registry is what lets
//! the command layer serve several at once.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

use super::CartState;

#[derive(Debug, Clone, Default)]
pub struct SessionRegistry {
    sessions: Arc<RwLock<HashMap<Uuid, CartState>>>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a session with an empty cart.
    pub async fn open(&self) -> (Uuid, CartState) {
        let id = Uuid::new_v4();
        let cart = CartState::new();

        self.sessions.write().await.insert(id, cart.clone());
        debug!(session = %id, "Session opened");

        (id, cart)
    }

    pub async fn get(&self, id: Uuid) -> Option<CartState> {
        self.sessions.read().await.get(&id).cloned()
    }

    /// Ends a session and discards its cart. Returns false for unknown ids.
    pub async fn close(&self, id: Uuid) -> bool {
        let removed = self.sessions.write().await.remove(&id).is_some();
        if removed {
            debug!(session = %id, "Session closed");
        }
        removed
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }
}
