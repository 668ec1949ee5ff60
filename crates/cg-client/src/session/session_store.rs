use crate::{ClientResult, storage::KeyValueStore};

use cg_core::Session;

use std::sync::{
    Arc, Mutex, PoisonError, RwLock,
    atomic::{AtomicU64, Ordering},
};

use log::{debug, warn};

/// Persistent-storage key holding the serialized `{ user, token }` session
pub const SESSION_STORAGE_KEY: &str = "cg.session";

type Listener = Arc<dyn Fn(&Session) + Send + Sync>;

/// Handle returned by [`SessionStore::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Shared authentication state.
///
/// Cloning is cheap and every clone sees the same session. Writers persist
/// to the backing store before the in-memory session changes, then notify
/// subscribers synchronously outside of any internal lock, so a listener may
/// read the store again.
#[derive(Clone)]
pub struct SessionStore {
    inner: Arc<Inner>,
}

struct Inner {
    current: RwLock<Session>,
    storage: Arc<dyn KeyValueStore>,
    listeners: Mutex<Vec<(SubscriptionId, Listener)>>,
    next_id: AtomicU64,
}

impl SessionStore {
    /// Restore the session persisted in `storage`, if any
    pub fn new(storage: Arc<dyn KeyValueStore>) -> Self {
        let current = load(storage.as_ref());
        Self {
            inner: Arc::new(Inner {
                current: RwLock::new(current),
                storage,
                listeners: Mutex::new(Vec::new()),
                next_id: AtomicU64::new(1),
            }),
        }
    }

    pub fn get(&self) -> Session {
        self.inner
            .current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn token(&self) -> Option<String> {
        self.inner
            .current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .token
            .clone()
    }

    /// Persist the session, then make it current and notify subscribers.
    /// A storage failure leaves the previous session in place.
    pub fn set(&self, session: Session) -> ClientResult<()> {
        let session = session.normalized();
        let serialized = serde_json::to_string(&session)?;

        {
            let mut current = self
                .inner
                .current
                .write()
                .unwrap_or_else(PoisonError::into_inner);
            self.inner.storage.set(SESSION_STORAGE_KEY, &serialized)?;
            *current = session.clone();
        }

        self.notify(&session);
        Ok(())
    }

    /// Remove the stored session, then forget it locally and notify
    /// subscribers. A storage failure leaves the session in place.
    pub fn clear(&self) -> ClientResult<()> {
        {
            let mut current = self
                .inner
                .current
                .write()
                .unwrap_or_else(PoisonError::into_inner);
            self.inner.storage.remove(SESSION_STORAGE_KEY)?;
            *current = Session::default();
        }

        self.notify(&Session::default());
        Ok(())
    }

    pub fn subscribe<F>(&self, listener: F) -> SubscriptionId
    where
        F: Fn(&Session) + Send + Sync + 'static,
    {
        let id = SubscriptionId(self.inner.next_id.fetch_add(1, Ordering::Relaxed));
        self.inner
            .listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((id, Arc::new(listener)));
        id
    }

    /// Returns false when the subscription was already gone
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut listeners = self
            .inner
            .listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        let before = listeners.len();
        listeners.retain(|(existing, _)| *existing != id);
        listeners.len() != before
    }

    fn notify(&self, session: &Session) {
        let listeners: Vec<Listener> = self
            .inner
            .listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .map(|(_, listener)| Arc::clone(listener))
            .collect();

        debug!("Session changed, notifying {} subscriber(s)", listeners.len());
        for listener in listeners {
            listener(session);
        }
    }
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let session = self.get();
        f.debug_struct("SessionStore")
            .field("user", &session.user.as_ref().map(|u| u.email.as_str()))
            .field("has_token", &session.token.is_some())
            .finish()
    }
}

fn load(storage: &dyn KeyValueStore) -> Session {
    let Some(raw) = storage.get(SESSION_STORAGE_KEY) else {
        return Session::default();
    };

    match serde_json::from_str::<Session>(&raw) {
        Ok(session) => session.normalized(),
        Err(e) => {
            warn!("Ignoring malformed stored session: {}", e);
            Session::default()
        }
    }
}
