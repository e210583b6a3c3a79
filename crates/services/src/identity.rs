use std::sync::Arc;

use quiz_core::model::Identity;
use tokio::sync::watch;

/// Single subscription point for the signed-in identity.
///
/// Subscribers get immutable snapshots; a sign-in or sign-out replaces the
/// value instead of editing it.
#[derive(Clone)]
pub struct IdentityHub {
    tx: Arc<watch::Sender<Option<Identity>>>,
}

impl IdentityHub {
    #[must_use]
    pub fn new(initial: Option<Identity>) -> Self {
        let (tx, _rx) = watch::channel(initial);
        Self { tx: Arc::new(tx) }
    }

    #[must_use]
    pub fn current(&self) -> Option<Identity> {
        self.tx.borrow().clone()
    }

    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Option<Identity>> {
        self.tx.subscribe()
    }

    pub fn sign_in(&self, identity: Identity) {
        tracing::info!(user_id = %identity.user_id(), "signed in");
        self.tx.send_replace(Some(identity));
    }

    pub fn sign_out(&self) {
        if let Some(previous) = self.tx.send_replace(None) {
            tracing::info!(user_id = %previous.user_id(), "signed out");
        }
    }
}

impl Default for IdentityHub {
    fn default() -> Self {
        Self::new(None)
    }
}
