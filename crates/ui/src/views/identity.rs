use dioxus::prelude::*;
use quiz_core::model::Identity;

use crate::context::AppContext;

/// Current identity snapshot, kept in sync with the identity hub for as long
/// as the calling component is mounted.
pub fn use_identity() -> Signal<Option<Identity>> {
    let ctx = use_context::<AppContext>();
    let hub = ctx.identity();
    let identity = use_signal(|| hub.current());

    use_future(move || {
        let hub = hub.clone();
        async move {
            let mut identity = identity;
            let mut rx = hub.subscribe();
            loop {
                let latest = rx.borrow_and_update().clone();
                if *identity.peek() != latest {
                    identity.set(latest);
                }
                if rx.changed().await.is_err() {
                    break;
                }
            }
        }
    });

    identity
}
