//! Background refresh for dashboard counters.
//!
//! A [`Poller`] refreshes on a fixed interval and whenever it is told the
//! user came back (`focus`). Refreshes run concurrently and may outlast the
//! interval. A result is published unless a newer refresh already published,
//! and a failed refresh leaves the previous value in place.

use crate::{ClientResult, generation::RequestGeneration};

use std::{future::Future, sync::Arc, time::Duration};

use log::{debug, warn};
use tokio::{
    sync::{Notify, watch},
    task::JoinHandle,
    time::MissedTickBehavior,
};

/// Cloneable handle that triggers an immediate refresh
#[derive(Debug, Clone)]
pub struct FocusTrigger(Arc<Notify>);

impl FocusTrigger {
    pub fn notify(&self) {
        self.0.notify_one();
    }
}

pub struct Poller<T> {
    receiver: watch::Receiver<T>,
    focus: FocusTrigger,
    task: JoinHandle<()>,
}

impl<T> Poller<T>
where
    T: Clone + Send + Sync + 'static,
{
    /// Start polling. The first refresh runs immediately.
    pub fn spawn<F, Fut>(name: &'static str, interval: Duration, initial: T, refresh: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = ClientResult<T>> + Send + 'static,
    {
        let (sender, receiver) = watch::channel(initial);
        let sender = Arc::new(sender);
        let focus = Arc::new(Notify::new());
        let generation = Arc::new(RequestGeneration::new());

        let trigger = Arc::clone(&focus);
        let task = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                tokio::select! {
                    _ = ticker.tick() => {}
                    _ = trigger.notified() => {
                        debug!("{}: focus refresh", name);
                        ticker.reset();
                    }
                }

                if sender.is_closed() {
                    break;
                }

                let ticket = generation.begin();
                let pending = refresh();
                let sender = Arc::clone(&sender);
                let generation = Arc::clone(&generation);
                tokio::spawn(async move {
                    match pending.await {
                        Ok(value) => {
                            let applied = sender.send_if_modified(|slot| {
                                if generation.try_apply(ticket) {
                                    *slot = value;
                                    true
                                } else {
                                    false
                                }
                            });
                            if !applied {
                                debug!("{}: dropping stale refresh result", name);
                            }
                        }
                        Err(e) => warn!("{}: refresh failed, keeping previous value: {}", name, e),
                    }
                });
            }
        });

        Self {
            receiver,
            focus: FocusTrigger(focus),
            task,
        }
    }

    /// Most recent successfully refreshed value
    pub fn latest(&self) -> T {
        self.receiver.borrow().clone()
    }

    /// Refresh now instead of waiting for the next tick
    pub fn focus(&self) {
        self.focus.notify();
    }

    pub fn focus_trigger(&self) -> FocusTrigger {
        self.focus.clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<T> {
        self.receiver.clone()
    }

    /// Wait for the next published value; `false` once polling has stopped
    pub async fn changed(&mut self) -> bool {
        self.receiver.changed().await.is_ok()
    }

    pub fn stop(self) {
        drop(self);
    }
}

impl<T> Drop for Poller<T> {
    fn drop(&mut self) {
        self.task.abort();
    }
}
