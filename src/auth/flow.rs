//! Login and sign-up submissions
//!
//! A submission validates its form synchronously, then runs the credential
//! exchange on a spawned task. Only one submission may be in flight per
//! [`AuthFlow`]; further attempts fail with [`AppError::Busy`] until the
//! current one resolves or is cancelled.
//!
//! The returned [`Submission`] owns the exchange. Dropping it (for example
//! because the page that started it was navigated away from) cancels the
//! exchange, and a cancelled login never touches the session: the commit
//! step and cancellation serialize on the same lock, so whichever runs first
//! wins outright.

use parking_lot::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use super::authenticator::{Authenticator, DemoAuthenticator};
use super::forms::{Credentials, SignupForm};
use super::session::SessionStore;
use crate::routing::View;
use crate::types::{AppError, Identity, Result};
use crate::utils::toml_config::AuthConfig;

/// Holds the token of the in-flight submission, or 0 when idle.
#[derive(Debug, Clone, Default)]
struct BusySlot {
    current: Arc<AtomicU64>,
    issued: Arc<AtomicU64>,
}

impl BusySlot {
    fn acquire(&self) -> Result<u64> {
        let token = self.issued.fetch_add(1, Ordering::Relaxed) + 1;
        self.current
            .compare_exchange(0, token, Ordering::AcqRel, Ordering::Acquire)
            .map(|_| token)
            .map_err(|_| AppError::Busy)
    }

    /// Clears the slot only if `token` still owns it.
    fn release(&self, token: u64) {
        let _ = self
            .current
            .compare_exchange(token, 0, Ordering::AcqRel, Ordering::Acquire);
    }

    fn is_held(&self) -> bool {
        self.current.load(Ordering::Acquire) != 0
    }
}

struct BusyGuard {
    slot: BusySlot,
    token: u64,
}

impl Drop for BusyGuard {
    fn drop(&mut self) {
        self.slot.release(self.token);
    }
}

/// Handle to an in-flight exchange.
#[must_use = "dropping a submission cancels it"]
pub struct Submission<T> {
    cancel: Option<oneshot::Sender<()>>,
    handle: Option<JoinHandle<Result<T>>>,
    /// Set once cancelled; held while the exchange commits its outcome.
    cancelled: Arc<Mutex<bool>>,
    slot: BusySlot,
    token: u64,
}

impl<T> Submission<T> {
    /// Waits for the exchange to finish.
    ///
    /// Resolves to [`AppError::Cancelled`] if the exchange was cancelled.
    pub async fn wait(mut self) -> Result<T> {
        let handle = self
            .handle
            .take()
            .ok_or_else(|| AppError::Internal("submission already awaited".to_string()))?;

        let joined = handle.await;
        // Finished: nothing left to cancel on drop.
        self.cancel.take();

        match joined {
            Ok(outcome) => outcome,
            Err(e) if e.is_cancelled() => Err(AppError::Cancelled),
            Err(e) => Err(AppError::Internal(format!("submission task failed: {}", e))),
        }
    }

    /// Cancels the exchange and frees the flow for a new submission.
    pub fn cancel(self) {
        drop(self);
    }

    pub fn is_finished(&self) -> bool {
        self.handle.as_ref().map_or(true, JoinHandle::is_finished)
    }
}

impl<T> Drop for Submission<T> {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            *self.cancelled.lock() = true;
            let _ = cancel.send(());
            self.slot.release(self.token);
            debug!(token = self.token, "Submission cancelled");
        }
    }
}

/// Drives login and sign-up submissions against an [`Authenticator`].
#[derive(Clone)]
pub struct AuthFlow {
    store: SessionStore,
    authenticator: Arc<dyn Authenticator>,
    min_password_length: usize,
    busy: BusySlot,
}

impl AuthFlow {
    pub fn new(
        store: SessionStore,
        authenticator: Arc<dyn Authenticator>,
        min_password_length: usize,
    ) -> Self {
        Self {
            store,
            authenticator,
            min_password_length,
            busy: BusySlot::default(),
        }
    }

    /// Flow backed by [`DemoAuthenticator`] with the configured latencies.
    pub fn from_config(store: SessionStore, config: &AuthConfig) -> Self {
        Self::new(
            store,
            Arc::new(DemoAuthenticator::from_config(config)),
            config.min_password_length,
        )
    }

    pub fn store(&self) -> &SessionStore {
        &self.store
    }

    /// True while a submission is in flight.
    pub fn is_busy(&self) -> bool {
        self.busy.is_held()
    }

    /// Starts a login. On success the session holds the returned identity.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn submit_login(&self, credentials: Credentials) -> Result<Submission<Identity>> {
        credentials.validate()?;

        let authenticator = Arc::clone(&self.authenticator);
        let store = self.store.clone();
        self.spawn(
            move || async move { authenticator.authenticate(&credentials).await },
            move |identity: &Identity| store.sign_in(identity.clone()),
        )
    }

    /// Starts a sign-up. Resolves to the view to show next; the session is
    /// left alone.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn submit_signup(&self, form: SignupForm) -> Result<Submission<View>> {
        form.validate(self.min_password_length)?;

        let authenticator = Arc::clone(&self.authenticator);
        self.spawn(
            move || async move {
                authenticator.register(&form).await?;
                info!(email = %form.email, "Account created");
                Ok(View::Login)
            },
            |_: &View| {},
        )
    }

    /// Runs `exchange` on a task, then `commit` on its successful outcome
    /// unless the submission was cancelled first.
    fn spawn<T, F, Fut, C>(&self, exchange: F, commit: C) -> Result<Submission<T>>
    where
        T: Send + 'static,
        F: FnOnce() -> Fut,
        Fut: std::future::Future<Output = Result<T>> + Send + 'static,
        C: FnOnce(&T) + Send + 'static,
    {
        let token = self.busy.acquire()?;
        let guard = BusyGuard {
            slot: self.busy.clone(),
            token,
        };
        let (cancel_tx, cancel_rx) = oneshot::channel::<()>();
        let cancelled = Arc::new(Mutex::new(false));
        let gate = Arc::clone(&cancelled);
        let exchange = exchange();

        let handle = tokio::spawn(async move {
            let _guard = guard;
            let value = tokio::select! {
                biased;
                _ = cancel_rx => Err(AppError::Cancelled),
                outcome = exchange => outcome,
            }?;
            commit_unless_cancelled(&gate, value, commit)
        });

        debug!(token, "Submission started");
        Ok(Submission {
            cancel: Some(cancel_tx),
            handle: Some(handle),
            cancelled,
            slot: self.busy.clone(),
            token,
        })
    }
}

fn commit_unless_cancelled<T>(gate: &Mutex<bool>, value: T, commit: impl FnOnce(&T)) -> Result<T> {
    let cancelled = gate.lock();
    if *cancelled {
        return Err(AppError::Cancelled);
    }
    commit(&value);
    Ok(value)
}
