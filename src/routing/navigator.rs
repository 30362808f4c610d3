//! Reactive navigation
//!
//! The [`Navigator`] owns the mounted view and that view's transient
//! [`PageState`]. It subscribes to the session, so a logout while a protected
//! view is mounted redirects straight away instead of waiting for the next
//! navigation. Page state never outlives a navigation: every mount starts
//! from defaults, and a login or sign-up still in flight is cancelled when
//! its page is left.

use chrono::{Local, NaiveDate};
use parking_lot::Mutex;
use tokio::sync::watch;
use tracing::{debug, info, warn};

use super::{GuardDecision, RouteGuard, View};
use crate::auth::{AuthFlow, Credentials, Session, SessionStore, SignupForm, Submission};
use crate::filters::{FilterKey, InterviewView, JobFilter, SettingsTab, StageFilter, UnknownKeyPolicy};
use crate::types::{AppError, Identity, Result};

/// Filter selection of the mounted page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageState {
    /// Pages without a selectable filter.
    Static,
    Candidates { stage: StageFilter },
    Interviews { view: InterviewView, selected_date: NaiveDate },
    Jobs { status: JobFilter },
    Settings { tab: SettingsTab },
}

impl PageState {
    /// Defaults a page starts from when mounted.
    pub fn initial(view: View, today: NaiveDate) -> Self {
        match view {
            View::Candidates => PageState::Candidates {
                stage: StageFilter::default(),
            },
            View::Interviews => PageState::Interviews {
                view: InterviewView::default(),
                selected_date: today,
            },
            View::Jobs => PageState::Jobs {
                status: JobFilter::default(),
            },
            View::Settings => PageState::Settings {
                tab: SettingsTab::default(),
            },
            View::Landing | View::Login | View::Signup | View::Dashboard => PageState::Static,
        }
    }
}

enum Pending {
    Login(Submission<Identity>),
    Signup(Submission<View>),
}

type Clock = Box<dyn Fn() -> NaiveDate + Send + Sync>;

pub struct Navigator {
    guard: RouteGuard,
    session: watch::Receiver<Session>,
    current: View,
    page: PageState,
    policy: UnknownKeyPolicy,
    clock: Clock,
    pending: Mutex<Option<Pending>>,
}

impl Navigator {
    /// Starts on the landing page.
    pub fn new(store: &SessionStore, guard: RouteGuard) -> Self {
        Self {
            guard,
            session: store.subscribe(),
            current: View::Landing,
            page: PageState::Static,
            policy: UnknownKeyPolicy::default(),
            clock: Box::new(|| Local::now().date_naive()),
            pending: Mutex::new(None),
        }
    }

    /// Pin "today" for date-relative pages.
    pub fn with_clock(mut self, clock: impl Fn() -> NaiveDate + Send + Sync + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    pub fn with_policy(mut self, policy: UnknownKeyPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn current(&self) -> View {
        self.current
    }

    pub fn page(&self) -> PageState {
        self.page
    }

    pub fn today(&self) -> NaiveDate {
        (self.clock)()
    }

    pub fn session(&self) -> Session {
        self.session.borrow().clone()
    }

    /// Navigate to `path`, running the guard against the live session.
    pub fn navigate(&mut self, path: &str) -> GuardDecision {
        self.go(View::resolve(path))
    }

    pub fn go(&mut self, requested: View) -> GuardDecision {
        let decision = self.guard.check(requested, &self.session.borrow_and_update());
        self.apply(decision);
        decision
    }

    /// Re-run the guard if the session changed since it was last read.
    /// Returns the decision only when it changed the mounted view.
    pub fn sync(&mut self) -> Option<GuardDecision> {
        match self.session.has_changed() {
            Ok(true) => self.recheck(),
            _ => None,
        }
    }

    /// Wait for the next session change and re-run the guard.
    ///
    /// Returns `None` once the session store is gone; otherwise the decision
    /// for the mounted view, which may leave it in place.
    pub async fn session_changed(&mut self) -> Option<GuardDecision> {
        self.session.changed().await.ok()?;
        let decision = self.guard.check(self.current, &self.session.borrow_and_update());
        if decision.view() != self.current {
            self.apply(decision);
        }
        Some(decision)
    }

    fn recheck(&mut self) -> Option<GuardDecision> {
        let decision = self.guard.check(self.current, &self.session.borrow_and_update());
        if decision.view() == self.current {
            return None;
        }
        self.apply(decision);
        Some(decision)
    }

    fn apply(&mut self, decision: GuardDecision) {
        if self.pending.lock().take().is_some() {
            debug!(from = %self.current, "Left page with a submission in flight");
        }

        match decision {
            GuardDecision::Mount { view } => info!(view = %view, "Mounted"),
            GuardDecision::Redirect { from, to } => {
                warn!(from = %from, to = %to, "Redirected by route guard")
            }
        }

        self.current = decision.view();
        self.page = PageState::initial(self.current, self.today());
    }

    // ============= Page state =============

    pub fn select_stage(&mut self, raw: &str) -> Result<StageFilter> {
        let parsed = StageFilter::parse_with(raw, self.policy)?;
        match &mut self.page {
            PageState::Candidates { stage } => {
                *stage = parsed;
                Ok(parsed)
            }
            _ => Err(self.not_here("stage filter", View::Candidates)),
        }
    }

    pub fn select_job_status(&mut self, raw: &str) -> Result<JobFilter> {
        let parsed = JobFilter::parse_with(raw, self.policy)?;
        match &mut self.page {
            PageState::Jobs { status } => {
                *status = parsed;
                Ok(parsed)
            }
            _ => Err(self.not_here("job status filter", View::Jobs)),
        }
    }

    pub fn select_interview_view(&mut self, raw: &str) -> Result<InterviewView> {
        let parsed = InterviewView::parse_with(raw, self.policy)?;
        match &mut self.page {
            PageState::Interviews { view, .. } => {
                *view = parsed;
                Ok(parsed)
            }
            _ => Err(self.not_here("interview view", View::Interviews)),
        }
    }

    pub fn select_date(&mut self, date: NaiveDate) -> Result<NaiveDate> {
        match &mut self.page {
            PageState::Interviews { selected_date, .. } => {
                *selected_date = date;
                Ok(date)
            }
            _ => Err(self.not_here("date selection", View::Interviews)),
        }
    }

    pub fn select_tab(&mut self, raw: &str) -> Result<SettingsTab> {
        let parsed = SettingsTab::parse_with(raw, self.policy)?;
        match &mut self.page {
            PageState::Settings { tab } => {
                *tab = parsed;
                Ok(parsed)
            }
            _ => Err(self.not_here("settings tab", View::Settings)),
        }
    }

    fn not_here(&self, what: &str, home: View) -> AppError {
        AppError::InvalidInput(format!(
            "{} is only available on {}, not {}",
            what, home, self.current
        ))
    }

    // ============= Submissions =============

    /// Submit the login form of the mounted login page.
    pub fn start_login(&self, flow: &AuthFlow, credentials: Credentials) -> Result<()> {
        if self.current != View::Login {
            return Err(self.not_here("login", View::Login));
        }
        let submission = flow.submit_login(credentials)?;
        *self.pending.lock() = Some(Pending::Login(submission));
        Ok(())
    }

    /// Submit the sign-up form of the mounted sign-up page.
    pub fn start_signup(&self, flow: &AuthFlow, form: SignupForm) -> Result<()> {
        if self.current != View::Signup {
            return Err(self.not_here("sign-up", View::Signup));
        }
        let submission = flow.submit_signup(form)?;
        *self.pending.lock() = Some(Pending::Signup(submission));
        Ok(())
    }

    pub fn has_pending(&self) -> bool {
        self.pending.lock().is_some()
    }

    /// Wait for the in-flight submission and follow where it leads: a login
    /// moves on to the dashboard, a sign-up to the login page.
    ///
    /// Returns `None` when nothing is in flight.
    pub async fn finish_pending(&mut self) -> Option<Result<GuardDecision>> {
        let pending = self.pending.lock().take()?;

        let outcome = match pending {
            Pending::Login(submission) => submission
                .wait()
                .await
                .map(|_| self.go(View::Dashboard)),
            Pending::Signup(submission) => submission.wait().await.map(|next| self.go(next)),
        };
        Some(outcome)
    }
}
