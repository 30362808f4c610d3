//! Command handlers
//!
//! Each page command signs in first when credentials were supplied, then
//! navigates through the [`Navigator`] so the route guard decides what gets
//! shown. A redirect is reported and the command ends successfully.

use anyhow::{anyhow, Context, Result};
use serde_json::json;
use std::path::Path;
use std::sync::Arc;

use super::output::{relative_age, stars, Output};
use super::{Cli, Commands};
use crate::auth::{AuthFlow, Credentials, IdentityTemplate, SessionStore, SignupForm};
use crate::filters::interviews::parse_selected_date;
use crate::filters::{
    date_strip, filter_candidates, filter_interviews, filter_jobs, job_badges, stage_badges,
    FilterKey, InterviewView, SettingsTab,
};
use crate::fixtures::{DashboardOverview, MockData, RecordSource};
use crate::routing::{GuardDecision, Navigator, PageState, RouteGuard, View, SIDEBAR};
use crate::types::{InterviewStatus, Rating};
use crate::utils::toml_config::HireConfig;

/// Everything a command needs: the session, the navigator and the records.
pub struct App {
    store: SessionStore,
    flow: AuthFlow,
    navigator: Navigator,
    records: Arc<dyn RecordSource>,
    output: Output,
    json: bool,
    email: Option<String>,
    password: Option<String>,
}

impl App {
    pub fn new(cli: &Cli, config: &HireConfig, output: Output) -> Self {
        let store = SessionStore::with_template(IdentityTemplate::from_config(&config.auth));
        let flow = AuthFlow::from_config(store.clone(), &config.auth);
        let mut navigator = Navigator::new(&store, RouteGuard::new(config.routing.fallback_view))
            .with_policy(config.filters.unknown_key);

        let records: Arc<dyn RecordSource> = match cli.today {
            Some(today) => {
                navigator = navigator.with_clock(move || today);
                Arc::new(MockData::anchored(today))
            }
            None => Arc::new(MockData::default()),
        };

        Self {
            store,
            flow,
            navigator,
            records,
            output,
            json: cli.json,
            email: cli.email.clone(),
            password: cli.password.clone(),
        }
    }

    pub async fn run(&mut self, command: Option<Commands>) -> Result<()> {
        match command {
            None => self.landing(),
            Some(Commands::Open { path }) => self.open(&path).await,
            Some(Commands::Login) => self.login().await,
            Some(Commands::Signup { name }) => self.signup(name).await,
            Some(Commands::Dashboard) => self.dashboard().await,
            Some(Commands::Jobs { status }) => self.jobs(&status).await,
            Some(Commands::Candidates { stage }) => self.candidates(&stage).await,
            Some(Commands::Interviews { view, date }) => self.interviews(&view, date.as_deref()).await,
            Some(Commands::Settings { tab }) => self.settings(&tab).await,
            Some(Commands::Init { .. }) | Some(Commands::Config { .. }) => {
                Err(anyhow!("init and config are handled before the app starts"))
            }
        }
    }

    fn credentials(&self) -> Credentials {
        Credentials::new(
            self.email.clone().unwrap_or_default(),
            self.password.clone().unwrap_or_default(),
        )
    }

    /// Sign in through the login page when both credentials were given.
    async fn sign_in_if_possible(&mut self) -> Result<()> {
        if self.store.is_authenticated() || self.email.is_none() || self.password.is_none() {
            return Ok(());
        }

        self.navigator.go(View::Login);
        self.navigator.start_login(&self.flow, self.credentials())?;
        if let Some(outcome) = self.navigator.finish_pending().await {
            outcome.context("Sign-in failed")?;
        }
        Ok(())
    }

    /// Navigate to a protected page. Returns false when the guard redirected.
    async fn enter(&mut self, view: View) -> Result<bool> {
        self.sign_in_if_possible().await?;
        let decision = self.navigator.go(view);
        if decision.is_redirect() {
            self.report(decision)?;
            return Ok(false);
        }
        Ok(true)
    }

    fn report(&self, decision: GuardDecision) -> Result<()> {
        if self.json {
            self.output.json(&decision)?;
            return Ok(());
        }

        match decision {
            GuardDecision::Mount { view } => {
                self.output.success(&format!("Mounted {}", view));
                if let Some(title) = view.title() {
                    self.output.kv("Title", title);
                }
            }
            GuardDecision::Redirect { from, to } => {
                self.output
                    .warning(&format!("Redirected from {} to {}", from, to));
                if from.is_protected() {
                    self.output
                        .hint("Pass --email and --password (or HIREAI_EMAIL/HIREAI_PASSWORD) to sign in");
                }
            }
        }
        Ok(())
    }

    fn landing(&self) -> Result<()> {
        if self.json {
            let routes: Vec<_> = View::ALL
                .iter()
                .map(|view| json!({ "path": view.path(), "protected": view.is_protected() }))
                .collect();
            self.output.json(&json!({ "routes": routes, "sidebar": SIDEBAR }))?;
            return Ok(());
        }

        self.output.banner();
        self.output.header("Pages");
        for view in View::ALL {
            let note = if view.is_protected() { "sign-in required" } else { "public" };
            self.output
                .list_item(&format!("{:<12} {}", view.path(), note));
        }
        self.output.subheader("Sidebar");
        for link in SIDEBAR {
            self.output
                .list_item(&format!("{:<14} {} -> {}", link.label, link.path, link.target()));
        }
        self.output.hint("Run hireai --help to list commands");
        Ok(())
    }

    async fn open(&mut self, path: &str) -> Result<()> {
        self.sign_in_if_possible().await?;
        let decision = self.navigator.navigate(path);
        self.report(decision)
    }

    async fn login(&mut self) -> Result<()> {
        self.navigator.go(View::Login);
        self.navigator.start_login(&self.flow, self.credentials())?;
        if !self.json {
            self.output.info("Signing in...");
        }

        let decision = match self.navigator.finish_pending().await {
            Some(outcome) => outcome?,
            None => return Err(anyhow!("login did not start")),
        };
        let identity = self
            .store
            .identity()
            .ok_or_else(|| anyhow!("session is still anonymous after login"))?;

        if self.json {
            self.output
                .json(&json!({ "identity": identity, "view": decision.view() }))?;
            return Ok(());
        }

        self.output.success("Signed in");
        self.output.kv("Name", &identity.display_name);
        self.output.kv("Email", &identity.email);
        self.output.kv("Role", &identity.role.to_string());
        self.output.kv("Initials", &identity.initials());
        self.output.info(&format!("Now at {}", decision.view()));
        Ok(())
    }

    async fn signup(&mut self, name: String) -> Result<()> {
        let form = SignupForm::new(
            name,
            self.email.clone().unwrap_or_default(),
            self.password.clone().unwrap_or_default(),
        );
        let email = form.email.clone();

        self.navigator.go(View::Signup);
        self.navigator.start_signup(&self.flow, form)?;
        if !self.json {
            self.output.info("Creating account...");
        }

        let decision = match self.navigator.finish_pending().await {
            Some(outcome) => outcome?,
            None => return Err(anyhow!("sign-up did not start")),
        };

        if self.json {
            self.output
                .json(&json!({ "created": email, "view": decision.view() }))?;
            return Ok(());
        }

        self.output.success(&format!("Account created for {}", email));
        self.output
            .info(&format!("Continue at {} to sign in", decision.view()));
        Ok(())
    }

    async fn dashboard(&mut self) -> Result<()> {
        if !self.enter(View::Dashboard).await? {
            return Ok(());
        }

        let overview = self.records.dashboard();
        let greeting = DashboardOverview::greeting(self.store.identity().as_ref());

        if self.json {
            self.output.json(&json!({
                "greeting": greeting,
                "overview": overview,
                "funnel_shares": overview.funnel_shares(),
            }))?;
            return Ok(());
        }

        self.output.header(View::Dashboard.title().unwrap_or("Dashboard"));
        self.output.info(&greeting);

        self.output.subheader("Overview");
        for stat in &overview.stats {
            self.output.kv(stat.label, stat.value);
        }

        self.output.subheader("Recruitment Funnel");
        for (slice, (_, share)) in overview.funnel.iter().zip(overview.funnel_shares()) {
            self.output
                .kv(slice.name, &format!("{} ({}%)", slice.value, share));
        }

        self.output.subheader("Applications & Interviews");
        self.output
            .table_header(&["Month", "Applications", "Interviews"]);
        for month in &overview.monthly {
            self.output.table_row(&[
                month.month,
                &month.applications.to_string(),
                &month.interviews.to_string(),
            ]);
        }

        self.output.subheader("Recent Activity");
        for activity in &overview.recent_activity {
            self.output.list_item(&format!(
                "{} - {} ({}, {})",
                activity.name, activity.position, activity.status, activity.when
            ));
        }

        self.output.subheader("Upcoming Interviews");
        for slot in &overview.upcoming {
            self.output.list_item(&format!(
                "{} - {} ({}, {})",
                slot.name, slot.position, slot.kind, slot.when
            ));
        }
        Ok(())
    }

    async fn jobs(&mut self, status: &str) -> Result<()> {
        if !self.enter(View::Jobs).await? {
            return Ok(());
        }
        let filter = self.navigator.select_job_status(status)?;
        let today = self.navigator.today();

        let jobs = self.records.jobs();
        let visible = filter_jobs(&jobs, filter);
        let badges = job_badges(&jobs);

        if self.json {
            self.output.json(&json!({
                "status": filter.key(),
                "badges": badges,
                "jobs": visible,
            }))?;
            return Ok(());
        }

        self.output.header(View::Jobs.title().unwrap_or("Jobs"));
        self.output.chips(
            &badges
                .iter()
                .map(|badge| (format!("{} ({})", badge.label, badge.count), badge.key == filter))
                .collect::<Vec<_>>(),
        );
        self.output.newline();
        self.output.table_header(&[
            "Title",
            "Department",
            "Location",
            "Type",
            "Applicants",
            "Status",
            "Posted",
        ]);
        for job in &visible {
            let posted = job
                .published_at
                .map(|date| relative_age(date, today))
                .unwrap_or_else(|| "Not published".to_string());
            self.output.table_row(&[
                &job.title,
                &job.department,
                &job.location,
                job.employment_type.label(),
                &job.applicant_count.to_string(),
                job.status.label(),
                &posted,
            ]);
        }
        if visible.is_empty() {
            self.output.info("No jobs match this filter");
        }
        Ok(())
    }

    async fn candidates(&mut self, stage: &str) -> Result<()> {
        if !self.enter(View::Candidates).await? {
            return Ok(());
        }
        let filter = self.navigator.select_stage(stage)?;
        let today = self.navigator.today();

        let candidates = self.records.candidates();
        let visible = filter_candidates(&candidates, filter);
        let badges = stage_badges(&candidates);

        if self.json {
            self.output.json(&json!({
                "stage": filter.key(),
                "badges": badges,
                "candidates": visible,
            }))?;
            return Ok(());
        }

        self.output
            .header(View::Candidates.title().unwrap_or("Candidates"));
        self.output.chips(
            &badges
                .iter()
                .map(|badge| (format!("{} ({})", badge.label, badge.count), badge.key == filter))
                .collect::<Vec<_>>(),
        );
        self.output.newline();
        self.output
            .table_header(&["Name", "Position", "Stage", "Applied", "Rating"]);
        for candidate in &visible {
            self.output.table_row(&[
                &candidate.name,
                &candidate.position,
                candidate.stage.label(),
                &relative_age(candidate.applied_at, today),
                &stars(candidate.rating.value(), Rating::MAX),
            ]);
        }
        if visible.is_empty() {
            self.output.info("No candidates at this stage");
        }
        Ok(())
    }

    async fn interviews(&mut self, view: &str, date: Option<&str>) -> Result<()> {
        if !self.enter(View::Interviews).await? {
            return Ok(());
        }
        self.navigator.select_interview_view(view)?;
        if let Some(raw) = date {
            self.navigator.select_date(parse_selected_date(raw)?)?;
        }

        let PageState::Interviews {
            view,
            selected_date,
        } = self.navigator.page()
        else {
            return Err(anyhow!("interview page state lost"));
        };
        let today = self.navigator.today();

        let interviews = self.records.interviews(today);
        let visible = filter_interviews(&interviews, view, selected_date, today);
        let strip = date_strip(today);

        if self.json {
            self.output.json(&json!({
                "view": view.key(),
                "today": today,
                "selected_date": selected_date,
                "date_strip": strip,
                "interviews": visible,
            }))?;
            return Ok(());
        }

        self.output
            .header(View::Interviews.title().unwrap_or("Interviews"));
        self.output.chips(
            &[InterviewView::Upcoming, InterviewView::Past]
                .iter()
                .map(|option| (option.label().to_string(), *option == view))
                .collect::<Vec<_>>(),
        );
        self.output.chips(
            &strip
                .iter()
                .map(|chip| {
                    let marker = if chip.is_today { "*" } else { "" };
                    (
                        format!("{} {}{}", chip.weekday, chip.day_number, marker),
                        chip.date == selected_date,
                    )
                })
                .collect::<Vec<_>>(),
        );
        self.output.newline();
        self.output
            .table_header(&["Candidate", "Date", "Time", "Mode", "Interviewer", "Status"]);
        for interview in &visible {
            let status = match interview.status {
                InterviewStatus::Scheduled => "Scheduled",
                InterviewStatus::Completed => "Completed",
            };
            self.output.table_row(&[
                &interview.candidate.name,
                &interview.date.format("%b %-d, %Y").to_string(),
                &interview.time.to_string(),
                interview.mode.label(),
                &interview.interviewer.name,
                status,
            ]);
        }
        if visible.is_empty() {
            self.output.info("No interviews for this selection");
        }
        Ok(())
    }

    async fn settings(&mut self, tab: &str) -> Result<()> {
        if !self.enter(View::Settings).await? {
            return Ok(());
        }
        let tab = self.navigator.select_tab(tab)?;
        let panel = tab.panel();

        if self.json {
            self.output
                .json(&json!({ "tab": tab.key(), "label": tab.label(), "panel": panel }))?;
            return Ok(());
        }

        self.output
            .header(View::Settings.title().unwrap_or("Settings"));
        self.output.chips(
            &SettingsTab::keys()
                .iter()
                .map(|option| (option.label().to_string(), *option == tab))
                .collect::<Vec<_>>(),
        );
        match panel {
            Some(panel) => {
                self.output.subheader(panel.title);
                for section in panel.sections {
                    self.output.list_item(section);
                }
            }
            None => self
                .output
                .info(&format!("{} settings are coming soon", tab.label())),
        }
        Ok(())
    }
}

/// `hireai config`: print the effective configuration, or check the file.
pub fn show_config(path: &Path, config: &HireConfig, validate: bool, output: &Output, as_json: bool) -> Result<()> {
    if validate {
        HireConfig::load(path)
            .with_context(|| format!("{} is not valid", path.display()))?;
        output.success(&format!("{} is valid", path.display()));
        return Ok(());
    }

    if as_json {
        output.json(config)?;
        return Ok(());
    }

    output.header("Configuration");
    output.kv("File", &path.display().to_string());
    if !path.exists() {
        output.warning("File not found, showing defaults");
    }

    output.subheader("App");
    output.kv("log_level", &config.app.log_level);
    output.kv("log_format", &format!("{:?}", config.app.log_format).to_lowercase());

    output.subheader("Auth");
    output.kv("login_latency_ms", &config.auth.login_latency_ms.to_string());
    output.kv("signup_latency_ms", &config.auth.signup_latency_ms.to_string());
    output.kv("min_password_length", &config.auth.min_password_length.to_string());
    output.kv("demo_display_name", &config.auth.demo_display_name);
    output.kv("demo_role", &config.auth.role().to_string());

    output.subheader("Routing");
    output.kv("fallback_view", config.routing.fallback_view.path());

    output.subheader("Filters");
    output.kv("unknown_key", &format!("{:?}", config.filters.unknown_key).to_lowercase());
    Ok(())
}
