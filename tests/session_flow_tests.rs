//! Session store, route guard and navigator working together.

use chrono::NaiveDate;
use hireai::auth::{AuthFlow, Credentials, DemoAuthenticator, IdentityTemplate, SessionState};
use hireai::routing::{PageState, SIDEBAR};
use hireai::{AppError, GuardDecision, HireConfig, Navigator, RouteGuard, SessionStore, View};
use rstest::rstest;
use std::sync::Arc;
use std::time::Duration;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 5, 15).unwrap()
}

fn navigator(store: &SessionStore) -> Navigator {
    Navigator::new(store, RouteGuard::default()).with_clock(today)
}

fn protected_views() -> impl Iterator<Item = View> {
    View::ALL.into_iter().filter(View::is_protected)
}

#[rstest]
#[case("recruiter@example.com", "hunter22")]
#[case("a@b", "x")]
#[case("  spaced@example.com ", "pw")]
#[case("   ", " ")]
fn test_login_sets_identity_email(#[case] email: &str, #[case] password: &str) {
    let store = SessionStore::new();
    let identity = store.login(email, password).unwrap();

    assert_eq!(store.current().state(), SessionState::Authenticated);
    assert_eq!(identity.email, email);
}

#[rstest]
#[case("", "pw")]
#[case("a@example.com", "")]
fn test_empty_field_is_validation_error(#[case] email: &str, #[case] password: &str) {
    let store = SessionStore::new();
    let err = store.login(email, password).unwrap_err();

    assert_eq!(err.to_string(), "Please fill in all fields");
    assert!(matches!(err, AppError::Validation(_)));
    assert!(!store.is_authenticated());
}

#[test]
fn test_logout_twice_equals_logout_once() {
    let store = SessionStore::new();
    store.login("a@example.com", "pw").unwrap();

    store.logout();
    let once = store.current();
    store.logout();

    assert_eq!(store.current(), once);
    assert_eq!(once.state(), SessionState::Anonymous);
}

#[test]
fn test_guard_never_mounts_protected_for_anonymous() {
    let store = SessionStore::new();
    let guard = RouteGuard::default();

    for view in protected_views() {
        let decision = guard.check(view, &store.current());
        assert_eq!(
            decision,
            GuardDecision::Redirect {
                from: view,
                to: View::Login
            }
        );
    }
}

#[test]
fn test_guard_ignores_role() {
    let guard = RouteGuard::default();
    for role in ["admin", "recruiter", "interviewer"] {
        let mut config = HireConfig::default();
        config.auth.demo_role = role.to_string();
        let store = SessionStore::with_template(IdentityTemplate::from_config(&config.auth));
        store.login("a@example.com", "pw").unwrap();

        for view in protected_views() {
            assert_eq!(guard.check(view, &store.current()), GuardDecision::Mount { view });
        }
    }
}

#[test]
fn test_configured_landing_fallback() {
    let mut config = HireConfig::default();
    config.routing.fallback_view = View::Landing;

    let store = SessionStore::new();
    let mut nav = Navigator::new(&store, RouteGuard::new(config.routing.fallback_view));
    assert_eq!(nav.navigate("/jobs").view(), View::Landing);
}

#[test]
fn test_reactive_redirect_after_logout() {
    let store = SessionStore::new();
    let mut nav = navigator(&store);

    store.login("a@example.com", "pw").unwrap();
    assert_eq!(nav.navigate("/candidates").view(), View::Candidates);
    nav.select_stage("offer").unwrap();

    store.logout();
    let decision = nav.sync().expect("logout should redirect");

    assert_eq!(decision.view(), View::Login);
    assert_eq!(nav.page(), PageState::Static);
}

#[tokio::test]
async fn test_session_changed_follows_other_handles() {
    let store = SessionStore::new();
    store.login("a@example.com", "pw").unwrap();
    let mut nav = navigator(&store);
    nav.navigate("/jobs");

    let other = store.clone();
    tokio::spawn(async move {
        other.logout();
    });

    let decision = nav.session_changed().await.unwrap();
    assert_eq!(
        decision,
        GuardDecision::Redirect {
            from: View::Jobs,
            to: View::Login
        }
    );
}

#[tokio::test]
async fn test_login_elsewhere_leaves_login_page_mounted() {
    let store = SessionStore::new();
    let mut nav = navigator(&store);
    nav.navigate("/login");

    let other = store.clone();
    tokio::spawn(async move {
        other.login("a@example.com", "pw").unwrap();
    });

    let decision = nav.session_changed().await.unwrap();
    assert_eq!(decision, GuardDecision::Mount { view: View::Login });
    assert_eq!(nav.current(), View::Login);
}

#[tokio::test(start_paused = true)]
async fn test_cancelled_login_leaves_session_anonymous() {
    let store = SessionStore::new();
    let flow = AuthFlow::new(
        store.clone(),
        Arc::new(DemoAuthenticator::new(
            IdentityTemplate::default(),
            Duration::from_millis(1500),
            Duration::from_millis(1500),
        )),
        8,
    );
    let mut nav = navigator(&store);
    nav.navigate("/login");

    nav.start_login(&flow, Credentials::new("a@example.com", "pw"))
        .unwrap();
    assert!(matches!(
        nav.start_login(&flow, Credentials::new("a@example.com", "pw")),
        Err(AppError::Busy)
    ));

    nav.navigate("/signup");
    tokio::time::sleep(Duration::from_secs(10)).await;

    assert!(!store.is_authenticated());
    assert!(!flow.is_busy());
    assert_eq!(nav.current(), View::Signup);
}

#[tokio::test(start_paused = true)]
async fn test_completed_login_moves_to_dashboard() {
    let store = SessionStore::new();
    let flow = AuthFlow::from_config(store.clone(), &HireConfig::default().auth);
    let mut nav = navigator(&store);
    nav.navigate("/settings");

    nav.start_login(&flow, Credentials::new("a@example.com", "pw"))
        .unwrap();
    let decision = nav.finish_pending().await.unwrap().unwrap();

    assert_eq!(decision.view(), View::Dashboard);
    assert_eq!(store.identity().unwrap().display_name, "Demo User");
}

#[test]
fn test_sidebar_targets() {
    let targets: Vec<View> = SIDEBAR.iter().map(|link| link.target()).collect();
    assert_eq!(
        targets,
        vec![
            View::Dashboard,
            View::Jobs,
            View::Candidates,
            View::Landing,
            View::Interviews,
            View::Landing,
            View::Settings,
        ]
    );
}
