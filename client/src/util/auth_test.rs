use super::*;
use crate::test_support::sample_user;

fn state(user: Option<User>, loading: bool) -> SessionState {
    SessionState { user, loading }
}

#[test]
fn should_redirect_unauth_when_not_loading_and_user_missing() {
    assert!(should_redirect_unauth(&state(None, false)));
}

#[test]
fn should_not_redirect_while_loading() {
    assert!(!should_redirect_unauth(&state(None, true)));
}

#[test]
fn should_not_redirect_when_user_exists() {
    assert!(!should_redirect_unauth(&state(Some(sample_user()), false)));
}

#[test]
fn dashboard_waits_while_loading() {
    assert_eq!(DashboardView::resolve(&state(None, true), false), DashboardView::Waiting);
    assert_eq!(DashboardView::resolve(&SessionState::default(), false), DashboardView::Waiting);
}

#[test]
fn dashboard_redirects_when_settled_without_user() {
    assert_eq!(DashboardView::resolve(&state(None, false), false), DashboardView::Redirect);
}

#[test]
fn dashboard_renders_profile_for_authenticated_user() {
    assert_eq!(
        DashboardView::resolve(&state(Some(sample_user()), false), false),
        DashboardView::Profile(sample_user())
    );
}

#[test]
fn signing_out_wins_over_every_session_state() {
    for s in [state(None, true), state(None, false), state(Some(sample_user()), false)] {
        assert_eq!(DashboardView::resolve(&s, true), DashboardView::SigningOut);
    }
}

#[test]
fn route_paths() {
    assert_eq!(LOGIN_PATH, "/auth");
    assert_eq!(DASHBOARD_PATH, "/dashboard");
}
