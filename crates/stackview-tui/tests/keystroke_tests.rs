//! Integration tests that exercise App key handling via send_key()

mod helpers;

use crossterm::event::{KeyCode, KeyModifiers};
use helpers::{accept_copy, reject_copy, render_app, shop_app, shop_key};
use stackview_config::GlobalConfig;
use stackview_core::test_support::{full_stack, MockSource};
use stackview_core::StackStore;
use stackview_tui::{App, DetailRow, View};
use std::sync::Arc;

async fn press(app: &mut App, code: KeyCode) {
    app.send_key(code, KeyModifiers::NONE).await.unwrap();
}

/// Shop app with `service` already open
async fn open(service: &str) -> App {
    let mut app = shop_app();
    app.open_service(service);
    assert_eq!(app.view, View::ServiceDetail);
    app
}

fn focused(app: &App) -> Option<DetailRow> {
    app.detail.as_ref().and_then(|d| d.focused_row())
}

// ---------------------------------------------------------------------------
// Overview navigation
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_j_and_k_move_overview_selection() {
    let mut app = shop_app();
    assert_eq!(app.selected_service(), Some("api"));

    press(&mut app, KeyCode::Char('j')).await;
    assert_eq!(app.selected_service(), Some("db"));

    press(&mut app, KeyCode::Char('k')).await;
    press(&mut app, KeyCode::Char('k')).await;
    assert_eq!(
        app.selected_service(),
        Some("worker"),
        "k at the top should wrap to the last service"
    );
}

#[tokio::test]
async fn test_enter_opens_selected_service() {
    let mut app = shop_app();
    press(&mut app, KeyCode::Down).await;
    press(&mut app, KeyCode::Enter).await;

    assert_eq!(app.view, View::ServiceDetail);
    assert_eq!(app.detail.as_ref().unwrap().details.name, "db");
}

#[tokio::test]
async fn test_q_on_overview_quits() {
    let mut app = shop_app();
    press(&mut app, KeyCode::Char('q')).await;
    assert!(app.should_quit);
}

#[tokio::test]
async fn test_esc_on_detail_returns_to_overview() {
    let mut app = open("db").await;
    press(&mut app, KeyCode::Esc).await;

    assert_eq!(app.view, View::StackOverview);
    assert!(app.detail.is_none());
    assert!(!app.should_quit);
    assert_eq!(app.selected_service(), Some("db"));
}

// ---------------------------------------------------------------------------
// Detail page rows and sections
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_tab_jumps_between_sections() {
    let mut app = open("api").await;
    assert_eq!(focused(&app), Some(DetailRow::SwarmName));

    press(&mut app, KeyCode::Tab).await;
    assert_eq!(focused(&app), Some(DetailRow::Image));
    press(&mut app, KeyCode::Tab).await;
    assert_eq!(focused(&app), Some(DetailRow::EnvHeader));
    press(&mut app, KeyCode::Tab).await;
    assert_eq!(focused(&app), Some(DetailRow::NetworkAlias));

    press(&mut app, KeyCode::BackTab).await;
    assert_eq!(focused(&app), Some(DetailRow::EnvHeader));
}

#[tokio::test]
async fn test_reveal_toggles_only_focused_variable() {
    let mut app = open("api").await;
    press(&mut app, KeyCode::Tab).await;
    press(&mut app, KeyCode::Tab).await;
    press(&mut app, KeyCode::Char('j')).await;
    assert_eq!(focused(&app), Some(DetailRow::Env(0)));

    press(&mut app, KeyCode::Enter).await;
    let detail = app.detail.as_ref().unwrap();
    assert!(detail.is_revealed(0));
    assert!(!detail.is_revealed(1));
    assert!(!detail.is_revealed(2));

    press(&mut app, KeyCode::Char(' ')).await;
    assert!(!app.detail.as_ref().unwrap().is_revealed(0));
}

#[tokio::test]
async fn test_reveal_state_resets_when_page_reopens() {
    let mut app = open("api").await;
    app.detail.as_mut().unwrap().toggle_reveal(1);
    app.detail.as_mut().unwrap().toggle_config(0);

    press(&mut app, KeyCode::Esc).await;
    press(&mut app, KeyCode::Enter).await;

    let detail = app.detail.as_ref().unwrap();
    assert_eq!(detail.details.name, "api");
    assert!(detail.revealed.is_empty());
    assert_eq!(detail.expanded_config, None);
}

#[tokio::test]
async fn test_only_one_config_panel_open() {
    let mut app = open("api").await;
    // Configs is the last section, so going back from the top lands on it
    press(&mut app, KeyCode::BackTab).await;
    assert_eq!(focused(&app), Some(DetailRow::Config(0)));

    press(&mut app, KeyCode::Enter).await;
    assert_eq!(app.detail.as_ref().unwrap().expanded_config, Some(0));

    press(&mut app, KeyCode::Char('j')).await;
    press(&mut app, KeyCode::Enter).await;
    assert_eq!(app.detail.as_ref().unwrap().expanded_config, Some(1));

    press(&mut app, KeyCode::Enter).await;
    assert_eq!(app.detail.as_ref().unwrap().expanded_config, None);
}

// ---------------------------------------------------------------------------
// Clipboard
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_y_copies_focused_value() {
    let mut app = open("api").await;
    press(&mut app, KeyCode::Char('y')).await;

    assert_eq!(app.last_copied.as_deref(), Some("shop_k3f9_api"));
    assert_eq!(app.status_message.as_deref(), Some("Copied service name"));
}

#[tokio::test]
async fn test_copy_short_alias() {
    let mut app = open("api").await;
    press(&mut app, KeyCode::Tab).await;
    press(&mut app, KeyCode::Tab).await;
    press(&mut app, KeyCode::Tab).await;
    press(&mut app, KeyCode::Char('j')).await;
    assert_eq!(focused(&app), Some(DetailRow::GlobalAlias));

    press(&mut app, KeyCode::Char('c')).await;
    assert_eq!(app.last_copied.as_deref(), Some("k3f9_api"));
}

#[tokio::test]
async fn test_shift_y_copies_dotenv() {
    let mut app = open("api").await;
    press(&mut app, KeyCode::Char('Y')).await;

    assert_eq!(
        app.last_copied.as_deref(),
        Some("DATABASE_URL=\"postgres://shop@db/shop\"\nDEBUG=\"\"\nWORKERS=\"4\"")
    );
    assert_eq!(app.status_message.as_deref(), Some("Copied variables as .env"));
}

#[tokio::test]
async fn test_copy_failure_is_reported() {
    let mut app = open("api").await;
    app.copy_fn = reject_copy;
    press(&mut app, KeyCode::Char('y')).await;

    assert!(app.last_copied.is_none());
    assert!(app
        .status_message
        .as_deref()
        .unwrap()
        .starts_with("No clipboard command available"));
}

#[tokio::test]
async fn test_copy_on_row_without_value() {
    let mut app = open("api").await;
    // Volumes come right before configs
    press(&mut app, KeyCode::BackTab).await;
    press(&mut app, KeyCode::BackTab).await;
    assert_eq!(focused(&app), Some(DetailRow::Volume(0)));

    press(&mut app, KeyCode::Char('y')).await;
    assert!(app.last_copied.is_none());
    assert_eq!(
        app.status_message.as_deref(),
        Some("Nothing to copy on this row")
    );
}

// ---------------------------------------------------------------------------
// Redirects and reloads
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_missing_service_redirects_to_overview() {
    let mut app = shop_app();
    app.open_service("ghost");

    assert_eq!(app.view, View::StackOverview);
    assert!(app.detail.is_none());
    assert!(app.status_message.is_none());
}

async fn mock_app(service: Option<&str>) -> (App, MockSource) {
    let source = MockSource::new(full_stack());
    let store = Arc::new(StackStore::new(Arc::new(source.clone())));
    let mut app = App::new(
        store,
        GlobalConfig::default(),
        shop_key(),
        service.map(str::to_string),
    )
    .await
    .unwrap();
    app.copy_fn = accept_copy;
    (app, source)
}

#[tokio::test]
async fn test_new_opens_requested_service() {
    let (app, _) = mock_app(Some("worker")).await;
    assert_eq!(app.view, View::ServiceDetail);

    let (app, _) = mock_app(Some("nope")).await;
    assert_eq!(app.view, View::StackOverview);
}

#[tokio::test]
async fn test_reload_redirects_when_service_disappears() {
    let (mut app, source) = mock_app(Some("worker")).await;

    let mut stack = full_stack();
    stack.services.remove("worker");
    source.set_stack(Some(stack));

    press(&mut app, KeyCode::Char('r')).await;
    assert_eq!(app.view, View::StackOverview);
    assert_eq!(app.overview.services.len(), 2);
    assert_eq!(source.fetch_count(), 2);
}

#[tokio::test]
async fn test_reload_keeps_reveal_state() {
    let (mut app, source) = mock_app(Some("api")).await;
    app.detail.as_mut().unwrap().toggle_reveal(0);

    let mut stack = full_stack();
    stack.services.get_mut("api").unwrap().environment[0].value = "postgres://new".to_string();
    source.set_stack(Some(stack));

    press(&mut app, KeyCode::Char('r')).await;
    let detail = app.detail.as_ref().unwrap();
    assert!(detail.is_revealed(0));
    assert_eq!(detail.details.environment[0].value, "postgres://new");
}

#[tokio::test]
async fn test_failed_reload_keeps_current_page() {
    let (mut app, source) = mock_app(Some("api")).await;
    source.set_stack(None);

    press(&mut app, KeyCode::Char('r')).await;
    assert_eq!(app.view, View::ServiceDetail);
    assert!(app
        .status_message
        .as_deref()
        .unwrap()
        .starts_with("Reload failed: Stack not found"));
}

#[tokio::test]
async fn test_tick_without_refresh_interval_does_not_fetch() {
    let (mut app, source) = mock_app(None).await;
    app.config.tui.refresh_secs = 0;

    app.on_tick().await;
    assert_eq!(source.fetch_count(), 1);
}

// ---------------------------------------------------------------------------
// Help
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_help_returns_to_previous_view() {
    let mut app = open("db").await;
    press(&mut app, KeyCode::Char('?')).await;
    assert_eq!(app.view, View::Help);

    let output = render_app(&mut app, 120, 40);
    assert!(output.contains("Service Page"));

    press(&mut app, KeyCode::Char('x')).await;
    assert_eq!(app.view, View::ServiceDetail);
}
