//! Headless unit tests for the [`GameState`] state machine.
//!
//! These tests use [`MinimalPlugins`] — no window, no rendering, no audio —
//! so they run fast and deterministically in CI.
//!
//! Covered scenarios:
//! 1. Default initial state is `MainMenu`.
//! 2. Every legal transition in the screen flow is reachable.
//! 3. States persist across frames with no new transition request.
//! 4. The ESC handlers only fire in the states they are gated to, so keys
//!    pressed on the wrong screen change nothing.

use bevy::prelude::*;
use bevy::state::app::StatesPlugin;
use starfall::menu::{pause_resume_input_system, toggle_pause_system, GameState};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Build a minimal headless app with just the state registered.
///
/// `MinimalPlugins` provides the required scheduling infrastructure.
/// `StatesPlugin` adds the `StateTransition` schedule needed by `init_state`.
fn app_with_default_state() -> App {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, StatesPlugin));
    app.init_state::<GameState>();
    app
}

/// Build a headless app with the keyboard resource and both ESC handlers
/// registered exactly as the game registers them (state-gated).
fn app_with_esc_handlers(initial: GameState) -> App {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, StatesPlugin));
    app.insert_state(initial);
    app.init_resource::<ButtonInput<KeyCode>>();
    app.add_systems(
        Update,
        (
            toggle_pause_system.run_if(in_state(GameState::Playing)),
            pause_resume_input_system.run_if(in_state(GameState::Paused)),
        ),
    );
    app
}

fn current_state(app: &App) -> GameState {
    app.world().resource::<State<GameState>>().get().clone()
}

fn request(app: &mut App, state: GameState) {
    app.world_mut()
        .resource_mut::<NextState<GameState>>()
        .set(state);
    app.update();
}

fn press_key(app: &mut App, key: KeyCode) {
    app.world_mut()
        .resource_mut::<ButtonInput<KeyCode>>()
        .press(key);
    app.update();
    // Without InputPlugin nothing releases keys or clears the just-pressed
    // edge for us, and press() on a still-held key would not re-trigger it.
    app.world_mut()
        .resource_mut::<ButtonInput<KeyCode>>()
        .reset_all();
    app.update();
}

// ── Tests ─────────────────────────────────────────────────────────────────────

/// The default variant of `GameState` is `MainMenu`.
#[test]
fn default_state_is_main_menu() {
    let mut app = app_with_default_state();
    app.update(); // run one frame so StateTransition fires
    assert_eq!(current_state(&app), GameState::MainMenu);
}

/// The full menu flow from the transition table is reachable step by step.
#[test]
fn menu_flow_walks_the_transition_table() {
    let mut app = app_with_default_state();
    app.update();

    // MainMenu → Settings → MainMenu
    request(&mut app, GameState::Settings);
    assert_eq!(current_state(&app), GameState::Settings);
    request(&mut app, GameState::MainMenu);
    assert_eq!(current_state(&app), GameState::MainMenu);

    // MainMenu → QuitConfirm → (NO) → MainMenu
    request(&mut app, GameState::QuitConfirm);
    assert_eq!(current_state(&app), GameState::QuitConfirm);
    request(&mut app, GameState::MainMenu);
    assert_eq!(current_state(&app), GameState::MainMenu);

    // MainMenu → ShipSelect → Playing
    request(&mut app, GameState::ShipSelect);
    assert_eq!(current_state(&app), GameState::ShipSelect);
    request(&mut app, GameState::Playing);
    assert_eq!(current_state(&app), GameState::Playing);

    // Playing → Paused → Playing (resume)
    request(&mut app, GameState::Paused);
    assert_eq!(current_state(&app), GameState::Paused);
    request(&mut app, GameState::Playing);
    assert_eq!(current_state(&app), GameState::Playing);

    // Playing → GameOver → Playing (restart) → GameOver → MainMenu
    request(&mut app, GameState::GameOver);
    assert_eq!(current_state(&app), GameState::GameOver);
    request(&mut app, GameState::Playing);
    assert_eq!(current_state(&app), GameState::Playing);
    request(&mut app, GameState::GameOver);
    request(&mut app, GameState::MainMenu);
    assert_eq!(current_state(&app), GameState::MainMenu);
}

/// States persist across frames with no new transition request.
#[test]
fn state_persists_across_frames() {
    let mut app = app_with_default_state();
    app.update();
    request(&mut app, GameState::Playing);

    for _ in 0..5 {
        app.update();
    }
    assert_eq!(current_state(&app), GameState::Playing);
}

/// Requesting the current state again is a no-op — state stays.
#[test]
fn redundant_transition_is_stable() {
    let mut app = app_with_default_state();
    app.update();
    request(&mut app, GameState::Playing);
    request(&mut app, GameState::Playing);
    assert_eq!(current_state(&app), GameState::Playing);
}

/// ESC during gameplay pauses; ESC again resumes.
#[test]
fn esc_toggles_pause_and_resume() {
    let mut app = app_with_esc_handlers(GameState::Playing);
    app.update();

    press_key(&mut app, KeyCode::Escape);
    assert_eq!(current_state(&app), GameState::Paused);

    press_key(&mut app, KeyCode::Escape);
    assert_eq!(current_state(&app), GameState::Playing);
}

/// ESC on a menu screen is an invalid trigger and changes nothing: the
/// handlers are gated to `Playing`/`Paused` and never run elsewhere.
#[test]
fn esc_outside_gameplay_is_a_no_op() {
    for screen in [
        GameState::MainMenu,
        GameState::ShipSelect,
        GameState::Settings,
        GameState::QuitConfirm,
        GameState::GameOver,
    ] {
        let mut app = app_with_esc_handlers(screen.clone());
        app.update();
        press_key(&mut app, KeyCode::Escape);
        assert_eq!(current_state(&app), screen, "ESC must not leave {screen:?}");
    }
}

/// SPACE on the main menu is an invalid trigger: nothing handles it, so the
/// state machine is untouched.
#[test]
fn space_in_main_menu_is_a_no_op() {
    let mut app = app_with_esc_handlers(GameState::MainMenu);
    app.update();
    press_key(&mut app, KeyCode::Space);
    assert_eq!(current_state(&app), GameState::MainMenu);
}
