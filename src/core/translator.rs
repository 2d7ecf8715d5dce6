use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::core::{
    msg::{
        catalog::CatalogMsg, router::RouterMsg, slider::SliderMsg, system::SystemMsg, Msg,
    },
    raw_msg::RawMsg,
    state::{AppState, HomePhase},
};
use crate::domain::{route::Route, ui::HitTarget};
use crate::presentation::config::keybindings::Action;

/// Translates raw external events into domain messages
/// This function is pure and contains no side effects
pub fn translate_raw_to_domain(raw: RawMsg, state: &AppState) -> Vec<Msg> {
    match raw {
        // System events - direct mapping
        RawMsg::Quit => vec![Msg::System(SystemMsg::Quit)],
        RawMsg::Suspend => vec![Msg::System(SystemMsg::Suspend)],
        RawMsg::Resume => vec![Msg::System(SystemMsg::Resume)],
        RawMsg::Resize(width, height) => vec![Msg::System(SystemMsg::Resize(width, height))],

        // User input - translate based on phase and key bindings
        RawMsg::Key(key) => translate_key_event(key, state),
        RawMsg::Click(target) => translate_click(target, state),
        RawMsg::Hover(target) => translate_hover(target, state),

        RawMsg::Frame { elapsed_ms } => vec![Msg::Frame(elapsed_ms)],

        // Movie service replies
        RawMsg::NowPlayingLoaded(list) => {
            let status = format!("Loaded {} movies", list.len());
            vec![
                Msg::Catalog(CatalogMsg::Loaded(list)),
                Msg::System(SystemMsg::UpdateStatusMessage(status)),
            ]
        }
        RawMsg::NowPlayingFailed(error) => vec![
            Msg::Catalog(CatalogMsg::Failed(error.clone())),
            Msg::System(SystemMsg::ShowError(error)),
        ],

        // System status
        RawMsg::SystemMessage(msg) => vec![Msg::System(SystemMsg::UpdateStatusMessage(msg))],
        RawMsg::Error(error) => vec![Msg::System(SystemMsg::ShowError(error))],

        // Ignore frequent system events in domain layer
        RawMsg::Tick | RawMsg::Render => vec![],
    }
}

/// Translates keyboard input to domain events based on current application state
fn translate_key_event(key: KeyEvent, state: &AppState) -> Vec<Msg> {
    // Handle global key bindings first
    match key {
        KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
            ..
        } => return vec![Msg::System(SystemMsg::Quit)],

        KeyEvent {
            code: KeyCode::Char('z'),
            modifiers: KeyModifiers::CONTROL,
            ..
        } => return vec![Msg::System(SystemMsg::Suspend)],

        _ => {}
    }

    state
        .config
        .config
        .keybindings
        .action_for(key)
        .map(|action| translate_action_to_msg(action, state))
        .unwrap_or_default()
}

fn translate_action_to_msg(action: Action, state: &AppState) -> Vec<Msg> {
    let phase = state.phase();
    match action {
        Action::Quit => vec![Msg::System(SystemMsg::Quit)],
        Action::Suspend => vec![Msg::System(SystemMsg::Suspend)],

        // The overlay covers the page, so page interactions wait until it closes
        Action::NextPage if phase == HomePhase::ReadyNoOverlay => {
            vec![Msg::Slider(SliderMsg::Advance)]
        }
        Action::FocusNext if phase == HomePhase::ReadyNoOverlay => {
            vec![Msg::Slider(SliderMsg::FocusNext)]
        }
        Action::FocusPrev if phase == HomePhase::ReadyNoOverlay => {
            vec![Msg::Slider(SliderMsg::FocusPrev)]
        }
        Action::Open if phase == HomePhase::ReadyNoOverlay => translate_open_key(state),

        Action::Back if state.router.can_go_back() => vec![Msg::Router(RouterMsg::Pop)],

        Action::Reload if phase == HomePhase::Failed => vec![
            Msg::Catalog(CatalogMsg::Load),
            Msg::System(SystemMsg::UpdateStatusMessage("Reloading...".to_string())),
        ],

        Action::NextPage
        | Action::FocusNext
        | Action::FocusPrev
        | Action::Open
        | Action::Back
        | Action::Reload => vec![],
    }
}

fn translate_open_key(state: &AppState) -> Vec<Msg> {
    match state.focused_movie() {
        Some(movie) => vec![Msg::Router(RouterMsg::Push(Route::movie(movie.id)))],
        None => vec![Msg::System(SystemMsg::UpdateStatusMessage(
            "No movie focused: use left/right to pick one".to_string(),
        ))],
    }
}

fn translate_click(target: HitTarget, state: &AppState) -> Vec<Msg> {
    match (state.phase(), target) {
        (HomePhase::ReadyNoOverlay, HitTarget::Banner) => vec![Msg::Slider(SliderMsg::Advance)],
        (HomePhase::ReadyNoOverlay, HitTarget::Card(id)) => {
            vec![Msg::Router(RouterMsg::Push(Route::movie(id)))]
        }
        (HomePhase::ReadyOverlayOpen, HitTarget::Backdrop) => vec![Msg::Router(RouterMsg::Pop)],
        _ => vec![],
    }
}

fn translate_hover(target: Option<HitTarget>, state: &AppState) -> Vec<Msg> {
    if state.phase() != HomePhase::ReadyNoOverlay {
        return vec![];
    }
    let hovered = state.slider.hover().map(|hover| hover.id);
    match target {
        Some(HitTarget::Card(id)) if hovered != Some(id) => vec![Msg::Slider(SliderMsg::Hover(id))],
        Some(HitTarget::Card(_)) => vec![],
        _ if hovered.is_some() => vec![Msg::Slider(SliderMsg::Unhover)],
        _ => vec![],
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::domain::movie::{MovieId, MovieList, MovieRecord};
    use crate::infrastructure::config::Config;

    fn key(code: KeyCode) -> RawMsg {
        RawMsg::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn state_with_bindings() -> AppState {
        let config = Config::embedded().unwrap_or_default();
        AppState::new_with_config(config)
    }

    fn ready_state() -> AppState {
        let mut state = state_with_bindings();
        let list: MovieList = (1..=13)
            .map(|id| MovieRecord::new(id, format!("Movie {id}"), ""))
            .collect();
        state.catalog.update(CatalogMsg::Loaded(list));
        state
    }

    fn overlay_state() -> AppState {
        let mut state = ready_state();
        state
            .router
            .update(RouterMsg::Push(Route::Movie("3".to_string())));
        state
    }

    #[test]
    fn test_ctrl_c_quits_in_any_phase() {
        let raw = RawMsg::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert_eq!(
            translate_raw_to_domain(raw, &AppState::default()),
            vec![Msg::System(SystemMsg::Quit)]
        );
    }

    #[test]
    fn test_next_page_only_when_ready_without_overlay() {
        assert_eq!(
            translate_raw_to_domain(key(KeyCode::Char('n')), &ready_state()),
            vec![Msg::Slider(SliderMsg::Advance)]
        );
        assert!(translate_raw_to_domain(key(KeyCode::Char('n')), &state_with_bindings()).is_empty());
        assert!(translate_raw_to_domain(key(KeyCode::Char('n')), &overlay_state()).is_empty());
    }

    #[test]
    fn test_open_pushes_focused_movie() {
        let mut state = ready_state();
        state
            .slider
            .update(SliderMsg::FocusNext, state.catalog.movies());
        assert_eq!(
            translate_raw_to_domain(key(KeyCode::Enter), &state),
            vec![Msg::Router(RouterMsg::Push(Route::Movie("2".to_string())))]
        );
    }

    #[test]
    fn test_open_without_focus_explains() {
        let msgs = translate_raw_to_domain(key(KeyCode::Enter), &ready_state());
        assert!(matches!(
            msgs.as_slice(),
            [Msg::System(SystemMsg::UpdateStatusMessage(_))]
        ));
    }

    #[test]
    fn test_back_pops_only_with_history() {
        assert_eq!(
            translate_raw_to_domain(key(KeyCode::Esc), &overlay_state()),
            vec![Msg::Router(RouterMsg::Pop)]
        );
        assert!(translate_raw_to_domain(key(KeyCode::Esc), &ready_state()).is_empty());
    }

    #[test]
    fn test_reload_only_after_failure() {
        let mut failed = state_with_bindings();
        failed.catalog.update(CatalogMsg::Failed("offline".to_string()));
        let msgs = translate_raw_to_domain(key(KeyCode::Char('r')), &failed);
        assert_eq!(msgs.first(), Some(&Msg::Catalog(CatalogMsg::Load)));

        let mut loading = state_with_bindings();
        loading.catalog.update(CatalogMsg::Load);
        assert!(translate_raw_to_domain(key(KeyCode::Char('r')), &loading).is_empty());
    }

    #[test]
    fn test_clicks_per_phase() {
        let ready = ready_state();
        assert_eq!(
            translate_raw_to_domain(RawMsg::Click(HitTarget::Banner), &ready),
            vec![Msg::Slider(SliderMsg::Advance)]
        );
        assert_eq!(
            translate_raw_to_domain(RawMsg::Click(HitTarget::Card(MovieId(4))), &ready),
            vec![Msg::Router(RouterMsg::Push(Route::Movie("4".to_string())))]
        );
        assert!(translate_raw_to_domain(RawMsg::Click(HitTarget::Backdrop), &ready).is_empty());

        let open = overlay_state();
        assert!(translate_raw_to_domain(RawMsg::Click(HitTarget::Banner), &open).is_empty());
        assert!(translate_raw_to_domain(RawMsg::Click(HitTarget::DetailPanel), &open).is_empty());
        assert_eq!(
            translate_raw_to_domain(RawMsg::Click(HitTarget::Backdrop), &open),
            vec![Msg::Router(RouterMsg::Pop)]
        );
    }

    #[test]
    fn test_hover_enter_and_leave() {
        let mut state = ready_state();
        let enter = RawMsg::Hover(Some(HitTarget::Card(MovieId(2))));
        assert_eq!(
            translate_raw_to_domain(enter.clone(), &state),
            vec![Msg::Slider(SliderMsg::Hover(MovieId(2)))]
        );

        state
            .slider
            .update(SliderMsg::Hover(MovieId(2)), state.catalog.movies());
        assert!(translate_raw_to_domain(enter, &state).is_empty());
        assert_eq!(
            translate_raw_to_domain(RawMsg::Hover(None), &state),
            vec![Msg::Slider(SliderMsg::Unhover)]
        );
    }

    #[test]
    fn test_service_replies() {
        let list: MovieList = vec![MovieRecord::new(1, "A", "")].into();
        let msgs = translate_raw_to_domain(RawMsg::NowPlayingLoaded(list.clone()), &AppState::default());
        assert_eq!(
            msgs,
            vec![
                Msg::Catalog(CatalogMsg::Loaded(list)),
                Msg::System(SystemMsg::UpdateStatusMessage("Loaded 1 movies".to_string())),
            ]
        );

        let msgs = translate_raw_to_domain(
            RawMsg::NowPlayingFailed("timeout".to_string()),
            &AppState::default(),
        );
        assert_eq!(msgs.len(), 2);
        assert_eq!(msgs[0], Msg::Catalog(CatalogMsg::Failed("timeout".to_string())));
    }

    #[test]
    fn test_frame_and_ticks() {
        let state = AppState::default();
        assert_eq!(
            translate_raw_to_domain(RawMsg::Frame { elapsed_ms: 16 }, &state),
            vec![Msg::Frame(16)]
        );
        assert!(translate_raw_to_domain(RawMsg::Tick, &state).is_empty());
        assert!(translate_raw_to_domain(RawMsg::Render, &state).is_empty());
    }
}
