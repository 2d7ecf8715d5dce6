use crate::core::{
    cmd::Cmd,
    msg::{catalog::CatalogMsg, Msg},
    state::AppState,
};

/// Elm-like update function
/// Returns new state and list of commands from current state and message
pub fn update(msg: Msg, mut state: AppState) -> (AppState, Vec<Cmd>) {
    match msg {
        // System messages (delegated to SystemState)
        Msg::System(system_msg) => {
            let commands = state.system.update(system_msg);
            (state, commands)
        }

        // Catalog messages (delegated to CatalogState)
        Msg::Catalog(catalog_msg) => {
            let reloaded = matches!(catalog_msg, CatalogMsg::Loaded(_));
            let commands = state.catalog.update(catalog_msg);
            if reloaded {
                state.slider.reset();
            }
            // A deep link can resolve only once the list arrives
            state.sync_overlay();
            (state, commands)
        }

        // Slider messages (delegated to SliderState)
        Msg::Slider(slider_msg) => {
            let commands = state.slider.update(slider_msg, state.catalog.movies());
            (state, commands)
        }

        // Navigation (delegated to RouterState); the overlay follows the route
        Msg::Router(router_msg) => {
            let commands = state.router.update(router_msg);
            state.sync_overlay();
            (state, commands)
        }

        Msg::Frame(elapsed_ms) => {
            state.slider.tick(elapsed_ms);
            state.overlay.tick(elapsed_ms);
            (state, vec![])
        }
    }
}
