//! Home component
//!
//! Banner on top, the paged slider below it and the detail overlay above
//! both when a movie route is active.

use ratatui::prelude::*;

use crate::{
    core::state::{AppState, CatalogState},
    presentation::{
        layout::HomeLayout,
        widgets::banner::{BannerContent, BannerWidget},
    },
};

pub mod overlay;
pub mod slider;

pub use overlay::OverlayComponent;
pub use slider::SliderComponent;

#[derive(Debug, Default)]
pub struct HomeComponent {
    slider: SliderComponent,
    overlay: OverlayComponent,
}

impl HomeComponent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn banner_content<'a>(&self, state: &'a AppState) -> BannerContent<'a> {
        match &state.catalog {
            CatalogState::Idle | CatalogState::Loading => BannerContent::Loading,
            CatalogState::Failed(error) => BannerContent::Failed(error),
            CatalogState::Ready(list) => match list.banner() {
                Some(movie) => BannerContent::Movie(movie),
                None => BannerContent::Failed("no movies are playing right now"),
            },
        }
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, layout: &HomeLayout) {
        let config = &state.config.config;
        let banner = BannerWidget::new(
            self.banner_content(state),
            &config.tmdb.image_base_url,
            &config.styles,
        );
        frame.render_widget(banner, layout.banner);

        self.slider.view(state, frame, layout);
        // Drawn last so it covers the banner and the cards
        self.overlay.view(state, frame, layout);
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::core::msg::{catalog::CatalogMsg, Msg};
    use crate::domain::movie::MovieList;
    use crate::test_helpers::HomeTestHelper;

    #[test]
    fn test_banner_content_by_phase() {
        let home = HomeComponent::new();

        let loading = HomeTestHelper::new();
        assert_eq!(home.banner_content(loading.state()), BannerContent::Loading);

        let loaded = HomeTestHelper::loaded(3);
        assert!(matches!(
            home.banner_content(loaded.state()),
            BannerContent::Movie(movie) if movie.id.0 == 1
        ));

        let mut failed = HomeTestHelper::new();
        failed.send(Msg::Catalog(CatalogMsg::Failed("timeout".to_string())));
        assert_eq!(
            home.banner_content(failed.state()),
            BannerContent::Failed("timeout")
        );
    }

    #[test]
    fn test_empty_list_banner() {
        let mut helper = HomeTestHelper::new();
        helper.send(Msg::Catalog(CatalogMsg::Loaded(MovieList::new())));
        assert!(matches!(
            HomeComponent::new().banner_content(helper.state()),
            BannerContent::Failed(_)
        ));
    }
}
