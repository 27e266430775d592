use iced::widget::container;
use iced::{ContentFit, Element, Length};

use crate::poster_cache::{PosterCache, PosterState};
use crate::style;
use crate::theme::{self, ColorScheme};

/// Render a poster with rounded corners, or a film-icon placeholder.
///
/// The frame keeps the placeholder background so a failed or blank image
/// still shows a visible outline.
pub fn poster<'a, Message: 'static>(
    cs: &ColorScheme,
    posters: &'a PosterCache,
    url: Option<&str>,
    width: f32,
    height: f32,
    radius: f32,
) -> Element<'a, Message> {
    if let Some(PosterState::Loaded(handle)) = url.and_then(|u| posters.get(u)) {
        container(
            iced::widget::image(handle.clone())
                .width(Length::Fill)
                .height(Length::Fill)
                .content_fit(ContentFit::Cover)
                .border_radius(radius),
        )
        .width(Length::Fixed(width))
        .height(Length::Fixed(height))
        .style(theme::poster_placeholder(cs, radius))
        .into()
    } else {
        let icon_size = if width <= style::THUMB_WIDTH {
            style::TEXT_BASE
        } else {
            style::TEXT_3XL
        };
        container(
            lucide_icons::iced::icon_film()
                .size(icon_size)
                .color(cs.outline)
                .center(),
        )
        .width(Length::Fixed(width))
        .height(Length::Fixed(height))
        .center_x(Length::Fixed(width))
        .center_y(Length::Fixed(height))
        .style(theme::poster_placeholder(cs, radius))
        .into()
    }
}
