use iced::widget::{button, column, row, text};
use iced::{Alignment, Element, Length};

use popcorn_api::CandidateSummary;

use crate::poster_cache::PosterCache;
use crate::style;
use crate::theme::{self, ColorScheme};
use crate::widgets;

/// One search hit: thumbnail, title, and release year.
pub fn movie_list_item<'a, Message: Clone + 'static>(
    cs: &ColorScheme,
    posters: &'a PosterCache,
    candidate: &'a CandidateSummary,
    selected: bool,
    on_select: Message,
) -> Element<'a, Message> {
    let thumb = widgets::poster(
        cs,
        posters,
        candidate.poster_url.as_deref(),
        style::THUMB_WIDTH,
        style::THUMB_HEIGHT,
        style::RADIUS_SM,
    );

    let year = row![
        lucide_icons::iced::icon_calendar()
            .size(style::TEXT_SM)
            .color(cs.outline),
        text(candidate.year.as_str())
            .size(style::TEXT_SM)
            .color(cs.on_surface_variant)
            .line_height(style::LINE_HEIGHT_LOOSE),
    ]
    .spacing(style::SPACE_XS)
    .align_y(Alignment::Center);

    let info = column![
        text(candidate.title.as_str())
            .size(style::TEXT_BASE)
            .font(style::FONT_HEADING)
            .color(cs.on_surface)
            .line_height(style::LINE_HEIGHT_NORMAL)
            .wrapping(iced::widget::text::Wrapping::None),
        year,
    ]
    .spacing(style::SPACE_XXS)
    .clip(true);

    let content = row![thumb, info.width(Length::Fill)]
        .spacing(style::SPACE_LG)
        .align_y(Alignment::Center);

    button(content)
        .width(Length::Fill)
        .padding([style::SPACE_SM, style::SPACE_LG])
        .on_press(on_select)
        .style(theme::list_item(selected, cs))
        .into()
}
