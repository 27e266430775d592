use iced::widget::{column, container, row, text};
use iced::{Alignment, Element, Length};

use popcorn_core::models::WatchedRecord;

use crate::format;
use crate::poster_cache::PosterCache;
use crate::style;
use crate::theme::ColorScheme;
use crate::widgets;

/// A row in the watched list: poster, title, and the three per-movie figures.
pub fn watched_item<'a, Message: 'static>(
    cs: &ColorScheme,
    posters: &'a PosterCache,
    record: &'a WatchedRecord,
) -> Element<'a, Message> {
    let thumb = widgets::poster(
        cs,
        posters,
        record.poster_url.as_deref(),
        style::THUMB_WIDTH,
        style::THUMB_HEIGHT,
        style::RADIUS_SM,
    );

    let figures = row![
        figure(
            lucide_icons::iced::icon_star().size(style::TEXT_SM).color(cs.star).into(),
            format::average(record.imdb_rating),
            cs,
        ),
        figure(
            lucide_icons::iced::icon_sparkles().size(style::TEXT_SM).color(cs.primary_hover).into(),
            record.user_rating.to_string(),
            cs,
        ),
        figure(
            lucide_icons::iced::icon_hourglass().size(style::TEXT_SM).color(cs.outline).into(),
            format::minutes(f64::from(record.runtime)),
            cs,
        ),
    ]
    .spacing(style::SPACE_LG)
    .align_y(Alignment::Center);

    let info = column![
        text(record.title.as_str())
            .size(style::TEXT_BASE)
            .font(style::FONT_HEADING)
            .color(cs.on_surface)
            .line_height(style::LINE_HEIGHT_NORMAL)
            .wrapping(iced::widget::text::Wrapping::None),
        figures,
    ]
    .spacing(style::SPACE_XXS)
    .clip(true);

    container(
        row![thumb, info.width(Length::Fill)]
            .spacing(style::SPACE_LG)
            .align_y(Alignment::Center),
    )
    .width(Length::Fill)
    .padding([style::SPACE_SM, style::SPACE_LG])
    .into()
}

fn figure<'a, Message: 'static>(
    icon: Element<'a, Message>,
    value: String,
    cs: &ColorScheme,
) -> Element<'a, Message> {
    row![
        icon,
        text(value)
            .size(style::TEXT_SM)
            .color(cs.on_surface_variant)
            .line_height(style::LINE_HEIGHT_LOOSE),
    ]
    .spacing(style::SPACE_XS)
    .align_y(Alignment::Center)
    .into()
}
