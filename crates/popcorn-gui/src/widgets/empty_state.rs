use iced::widget::{column, container, text};
use iced::{Alignment, Element, Length};

use crate::style;
use crate::theme::ColorScheme;

/// Body for a box with nothing to list: icon, headline, optional hint.
///
/// Sits near the top of the box rather than dead center so it lines up
/// with the first row a populated list would show.
pub fn empty_state<'a, Message: 'a>(
    cs: &ColorScheme,
    icon: Element<'a, Message>,
    title: &'a str,
    hint: Option<&'a str>,
) -> Element<'a, Message> {
    let mut content = column![
        icon,
        text(title)
            .size(style::TEXT_LG)
            .font(style::FONT_HEADING)
            .color(cs.on_surface_variant)
            .line_height(style::LINE_HEIGHT_TIGHT),
    ]
    .spacing(style::SPACE_SM)
    .align_x(Alignment::Center);

    if let Some(hint) = hint {
        content = content.push(
            text(hint)
                .size(style::TEXT_SM)
                .color(cs.outline)
                .line_height(style::LINE_HEIGHT_LOOSE),
        );
    }

    container(content)
        .padding(style::SPACE_3XL)
        .width(Length::Fill)
        .center_x(Length::Fill)
        .into()
}
