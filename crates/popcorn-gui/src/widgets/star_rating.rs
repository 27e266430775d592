use iced::widget::{button, row, text};
use iced::{Alignment, Element};

use crate::style;
use crate::theme::{self, ColorScheme};

/// A row of `max` clickable stars; stars up to `current` are filled.
///
/// Pressing star `n` emits `on_rate(n)`.
pub fn star_rating<'a, Message: Clone + 'a>(
    cs: &ColorScheme,
    max: u8,
    current: Option<u8>,
    on_rate: impl Fn(u8) -> Message,
) -> Element<'a, Message> {
    let filled = current.unwrap_or(0);

    let stars = (1..=max).map(|n| {
        let color = if n <= filled { cs.star } else { cs.outline };
        button(
            lucide_icons::iced::icon_star()
                .size(style::STAR_SIZE)
                .color(color),
        )
        .padding(style::SPACE_XXS)
        .on_press(on_rate(n))
        .style(theme::icon_button(cs))
        .into()
    });

    let label = if filled > 0 {
        filled.to_string()
    } else {
        String::new()
    };

    row(stars)
        .push(
            text(label)
                .size(style::TEXT_LG)
                .font(style::FONT_HEADING)
                .color(cs.star),
        )
        .spacing(style::SPACE_XXS)
        .align_y(Alignment::Center)
        .into()
}
