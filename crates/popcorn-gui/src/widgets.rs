pub mod empty_state;
pub mod movie_list_item;
pub mod poster;
pub mod star_rating;
pub mod watched_item;

pub use empty_state::empty_state;
pub use movie_list_item::movie_list_item;
pub use poster::poster;
pub use star_rating::star_rating;
pub use watched_item::watched_item;

use iced::widget::{button, column, container, row, scrollable, text, Space};
use iced::{Element, Length};

use crate::style;
use crate::theme::{self, ColorScheme};

/// A scrollable with consistent direction and style across the application.
pub fn styled_scrollable<'a, Message: 'a>(
    content: impl Into<Element<'a, Message>>,
    cs: &ColorScheme,
) -> scrollable::Scrollable<'a, Message> {
    scrollable(content)
        .direction(scrollable::Direction::Vertical(
            scrollable::Scrollbar::new()
                .width(6)
                .scroller_width(4)
                .margin(2),
        ))
        .style(theme::overlay_scrollbar(cs))
}

/// One of the two collapsible boxes: a round +/- toggle above `content`.
///
/// When `open` is false only the toggle is drawn.
pub fn collapsible_box<'a, Message: Clone + 'a>(
    cs: &ColorScheme,
    open: bool,
    on_toggle: Message,
    content: impl Into<Element<'a, Message>>,
) -> Element<'a, Message> {
    let icon = if open {
        lucide_icons::iced::icon_minus()
    } else {
        lucide_icons::iced::icon_plus()
    };
    let toggle = button(
        container(icon.size(style::TEXT_SM).color(cs.on_surface))
            .center_x(Length::Fill)
            .center_y(Length::Fill),
    )
    .on_press(on_toggle)
    .padding(0)
    .width(Length::Fixed(style::TOGGLE_SIZE))
    .height(Length::Fixed(style::TOGGLE_SIZE))
    .style(theme::toggle_button(cs));

    let header = row![Space::new().width(Length::Fill), toggle]
        .padding([style::SPACE_SM, style::SPACE_SM]);

    let mut body = column![header].width(Length::Fill);
    if open {
        body = body.push(container(content).width(Length::Fill).height(Length::Fill));
    }

    container(body)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(theme::card(cs))
        .into()
}

/// Placeholder shown while a catalog lookup is in flight.
pub fn loading<'a, Message: 'a>(cs: &ColorScheme) -> Element<'a, Message> {
    container(
        text("Loading...")
            .size(style::TEXT_SM)
            .color(cs.on_surface_variant)
            .line_height(style::LINE_HEIGHT_LOOSE),
    )
    .padding(style::SPACE_3XL)
    .width(Length::Fill)
    .center_x(Length::Fill)
    .into()
}
