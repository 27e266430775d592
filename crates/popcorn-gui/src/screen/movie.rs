use iced::widget::{button, column, container, row, rule, text, Space};
use iced::{task, Alignment, Element, Length, Task};

use popcorn_api::{ImdbId, MovieDetail, OmdbClient};
use popcorn_core::models::WatchedStats;
use popcorn_core::session::{fetch_detail, DetailResponse, DetailSession, FetchStatus, Settled};

use crate::app;
use crate::format;
use crate::poster_cache::PosterCache;
use crate::screen::Action;
use crate::style;
use crate::theme::{self, ColorScheme};
use crate::widgets;

// ── State ─────────────────────────────────────────────────────────

/// The right-hand box: movie detail when one is selected, the watched
/// summary and list otherwise.
pub struct Movie {
    session: DetailSession,
    open: bool,
    in_flight: Option<task::Handle>,
}

// ── Messages ──────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub enum Message {
    DetailLoaded(DetailResponse),
    Back,
    Rate(u8),
    AddToWatched,
    ToggleOpen,
}

// ── Implementation ────────────────────────────────────────────────

impl Movie {
    pub fn new(max_rating: u8) -> Self {
        Self {
            session: DetailSession::new(max_rating),
            open: true,
            in_flight: None,
        }
    }

    pub fn selected(&self) -> Option<&ImdbId> {
        self.session.selected()
    }

    pub fn status(&self) -> FetchStatus {
        self.session.status()
    }

    pub fn last_error(&self) -> Option<&str> {
        self.session.last_error()
    }

    pub fn watched_count(&self) -> usize {
        self.session.watched().len()
    }

    /// Open `id` in the detail view, superseding any lookup still running.
    pub fn select(&mut self, id: ImdbId, client: &OmdbClient) -> Action {
        self.abort_in_flight();
        let request = self.session.select(id);

        let client = client.clone();
        let (task, handle) = Task::perform(
            async move { fetch_detail(&client, request).await },
            |response| app::Message::Movie(Message::DetailLoaded(response)),
        )
        .abortable();
        self.in_flight = Some(handle);
        Action::RunTask(task)
    }

    pub fn update(&mut self, msg: Message) -> Action {
        match msg {
            Message::DetailLoaded(response) => match self.session.settle(response) {
                Settled::Applied => {
                    self.in_flight = None;
                    let urls = self
                        .session
                        .detail()
                        .and_then(|d| d.poster_url.clone())
                        .into_iter()
                        .collect();
                    Action::RequestPosters(urls)
                }
                Settled::Stale => Action::None,
            },
            Message::Back => {
                self.abort_in_flight();
                self.session.close();
                Action::None
            }
            Message::Rate(value) => {
                self.session.rate(value);
                Action::None
            }
            Message::AddToWatched => {
                if let Err(e) = self.session.confirm_rating() {
                    tracing::debug!(error = %e, "add to watched rejected");
                }
                Action::None
            }
            Message::ToggleOpen => {
                self.open = !self.open;
                Action::None
            }
        }
    }

    fn abort_in_flight(&mut self) {
        if let Some(handle) = self.in_flight.take() {
            handle.abort();
        }
    }

    // ── Views ─────────────────────────────────────────────────────

    pub fn view<'a>(&'a self, cs: &ColorScheme, posters: &'a PosterCache) -> Element<'a, Message> {
        let content: Element<'a, Message> = match (self.session.selected(), self.session.status()) {
            (None, _) => self.view_watched(cs, posters),
            (Some(_), FetchStatus::Ready) => match self.session.detail() {
                Some(detail) => self.view_detail(cs, posters, detail),
                None => self.view_watched(cs, posters),
            },
            (Some(_), FetchStatus::Failed) => self.view_failed(cs),
            (Some(_), _) => widgets::loading(cs),
        };

        widgets::collapsible_box(cs, self.open, Message::ToggleOpen, content)
    }

    fn view_detail<'a>(
        &'a self,
        cs: &ColorScheme,
        posters: &'a PosterCache,
        detail: &'a MovieDetail,
    ) -> Element<'a, Message> {
        let back = back_button(cs);

        let poster = widgets::poster(
            cs,
            posters,
            detail.poster_url.as_deref(),
            style::POSTER_WIDTH,
            style::POSTER_HEIGHT,
            style::RADIUS_MD,
        );

        let released_runtime = format!(
            "{} \u{00B7} {}",
            format::or_na(detail.released.as_deref()),
            format::or_na(detail.runtime.as_deref())
        );

        let imdb = row![
            lucide_icons::iced::icon_star()
                .size(style::TEXT_BASE)
                .color(cs.star),
            text(format!(
                "{} IMDb rating",
                format::or_na(detail.imdb_rating.as_deref())
            ))
            .size(style::TEXT_SM)
            .color(cs.on_surface_variant),
        ]
        .spacing(style::SPACE_XS)
        .align_y(Alignment::Center);

        let header_info = column![
            text(detail.title.as_str())
                .size(style::TEXT_XL)
                .font(style::FONT_HEADING)
                .color(cs.on_surface)
                .line_height(style::LINE_HEIGHT_TIGHT),
            text(released_runtime)
                .size(style::TEXT_SM)
                .color(cs.on_surface_variant),
            text(format::or_na(detail.genre.as_deref()))
                .size(style::TEXT_SM)
                .color(cs.on_surface_variant),
            imdb,
        ]
        .spacing(style::SPACE_SM)
        .width(Length::Fill);

        let header = row![poster, header_info]
            .spacing(style::SPACE_XL)
            .align_y(Alignment::Center);

        let body = column![
            self.view_rating_panel(cs, detail),
            text(format::or_na(detail.plot.as_deref()))
                .size(style::TEXT_BASE)
                .font(style::FONT_ITALIC)
                .color(cs.on_surface)
                .line_height(style::LINE_HEIGHT_LOOSE),
            text(format!(
                "Starring {}",
                format::or_na(detail.actors.as_deref())
            ))
            .size(style::TEXT_SM)
            .color(cs.on_surface_variant),
            text(format!(
                "Directed by {}",
                format::or_na(detail.director.as_deref())
            ))
            .size(style::TEXT_SM)
            .color(cs.on_surface_variant),
        ]
        .spacing(style::SPACE_LG)
        .padding([style::SPACE_LG, style::SPACE_XL]);

        widgets::styled_scrollable(
            column![
                container(back).padding([0.0, style::SPACE_LG]),
                container(header).padding([0.0, style::SPACE_XL]),
                body,
            ]
            .spacing(style::SPACE_MD),
            cs,
        )
        .height(Length::Fill)
        .into()
    }

    /// Star widget plus Add button, or the rating already on the watched list.
    fn view_rating_panel<'a>(&'a self, cs: &ColorScheme, detail: &MovieDetail) -> Element<'a, Message> {
        let inner: Element<'a, Message> = match self.session.watched_rating(&detail.id) {
            Some(rating) => row![
                lucide_icons::iced::icon_star()
                    .size(style::TEXT_BASE)
                    .color(cs.star),
                text(format::user_rating(rating.value()))
                    .size(style::TEXT_BASE)
                    .color(cs.on_surface),
            ]
            .spacing(style::SPACE_SM)
            .align_y(Alignment::Center)
            .into(),
            None => {
                let mut panel = column![widgets::star_rating(
                    cs,
                    self.session.max_rating(),
                    self.session.user_rating().map(|r| r.value()),
                    Message::Rate,
                )]
                .spacing(style::SPACE_MD)
                .align_x(Alignment::Center);

                if self.session.user_rating().is_some() {
                    panel = panel.push(
                        button(
                            row![
                                lucide_icons::iced::icon_plus().size(style::TEXT_SM),
                                text("Add to list").size(style::TEXT_SM),
                            ]
                            .spacing(style::SPACE_XS)
                            .align_y(Alignment::Center),
                        )
                        .on_press(Message::AddToWatched)
                        .padding([style::SPACE_SM, style::SPACE_XL])
                        .style(theme::primary_button(cs)),
                    );
                }
                panel.into()
            }
        };

        container(inner)
            .width(Length::Fill)
            .center_x(Length::Fill)
            .padding(style::SPACE_LG)
            .style(theme::rating_panel(cs))
            .into()
    }

    fn view_failed<'a>(&'a self, cs: &ColorScheme) -> Element<'a, Message> {
        let message = self.session.last_error().unwrap_or("Something went wrong");
        column![
            container(back_button(cs)).padding([0.0, style::SPACE_LG]),
            container(
                column![
                    lucide_icons::iced::icon_circle_x()
                        .size(style::TEXT_3XL)
                        .color(cs.error),
                    text(message)
                        .size(style::TEXT_BASE)
                        .color(cs.on_surface_variant)
                        .line_height(style::LINE_HEIGHT_LOOSE),
                ]
                .spacing(style::SPACE_MD)
                .align_x(Alignment::Center),
            )
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x(Length::Fill)
            .center_y(Length::Fill),
        ]
        .into()
    }

    fn view_watched<'a>(&'a self, cs: &ColorScheme, posters: &'a PosterCache) -> Element<'a, Message> {
        let watched = self.session.watched();
        let summary = view_summary(cs, &watched.stats());

        let list: Element<'a, Message> = if watched.is_empty() {
            widgets::empty_state(
                cs,
                lucide_icons::iced::icon_film()
                    .size(style::TEXT_3XL)
                    .color(cs.outline)
                    .into(),
                "Nothing watched yet",
                Some("Rate a movie to add it to your list."),
            )
        } else {
            let items: Vec<Element<'a, Message>> = watched
                .iter()
                .map(|record| widgets::watched_item(cs, posters, record))
                .collect();
            widgets::styled_scrollable(column(items).spacing(style::SPACE_XXS), cs)
                .height(Length::Fill)
                .into()
        };

        column![
            container(summary).padding([0.0, style::SPACE_SM]),
            list
        ]
        .spacing(style::SPACE_MD)
        .into()
    }
}

fn back_button<'a>(cs: &ColorScheme) -> Element<'a, Message> {
    button(
        row![
            lucide_icons::iced::icon_arrow_left().size(style::TEXT_SM),
            text("Back").size(style::TEXT_SM),
        ]
        .spacing(style::SPACE_XS)
        .align_y(Alignment::Center),
    )
    .on_press(Message::Back)
    .padding([style::SPACE_XS, style::SPACE_MD])
    .style(theme::ghost_button(cs))
    .into()
}

fn view_summary<'a>(cs: &ColorScheme, stats: &WatchedStats) -> Element<'a, Message> {
    let stat = |icon: Element<'a, Message>, value: String| -> Element<'a, Message> {
        row![
            icon,
            text(value)
                .size(style::TEXT_SM)
                .color(cs.on_surface)
        ]
        .spacing(style::SPACE_XS)
        .align_y(Alignment::Center)
        .into()
    };

    let figures = row![
        stat(
            lucide_icons::iced::icon_hash()
                .size(style::TEXT_SM)
                .color(cs.on_surface_variant)
                .into(),
            format::movie_count(stats.count),
        ),
        stat(
            lucide_icons::iced::icon_star()
                .size(style::TEXT_SM)
                .color(cs.star)
                .into(),
            format::average(stats.avg_imdb_rating),
        ),
        stat(
            lucide_icons::iced::icon_sparkles()
                .size(style::TEXT_SM)
                .color(cs.primary_hover)
                .into(),
            format::average(stats.avg_user_rating),
        ),
        stat(
            lucide_icons::iced::icon_hourglass()
                .size(style::TEXT_SM)
                .color(cs.on_surface_variant)
                .into(),
            format::minutes(stats.avg_runtime),
        ),
    ]
    .spacing(style::SPACE_LG)
    .align_y(Alignment::Center);

    container(
        column![
            text("Movies you watched")
                .size(style::TEXT_LG)
                .font(style::FONT_HEADING)
                .color(cs.on_surface),
            rule::horizontal(1),
            figures,
            Space::new().height(style::SPACE_XXS),
        ]
        .spacing(style::SPACE_SM),
    )
    .width(Length::Fill)
    .padding([style::SPACE_LG, style::SPACE_XL])
    .style(theme::summary_panel(cs))
    .into()
}
