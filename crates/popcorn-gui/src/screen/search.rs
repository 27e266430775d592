use iced::widget::{button, column, container, row, text_input};
use iced::{task, Alignment, Element, Length, Task};

use popcorn_api::{ImdbId, OmdbClient};
use popcorn_core::session::{fetch_search, FetchStatus, SearchResponse, SearchSession, Settled};

use crate::app;
use crate::poster_cache::PosterCache;
use crate::screen::Action;
use crate::style;
use crate::theme::{self, ColorScheme};
use crate::widgets;

// ── State ─────────────────────────────────────────────────────────

/// Search input plus the left-hand results box.
pub struct Search {
    session: SearchSession,
    open: bool,
    in_flight: Option<task::Handle>,
}

// ── Messages ──────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub enum Message {
    QueryChanged(String),
    ClearQuery,
    ResultsLoaded(SearchResponse),
    Selected(ImdbId),
    ToggleOpen,
}

// ── Implementation ────────────────────────────────────────────────

impl Search {
    pub fn new() -> Self {
        Self {
            session: SearchSession::new(),
            open: true,
            in_flight: None,
        }
    }

    pub fn result_count(&self) -> usize {
        self.session.result_count()
    }

    pub fn status(&self) -> FetchStatus {
        self.session.status()
    }

    pub fn last_error(&self) -> Option<&str> {
        self.session.last_error()
    }

    pub fn update(&mut self, msg: Message, client: &OmdbClient) -> Action {
        match msg {
            Message::QueryChanged(query) => self.start_search(query, client),
            Message::ClearQuery => self.start_search(String::new(), client),
            Message::ResultsLoaded(response) => match self.session.settle(response) {
                Settled::Applied => {
                    self.in_flight = None;
                    let urls = self
                        .session
                        .results()
                        .iter()
                        .filter_map(|c| c.poster_url.clone())
                        .collect();
                    Action::RequestPosters(urls)
                }
                Settled::Stale => Action::None,
            },
            Message::Selected(id) => Action::SelectMovie(id),
            Message::ToggleOpen => {
                self.open = !self.open;
                Action::None
            }
        }
    }

    /// Abort whatever lookup is still running and issue one for `query`.
    fn start_search(&mut self, query: String, client: &OmdbClient) -> Action {
        if let Some(handle) = self.in_flight.take() {
            handle.abort();
        }

        let Some(request) = self.session.set_query(query) else {
            return Action::None;
        };

        let client = client.clone();
        let (task, handle) = Task::perform(
            async move { fetch_search(&client, request).await },
            |response| app::Message::Search(Message::ResultsLoaded(response)),
        )
        .abortable();
        self.in_flight = Some(handle);
        Action::RunTask(task)
    }

    /// The pill-shaped query input shown in the navigation bar.
    pub fn view_input<'a>(&'a self, cs: &ColorScheme) -> Element<'a, Message> {
        let search_icon = lucide_icons::iced::icon_search()
            .size(style::TEXT_BASE)
            .color(cs.on_primary);

        let search_input = text_input("Search movies...", self.session.query())
            .on_input(Message::QueryChanged)
            .size(style::TEXT_BASE)
            .padding([style::SPACE_XS, style::SPACE_SM])
            .width(Length::Fill)
            .style(theme::text_input_borderless(cs));

        let mut search_row = row![search_icon, search_input]
            .spacing(style::SPACE_SM)
            .align_y(Alignment::Center);

        if !self.session.query().is_empty() {
            let clear_size = style::TEXT_SM + style::SPACE_XS * 2.0;
            let clear_btn = button(
                container(
                    lucide_icons::iced::icon_x()
                        .size(style::TEXT_SM)
                        .color(cs.on_primary),
                )
                .center_x(Length::Fill)
                .center_y(Length::Fill),
            )
            .on_press(Message::ClearQuery)
            .padding(0)
            .width(Length::Fixed(clear_size))
            .height(Length::Fixed(clear_size))
            .style(theme::icon_button(cs));
            search_row = search_row.push(clear_btn);
        }

        container(search_row)
            .style(theme::search_bar(cs))
            .padding([style::SPACE_XS, style::SPACE_MD])
            .width(Length::Fixed(style::SEARCH_WIDTH))
            .into()
    }

    /// The results box. `selected` highlights the movie open in the detail box.
    pub fn view<'a>(
        &'a self,
        cs: &ColorScheme,
        posters: &'a PosterCache,
        selected: Option<&ImdbId>,
    ) -> Element<'a, Message> {
        let results = self.session.results();

        let content: Element<'a, Message> = match self.session.status() {
            FetchStatus::Loading => widgets::loading(cs),
            FetchStatus::Failed if results.is_empty() => widgets::empty_state(
                cs,
                lucide_icons::iced::icon_circle_x()
                    .size(style::TEXT_3XL)
                    .color(cs.error)
                    .into(),
                "Search failed",
                self.session.last_error(),
            ),
            FetchStatus::Idle => widgets::empty_state(
                cs,
                lucide_icons::iced::icon_popcorn()
                    .size(style::TEXT_3XL)
                    .color(cs.outline)
                    .into(),
                "Search for a movie",
                Some("Results from the catalog show up here."),
            ),
            _ if results.is_empty() => widgets::empty_state(
                cs,
                lucide_icons::iced::icon_film()
                    .size(style::TEXT_3XL)
                    .color(cs.outline)
                    .into(),
                "No movies found.",
                None,
            ),
            _ => {
                let items: Vec<Element<'a, Message>> = results
                    .iter()
                    .map(|candidate| {
                        widgets::movie_list_item(
                            cs,
                            posters,
                            candidate,
                            selected == Some(&candidate.id),
                            Message::Selected(candidate.id.clone()),
                        )
                    })
                    .collect();
                widgets::styled_scrollable(
                    column(items)
                        .spacing(style::SPACE_XXS)
                        .padding([0.0, style::SPACE_SM]),
                    cs,
                )
                .height(Length::Fill)
                .into()
            }
        };

        widgets::collapsible_box(cs, self.open, Message::ToggleOpen, content)
    }
}
