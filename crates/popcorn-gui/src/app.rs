use iced::widget::{column, container, row, text, Space};
use iced::{Alignment, Element, Length, Task, Theme};

use popcorn_api::OmdbClient;
use popcorn_core::config::AppConfig;
use popcorn_core::session::FetchStatus;

use crate::format;
use crate::poster_cache::{self, PosterCache};
use crate::screen::{movie, search, Action};
use crate::style;
use crate::theme::{self, ColorScheme};

/// Application state: owns both boxes and routes messages between them.
pub struct Popcorn {
    client: OmdbClient,
    colors: ColorScheme,
    search: search::Search,
    movie: movie::Movie,
    posters: PosterCache,
}

#[derive(Debug, Clone)]
pub enum Message {
    Search(search::Message),
    Movie(movie::Message),
    PosterLoaded {
        url: String,
        result: Result<Vec<u8>, String>,
    },
}

impl Popcorn {
    pub fn new(config: AppConfig, client: OmdbClient) -> (Self, Task<Message>) {
        let mode = theme::resolve_mode(config.appearance.mode);
        tracing::debug!(?mode, max_rating = config.rating.max_rating, "starting");

        let app = Self {
            client,
            colors: ColorScheme::for_mode(mode),
            search: search::Search::new(),
            movie: movie::Movie::new(config.rating.max_rating),
            posters: PosterCache::default(),
        };
        (app, Task::none())
    }

    pub fn title(&self) -> String {
        String::from("Popcorn")
    }

    pub fn theme(&self) -> Theme {
        theme::build_theme(&self.colors)
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Search(msg) => {
                let action = self.search.update(msg, &self.client);
                self.handle_action(action)
            }
            Message::Movie(msg) => {
                let action = self.movie.update(msg);
                self.handle_action(action)
            }
            Message::PosterLoaded { url, result } => {
                self.posters.finish(url, result);
                Task::none()
            }
        }
    }

    fn handle_action(&mut self, action: Action) -> Task<Message> {
        match action {
            Action::None => Task::none(),
            Action::SelectMovie(id) => {
                let action = self.movie.select(id, &self.client);
                self.handle_action(action)
            }
            Action::RequestPosters(urls) => self.request_posters(urls),
            Action::RunTask(task) => task,
        }
    }

    /// Spawn one download per poster URL the cache has not seen yet.
    fn request_posters(&mut self, urls: Vec<String>) -> Task<Message> {
        let tasks: Vec<Task<Message>> = urls
            .into_iter()
            .filter(|url| self.posters.begin(url))
            .map(|url| {
                Task::perform(poster_cache::fetch_poster(url.clone()), move |result| {
                    Message::PosterLoaded {
                        url: url.clone(),
                        result,
                    }
                })
            })
            .collect();
        Task::batch(tasks)
    }

    // ── View ──────────────────────────────────────────────────────

    pub fn view(&self) -> Element<'_, Message> {
        let cs = &self.colors;

        let boxes = row![
            self.search
                .view(cs, &self.posters, self.movie.selected())
                .map(Message::Search),
            self.movie.view(cs, &self.posters).map(Message::Movie),
        ]
        .spacing(style::SPACE_XL)
        .height(Length::Fill);

        column![
            self.nav_bar(cs),
            container(boxes)
                .padding([style::SPACE_LG, style::SPACE_XL])
                .height(Length::Fill),
            self.status_bar(cs),
        ]
        .into()
    }

    fn nav_bar<'a>(&'a self, cs: &'a ColorScheme) -> Element<'a, Message> {
        let logo = row![
            lucide_icons::iced::icon_popcorn()
                .size(style::TEXT_XL)
                .color(cs.on_primary),
            text("Popcorn")
                .size(style::TEXT_XL)
                .font(style::FONT_HEADING)
                .color(cs.on_primary),
        ]
        .spacing(style::SPACE_SM)
        .align_y(Alignment::Center);

        let count = text(format::result_count(self.search.result_count()))
            .size(style::TEXT_BASE)
            .color(cs.on_primary);

        let bar = row![
            logo,
            Space::new().width(Length::Fill),
            self.search.view_input(cs).map(Message::Search),
            Space::new().width(Length::Fill),
            count,
        ]
        .spacing(style::SPACE_LG)
        .align_y(Alignment::Center);

        container(
            container(bar)
                .padding([style::SPACE_SM, style::SPACE_XL])
                .height(Length::Fixed(style::NAV_BAR_HEIGHT))
                .center_y(Length::Fixed(style::NAV_BAR_HEIGHT))
                .style(theme::nav_bar(cs)),
        )
        .padding([style::SPACE_LG, style::SPACE_XL])
        .into()
    }

    fn status_bar<'a>(&'a self, cs: &'a ColorScheme) -> Element<'a, Message> {
        container(
            text(self.status_line())
                .size(style::TEXT_XS)
                .line_height(style::LINE_HEIGHT_LOOSE),
        )
        .width(Length::Fill)
        .height(Length::Fixed(style::STATUS_BAR_HEIGHT))
        .padding([style::SPACE_XS, style::SPACE_LG])
        .style(theme::status_bar(cs))
        .into()
    }

    /// One line describing whatever the user is waiting on or what went wrong.
    fn status_line(&self) -> String {
        match (self.search.status(), self.movie.status()) {
            (FetchStatus::Failed, _) => format!(
                "Search failed: {}",
                self.search.last_error().unwrap_or("unknown error")
            ),
            (_, FetchStatus::Failed) => format!(
                "Could not load movie: {}",
                self.movie.last_error().unwrap_or("unknown error")
            ),
            (FetchStatus::Loading, _) => "Searching...".into(),
            (_, FetchStatus::Loading) => "Loading movie...".into(),
            _ => format!("{} watched", format::movie_count(self.movie.watched_count())),
        }
    }
}
