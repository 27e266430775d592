pub mod movie;
pub mod search;

use iced::Task;

use popcorn_api::ImdbId;

use crate::app;

/// Actions that a screen can request from the app router.
///
/// Screens return these from `update()` instead of reaching into each
/// other; the app interprets them in one place.
pub enum Action {
    /// No side-effect.
    None,
    /// Open a movie in the detail box.
    SelectMovie(ImdbId),
    /// Start downloads for any poster URLs not yet in the cache.
    RequestPosters(Vec<String>),
    /// Run an async Iced task that eventually produces an app::Message.
    RunTask(Task<app::Message>),
}
