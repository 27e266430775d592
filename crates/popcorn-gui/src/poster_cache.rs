use std::collections::HashMap;

use iced::widget::image;

/// State of a poster image for a given URL.
#[derive(Debug, Clone)]
pub enum PosterState {
    Loading,
    Loaded(image::Handle),
    Failed,
}

/// In-memory cache mapping poster URLs to their download state.
///
/// Posters live only for the session; nothing is written to disk.
#[derive(Debug, Default)]
pub struct PosterCache {
    states: HashMap<String, PosterState>,
}

impl PosterCache {
    pub fn get(&self, url: &str) -> Option<&PosterState> {
        self.states.get(url)
    }

    /// Mark a URL as loading. Returns `false` if it is already known.
    pub fn begin(&mut self, url: &str) -> bool {
        if self.states.contains_key(url) {
            return false;
        }
        self.states.insert(url.to_string(), PosterState::Loading);
        true
    }

    pub fn finish(&mut self, url: String, result: Result<Vec<u8>, String>) {
        let state = match result {
            Ok(bytes) => PosterState::Loaded(image::Handle::from_bytes(bytes)),
            Err(e) => {
                tracing::debug!(%url, error = %e, "poster download failed");
                PosterState::Failed
            }
        };
        self.states.insert(url, state);
    }
}

/// Download a poster image into memory.
pub async fn fetch_poster(url: String) -> Result<Vec<u8>, String> {
    let bytes = reqwest::get(&url)
        .await
        .map_err(|e| e.to_string())?
        .error_for_status()
        .map_err(|e| e.to_string())?
        .bytes()
        .await
        .map_err(|e| e.to_string())?;
    Ok(bytes.to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_begin_only_once_per_url() {
        let mut cache = PosterCache::default();
        assert!(cache.begin("https://img/a.jpg"));
        assert!(!cache.begin("https://img/a.jpg"));
        assert!(matches!(
            cache.get("https://img/a.jpg"),
            Some(PosterState::Loading)
        ));
    }

    #[test]
    fn test_failed_download_is_not_retried() {
        let mut cache = PosterCache::default();
        cache.begin("https://img/a.jpg");
        cache.finish("https://img/a.jpg".into(), Err("404".into()));
        assert!(matches!(
            cache.get("https://img/a.jpg"),
            Some(PosterState::Failed)
        ));
        assert!(!cache.begin("https://img/a.jpg"));
    }

    #[test]
    fn test_loaded_bytes_become_handle() {
        let mut cache = PosterCache::default();
        cache.begin("https://img/b.jpg");
        cache.finish("https://img/b.jpg".into(), Ok(vec![0xFF, 0xD8, 0xFF]));
        assert!(matches!(
            cache.get("https://img/b.jpg"),
            Some(PosterState::Loaded(_))
        ));
        assert!(cache.get("https://img/c.jpg").is_none());
    }
}
