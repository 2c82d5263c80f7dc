//! Playlist index and the pagination fold
//!
//! The index is the stage-1 snapshot every merge decision is made against.
//! It only ever grows during a run; an id is in the title map iff it is in
//! the membership set.

use bridge_traits::error::Result as BridgeResult;
use bridge_traits::video::VideoEntry;
use std::collections::{HashMap, HashSet};
use std::future::Future;

/// Snapshot of the videos already present in the target playlist
#[derive(Debug, Default, Clone)]
pub struct PlaylistIndex {
    ids: HashSet<String>,
    titles: HashMap<String, String>,
}

impl PlaylistIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one playlist entry
    ///
    /// Later pages win on title collisions; membership is unaffected since
    /// identity is the id alone.
    pub fn insert(&mut self, entry: VideoEntry) {
        self.ids.insert(entry.id.clone());
        self.titles.insert(entry.id, entry.title);
    }

    /// Membership test against the snapshot
    pub fn contains(&self, video_id: &str) -> bool {
        self.ids.contains(video_id)
    }

    /// Title of an indexed video, if present
    pub fn title(&self, video_id: &str) -> Option<&str> {
        self.titles.get(video_id).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

impl FromIterator<VideoEntry> for PlaylistIndex {
    fn from_iter<I: IntoIterator<Item = VideoEntry>>(iter: I) -> Self {
        let mut index = Self::new();
        for entry in iter {
            index.insert(entry);
        }
        index
    }
}

/// Drain a paginated source into one accumulator
///
/// Calls `fetch_page` with `None`, then with each returned continuation
/// cursor, until a page comes back without one. The accumulator is threaded
/// explicitly through the loop rather than shared with the fetch closure, so
/// page fetchers stay stateless.
///
/// The first failing page aborts the fold; no partial accumulator is
/// returned.
pub async fn collect_pages<T, F, Fut>(mut fetch_page: F) -> BridgeResult<Vec<T>>
where
    F: FnMut(Option<String>) -> Fut,
    Fut: Future<Output = BridgeResult<(Vec<T>, Option<String>)>>,
{
    let mut collected = Vec::new();
    let mut cursor = None;

    loop {
        let (items, next_cursor) = fetch_page(cursor).await?;
        collected.extend(items);

        match next_cursor {
            Some(token) => cursor = Some(token),
            None => return Ok(collected),
        }
    }
}
