use crate::song::{compare_by_key, Song, SortKey};
use std::cmp::Ordering;

type Link = Option<Box<Node>>;

#[derive(Debug)]
struct Node {
    song: Song,
    next: Link,
}

/// A singly linked list of songs, kept in descending order when filled with
/// [`SongList::insert_in_order`].
///
/// Each node owns its song and the rest of the chain. An empty list is just a
/// missing head.
///
/// # Examples
///
/// ```
/// # use music_manager::song::{Song, SortKey};
/// # use music_manager::song_list::SongList;
/// let mut list = SongList::new();
/// list.insert_in_order(Song::new("X", "Alpha", 2000, 0.5, 0.5, 80), SortKey::Popularity);
/// list.insert_in_order(Song::new("Y", "Beta", 2001, 0.5, 0.5, 90), SortKey::Popularity);
///
/// let titles: Vec<&str> = list.iter().map(|s| s.song()).collect();
/// assert_eq!(titles, ["Beta", "Alpha"]);
/// ```
#[derive(Debug, Default)]
pub struct SongList {
    head: Link,
    len: usize,
}

impl SongList {
    pub fn new() -> Self {
        Self { head: None, len: 0 }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Inserts `song` so the list stays in descending order by `key`.
    ///
    /// The new song goes before the first node it compares greater than or
    /// equal to, so among songs with the same metric and title the newest
    /// arrival comes first. Order is only maintained if the list was already
    /// ordered by the same key.
    pub fn insert_in_order(&mut self, song: Song, key: SortKey) {
        let mut skip = self
            .iter()
            .take_while(|current| compare_by_key(&song, current, key) == Ordering::Less)
            .count();

        let mut cursor = &mut self.head;
        while skip > 0 {
            if let Some(node) = cursor {
                cursor = &mut node.next;
            }
            skip -= 1;
        }

        let next = cursor.take();
        *cursor = Some(Box::new(Node { song, next }));
        self.len += 1;
    }

    /// Prepends `song` regardless of ordering.
    pub fn add_front(&mut self, song: Song) {
        let next = self.head.take();
        self.head = Some(Box::new(Node { song, next }));
        self.len += 1;
    }

    /// Appends `song` after the last node regardless of ordering. Walks the
    /// whole chain.
    pub fn add_end(&mut self, song: Song) {
        let mut cursor = &mut self.head;
        while let Some(node) = cursor {
            cursor = &mut node.next;
        }
        *cursor = Some(Box::new(Node { song, next: None }));
        self.len += 1;
    }

    /// Returns the first song without removing it, or `None` if the list is
    /// empty.
    pub fn peek_front(&self) -> Option<&Song> {
        self.head.as_deref().map(|node| &node.song)
    }

    /// Detaches the first node and hands its song to the caller.
    ///
    /// Returns `None` if the list is empty.
    pub fn remove_front(&mut self) -> Option<Song> {
        self.head.take().map(|node| {
            let node = *node;
            self.head = node.next;
            self.len -= 1;
            node.song
        })
    }

    /// Calls `visitor` on every song from head to tail, passing `context`
    /// along. There is no early exit; callers that only want a prefix should
    /// use [`SongList::iter`] instead.
    ///
    /// # Examples
    ///
    /// ```
    /// # use music_manager::song::{Song, SortKey};
    /// # use music_manager::song_list::SongList;
    /// let mut list = SongList::new();
    /// list.add_end(Song::new("X", "Alpha", 2000, 0.5, 0.5, 80));
    /// list.add_end(Song::new("Y", "Beta", 2001, 0.5, 0.5, 90));
    ///
    /// let mut total = 0;
    /// list.apply(|song, total: &mut i32| *total += song.popularity(), &mut total);
    /// assert_eq!(total, 170);
    /// ```
    pub fn apply<C, F>(&self, mut visitor: F, context: &mut C)
    where
        F: FnMut(&Song, &mut C),
    {
        let mut current = self.head.as_deref();
        while let Some(node) = current {
            visitor(&node.song, context);
            current = node.next.as_deref();
        }
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter {
            next: self.head.as_deref(),
        }
    }
}

impl Drop for SongList {
    // Unlink node by node; the default drop would recurse once per node.
    fn drop(&mut self) {
        let mut link = self.head.take();
        while let Some(mut node) = link {
            link = node.next.take();
        }
    }
}

/// Borrowing iterator over a [`SongList`], head first.
pub struct Iter<'a> {
    next: Option<&'a Node>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Song;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            &node.song
        })
    }
}

impl<'a> IntoIterator for &'a SongList {
    type Item = &'a Song;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Owning iterator that drains a [`SongList`] from the front.
pub struct IntoIter(SongList);

impl Iterator for IntoIter {
    type Item = Song;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.remove_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.0.len(), Some(self.0.len()))
    }
}

impl IntoIterator for SongList {
    type Item = Song;
    type IntoIter = IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter(self)
    }
}
