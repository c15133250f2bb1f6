//! Cursor-based iteration over large ordered collections.
//!
//! [`queryset_iterator`] reads a collection in pages of `chunk_size`
//! elements, keyed by each element's ordered key instead of an
//! offset, so memory stays bounded and every page starts strictly
//! after the previous one.
//!
//! A pass ends when a page comes back short. If by then the cursor
//! has not reached the collection's current final element (rows were
//! added behind it), the iterator starts another pass from the
//! beginning. This is best-effort consistency, not a snapshot:
//! elements seen in an earlier pass are yielded again. Passes are
//! capped so a collection that keeps growing cannot hold the
//! iterator forever.

use crate::core::config::PaginationConfig;
use crate::core::error::{KewlError, Result};
use std::collections::VecDeque;
use std::fmt;

/// An element with an ordered, unique key (a primary key)
pub trait Keyed {
    type Key: Ord + Clone + fmt::Debug;

    fn key(&self) -> Self::Key;
}

/// A collection that can be read one page at a time, ordered by key
pub trait PageSource {
    type Item: Keyed;

    /// The element currently last in key order, if any
    fn last(&self) -> Result<Option<Self::Item>>;

    /// Up to `limit` elements with keys strictly greater than `after`,
    /// in key order. `None` starts from the beginning.
    fn page_after(
        &self,
        after: Option<&<Self::Item as Keyed>::Key>,
        limit: usize,
    ) -> Result<Vec<Self::Item>>;
}

impl<S: PageSource + ?Sized> PageSource for &S {
    type Item = S::Item;

    fn last(&self) -> Result<Option<Self::Item>> {
        (**self).last()
    }

    fn page_after(
        &self,
        after: Option<&<Self::Item as Keyed>::Key>,
        limit: usize,
    ) -> Result<Vec<Self::Item>> {
        (**self).page_after(after, limit)
    }
}

type KeyOf<S> = <<S as PageSource>::Item as Keyed>::Key;

/// Lazily iterate `source` in pages of `chunk_size`.
///
/// Nothing is read until the first call to `next()`.
pub fn queryset_iterator<S: PageSource>(source: S, chunk_size: usize) -> Result<PageIter<S>> {
    if chunk_size == 0 {
        return Err(KewlError::InvalidArgument(
            "chunk_size must be non-zero".to_string(),
        ));
    }

    Ok(PageIter {
        source,
        chunk_size,
        max_passes: PaginationConfig::default().max_passes,
        started: false,
        done: false,
        pass_exhausted: false,
        passes: 0,
        cursor: None,
        buffer: VecDeque::new(),
    })
}

/// [`queryset_iterator`] with chunk size and pass limit from config
pub fn queryset_iterator_with<S: PageSource>(
    source: S,
    config: &PaginationConfig,
) -> Result<PageIter<S>> {
    Ok(queryset_iterator(source, config.chunk_size)?.with_max_passes(config.max_passes))
}

/// Iterator returned by [`queryset_iterator`]
pub struct PageIter<S: PageSource> {
    source: S,
    chunk_size: usize,
    max_passes: usize,
    started: bool,
    done: bool,
    /// The last page of the current pass has been fetched
    pass_exhausted: bool,
    passes: usize,
    /// Key of the last element yielded in the current pass
    cursor: Option<KeyOf<S>>,
    buffer: VecDeque<S::Item>,
}

impl<S: PageSource> PageIter<S> {
    /// Cap the number of full passes (at least one)
    pub fn with_max_passes(mut self, max_passes: usize) -> Self {
        self.max_passes = max_passes.max(1);
        self
    }

    /// Passes started so far
    pub fn passes(&self) -> usize {
        self.passes
    }

    fn fail(&mut self, err: KewlError) -> Option<Result<S::Item>> {
        self.done = true;
        self.buffer.clear();
        Some(Err(err))
    }

    fn fetch_page(&mut self) -> Result<()> {
        let page = self
            .source
            .page_after(self.cursor.as_ref(), self.chunk_size)?;

        if let (Some(cursor), Some(first)) = (&self.cursor, page.first()) {
            if first.key() <= *cursor {
                return Err(KewlError::Source(format!(
                    "page starting at {:?} does not advance past cursor {:?}",
                    first.key(),
                    cursor
                )));
            }
        }

        tracing::debug!(
            pass = self.passes,
            fetched = page.len(),
            after = ?self.cursor,
            "Fetched page"
        );

        if page.len() < self.chunk_size {
            self.pass_exhausted = true;
        }
        self.buffer.extend(page);
        Ok(())
    }

    /// Decide whether another pass is needed once the current one ends
    fn finish_pass(&mut self) -> Result<bool> {
        let Some(last) = self.source.last()? else {
            return Ok(false);
        };

        let reached = self
            .cursor
            .as_ref()
            .is_some_and(|cursor| last.key() <= *cursor);
        if reached {
            return Ok(false);
        }

        if self.passes >= self.max_passes {
            tracing::warn!(
                passes = self.passes,
                final_key = ?last.key(),
                cursor = ?self.cursor,
                "Giving up before reaching the final element"
            );
            return Ok(false);
        }

        tracing::debug!(final_key = ?last.key(), "Final element not reached, starting new pass");
        self.passes += 1;
        self.cursor = None;
        self.pass_exhausted = false;
        Ok(true)
    }
}

impl<S: PageSource> Iterator for PageIter<S> {
    type Item = Result<S::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        if !self.started {
            self.started = true;
            match self.source.last() {
                Ok(Some(_)) => self.passes = 1,
                Ok(None) => {
                    self.done = true;
                    return None;
                }
                Err(e) => return self.fail(e),
            }
        }

        loop {
            if let Some(item) = self.buffer.pop_front() {
                self.cursor = Some(item.key());
                return Some(Ok(item));
            }

            if !self.pass_exhausted {
                if let Err(e) = self.fetch_page() {
                    return self.fail(e);
                }
                continue;
            }

            match self.finish_pass() {
                Ok(true) => continue,
                Ok(false) => {
                    self.done = true;
                    return None;
                }
                Err(e) => return self.fail(e),
            }
        }
    }
}

/// In-memory page source, kept sorted by key
#[derive(Debug, Clone, Default)]
pub struct MemorySource<T> {
    items: Vec<T>,
}

impl<T: Keyed + Clone> MemorySource<T> {
    pub fn new(mut items: Vec<T>) -> Self {
        items.sort_by_key(|item| item.key());
        Self { items }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Insert keeping key order
    pub fn insert(&mut self, item: T) {
        let key = item.key();
        let at = self.items.partition_point(|i| i.key() < key);
        self.items.insert(at, item);
    }

    /// Remove the element with `key`, if present
    pub fn remove(&mut self, key: &T::Key) -> Option<T> {
        let at = self.items.iter().position(|i| i.key() == *key)?;
        Some(self.items.remove(at))
    }
}

impl<T: Keyed + Clone> PageSource for MemorySource<T> {
    type Item = T;

    fn last(&self) -> Result<Option<T>> {
        Ok(self.items.last().cloned())
    }

    fn page_after(&self, after: Option<&T::Key>, limit: usize) -> Result<Vec<T>> {
        let start = match after {
            Some(key) => self.items.partition_point(|i| i.key() <= *key),
            None => 0,
        };
        Ok(self.items.iter().skip(start).take(limit).cloned().collect())
    }
}

impl Keyed for u64 {
    type Key = u64;

    fn key(&self) -> u64 {
        *self
    }
}
