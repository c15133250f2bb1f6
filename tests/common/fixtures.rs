// Test fixtures for integration testing

use kewl::core::error::Result;
use kewl::core::pagination::{Keyed, MemorySource, PageSource};
use std::cell::{Cell, RefCell};

#[allow(dead_code)]
pub const PANGRAM: &str = "The quick brown fox jumps over the lazy dog";

/// A longer body with repeated phrases, a link and some markup
#[allow(dead_code)]
pub const ARTICLE: &str = "Foxes are small omnivorous mammals. The red fox is the most \
widespread species and lives across the northern hemisphere. Read more at \
<a href=\"https://example.com/wiki/fox\">the fox article</a> before the quiz. \
A group of foxes is called a skulk, and a fox den is called an earth. \
Arctic foxes change coat colour with the seasons.";

/// Row-like element keyed by id
#[allow(dead_code)]
#[derive(Debug, Clone, PartialEq)]
pub struct Article {
    pub id: u64,
    pub title: String,
}

impl Article {
    #[allow(dead_code)]
    pub fn new(id: u64) -> Self {
        Self {
            id,
            title: format!("Article {id}"),
        }
    }
}

impl Keyed for Article {
    type Key = u64;

    fn key(&self) -> u64 {
        self.id
    }
}

/// Source that gains a row each time a reader reaches the end of it
#[allow(dead_code)]
pub struct GrowingSource {
    inner: RefCell<MemorySource<Article>>,
    next_id: Cell<u64>,
    /// Rows still to be appended, one per short page
    remaining: Cell<usize>,
    pub pages_read: Cell<usize>,
}

impl GrowingSource {
    #[allow(dead_code)]
    pub fn new(initial: u64, appends: usize) -> Self {
        Self {
            inner: RefCell::new(MemorySource::new((1..=initial).map(Article::new).collect())),
            next_id: Cell::new(initial + 1),
            remaining: Cell::new(appends),
            pages_read: Cell::new(0),
        }
    }
}

impl PageSource for GrowingSource {
    type Item = Article;

    fn last(&self) -> Result<Option<Article>> {
        self.inner.borrow().last()
    }

    fn page_after(&self, after: Option<&u64>, limit: usize) -> Result<Vec<Article>> {
        self.pages_read.set(self.pages_read.get() + 1);
        let page = self.inner.borrow().page_after(after, limit)?;

        if page.len() < limit && self.remaining.get() > 0 {
            self.remaining.set(self.remaining.get() - 1);
            let id = self.next_id.get();
            self.next_id.set(id + 1);
            self.inner.borrow_mut().insert(Article::new(id));
        }

        Ok(page)
    }
}
