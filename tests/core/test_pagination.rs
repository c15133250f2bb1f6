// Integration tests for the pagination cursor

use crate::common::{Article, GrowingSource};
use kewl::core::config::PaginationConfig;
use kewl::core::error::Result;
use kewl::core::pagination::{queryset_iterator, queryset_iterator_with, MemorySource};

fn ids(items: Vec<Article>) -> Vec<u64> {
    items.into_iter().map(|a| a.id).collect()
}

#[test]
fn test_reads_in_pages() {
    let source = GrowingSource::new(10, 0);
    let items = queryset_iterator(&source, 3)
        .unwrap()
        .collect::<Result<Vec<_>>>()
        .unwrap();

    assert_eq!(ids(items), (1..=10).collect::<Vec<_>>());
    // 3 + 3 + 3 + 1
    assert_eq!(source.pages_read.get(), 4);
}

#[test]
fn test_exact_multiple_needs_empty_page() {
    let source = GrowingSource::new(6, 0);
    let count = queryset_iterator(&source, 3).unwrap().count();

    assert_eq!(count, 6);
    assert_eq!(source.pages_read.get(), 3);
}

#[test]
fn test_lazy_until_first_next() {
    let source = GrowingSource::new(10, 0);
    let mut iter = queryset_iterator(&source, 4).unwrap();
    assert_eq!(source.pages_read.get(), 0);

    assert_eq!(iter.next().unwrap().unwrap().id, 1);
    assert_eq!(source.pages_read.get(), 1);
}

#[test]
fn test_rescans_when_rows_arrive_at_the_end() {
    let source = GrowingSource::new(3, 1);
    let mut iter = queryset_iterator(&source, 2).unwrap();
    let items = iter.by_ref().collect::<Result<Vec<_>>>().unwrap();

    assert_eq!(ids(items), vec![1, 2, 3, 1, 2, 3, 4]);
    assert_eq!(iter.passes(), 2);
}

#[test]
fn test_pass_limit_from_config() {
    let source = GrowingSource::new(3, 100);
    let config = PaginationConfig {
        chunk_size: 2,
        max_passes: 3,
    };
    let mut iter = queryset_iterator_with(&source, &config).unwrap();
    let items = iter.by_ref().collect::<Result<Vec<_>>>().unwrap();

    assert_eq!(iter.passes(), 3);
    // Pass n sees the n rows appended so far
    assert_eq!(items.len(), 3 + 4 + 5);
}

#[test]
fn test_empty_collection() {
    let source: MemorySource<Article> = MemorySource::new(Vec::new());
    assert_eq!(queryset_iterator(&source, 5).unwrap().count(), 0);
}

#[test]
fn test_zero_chunk_size_is_rejected() {
    let source = MemorySource::new(vec![Article::new(1)]);
    assert!(queryset_iterator(&source, 0).is_err());
}

#[test]
fn test_unsorted_input_is_ordered_by_key() {
    let source = MemorySource::new(vec![Article::new(5), Article::new(2), Article::new(9)]);
    let items = queryset_iterator(&source, 2)
        .unwrap()
        .collect::<Result<Vec<_>>>()
        .unwrap();

    assert_eq!(ids(items), vec![2, 5, 9]);
}
