//! Tests for [`CacheStore`]: three independent in-memory namespaces.

use std::time::Duration;

use lyricfetch::cache::lyric_key;
use lyricfetch::{CacheConfig, CacheStore, LyricRecord, SongRecord};

#[tokio::test]
async fn cache_miss_returns_none() {
    let cache = CacheStore::new();
    assert!(cache.albums().get("nonexistent").await.is_none());
    assert!(!cache.songs().contains("nonexistent"));
}

#[tokio::test]
async fn put_then_get() {
    let cache = CacheStore::new();
    cache.songs().put("1", SongRecord::new("1", "One", "A")).await;

    let got = cache.songs().get("1").await;
    assert_eq!(got.map(|s| s.name), Some("One".to_string()));
}

#[tokio::test]
async fn overwrite_replaces_entry() {
    let cache = CacheStore::new();
    cache.albums().put("100", vec!["1".to_string()]).await;
    cache
        .albums()
        .put("100", vec!["1".to_string(), "2".to_string()])
        .await;

    assert_eq!(cache.albums().get("100").await.map(|ids| ids.len()), Some(2));
}

#[tokio::test]
async fn namespaces_are_independent() {
    let cache = CacheStore::new();
    cache.albums().put("1", vec!["x".to_string()]).await;

    assert!(cache.albums().contains("1"));
    assert!(!cache.songs().contains("1"));
    assert!(!cache.lyrics().contains("1"));
}

#[tokio::test]
async fn lyric_keys_separate_variants() {
    let cache = CacheStore::new();
    cache
        .lyrics()
        .put(lyric_key("7", true), LyricRecord::new("plain", true))
        .await;

    assert!(cache.lyrics().contains("7_True"));
    assert!(!cache.lyrics().contains(&lyric_key("7", false)));
}

#[tokio::test]
async fn clear_empties_all_namespaces() {
    let cache = CacheStore::new();
    cache.albums().put("a", vec![]).await;
    cache.songs().put("s", SongRecord::new("s", "n", "x")).await;
    cache.lyrics().put("s_False", LyricRecord::new("l", false)).await;

    cache.clear();

    assert!(!cache.albums().contains("a"));
    assert!(!cache.songs().contains("s"));
    assert!(!cache.lyrics().contains("s_False"));
}

#[tokio::test]
async fn bounded_store_evicts_past_capacity() {
    let cache = CacheStore::with_config(&CacheConfig::new().max_entries(10));
    for i in 0..100 {
        let id = i.to_string();
        cache.songs().put(id.clone(), SongRecord::new(id, "n", "s")).await;
    }
    cache.songs().sync().await;

    assert!(cache.songs().len() <= 10);
}

#[tokio::test]
async fn ttl_expires_entries() {
    let cache = CacheStore::with_config(&CacheConfig::new().ttl(Duration::from_millis(50)));
    cache.albums().put("1", vec!["x".to_string()]).await;
    assert!(cache.albums().contains("1"));

    tokio::time::sleep(Duration::from_millis(150)).await;
    assert!(cache.albums().get("1").await.is_none());
}
