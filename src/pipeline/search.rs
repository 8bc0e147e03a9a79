// src/pipeline/search.rs

//! Batch username search pipeline.

use std::sync::Arc;

use crate::error::{AppError, Result};
use crate::models::Config;
use crate::pipeline::input::clean_usernames;
use crate::services::{ExistenceProber, ProfileSearch, SearchOutcome};
use crate::storage::{BlobStore, ResultCache};
use crate::utils::http::HttpFetcher;

/// Search every username, then persist the cache once.
///
/// Usernames are trimmed and blank ones skipped; if none remain this is an
/// input error.
pub async fn run_search(
    config: &Config,
    storage: &dyn BlobStore,
    fetcher: Arc<dyn HttpFetcher>,
    usernames: &[String],
) -> Result<SearchOutcome> {
    let usernames = clean_usernames(usernames.iter().map(String::as_str));
    if usernames.is_empty() {
        return Err(AppError::input("Please provide at least a username or input file"));
    }

    let catalog = Arc::new(config.catalog()?);
    let prober = ExistenceProber::new(fetcher, Arc::clone(&catalog), &config.prober);
    let search = ProfileSearch::new(catalog, prober, &config.prober);

    let cache_key = config.paths.cache_file.as_str();
    let mut cache = ResultCache::load(storage, cache_key).await;
    log::info!(
        "Loaded cache with {} usernames; searching {} usernames",
        cache.len(),
        usernames.len()
    );

    let outcome = search.search_all(&mut cache, &usernames).await;

    cache.save(storage, cache_key).await?;
    log::info!("Cache saved ({} usernames)", cache.len());

    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{PlatformSpec, ProfileResult, Status};
    use crate::services::prober::tests::ScriptedFetcher;
    use crate::storage::LocalStorage;
    use crate::utils::http::FetchResponse;
    use tempfile::TempDir;

    fn config() -> Config {
        let mut config = Config::default();
        config.prober.retry_delay_ms = 0;
        config.prober.request_delay_ms = 0;
        config.platforms = vec![PlatformSpec::new(
            "TestSite",
            "https://test/{username}",
            &["Page not found"],
        )];
        config
    }

    #[tokio::test]
    async fn test_empty_usernames_is_input_error() {
        let tmp = TempDir::new().unwrap();
        let storage = LocalStorage::new(tmp.path());
        let fetcher = Arc::new(ScriptedFetcher::always(FetchResponse::new(200, "")));

        let result = run_search(&config(), &storage, fetcher.clone(), &[]).await;

        assert!(matches!(result, Err(AppError::Input(_))));
        assert_eq!(fetcher.call_count(), 0);
        assert!(!storage.path("tracevibe_cache.json").exists());
    }

    #[tokio::test]
    async fn test_blank_usernames_are_input_error() {
        let tmp = TempDir::new().unwrap();
        let storage = LocalStorage::new(tmp.path());
        let fetcher = Arc::new(ScriptedFetcher::always(FetchResponse::new(200, "home page")));
        let usernames = vec![String::new(), "   ".to_string()];

        let result = run_search(&config(), &storage, fetcher.clone(), &usernames).await;

        assert!(matches!(result, Err(AppError::Input(_))));
        assert_eq!(fetcher.call_count(), 0);
        assert!(!storage.path("tracevibe_cache.json").exists());
    }

    #[tokio::test]
    async fn test_usernames_are_trimmed_before_search() {
        let tmp = TempDir::new().unwrap();
        let storage = LocalStorage::new(tmp.path());
        let fetcher = Arc::new(ScriptedFetcher::always(FetchResponse::new(200, "home page")));
        let usernames = vec![" bob ".to_string(), String::new()];

        let outcome = run_search(&config(), &storage, fetcher.clone(), &usernames)
            .await
            .unwrap();

        assert_eq!(outcome.username_total, 1);
        assert_eq!(*fetcher.calls.lock().unwrap(), ["https://test/bob"]);
        let cache = ResultCache::load(&storage, "tracevibe_cache.json").await;
        assert_eq!(cache.usernames().collect::<Vec<_>>(), ["bob"]);
    }

    #[tokio::test]
    async fn test_run_persists_cache_once_for_batch() {
        let tmp = TempDir::new().unwrap();
        let storage = LocalStorage::new(tmp.path());
        let fetcher = Arc::new(ScriptedFetcher::always(FetchResponse::new(
            200,
            "Page not found",
        )));
        let usernames = vec!["bob".to_string(), "amy".to_string()];

        let outcome = run_search(&config(), &storage, fetcher.clone(), &usernames)
            .await
            .unwrap();

        assert_eq!(outcome.profiles.len(), 2);
        assert_eq!(outcome.found_total, 0);

        let cache = ResultCache::load(&storage, "tracevibe_cache.json").await;
        assert_eq!(
            cache.get("bob").unwrap(),
            [ProfileResult::new(
                "TestSite",
                "https://test/bob",
                Status::NotFound,
            )]
        );
        assert!(cache.contains("amy"));
    }

    #[tokio::test]
    async fn test_invalid_catalog_is_rejected() {
        let tmp = TempDir::new().unwrap();
        let storage = LocalStorage::new(tmp.path());
        let fetcher = Arc::new(ScriptedFetcher::always(FetchResponse::new(200, "")));
        let mut config = config();
        let dup = config.platforms[0].clone();
        config.platforms.push(dup);

        let result = run_search(&config, &storage, fetcher, &["bob".to_string()]).await;
        assert!(matches!(result, Err(AppError::Validation(_))));
    }
}
