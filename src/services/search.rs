// src/services/search.rs

//! Username search service.
//!
//! Walks the platform catalog for a username, one probe at a time, reusing
//! cached results when the username has been searched before.

use std::sync::Arc;
use std::time::Duration;

use crate::models::{Catalog, ProberConfig, ProfileResult};
use crate::services::ExistenceProber;
use crate::storage::ResultCache;

/// Summary of a batch search.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SearchOutcome {
    /// All results, usernames in input order, platforms in catalog order
    pub profiles: Vec<ProfileResult>,
    pub username_total: usize,
    pub cache_hits: usize,
    pub found_total: usize,
}

/// Service orchestrating probes across the catalog.
pub struct ProfileSearch {
    catalog: Arc<Catalog>,
    prober: ExistenceProber,
    request_delay: Duration,
}

impl ProfileSearch {
    pub fn new(catalog: Arc<Catalog>, prober: ExistenceProber, config: &ProberConfig) -> Self {
        Self {
            catalog,
            prober,
            request_delay: config.request_delay(),
        }
    }

    /// Override the pause between platforms.
    pub fn with_request_delay(mut self, request_delay: Duration) -> Self {
        self.request_delay = request_delay;
        self
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Search one username.
    ///
    /// Cached results are returned verbatim. Otherwise every platform is
    /// probed in catalog order and the results are stored in `cache`.
    pub async fn search(&self, cache: &mut ResultCache, username: &str) -> Vec<ProfileResult> {
        if let Some(cached) = cache.get(username) {
            log::info!("Using cached results for username '{username}'");
            return cached.to_vec();
        }

        let total = self.catalog.len();
        log::info!("Searching for username '{username}' across {total} platforms...");

        let mut results = Vec::with_capacity(total);
        for (index, platform) in self.catalog.platforms().iter().enumerate() {
            let url = platform.profile_url(username);
            let status = self.prober.probe(&url, &platform.name).await;
            log::debug!("[{}/{}] {}: {}", index + 1, total, platform.name, status);

            results.push(ProfileResult::new(&platform.name, url, status));

            if !self.request_delay.is_zero() {
                tokio::time::sleep(self.request_delay).await;
            }
        }

        let found = results.iter().filter(|r| r.status.is_found()).count();
        log::info!("'{username}': found on {found} of {total} platforms");

        cache.put(username, results.clone());
        results
    }

    /// Search several usernames sequentially.
    pub async fn search_all(&self, cache: &mut ResultCache, usernames: &[String]) -> SearchOutcome {
        let mut outcome = SearchOutcome {
            username_total: usernames.len(),
            ..SearchOutcome::default()
        };

        for username in usernames {
            if cache.contains(username) {
                outcome.cache_hits += 1;
            }
            let results = self.search(cache, username).await;
            outcome.profiles.extend(results);
        }

        outcome.found_total = outcome
            .profiles
            .iter()
            .filter(|r| r.status.is_found())
            .count();
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{PlatformSpec, Status};
    use crate::services::prober::tests::ScriptedFetcher;
    use crate::storage::LocalStorage;
    use crate::utils::http::FetchResponse;
    use tempfile::TempDir;

    fn catalog() -> Arc<Catalog> {
        Arc::new(
            Catalog::new(vec![
                PlatformSpec::new("TestSite", "https://test/{username}", &["Page not found"]),
                PlatformSpec::new(
                    "Other",
                    "https://other.example/@{username}",
                    &["No such user"],
                ),
                PlatformSpec::new("Third", "https://{username}.third.example", &[]),
            ])
            .unwrap(),
        )
    }

    fn search_with(fetcher: Arc<ScriptedFetcher>) -> ProfileSearch {
        let config = ProberConfig::default();
        let catalog = catalog();
        let prober = ExistenceProber::new(fetcher, Arc::clone(&catalog), &config)
            .with_retry_delay(Duration::ZERO);
        ProfileSearch::new(catalog, prober, &config).with_request_delay(Duration::ZERO)
    }

    #[tokio::test]
    async fn test_results_follow_catalog_order() {
        let fetcher = Arc::new(ScriptedFetcher::new(vec![
            Ok(FetchResponse::new(200, "hello")),
            Ok(FetchResponse::new(404, "")),
            Ok(FetchResponse::new(200, "")),
        ]));
        let search = search_with(fetcher.clone());
        let mut cache = ResultCache::new();

        let results = search.search(&mut cache, "carol").await;

        assert_eq!(
            results,
            vec![
                ProfileResult::new("TestSite", "https://test/carol", Status::Found),
                ProfileResult::new("Other", "https://other.example/@carol", Status::NotFound),
                ProfileResult::new("Third", "https://carol.third.example", Status::Found),
            ]
        );
        assert_eq!(
            *fetcher.calls.lock().unwrap(),
            [
                "https://test/carol",
                "https://other.example/@carol",
                "https://carol.third.example",
            ]
        );
        assert_eq!(cache.get("carol").unwrap(), results.as_slice());
    }

    #[tokio::test]
    async fn test_cache_hit_skips_network() {
        let fetcher = Arc::new(ScriptedFetcher::always(FetchResponse::new(200, "")));
        let search = search_with(fetcher.clone());
        let mut cache = ResultCache::new();
        let cached = vec![ProfileResult::new(
            "Stale",
            "https://stale/dave",
            Status::Found,
        )];
        cache.put("dave", cached.clone());

        let results = search.search(&mut cache, "dave").await;

        assert_eq!(results, cached);
        assert_eq!(fetcher.call_count(), 0);
    }

    #[tokio::test]
    async fn test_search_is_idempotent_across_persistence() {
        let tmp = TempDir::new().unwrap();
        let storage = LocalStorage::new(tmp.path());
        let fetcher = Arc::new(ScriptedFetcher::always(FetchResponse::new(200, "profile")));
        let search = search_with(fetcher.clone());

        let mut cache = ResultCache::load(&storage, "cache.json").await;
        let first = search.search(&mut cache, "alice").await;
        cache.save(&storage, "cache.json").await.unwrap();
        let calls_after_first = fetcher.call_count();

        let mut cache = ResultCache::load(&storage, "cache.json").await;
        let second = search.search(&mut cache, "alice").await;

        assert_eq!(calls_after_first, 3);
        assert_eq!(fetcher.call_count(), calls_after_first);
        assert_eq!(first, second);
    }

    #[tokio::test(start_paused = true)]
    async fn test_default_pause_between_platforms() {
        let fetcher = Arc::new(ScriptedFetcher::always(FetchResponse::new(200, "")));
        let config = ProberConfig::default();
        let catalog = catalog();
        let prober = ExistenceProber::new(fetcher.clone(), Arc::clone(&catalog), &config);
        let search = ProfileSearch::new(catalog, prober, &config);
        let mut cache = ResultCache::new();

        let start = tokio::time::Instant::now();
        search.search(&mut cache, "gina").await;
        let elapsed = start.elapsed();

        assert_eq!(fetcher.call_count(), 3);
        assert!(elapsed >= Duration::from_millis(1500), "{elapsed:?}");
        assert!(elapsed < Duration::from_millis(1600), "{elapsed:?}");

        let start = tokio::time::Instant::now();
        search.search(&mut cache, "gina").await;
        assert!(start.elapsed() < Duration::from_millis(1));
    }

    #[tokio::test]
    async fn test_search_all_counts_and_concatenates() {
        let fetcher = Arc::new(ScriptedFetcher::always(FetchResponse::new(200, "")));
        let search = search_with(fetcher.clone());
        let mut cache = ResultCache::new();
        cache.put(
            "cached",
            vec![ProfileResult::new(
                "TestSite",
                "https://test/cached",
                Status::NotFound,
            )],
        );

        let usernames = vec!["erin".to_string(), "cached".to_string()];
        let outcome = search.search_all(&mut cache, &usernames).await;

        assert_eq!(outcome.username_total, 2);
        assert_eq!(outcome.cache_hits, 1);
        assert_eq!(outcome.profiles.len(), 4);
        assert_eq!(outcome.found_total, 3);
        assert_eq!(outcome.profiles[0].url, "https://test/erin");
        assert_eq!(outcome.profiles[3].url, "https://test/cached");
        assert_eq!(fetcher.call_count(), 3);
    }

    #[tokio::test]
    async fn test_duplicate_username_in_batch_probes_once() {
        let fetcher = Arc::new(ScriptedFetcher::always(FetchResponse::new(404, "")));
        let search = search_with(fetcher.clone());
        let mut cache = ResultCache::new();

        let usernames = vec!["frank".to_string(), "frank".to_string()];
        let outcome = search.search_all(&mut cache, &usernames).await;

        assert_eq!(fetcher.call_count(), 3);
        assert_eq!(outcome.cache_hits, 1);
        assert_eq!(outcome.profiles.len(), 6);
    }
}
