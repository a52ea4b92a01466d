//! Country dial-code list backed by the REST Countries API.

use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

use crate::server::{
    error::AppError,
    model::country::{self, Country, RestCountry},
};

/// How long a fetched country list is served from memory.
const COUNTRY_CACHE_TTL: Duration = Duration::from_secs(60 * 60);

#[derive(Clone)]
struct CachedCountries {
    countries: Vec<Country>,
    fetched_at: Instant,
}

impl CachedCountries {
    fn new(countries: Vec<Country>) -> Self {
        Self {
            countries,
            fetched_at: Instant::now(),
        }
    }

    fn is_expired(&self) -> bool {
        self.fetched_at.elapsed() >= COUNTRY_CACHE_TTL
    }
}

/// Service providing the dial-code list for the phone input.
///
/// The upstream list is cached in memory for one hour and shared between clones. When the
/// upstream cannot be reached the fixed fallback list is served and nothing is cached, so
/// the next request retries.
#[derive(Clone)]
pub struct CountryService {
    base_url: String,
    cache: Arc<RwLock<Option<CachedCountries>>>,
}

impl CountryService {
    /// Creates a new CountryService.
    ///
    /// # Arguments
    /// - `base_url` - REST Countries base URL without trailing path
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            cache: Arc::new(RwLock::new(None)),
        }
    }

    /// Returns countries sorted by name, filtered by `search` when given.
    ///
    /// `search` matches the name case-insensitively or the dial code as a substring.
    pub async fn list(&self, http_client: &reqwest::Client, search: Option<&str>) -> Vec<Country> {
        let countries = self.countries(http_client).await;

        match search.map(str::trim).filter(|s| !s.is_empty()) {
            Some(search) => countries
                .into_iter()
                .filter(|country| country.matches(search))
                .collect(),
            None => countries,
        }
    }

    async fn countries(&self, http_client: &reqwest::Client) -> Vec<Country> {
        if let Some(cached) = self.cache.read().await.as_ref() {
            if !cached.is_expired() {
                return cached.countries.clone();
            }
        }

        match self.fetch(http_client).await {
            Ok(countries) if !countries.is_empty() => {
                tracing::info!("Fetched {} countries", countries.len());
                *self.cache.write().await = Some(CachedCountries::new(countries.clone()));
                countries
            }
            Ok(_) => {
                tracing::warn!("Country list from upstream was empty, serving fallback");
                Country::fallback()
            }
            Err(e) => {
                tracing::warn!("Failed to fetch countries, serving fallback: {}", e);
                Country::fallback()
            }
        }
    }

    async fn fetch(&self, http_client: &reqwest::Client) -> Result<Vec<Country>, AppError> {
        let url = format!("{}/v3.1/all?fields=name,cca2,idd,flags", self.base_url);

        let raw: Vec<RestCountry> = http_client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let mut countries: Vec<Country> =
            raw.into_iter().filter_map(RestCountry::into_country).collect();
        country::sort_by_name(&mut countries);

        Ok(countries)
    }

    #[cfg(test)]
    async fn seed(&self, countries: Vec<Country>) {
        *self.cache.write().await = Some(CachedCountries::new(countries));
    }

    #[cfg(test)]
    async fn is_cached(&self) -> bool {
        self.cache.read().await.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::{
        io::{AsyncReadExt, AsyncWriteExt},
        net::TcpListener,
    };

    fn client() -> reqwest::Client {
        reqwest::Client::builder()
            .no_proxy()
            .timeout(Duration::from_secs(2))
            .build()
            .unwrap()
    }

    /// Tests that an unreachable upstream serves the fallback list uncached.
    ///
    /// Expected: the four fallback countries and an empty cache
    #[tokio::test]
    async fn serves_fallback_when_upstream_unreachable() {
        let service = CountryService::new("http://127.0.0.1:9");

        let countries = service.list(&client(), None).await;

        assert_eq!(countries, Country::fallback());
        assert!(!service.is_cached().await);
    }

    /// Tests that a fresh cache is served without contacting the upstream.
    ///
    /// Expected: the seeded list
    #[tokio::test]
    async fn serves_cached_list() {
        let service = CountryService::new("http://127.0.0.1:9");
        let seeded = vec![Country {
            name: "Eritrea".to_string(),
            code: "ER".to_string(),
            dial_code: "+291".to_string(),
            flag: String::new(),
        }];
        service.seed(seeded.clone()).await;

        let countries = service.list(&client(), None).await;

        assert_eq!(countries, seeded);
    }

    /// Tests filtering by name and dial code.
    ///
    /// Expected: Kenya for "ken", the United States for "+1"
    #[tokio::test]
    async fn filters_by_search() {
        let service = CountryService::new("http://127.0.0.1:9");

        let by_name = service.list(&client(), Some("ken")).await;
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name[0].code, "KE");

        let by_code = service.list(&client(), Some("+1")).await;
        assert_eq!(by_code.len(), 1);
        assert_eq!(by_code[0].code, "US");
    }

    /// Serves a single JSON response on a local port and returns its base URL.
    async fn serve_once(body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = [0u8; 4096];
            let _ = socket.read(&mut request).await;

            let response = format!(
                "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            let _ = socket.shutdown().await;
        });

        format!("http://{}", addr)
    }

    /// Tests fetching from the upstream.
    ///
    /// Verifies that entries without a dial root are dropped, the rest are sorted by name
    /// with accents folded, and the list is cached once fetched.
    ///
    /// Expected: three sorted countries, served again from cache after the upstream is gone
    #[tokio::test]
    async fn fetches_sorts_and_caches_upstream_list() {
        let base_url = serve_once(
            r#"[
                {"name":{"common":"Zimbabwe"},"cca2":"ZW","idd":{"root":"+2","suffixes":["63"]},"flags":{"svg":"zw.svg"}},
                {"name":{"common":"Antarctica"},"cca2":"AQ","idd":{},"flags":{"png":"aq.png"}},
                {"name":{"common":"Åland Islands"},"cca2":"AX","idd":{"root":"+3","suffixes":["5818"]},"flags":{"svg":"ax.svg"}},
                {"name":{"common":"Albania"},"cca2":"AL","idd":{"root":"+3","suffixes":["55"]},"flags":{"svg":"al.svg"}}
            ]"#,
        )
        .await;
        let service = CountryService::new(base_url);
        assert!(!service.is_cached().await);

        let countries = service.list(&client(), None).await;

        let codes: Vec<&str> = countries.iter().map(|c| c.code.as_str()).collect();
        assert_eq!(codes, ["AX", "AL", "ZW"]);
        assert_eq!(countries[2].dial_code, "+263");
        assert!(service.is_cached().await);

        let again = service.list(&client(), None).await;
        assert_eq!(again, countries);
    }

    /// Tests that an empty upstream answer is not cached.
    ///
    /// Expected: the fallback list and an empty cache
    #[tokio::test]
    async fn empty_upstream_list_is_not_cached() {
        let base_url = serve_once("[]").await;
        let service = CountryService::new(base_url);

        let countries = service.list(&client(), None).await;

        assert_eq!(countries, Country::fallback());
        assert!(!service.is_cached().await);
    }

    #[test]
    fn trims_trailing_slash_from_base_url() {
        let service = CountryService::new("https://restcountries.com/");
        assert_eq!(service.base_url, "https://restcountries.com");
    }
}
