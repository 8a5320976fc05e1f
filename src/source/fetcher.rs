use crate::config::ScrapeConfig;
use crate::model::{ScrapedListing, ScraperError};
use crate::parser::{CarrefourParser, ListingParser};
use rand::Rng;
use reqwest::{Client, Url};
use std::collections::HashSet;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{info, warn};

/// Collects listing cards page by page, following `rel="next"` links.
pub struct HttpListingSource {
    client: Client,
    parser: CarrefourParser,
    config: ScrapeConfig,
}

impl HttpListingSource {
    pub fn new(config: ScrapeConfig) -> Result<Self, ScraperError> {
        let client = Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Self::with_client(client, config)
    }

    pub fn with_client(client: Client, config: ScrapeConfig) -> Result<Self, ScraperError> {
        Ok(Self {
            client,
            parser: CarrefourParser::new()?,
            config,
        })
    }

    async fn fetch(&self, url: &str) -> Result<String, ScraperError> {
        let response = self.client.get(url).send().await?;

        if !response.status().is_success() {
            return Err(ScraperError::InvalidResponse(response.status().as_u16()));
        }

        Ok(response.text().await?)
    }

    fn polite_delay(&self) -> Duration {
        let jitter = if self.config.delay_jitter_ms > 0 {
            rand::rng().random_range(0..=self.config.delay_jitter_ms)
        } else {
            0
        };
        Duration::from_millis(self.config.delay_ms + jitter)
    }

    /// Walks the listing pages starting at `start_url`. A failure on the first
    /// page is an error; later failures end pagination with what was collected.
    pub async fn scrape(&self) -> Result<Vec<ScrapedListing>, ScraperError> {
        let mut listings = Vec::new();
        let mut visited = HashSet::new();
        let mut next = Some(self.config.start_url.clone());
        let mut page_no = 0;

        while let Some(url) = next.take() {
            if page_no >= self.config.max_pages {
                info!("Reached page limit ({})", self.config.max_pages);
                break;
            }
            if !visited.insert(url.clone()) {
                warn!("Pagination loops back to {}, stopping", url);
                break;
            }
            if page_no > 0 {
                sleep(self.polite_delay()).await;
            }
            page_no += 1;

            info!("Fetching page {}: {}", page_no, url);
            let html = match self.fetch(&url).await {
                Ok(html) => html,
                Err(e) if page_no == 1 => return Err(e),
                Err(e) => {
                    warn!("Stopping pagination at page {}: {}", page_no, e);
                    break;
                }
            };

            let page = self.parser.parse(&html)?;
            info!("Page {} has {} products", page_no, page.listings.len());
            if page.listings.is_empty() {
                break;
            }
            listings.extend(page.listings);

            next = match page.next_page {
                Some(href) => Some(resolve_next(&url, &href)?),
                None => {
                    info!("No next page link found");
                    None
                }
            };
        }

        info!("Scraping finished: {} products over {} pages", listings.len(), page_no);
        Ok(listings)
    }
}

/// Resolves a possibly relative `href` against the page it was found on.
fn resolve_next(current: &str, href: &str) -> Result<String, ScraperError> {
    let base = Url::parse(current).map_err(|e| ScraperError::InvalidUrl(format!("{current}: {e}")))?;
    base.join(href)
        .map(String::from)
        .map_err(|e| ScraperError::InvalidUrl(format!("{href}: {e}")))
}
