// Carrefour listing page parsing
use crate::model::{ListingPage, ParserError, ScrapedListing};
use crate::utils::now_rfc3339;
use scraper::{ElementRef, Html, Selector};

const CARD_SELECTOR: &str = r"ul.grid.grid-cols-2.xl\:grid-cols-5.md\:grid-cols-4 > li";
const TITLE_SELECTOR: &str = "h3 > span > a";
const PRICE_SELECTOR: &str = r"div.flex.flex-col > div.flex.flex-col.xs\:flex-row.xs\:justify-between.xs\:items-center > span.text-base.text-blue-royal";
const IMAGE_SELECTOR: &str = "div[data-product-card-image] > img";
const NEXT_PAGE_SELECTOR: &str = r#"link[rel="next"]"#;

const MISSING: &str = "N/A";

pub trait ListingParser {
    fn parse(&self, html: &str) -> Result<ListingPage, ParserError>;
}

pub struct CarrefourParser {
    card: Selector,
    title: Selector,
    price: Selector,
    image: Selector,
    next_page: Selector,
}

fn selector(css: &str) -> Result<Selector, ParserError> {
    Selector::parse(css).map_err(|e| ParserError::HtmlParseError(format!("{css}: {e}")))
}

fn inner_text(el: ElementRef<'_>) -> String {
    el.text().collect::<String>().trim().to_string()
}

impl CarrefourParser {
    pub fn new() -> Result<Self, ParserError> {
        Ok(Self {
            card: selector(CARD_SELECTOR)?,
            title: selector(TITLE_SELECTOR)?,
            price: selector(PRICE_SELECTOR)?,
            image: selector(IMAGE_SELECTOR)?,
            next_page: selector(NEXT_PAGE_SELECTOR)?,
        })
    }
}

impl ListingParser for CarrefourParser {
    fn parse(&self, html: &str) -> Result<ListingPage, ParserError> {
        let document = Html::parse_document(html);
        let timestamp = now_rfc3339();

        let listings = document
            .select(&self.card)
            .map(|card| {
                let name = card.select(&self.title).next().map(inner_text);
                let price = card.select(&self.price).next().map(inner_text);
                let image = card
                    .select(&self.image)
                    .next()
                    .and_then(|img| img.value().attr("src"))
                    .map(|src| src.trim().to_string());

                ScrapedListing {
                    name: name.unwrap_or_else(|| MISSING.into()),
                    price: price.unwrap_or_else(|| MISSING.into()),
                    image: image.unwrap_or_else(|| MISSING.into()),
                    timestamp: timestamp.clone(),
                }
            })
            .collect();

        let next_page = document
            .select(&self.next_page)
            .next()
            .and_then(|link| link.value().attr("href"))
            .map(str::to_string)
            .filter(|href| !href.is_empty());

        Ok(ListingPage { listings, next_page })
    }
}
