use log::{debug, trace};
use scraper::{Html, Selector};
use url::Url;

use super::base::{compile, first_text, ParseError, Selectors};

/// One course card on a listing page.
#[derive(Debug, Clone, PartialEq)]
pub struct ListingEntry {
    pub url: Url,
    pub name: Option<String>,
    pub country: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct ListingPage {
    pub entries: Vec<ListingEntry>,
    pub next_page: Option<Url>,
}

pub struct ListingParser {
    card: Selector,
    title: Selector,
    country: Selector,
    next_page: Selector,
}

impl ListingParser {
    pub fn new(selectors: &Selectors) -> Result<Self, ParseError> {
        Ok(Self {
            card: compile(&selectors.listing_card)?,
            title: compile(&selectors.listing_title)?,
            country: compile(&selectors.listing_country)?,
            next_page: compile(&selectors.next_page)?,
        })
    }

    /// Course cards in document order. Links are resolved against
    /// `page_url`; a card whose href does not resolve is dropped.
    pub fn parse(&self, html: &str, page_url: &Url) -> ListingPage {
        let document = Html::parse_document(html);
        let mut entries: Vec<ListingEntry> = Vec::new();

        for card in document.select(&self.card) {
            let Some(href) = card.value().attr("href") else {
                continue;
            };
            let url = match page_url.join(href) {
                Ok(url) => url,
                Err(e) => {
                    debug!("Skipping card with bad href {:?}: {}", href, e);
                    continue;
                }
            };
            if entries.iter().any(|e| e.url == url) {
                trace!("Duplicate course link on listing: {}", url);
                continue;
            }

            entries.push(ListingEntry {
                url,
                name: first_text(card, &self.title),
                country: first_text(card, &self.country),
            });
        }

        let next_page = document
            .select(&self.next_page)
            .filter_map(|a| a.value().attr("href"))
            .find_map(|href| page_url.join(href).ok())
            .filter(|next| next != page_url);

        debug!(
            "Listing {} yielded {} course links (next page: {:?})",
            page_url,
            entries.len(),
            next_page.as_ref().map(Url::as_str)
        );

        ListingPage { entries, next_page }
    }
}
