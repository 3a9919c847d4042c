//! Structural extraction of catalog pages.
//!
//! Turns raw HTML into pagination links and item fragments using the
//! configured CSS selectors. Parsing is pure: no I/O, no shared state.

use scraper::{Html, Selector};

use crate::error::{AppError, Result};
use crate::models::{Item, SelectorConfig};
use crate::utils::resolve_url;

/// Raw attributes extracted from one item container, not yet validated.
///
/// Missing href or image markup is represented as `None`; a fragment is
/// promoted to an [`Item`] only when both are present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    pub href: Option<String>,
    pub image: Option<String>,
    pub name: String,
    pub price: String,
}

impl Fragment {
    /// Promote to an [`Item`] when both href and image are present.
    pub fn into_item(self) -> Option<Item> {
        match (self.href, self.image) {
            (Some(url), Some(image)) => Some(Item {
                url,
                image,
                name: self.name,
                price: self.price,
            }),
            _ => None,
        }
    }
}

/// Everything extracted from one page.
#[derive(Debug, Clone, Default)]
pub struct ParsedPage {
    /// Pagination link URLs, deduplicated, in document order
    pub links: Vec<String>,

    /// Item fragments in document order, validity not yet checked
    pub fragments: Vec<Fragment>,
}

/// Catalog page parser with pre-compiled selectors.
pub struct CatalogParser {
    pagination_sel: Selector,
    item_sel: Selector,
    link_sel: Selector,
    name_sel: Selector,
    image_sel: Selector,
    image_attr: String,
    price_sel: Selector,
}

impl CatalogParser {
    /// Compile the configured selectors.
    pub fn new(config: &SelectorConfig) -> Result<Self> {
        Ok(Self {
            pagination_sel: Self::parse_selector(&config.pagination)?,
            item_sel: Self::parse_selector(&config.item)?,
            link_sel: Self::parse_selector(&config.link)?,
            name_sel: Self::parse_selector(&config.name)?,
            image_sel: Self::parse_selector(&config.image)?,
            image_attr: config.image_attr.clone(),
            price_sel: Self::parse_selector(&config.price)?,
        })
    }

    /// Extract pagination links and item fragments from a page.
    ///
    /// Pagination hrefs are resolved against `page_url` and deduplicated
    /// among themselves while preserving document order.
    pub fn parse(&self, page_url: &str, html: &str) -> ParsedPage {
        let document = Html::parse_document(html);
        let base = url::Url::parse(page_url).ok();

        let mut links: Vec<String> = Vec::new();
        for anchor in document.select(&self.pagination_sel) {
            if let Some(href) = anchor.value().attr("href") {
                let link = match &base {
                    Some(base) => resolve_url(base, href),
                    None => href.to_string(),
                };
                if !links.contains(&link) {
                    links.push(link);
                }
            }
        }

        let mut fragments = Vec::new();
        for container in document.select(&self.item_sel) {
            let Some(link_elem) = container.select(&self.link_sel).next() else {
                continue;
            };

            let href = link_elem.value().attr("href").map(str::to_string);
            let image = link_elem
                .select(&self.image_sel)
                .next()
                .and_then(|img| img.value().attr(&self.image_attr))
                .map(str::to_string);
            let name: String = link_elem
                .select(&self.name_sel)
                .next()
                .map(|e| e.text().collect())
                .unwrap_or_default();
            let price: String = link_elem
                .select(&self.price_sel)
                .next()
                .map(|e| e.text().collect())
                .unwrap_or_default();

            fragments.push(Fragment {
                href,
                image,
                name,
                price,
            });
        }

        ParsedPage { links, fragments }
    }

    fn parse_selector(s: &str) -> Result<Selector> {
        Selector::parse(s).map_err(|e| AppError::selector(s, format!("{e:?}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parser() -> CatalogParser {
        CatalogParser::new(&SelectorConfig::default()).unwrap()
    }

    const PAGE: &str = r#"
        <html><body>
        <ul>
          <li class="product">
            <a href="https://shop.test/p/alpha">
              <img src="https://shop.test/img/alpha.jpg">
              <h2>Alpha</h2>
              <span><bdi>$12.00</bdi></span>
            </a>
          </li>
          <li class="product">
            <a href="https://shop.test/p/beta">
              <h2>Beta</h2>
              <span><bdi>$8.00</bdi></span>
            </a>
          </li>
        </ul>
        <div id="pagination">
          <a href="/page/2/">2</a>
          <a href="/page/3/">3</a>
          <a href="/page/2/">Next</a>
        </div>
        </body></html>
    "#;

    #[test]
    fn test_parse_extracts_fragments_in_document_order() {
        let parsed = parser().parse("https://shop.test/", PAGE);
        assert_eq!(parsed.fragments.len(), 2);
        assert_eq!(parsed.fragments[0].name, "Alpha");
        assert_eq!(parsed.fragments[0].price, "$12.00");
        assert_eq!(parsed.fragments[1].name, "Beta");
    }

    #[test]
    fn test_fragment_without_image_is_not_promoted() {
        let parsed = parser().parse("https://shop.test/", PAGE);
        assert!(parsed.fragments[0].clone().into_item().is_some());
        // Beta has no <img>, so it never becomes an Item.
        assert!(parsed.fragments[1].clone().into_item().is_none());
    }

    #[test]
    fn test_fragment_without_href_is_not_promoted() {
        let fragment = Fragment {
            href: None,
            image: Some("https://shop.test/img/x.jpg".to_string()),
            name: "X".to_string(),
            price: "$1.00".to_string(),
        };
        assert!(fragment.into_item().is_none());
    }

    #[test]
    fn test_pagination_links_resolved_and_deduplicated() {
        let parsed = parser().parse("https://shop.test/", PAGE);
        assert_eq!(
            parsed.links,
            vec![
                "https://shop.test/page/2/".to_string(),
                "https://shop.test/page/3/".to_string(),
            ]
        );
    }

    #[test]
    fn test_parse_empty_document() {
        let parsed = parser().parse("https://shop.test/", "<html></html>");
        assert!(parsed.links.is_empty());
        assert!(parsed.fragments.is_empty());
    }

    #[test]
    fn test_invalid_selector_is_rejected() {
        let mut config = SelectorConfig::default();
        config.item = "[[invalid".to_string();
        assert!(CatalogParser::new(&config).is_err());
    }
}
