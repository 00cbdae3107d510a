use std::fmt::Display;

use itertools::Itertools;

use crate::lang::Language;
use crate::prelude::*;

/// One API request: an endpoint URL plus its query parameters.
///
/// This is the only thing handed to a service client. Building one has no
/// side effects; the HTTP semantics live entirely behind
/// [`crate::client::ServiceClient`].
#[derive(Debug, Clone)]
pub struct Request {
    url: &'static str,
    params: Vec<(&'static str, String)>,
}

impl Request {
    pub fn new(url: &'static str) -> Self {
        Self {
            url,
            params: Vec::new(),
        }
    }

    pub fn param(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.params.push((name, value.into()));
        self
    }

    /// Comma-joined `ids=` parameter for bulk fetches.
    pub fn ids<I: Display>(self, ids: &[I]) -> Self {
        self.param("ids", ids.iter().join(","))
    }

    /// `ids=all`, for the endpoints that allow fetching the whole
    /// collection in one response.
    pub fn all_ids(self) -> Self {
        self.param("ids", "all")
    }

    pub fn page(self, page: u32, page_size: Option<u32>) -> Self {
        let request = self.param("page", page.to_string());
        match page_size {
            Some(size) => request.param("page_size", size.to_string()),
            None => request,
        }
    }

    pub fn lang(self, lang: Language) -> Self {
        self.param("lang", lang.as_str())
    }

    pub fn url(&self) -> Result<Url, url::ParseError> {
        if self.params.is_empty() {
            Url::parse(self.url)
        } else {
            Url::parse_with_params(
                self.url,
                self.params.iter().map(|(name, value)| (*name, value.as_str())),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Request;
    use crate::lang::Language;

    #[test]
    fn renders_plain_url() {
        let url = Request::new("https://api.guildwars2.com/v2/worlds")
            .url()
            .unwrap();
        assert_eq!(url.as_str(), "https://api.guildwars2.com/v2/worlds");
    }

    #[test]
    fn renders_ids_page_and_lang() {
        let url = Request::new("https://api.guildwars2.com/v2/items")
            .ids(&[1u32, 2, 3])
            .page(2, Some(50))
            .lang(Language::De)
            .url()
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.guildwars2.com/v2/items?ids=1%2C2%2C3&page=2&page_size=50&lang=de"
        );
    }
}
