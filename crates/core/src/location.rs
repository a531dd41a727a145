use crate::page::error::PageError;
use anyhow::Context;
use std::collections::BTreeMap;
use url::{form_urlencoded, Url};

// Root-relative locations are resolved against this before parsing.
const RELATIVE_BASE: &str = "http://localhost/";

pub const SYMBOL_PARAM: &str = "symbol";
pub const COMPARE_A_PARAM: &str = "A";
pub const COMPARE_B_PARAM: &str = "B";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    Result,
    Compare,
    Unknown,
}

/// A page address: which page to build and the query parameters it reads at start-up.
#[derive(Debug, Clone)]
pub struct PageLocation {
    pub route: Route,
    pub params: QueryParams,
}

impl PageLocation {
    /// Accepts an absolute URL or a root-relative location such as `/result?symbol=TCS`.
    pub fn parse(location: &str) -> anyhow::Result<Self> {
        let location = location.trim();
        let url = match Url::parse(location) {
            Ok(url) => url,
            Err(url::ParseError::RelativeUrlWithoutBase) => Url::parse(RELATIVE_BASE)
                .and_then(|base| base.join(location))
                .with_context(|| format!("invalid page location: {location}"))?,
            Err(e) => return Err(e).with_context(|| format!("invalid page location: {location}")),
        };

        let route = match url.path().trim_end_matches('/') {
            "" => Route::Home,
            "/result" => Route::Result,
            "/compare" => Route::Compare,
            _ => Route::Unknown,
        };

        Ok(Self {
            route,
            params: QueryParams::from_url(&url),
        })
    }
}

/// Decoded query string. The first occurrence of a repeated name wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    values: BTreeMap<String, String>,
}

impl QueryParams {
    pub fn from_url(url: &Url) -> Self {
        let mut values = BTreeMap::new();
        for (k, v) in url.query_pairs() {
            values.entry(k.into_owned()).or_insert_with(|| v.into_owned());
        }
        Self { values }
    }

    /// An empty value reads as absent.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values
            .get(name)
            .map(String::as_str)
            .filter(|v| !v.is_empty())
    }

    /// Returns every requested value, or `MissingInput` naming all the absent ones.
    pub fn require<const N: usize>(
        &self,
        names: [&'static str; N],
    ) -> Result<[String; N], PageError> {
        let missing: Vec<&'static str> = names
            .iter()
            .copied()
            .filter(|name| self.get(name).is_none())
            .collect();
        if !missing.is_empty() {
            return Err(PageError::MissingInput { params: missing });
        }

        Ok(names.map(|name| self.get(name).unwrap_or_default().to_string()))
    }
}

/// A full-page navigation requested by the input form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    Result { symbol: String },
    Compare { a: String, b: String },
}

impl Navigation {
    /// Root-relative location with form-encoded parameters.
    pub fn location(&self) -> String {
        let mut query = form_urlencoded::Serializer::new(String::new());
        let path = match self {
            Navigation::Result { symbol } => {
                query.append_pair(SYMBOL_PARAM, symbol);
                "/result"
            }
            Navigation::Compare { a, b } => {
                query
                    .append_pair(COMPARE_A_PARAM, a)
                    .append_pair(COMPARE_B_PARAM, b);
                "/compare"
            }
        };
        format!("{path}?{}", query.finish())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_relative_result_location() {
        let loc = PageLocation::parse("/result?symbol=TCS.NS").unwrap();
        assert_eq!(loc.route, Route::Result);
        assert_eq!(loc.params.get("symbol"), Some("TCS.NS"));
    }

    #[test]
    fn parses_absolute_compare_location() {
        let loc = PageLocation::parse("http://127.0.0.1:5000/compare?A=TCS&B=INFY").unwrap();
        assert_eq!(loc.route, Route::Compare);
        let [a, b] = loc.params.require([COMPARE_A_PARAM, COMPARE_B_PARAM]).unwrap();
        assert_eq!((a.as_str(), b.as_str()), ("TCS", "INFY"));
    }

    #[test]
    fn root_and_unknown_routes() {
        assert_eq!(PageLocation::parse("/").unwrap().route, Route::Home);
        assert_eq!(PageLocation::parse("http://h").unwrap().route, Route::Home);
        assert_eq!(PageLocation::parse("/nope").unwrap().route, Route::Unknown);
    }

    #[test]
    fn empty_value_counts_as_missing() {
        let loc = PageLocation::parse("/result?symbol=").unwrap();
        assert_eq!(loc.params.get("symbol"), None);
        match loc.params.require([SYMBOL_PARAM]) {
            Err(PageError::MissingInput { params }) => assert_eq!(params, ["symbol"]),
            other => panic!("expected MissingInput, got {other:?}"),
        }
    }

    #[test]
    fn require_names_every_missing_param() {
        let loc = PageLocation::parse("/compare").unwrap();
        match loc.params.require([COMPARE_A_PARAM, COMPARE_B_PARAM]) {
            Err(PageError::MissingInput { params }) => assert_eq!(params, ["A", "B"]),
            other => panic!("expected MissingInput, got {other:?}"),
        }
    }

    #[test]
    fn navigation_encodes_and_round_trips() {
        let nav = Navigation::Compare {
            a: "M&M.NS".to_string(),
            b: "BAJAJ AUTO".to_string(),
        };
        let location = nav.location();
        assert_eq!(location, "/compare?A=M%26M.NS&B=BAJAJ+AUTO");

        let loc = PageLocation::parse(&location).unwrap();
        assert_eq!(loc.params.get("A"), Some("M&M.NS"));
        assert_eq!(loc.params.get("B"), Some("BAJAJ AUTO"));
    }
}
