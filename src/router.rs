use crate::catalog::Catalog;
use crate::domain::favorites::Favorites;
use crate::domain::filter::{FilterSpec, PropertyTypeFilter, SortKey};
use crate::errors::ServerError;
use crate::responses::{html_response, json_response, see_other, text_response, ResultResp};
use crate::spreadsheets::export_listings_xlsx;
use crate::templates::pages::{search_page, SearchVm};
use astra::Request;
use cookie::{Cookie, SameSite};
use std::collections::HashMap;
use std::str::FromStr;

const FAVORITES_COOKIE: &str = "favorites";

/// Everything a request handler can see. Built once at startup, read-only.
pub struct AppState {
    pub catalog: Catalog,
    /// Upper price bound used whenever a request does not send `max_price`.
    pub default_max_price: i64,
}

pub fn handle(req: Request, state: &AppState) -> ResultResp {
    let method = req.method().as_str();
    let path = req.uri().path();

    match (method, path) {
        ("GET", "/") => search(&req, state),
        ("GET", "/listings.json") => {
            let spec = parse_filter_spec(&parse_query(&req), state.default_max_price)?;
            let results = state.catalog.search(&spec);
            json_response(&results)
        }
        ("GET", "/listings.xlsx") => {
            let spec = parse_filter_spec(&parse_query(&req), state.default_max_price)?;
            let results = state.catalog.search(&spec);
            export_listings_xlsx(&results)
        }
        ("GET", "/health") => text_response("ok"),
        ("POST", p) if p.starts_with("/favorites/") => toggle_favorite(&req, state),
        _ => Err(ServerError::NotFound),
    }
}

fn search(req: &Request, state: &AppState) -> ResultResp {
    let spec = parse_filter_spec(&parse_query(req), state.default_max_price)?;
    let results = state.catalog.search(&spec);
    let favorites = read_favorites(req);

    tracing::debug!(
        results = results.len(),
        total = state.catalog.len(),
        filtered = !spec.is_unconstrained(state.default_max_price),
        location = %spec.location,
        sort = spec.sort.as_str(),
        "search"
    );

    let query = filter_query_string(&spec);
    html_response(search_page(&SearchVm {
        spec: &spec,
        results: &results,
        favorites: &favorites,
        query: &query,
        default_max_price: state.default_max_price,
    }))
}

fn toggle_favorite(req: &Request, state: &AppState) -> ResultResp {
    let id: u32 = req
        .uri()
        .path()
        .trim_start_matches("/favorites/")
        .parse()
        .map_err(|_| ServerError::NotFound)?;

    if state.catalog.get(id).is_none() {
        return Err(ServerError::NotFound);
    }

    let mut favorites = read_favorites(req);
    let now_favorite = favorites.toggle(id);
    tracing::debug!(id, now_favorite, count = favorites.len(), "favorite toggled");

    let back = format!("{}#listing-{id}", return_path(req));
    see_other(&back, Some(favorites_cookie(&favorites)))
}

/// Decoded query-string pairs. Later duplicates win.
pub fn parse_query(req: &Request) -> HashMap<String, String> {
    req.uri()
        .query()
        .map(|q| url::form_urlencoded::parse(q.as_bytes()).into_owned().collect())
        .unwrap_or_default()
}

fn numeric_param<T: FromStr>(
    params: &HashMap<String, String>,
    key: &str,
) -> Result<Option<T>, ServerError> {
    match params.get(key).map(|v| v.trim()) {
        None | Some("") => Ok(None),
        Some(raw) => raw
            .parse()
            .map(Some)
            .map_err(|_| ServerError::BadRequest(format!("{key} must be a number, got {raw:?}"))),
    }
}

/// Builds a search from query parameters. Absent parameters take the reset
/// values; only unparsable numbers are rejected.
pub fn parse_filter_spec(
    params: &HashMap<String, String>,
    default_max_price: i64,
) -> Result<FilterSpec, ServerError> {
    let defaults = FilterSpec::with_max_price(default_max_price);

    let min_bathrooms: f64 =
        numeric_param(params, "bathrooms")?.unwrap_or(defaults.min_bathrooms);
    if !min_bathrooms.is_finite() {
        return Err(ServerError::BadRequest(
            "bathrooms must be a finite number".into(),
        ));
    }

    Ok(FilterSpec {
        location: params
            .get("location")
            .map(|s| s.trim().to_string())
            .unwrap_or_default(),
        property_type: params
            .get("type")
            .map(|s| PropertyTypeFilter::parse(s.trim()))
            .unwrap_or_default(),
        min_bedrooms: numeric_param(params, "bedrooms")?.unwrap_or(defaults.min_bedrooms),
        min_bathrooms,
        min_price: numeric_param(params, "min_price")?.unwrap_or(defaults.min_price),
        max_price: numeric_param(params, "max_price")?.unwrap_or(defaults.max_price),
        sort: params
            .get("sort")
            .map(|s| SortKey::parse(s))
            .unwrap_or(defaults.sort),
    })
}

/// The inverse of [`parse_filter_spec`], for links that repeat the search.
pub fn filter_query_string(spec: &FilterSpec) -> String {
    let mut ser = url::form_urlencoded::Serializer::new(String::new());
    if !spec.location.is_empty() {
        ser.append_pair("location", &spec.location);
    }
    ser.append_pair("type", spec.property_type.as_str())
        .append_pair("bedrooms", &spec.min_bedrooms.to_string())
        .append_pair("bathrooms", &spec.min_bathrooms.to_string())
        .append_pair("min_price", &spec.min_price.to_string())
        .append_pair("max_price", &spec.max_price.to_string())
        .append_pair("sort", spec.sort.as_str());
    ser.finish()
}

fn cookie_value(req: &Request, name: &str) -> Option<String> {
    req.headers()
        .get_all("Cookie")
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(Cookie::split_parse)
        .filter_map(Result::ok)
        .find(|c| c.name() == name)
        .map(|c| c.value_trimmed().to_string())
}

pub fn read_favorites(req: &Request) -> Favorites {
    cookie_value(req, FAVORITES_COOKIE)
        .map(|v| Favorites::from_cookie_value(&v))
        .unwrap_or_default()
}

/// Session cookie (no Max-Age) so favorites vanish with the browser session.
/// An empty set clears the cookie instead.
fn favorites_cookie(favorites: &Favorites) -> String {
    let mut cookie = Cookie::build((FAVORITES_COOKIE, favorites.to_cookie_value()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .build();
    if favorites.is_empty() {
        cookie.make_removal();
    }
    cookie.to_string()
}

/// Path and query of the Referer, never its host. A path with a doubled
/// leading slash would read as a protocol-relative URL, so it is collapsed.
fn return_path(req: &Request) -> String {
    let Some(referer) = req
        .headers()
        .get("Referer")
        .and_then(|v| v.to_str().ok())
        .and_then(|r| url::Url::parse(r).ok())
    else {
        return "/".to_string();
    };

    let path = format!("/{}", referer.path().trim_start_matches('/'));
    match referer.query() {
        Some(q) => format!("{path}?{q}"),
        None => path,
    }
}
