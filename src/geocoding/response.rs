use serde::Deserialize;

use crate::models::Coordinate;

use super::GeocodingError;

/// One match from a Nominatim `/search` response.
///
/// Nominatim encodes `lat` and `lon` as numeric strings.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchHit {
    pub lat: String,
    pub lon: String,
    #[serde(default)]
    pub display_name: Option<String>,
}

impl SearchHit {
    /// Parses the hit's position.
    pub fn coordinate(&self) -> Result<Coordinate, GeocodingError> {
        let lat = parse_degrees("lat", &self.lat)?;
        let lon = parse_degrees("lon", &self.lon)?;
        let coordinate = Coordinate::new(lat, lon);
        if !coordinate.is_valid() {
            return Err(GeocodingError::Parse(format!(
                "coordinate out of range: {coordinate}"
            )));
        }
        Ok(coordinate)
    }
}

fn parse_degrees(field: &str, raw: &str) -> Result<f64, GeocodingError> {
    raw.trim()
        .parse::<f64>()
        .map_err(|_| GeocodingError::Parse(format!("{field} is not a number: '{raw}'")))
}

/// Parses a Nominatim `/search?format=json` body.
///
/// An empty array means "no match" (`Ok(None)`); otherwise the first hit's
/// position is returned.
///
/// # Examples
///
/// ```
/// use route_optimizer::geocoding::parse_search_response;
/// use route_optimizer::models::Coordinate;
///
/// let body = r#"[{"lat":"32.0853","lon":"34.7818","display_name":"Tel Aviv"}]"#;
/// assert_eq!(parse_search_response(body).unwrap(), Some(Coordinate::new(32.0853, 34.7818)));
/// assert_eq!(parse_search_response("[]").unwrap(), None);
/// ```
pub fn parse_search_response(body: &str) -> Result<Option<Coordinate>, GeocodingError> {
    let hits: Vec<SearchHit> = serde_json::from_str(body)?;
    hits.first().map(SearchHit::coordinate).transpose()
}
