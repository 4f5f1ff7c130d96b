//! Query parameter types for the listing endpoint.

use chrono::{DateTime, Utc};
use pvz_core::listing::{DateRange, ListFilter, Pagination};
use serde::Deserialize;

use crate::error::{AppError, AppResult};

/// Raw `GET /pvz` parameters (`?startDate=&endDate=&page=&limit=`).
///
/// Everything stays a string until [`ListPvzParams::into_filter`]. A
/// malformed timestamp is rejected and names the parameter; a non-numeric
/// `page` or `limit` falls back to its default like an out-of-range one.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListPvzParams {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub page: Option<String>,
    pub limit: Option<String>,
}

impl ListPvzParams {
    /// Parse dates and clamp pagination into a core [`ListFilter`].
    pub fn into_filter(self) -> AppResult<ListFilter> {
        let start = parse_date("startDate", self.start_date)?;
        let end = parse_date("endDate", self.end_date)?;
        Ok(ListFilter {
            range: DateRange::new(start, end),
            pagination: Pagination::new(parse_int(self.page), parse_int(self.limit)),
        })
    }
}

fn parse_int(raw: Option<String>) -> Option<i64> {
    raw.and_then(|s| s.trim().parse().ok())
}

/// An empty value counts as absent.
fn parse_date(name: &str, raw: Option<String>) -> AppResult<Option<DateTime<Utc>>> {
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => DateTime::parse_from_rfc3339(value)
            .map(|dt| Some(dt.with_timezone(&Utc)))
            .map_err(|e| AppError::BadRequest(format!("Invalid {name} '{value}': {e}"))),
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn empty_params_give_unbounded_first_page() {
        let filter = ListPvzParams::default().into_filter().unwrap();
        assert!(filter.range.is_unbounded());
        assert_eq!(filter.pagination.page(), 1);
        assert_eq!(filter.pagination.limit(), 10);
    }

    #[test]
    fn dates_parse_as_utc() {
        let params = ListPvzParams {
            start_date: Some("2025-04-01T03:00:00+03:00".into()),
            end_date: Some("".into()),
            ..Default::default()
        };
        let filter = params.into_filter().unwrap();
        assert_eq!(
            filter.range.start,
            Some(Utc.with_ymd_and_hms(2025, 4, 1, 0, 0, 0).unwrap())
        );
        assert_eq!(filter.range.end, None);
    }

    #[test]
    fn malformed_date_is_bad_request() {
        let params = ListPvzParams {
            end_date: Some("yesterday".into()),
            ..Default::default()
        };
        assert_matches!(
            params.into_filter(),
            Err(AppError::BadRequest(msg)) if msg.contains("endDate")
        );
    }

    #[test]
    fn out_of_range_paging_is_clamped() {
        let params = ListPvzParams {
            page: Some("0".into()),
            limit: Some("31".into()),
            ..Default::default()
        };
        let filter = params.into_filter().unwrap();
        assert_eq!(filter.pagination.page(), 1);
        assert_eq!(filter.pagination.limit(), 10);
    }

    #[test]
    fn non_numeric_paging_falls_back_to_defaults() {
        let params = ListPvzParams {
            page: Some("x".into()),
            limit: Some("abc".into()),
            ..Default::default()
        };
        let filter = params.into_filter().unwrap();
        assert_eq!(filter.pagination.page(), 1);
        assert_eq!(filter.pagination.limit(), 10);
    }

    #[test]
    fn numeric_paging_is_kept() {
        let params = ListPvzParams {
            page: Some(" 3 ".into()),
            limit: Some("25".into()),
            ..Default::default()
        };
        let filter = params.into_filter().unwrap();
        assert_eq!(filter.pagination.page(), 3);
        assert_eq!(filter.pagination.limit(), 25);
    }
}
