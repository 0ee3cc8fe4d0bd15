//! Query-string extractor that reports failures in the API envelope.

use axum::{
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use serde::de::DeserializeOwned;

use crate::errors::AppError;

/// Like `axum::extract::Query`, but a missing required parameter or an
/// unparsable value becomes `AppError::Validation` instead of a plain-text 400.
///
/// ```ignore
/// async fn handler(ApiQuery(params): ApiQuery<TemporalQuery>) -> impl IntoResponse { ... }
/// ```
#[derive(Debug, Clone)]
pub struct ApiQuery<T>(pub T);

impl<S, T> FromRequestParts<S> for ApiQuery<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::try_from_uri(&parts.uri)
            .map_err(|rejection| AppError::Validation(rejection.body_text()))?;
        Ok(Self(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::aggregates::{RegionsQuery, TemporalQuery};
    use axum::http::Request;

    async fn extract<T: DeserializeOwned>(uri: &str) -> Result<T, AppError> {
        let (mut parts, _) = Request::builder().uri(uri).body(()).unwrap().into_parts();
        ApiQuery::<T>::from_request_parts(&mut parts, &())
            .await
            .map(|ApiQuery(v)| v)
    }

    #[tokio::test]
    async fn parses_optional_parameters() {
        let q: RegionsQuery = extract("/spatial/regions?country=Brazil&year=2020&limit=5")
            .await
            .unwrap();
        assert_eq!(q.country.as_deref(), Some("Brazil"));
        assert_eq!(q.year, Some(2020));
        assert_eq!(q.limit, Some(5));
    }

    #[tokio::test]
    async fn missing_required_country_is_a_validation_error() {
        let err = extract::<TemporalQuery>("/temporal/data?limit=2")
            .await
            .unwrap_err();
        assert!(err.is_validation());
    }

    #[tokio::test]
    async fn bad_date_is_a_validation_error() {
        let err = extract::<TemporalQuery>("/temporal/data?country=Brazil&start_date=01/02/2022")
            .await
            .unwrap_err();
        assert!(err.is_validation());
    }

    #[tokio::test]
    async fn iso_dates_parse() {
        let q: TemporalQuery =
            extract("/temporal/data?country=Brazil&start_date=2022-01-01&end_date=2022-02-01")
                .await
                .unwrap();
        assert_eq!(q.start_date.unwrap().to_string(), "2022-01-01");
        assert_eq!(q.end_date.unwrap().to_string(), "2022-02-01");
    }
}
