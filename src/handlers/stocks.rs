use std::net::SocketAddr;

use axum::extract::{ConnectInfo, Query, State};
use axum::http::HeaderMap;
use axum::Json;

use crate::error::ApiError;
use crate::models::{StockData, StockPricesResponse};
use crate::quotes::QuoteSource;
use crate::services::stocks;
use crate::state::AppState;
use crate::store::StockStore;
use crate::utils::client_ip;

/// Which tickers a request named: one, or a pair to compare.
#[derive(Debug, PartialEq)]
pub enum StockSelection {
    Single(String),
    Pair(String, String),
}

/// Interpret the raw query pairs. Tickers are uppercased here, before use as
/// lookup keys; anything other than one or two non-empty `stock` values is
/// rejected. A like only counts when the value is exactly the literal
/// "true".
pub fn parse_stock_query(params: &[(String, String)]) -> Result<(StockSelection, bool), ApiError> {
    let mut tickers = params
        .iter()
        .filter(|(key, value)| key == "stock" && !value.is_empty())
        .map(|(_, value)| value.to_uppercase());

    let selection = match (tickers.next(), tickers.next(), tickers.next()) {
        (Some(one), None, None) => StockSelection::Single(one),
        (Some(one), Some(two), None) => StockSelection::Pair(one, two),
        _ => return Err(ApiError::InvalidQuery),
    };

    let wants_like = params
        .iter()
        .find(|(key, _)| key == "like")
        .is_some_and(|(_, value)| value == "true");

    Ok((selection, wants_like))
}

pub async fn stock_prices<S, Q>(
    State(state): State<AppState<S, Q>>,
    Query(params): Query<Vec<(String, String)>>,
    headers: HeaderMap,
    peer: Option<ConnectInfo<SocketAddr>>,
) -> Result<Json<StockPricesResponse>, ApiError>
where
    S: StockStore,
    Q: QuoteSource,
{
    let (selection, wants_like) = parse_stock_query(&params)?;
    let client_id = client_ip(&headers, peer.map(|ConnectInfo(addr)| addr));

    let stock_data = match selection {
        StockSelection::Single(ticker) => {
            let view = stocks::record_like_and_fetch(
                &state.store,
                &state.quotes,
                &ticker,
                wants_like,
                &client_id,
            )
            .await
            .map_err(ApiError::Stock)?;
            StockData::Single(view)
        }
        StockSelection::Pair(first, second) => {
            let views = stocks::record_likes_and_fetch_pair(
                &state.store,
                &state.quotes,
                [first, second],
                wants_like,
                &client_id,
            )
            .await
            .map_err(ApiError::Stocks)?;
            StockData::Pair(views)
        }
    };

    Ok(Json(StockPricesResponse { stock_data }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect()
    }

    #[test]
    fn single_stock_is_uppercased() {
        let (selection, wants_like) = parse_stock_query(&params(&[("stock", "goog")])).unwrap();
        assert_eq!(selection, StockSelection::Single("GOOG".to_string()));
        assert!(!wants_like);
    }

    #[test]
    fn two_stocks_form_a_pair() {
        let (selection, _) =
            parse_stock_query(&params(&[("stock", "goog"), ("stock", "msft")])).unwrap();
        assert_eq!(
            selection,
            StockSelection::Pair("GOOG".to_string(), "MSFT".to_string())
        );
    }

    #[test]
    fn like_must_be_the_literal_true() {
        let pairs = params(&[("stock", "goog"), ("like", "true")]);
        assert!(parse_stock_query(&pairs).unwrap().1);

        for value in ["TRUE", "1", "yes", ""] {
            let pairs = params(&[("stock", "goog"), ("like", value)]);
            assert!(!parse_stock_query(&pairs).unwrap().1, "like={}", value);
        }
    }

    #[test]
    fn missing_stock_is_rejected() {
        assert!(parse_stock_query(&params(&[("like", "true")])).is_err());
        assert!(parse_stock_query(&[]).is_err());
    }

    #[test]
    fn empty_ticker_is_rejected() {
        assert!(parse_stock_query(&params(&[("stock", "")])).is_err());
    }

    #[test]
    fn more_than_two_stocks_is_rejected() {
        let pairs = params(&[("stock", "goog"), ("stock", "msft"), ("stock", "aapl")]);
        assert!(parse_stock_query(&pairs).is_err());
    }
}
