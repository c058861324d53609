use rust_decimal::Decimal;
use serde::{Serialize, Serializer};
use uuid::Uuid;

/// One row per ticker. `likers` holds the addresses that liked the stock,
/// each at most once.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct StockRecord {
    pub id: Uuid,
    pub code: String,
    pub likers: Vec<String>,
}

impl StockRecord {
    pub fn new(code: &str, liker: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            code: code.to_string(),
            likers: liker.into_iter().collect(),
        }
    }

    /// Idempotent: a client already in the set is not added again.
    pub fn add_liker(&mut self, client_id: &str) {
        if !self.likers.iter().any(|liker| liker == client_id) {
            self.likers.push(client_id.to_string());
        }
    }
}

/// A quote price, or the sentinel shown when the service had none.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Price {
    Value(Decimal),
    NotAvailable,
}

impl Serialize for Price {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Price::Value(price) => Serialize::serialize(price, serializer),
            Price::NotAvailable => serializer.serialize_str("N/A"),
        }
    }
}

impl From<Option<Decimal>> for Price {
    fn from(price: Option<Decimal>) -> Self {
        match price {
            Some(price) => Price::Value(price),
            None => Price::NotAvailable,
        }
    }
}

/// Per-ticker response item. `rel_likes` only appears on pair requests.
#[derive(Debug, Clone, Serialize)]
pub struct StockView {
    pub stock: String,
    pub price: Price,
    pub likes: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rel_likes: Option<i64>,
}

#[derive(Debug, Serialize)]
pub struct StockPricesResponse {
    #[serde(rename = "stockData")]
    pub stock_data: StockData,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum StockData {
    Single(StockView),
    Pair([StockView; 2]),
}

#[derive(Debug, Serialize)]
pub struct TestingResponse {
    #[serde(rename = "IP")]
    pub ip: String,
    pub language: String,
}
