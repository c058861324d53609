use anyhow::Result;
use futures::future::try_join;
use tracing::warn;

use crate::models::{Price, StockRecord, StockView};
use crate::quotes::QuoteSource;
use crate::store::StockStore;

/// Update the record for `ticker` and fetch its current price.
///
/// The like update and the quote fetch are independent, so they run
/// concurrently; the first failure aborts both. A missing price is not a
/// failure and resolves to "N/A". `ticker` is expected uppercased.
pub async fn record_like_and_fetch<S, Q>(
    store: &S,
    quotes: &Q,
    ticker: &str,
    wants_like: bool,
    client_id: &str,
) -> Result<StockView>
where
    S: StockStore,
    Q: QuoteSource,
{
    let save = async {
        let record = match store.find_by_code(ticker).await? {
            Some(mut record) => {
                if wants_like {
                    record.add_liker(client_id);
                }
                record
            }
            None => StockRecord::new(ticker, wants_like.then(|| client_id.to_string())),
        };
        // Saved unconditionally; without a like this is a no-op save.
        store.save(record).await
    };

    let (record, price) = try_join(save, quotes.latest_price(ticker)).await?;

    if price.is_none() {
        warn!("no usable price for {}", record.code);
    }

    Ok(StockView {
        stock: record.code,
        price: Price::from(price),
        likes: record.likers.len() as u64,
        rel_likes: None,
    })
}

/// Run the single-ticker operation for both tickers concurrently, then
/// attach the signed like difference to each.
///
/// Identical tickers are processed independently against the same record;
/// the likers set keeps the like single either way, the second fetch is
/// accepted redundant work.
pub async fn record_likes_and_fetch_pair<S, Q>(
    store: &S,
    quotes: &Q,
    tickers: [String; 2],
    wants_like: bool,
    client_id: &str,
) -> Result<[StockView; 2]>
where
    S: StockStore,
    Q: QuoteSource,
{
    let [first, second] = tickers;
    let (mut a, mut b) = try_join(
        record_like_and_fetch(store, quotes, &first, wants_like, client_id),
        record_like_and_fetch(store, quotes, &second, wants_like, client_id),
    )
    .await?;

    a.rel_likes = Some(a.likes as i64 - b.likes as i64);
    b.rel_likes = Some(b.likes as i64 - a.likes as i64);

    Ok([a, b])
}
