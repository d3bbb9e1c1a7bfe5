//! Pyth Hermes WebSocket price feed implementation

use super::{PriceFeed, PriceUpdate};
use crate::config::FeedConfig;
use crate::ws::{WsClient, WsConfig, WsEvent};
use async_trait::async_trait;
use chrono::Utc;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tokio::sync::mpsc;

/// Subscription request sent once per established connection
#[derive(Debug, Serialize)]
struct SubscribeRequest<'a> {
    #[serde(rename = "type")]
    request_type: &'a str,
    ids: Vec<&'a str>,
}

/// Hermes stream message; only `price_update` carries a payload we use
#[derive(Debug, Deserialize)]
struct StreamMessage {
    #[serde(rename = "type")]
    message_type: String,
    price_feed: Option<PriceFeedPayload>,
}

#[derive(Debug, Deserialize)]
struct PriceFeedPayload {
    #[allow(dead_code)]
    id: String,
    price: PriceData,
}

/// Fixed-point price: `price * 10^expo` is the actual value
#[derive(Debug, Deserialize)]
struct PriceData {
    price: String,
    expo: i32,
    publish_time: i64,
}

/// Pyth Hermes WebSocket feed for a single price feed id
pub struct PythFeed {
    endpoint: String,
    symbol: String,
    feed_id: String,
}

impl PythFeed {
    /// Create a feed from configuration
    pub fn new(config: &FeedConfig) -> Self {
        Self {
            endpoint: config.endpoint.clone(),
            symbol: config.symbol.clone(),
            feed_id: config.feed_id.clone(),
        }
    }

    /// Scale a fixed-point mantissa by its exponent
    fn scale_price(mantissa: i64, expo: i32) -> Option<Decimal> {
        if expo >= 0 {
            let mut value = Decimal::from(mantissa);
            for _ in 0..expo {
                value = value.checked_mul(Decimal::TEN)?;
            }
            Some(value)
        } else {
            let scale = expo.unsigned_abs();
            if scale > 28 {
                // Beyond Decimal precision
                return None;
            }
            Some(Decimal::new(mantissa, scale))
        }
    }

    /// Decode a Hermes message into a PriceUpdate
    ///
    /// Anything that is not a well-formed `price_update` yields `None`:
    /// subscription acks and unknown message types are dropped silently,
    /// unparsable numeric fields are logged by the caller.
    fn parse_update(&self, msg: &str) -> Option<PriceUpdate> {
        let message: StreamMessage = serde_json::from_str(msg).ok()?;

        if message.message_type != "price_update" {
            return None;
        }

        let payload = message.price_feed?;
        let mantissa: i64 = payload.price.price.parse().ok()?;
        let price = Self::scale_price(mantissa, payload.price.expo)?;

        Some(PriceUpdate {
            symbol: self.symbol.clone(),
            price,
            publish_time: payload.price.publish_time,
            received_at: Utc::now(),
        })
    }

    /// Whether a message claims to be a price update at all
    fn is_price_update(msg: &str) -> bool {
        serde_json::from_str::<StreamMessage>(msg)
            .map(|m| m.message_type == "price_update")
            .unwrap_or(false)
    }

    /// Serialized subscription request for this feed id
    fn subscribe_request(&self) -> String {
        let request = SubscribeRequest {
            request_type: "subscribe",
            ids: vec![&self.feed_id],
        };
        serde_json::to_string(&request).expect("subscribe request serializes")
    }

    /// Bridge ws events to decoded price updates
    ///
    /// Sends the subscription request after every `Connected` event, so a
    /// reconnect resubscribes without any extra bookkeeping.
    async fn run_message_loop(
        self,
        mut ws_rx: mpsc::Receiver<WsEvent>,
        ws_tx: mpsc::Sender<String>,
        update_tx: mpsc::Sender<PriceUpdate>,
    ) {
        while let Some(event) = ws_rx.recv().await {
            match event {
                WsEvent::Text(text) => {
                    if let Some(update) = self.parse_update(&text) {
                        if update_tx.send(update).await.is_err() {
                            tracing::debug!("Update receiver dropped, stopping feed");
                            break;
                        }
                    } else if Self::is_price_update(&text) {
                        // Right type, bad numeric fields: skip, don't crash
                        tracing::warn!(message = %text, "Skipping malformed price update");
                    }
                }
                WsEvent::Connected => {
                    tracing::info!(symbol = %self.symbol, feed_id = %self.feed_id, "Pyth feed connected, subscribing");
                    if ws_tx.send(self.subscribe_request()).await.is_err() {
                        tracing::warn!("WebSocket sender closed, stopping feed");
                        break;
                    }
                }
                WsEvent::Disconnected => {
                    tracing::warn!("Pyth feed disconnected");
                    break;
                }
                WsEvent::Reconnecting { attempt } => {
                    tracing::warn!(attempt, "Pyth feed reconnecting...");
                }
            }
        }
    }
}

#[async_trait]
impl PriceFeed for PythFeed {
    async fn subscribe(&self) -> anyhow::Result<mpsc::Receiver<PriceUpdate>> {
        let (update_tx, update_rx) = mpsc::channel(1024);

        tracing::info!(symbol = %self.symbol, endpoint = %self.endpoint, "Subscribing to Pyth feed");

        let config = WsConfig::new(&self.endpoint)
            .max_reconnects(10)
            .initial_delay(Duration::from_secs(1))
            .max_delay(Duration::from_secs(60))
            .ping_interval(Duration::from_secs(30));

        let client = WsClient::new(config);
        let (ws_rx, ws_tx) = client.connect();

        let feed = PythFeed {
            endpoint: self.endpoint.clone(),
            symbol: self.symbol.clone(),
            feed_id: self.feed_id.clone(),
        };

        tokio::spawn(async move {
            feed.run_message_loop(ws_rx, ws_tx, update_tx).await;
        });

        Ok(update_rx)
    }
}
