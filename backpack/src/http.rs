use crate::schema::{BuyOrder, Listing};
use crate::{Error, Result};
use reqwest::StatusCode;
use serde_json::{json, Value};

const BASE_URL: &str = "https://backpack.tf/api";
const USER_AGENT: &str = "BackpackTF-BuyOrderTool/1.0";

/// Client for the backpack.tf classifieds API. The access token is passed as
/// a query parameter on every request.
pub struct HttpClient {
    client: reqwest::Client,
    token: String,
}

impl HttpClient {
    pub fn new(token: impl Into<String>) -> Result<Self> {
        Ok(Self {
            client: reqwest::Client::builder()
                .user_agent(USER_AGENT)
                .build()?,
            token: token.into(),
        })
    }

    /// Translates every order and submits the whole batch in one request.
    /// The batch is accepted or rejected as a unit; there are no retries.
    pub async fn create_listings(&self, orders: &[BuyOrder]) -> Result<Value> {
        let listings: Vec<Listing> = orders.iter().map(Listing::from).collect();
        log::debug!("Submitting {} listing(s) to the batch endpoint", listings.len());

        let response = self
            .client
            .post(format!("{BASE_URL}/v2/classifieds/listings/batch"))
            .query(&[("token", &self.token)])
            .json(&json!({ "listings": listings }))
            .send()
            .await?;

        let status = response.status();
        println!("Status Code: {}", status.as_u16());

        interpret_response(status, &response.text().await?)
    }
}

/// Classifies a raw response. Only a 200 body is decoded as JSON; anything
/// else is surfaced verbatim alongside its status. A 200 body can still
/// carry a rejection nested under `listings.error`.
fn interpret_response(status: StatusCode, body: &str) -> Result<Value> {
    if status != StatusCode::OK {
        return Err(Error::Response(status, body.to_string()));
    }

    let value: Value = serde_json::from_str(body)?;
    if let Some(error) = value.pointer("/listings/error") {
        // The error object usually carries a message string, but its
        // presence alone already means the batch was rejected
        let message = match error.get("message").and_then(Value::as_str) {
            Some(message) => message.to_string(),
            None => error.to_string(),
        };
        return Err(Error::Rejected(message));
    }

    Ok(value)
}
