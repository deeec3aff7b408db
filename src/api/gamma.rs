use anyhow::{anyhow, Context, Result};
use serde::Deserialize;
use tracing::debug;

const GAMMA_BASE: &str = "https://gamma-api.polymarket.com";

/// One market inside a Gamma event
#[derive(Debug, Deserialize)]
struct Market {
    #[serde(rename = "clobTokenIds")]
    clob_token_ids: String, // JSON string like "[\"abc\", \"def\"]"
}

/// Gamma event response; we only care about its markets
#[derive(Debug, Deserialize)]
struct GammaEvent {
    markets: Vec<Market>,
}

/// CLOB token ids for the two sides of an up/down market.
#[derive(Debug, PartialEq, Eq)]
pub struct TokenPair {
    pub up: String,
    pub down: String,
}

/// Fetch the event for `slug` from the Gamma API and extract its token ids.
pub async fn fetch_event_tokens(slug: &str) -> Result<TokenPair> {
    let url = format!("{}/events/slug/{}", GAMMA_BASE, slug);
    debug!(%url, "fetching event");

    let body = reqwest::Client::new()
        .get(&url)
        .send()
        .await?
        .error_for_status()
        .with_context(|| format!("event not available: {}", slug))?
        .text()
        .await?;

    parse_event(&body)
}

/// Read `markets[0].clobTokenIds` out of an event body and decode it.
fn parse_event(body: &str) -> Result<TokenPair> {
    let event: GammaEvent = serde_json::from_str(body).context("malformed event body")?;

    let market = event
        .markets
        .first()
        .ok_or_else(|| anyhow!("event has no markets"))?;

    // clobTokenIds is itself a JSON-encoded array of strings
    let token_ids: Vec<String> = serde_json::from_str(&market.clob_token_ids)
        .context("clobTokenIds is not a JSON array of strings")?;

    if token_ids.len() < 2 {
        return Err(anyhow!("expected 2 token ids, got {}", token_ids.len()));
    }

    Ok(TokenPair {
        up: token_ids[0].clone(),
        down: token_ids[1].clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_both_token_ids() {
        let body = r#"{"markets": [{"clobTokenIds": "[\"123\", \"456\"]"}]}"#;
        let pair = parse_event(body).unwrap();
        assert_eq!(
            pair,
            TokenPair {
                up: "123".to_string(),
                down: "456".to_string(),
            }
        );
    }

    #[test]
    fn uses_only_the_first_market() {
        let body = r#"{
            "markets": [
                {"clobTokenIds": "[\"a\", \"b\"]"},
                {"clobTokenIds": "[\"c\", \"d\"]"}
            ]
        }"#;
        let pair = parse_event(body).unwrap();
        assert_eq!(pair.up, "a");
        assert_eq!(pair.down, "b");
    }

    #[test]
    fn empty_markets_is_an_error() {
        let body = r#"{"markets": []}"#;
        assert!(parse_event(body).is_err());
    }

    #[test]
    fn single_token_is_an_error() {
        let body = r#"{"markets": [{"clobTokenIds": "[\"only\"]"}]}"#;
        assert!(parse_event(body).is_err());
    }

    #[test]
    fn non_json_token_list_is_an_error() {
        // single-quoted, not valid JSON
        let body = r#"{"markets": [{"clobTokenIds": "['a', 'b']"}]}"#;
        assert!(parse_event(body).is_err());
    }

    #[test]
    fn malformed_body_is_an_error() {
        assert!(parse_event("not json").is_err());
        assert!(parse_event(r#"{"markets": "nope"}"#).is_err());
    }
}
