use reqwest::StatusCode;
use serde_json::Value;

use crate::domain::{AccessToken, OrderReceipt};

/// Status code and JSON body of a service response.
///
/// Fields are addressed with dotted paths and `[n]` indices, e.g.
/// `user.email`, `orders[0]._id` or `data[1]._id`.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    status: StatusCode,
    body: Value,
    text: String,
}

impl ApiResponse {
    pub fn new(status: StatusCode, body: Value) -> Self {
        let text = body.to_string();
        Self { status, body, text }
    }

    /// Reads the whole body. Anything that is not JSON (the 500 page for unknown
    /// ingredients is HTML) becomes `Value::Null`.
    pub async fn read(response: reqwest::Response) -> Result<Self, reqwest::Error> {
        let status = response.status();
        let text = response.text().await?;
        let body = serde_json::from_str(&text).unwrap_or(Value::Null);
        Ok(Self { status, body, text })
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn body(&self) -> &Value {
        &self.body
    }

    /// Raw body as received, for failure reports.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn lookup(&self, path: &str) -> Option<&Value> {
        parse_path(path)?
            .into_iter()
            .try_fold(&self.body, |value, segment| match segment {
                Segment::Key(key) => value.get(key),
                Segment::Index(index) => value.get(index),
            })
    }

    /// Like [`ApiResponse::lookup`] but treats an explicit `null` as absent.
    pub fn non_null(&self, path: &str) -> Option<&Value> {
        self.lookup(path).filter(|value| !value.is_null())
    }

    pub fn str_at(&self, path: &str) -> Option<&str> {
        self.lookup(path).and_then(Value::as_str)
    }

    pub fn u64_at(&self, path: &str) -> Option<u64> {
        self.lookup(path).and_then(Value::as_u64)
    }

    pub fn bool_at(&self, path: &str) -> Option<bool> {
        self.lookup(path).and_then(Value::as_bool)
    }

    /// `accessToken` of a register/login response, if the call succeeded.
    pub fn access_token(&self) -> Option<AccessToken> {
        self.str_at("accessToken")
            .and_then(|raw| AccessToken::parse(raw.to_owned()).ok())
    }

    /// `order._id` and `order.number` of a create-order response.
    pub fn order_receipt(&self) -> Option<OrderReceipt> {
        Some(OrderReceipt {
            id: self.str_at("order._id")?.to_owned(),
            number: self.u64_at("order.number")?,
        })
    }
}

#[derive(Debug, PartialEq)]
enum Segment<'a> {
    Key(&'a str),
    Index(usize),
}

fn parse_path(path: &str) -> Option<Vec<Segment<'_>>> {
    let mut segments = Vec::new();
    for part in path.split('.') {
        let (key, mut rest) = match part.find('[') {
            Some(position) => part.split_at(position),
            None => (part, ""),
        };
        if !key.is_empty() {
            segments.push(Segment::Key(key));
        } else if rest.is_empty() {
            return None;
        }
        // `rest` is empty or starts with `[`
        while !rest.is_empty() {
            let close = rest.find(']')?;
            let index = rest[1..close].parse().ok()?;
            segments.push(Segment::Index(index));
            rest = &rest[close + 1..];
            if !rest.is_empty() && !rest.starts_with('[') {
                return None;
            }
        }
    }
    Some(segments)
}
