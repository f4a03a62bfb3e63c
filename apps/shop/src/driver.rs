//! # JSON-Lines Driver
//!
//! Lets any view process talk to the shop over a pipe: one request object
//! per input line, one reply object per output line.
//!
//! ```text
//! stdin   {"command":"add_to_cart","product":"Jasmine","quantity":2}
//! stdout  {"ok":{"items":[...],"totals":{...},"openedAt":"..."}}
//!
//! stdin   {"command":"add_to_cart","product":"Cactus"}
//! stdout  {"error":{"code":"NOT_FOUND","message":"Product not found: Cactus"}}
//! ```
//!
//! A bad line gets an error reply and the loop keeps going; only I/O
//! failures end it.

use std::io::{self, BufRead, Write};

use nursery_core::{AddItem, CartAction};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, error, warn};

use crate::commands;
use crate::error::ApiError;
use crate::Shop;

/// One request line.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum ShopRequest {
    GetCart,
    AddToCart {
        product: String,
        #[serde(default)]
        quantity: Option<i64>,
    },
    AddLineItem {
        item: AddItem,
    },
    UpdateCartItem {
        product: String,
        quantity: i64,
    },
    RemoveFromCart {
        product: String,
    },
    ClearCart,
    Checkout,
    GetCatalog,
    GetConfig,
    /// A raw cart action, for views that speak the action contract directly.
    Dispatch {
        action: CartAction,
    },
}

/// One reply line.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ShopReply {
    Ok(Value),
    Error(ApiError),
}

impl From<Result<Value, ApiError>> for ShopReply {
    fn from(result: Result<Value, ApiError>) -> Self {
        match result {
            Ok(value) => ShopReply::Ok(value),
            Err(err) => ShopReply::Error(err),
        }
    }
}

impl Shop {
    /// Runs one request against the shop.
    pub fn handle(&self, request: ShopRequest) -> Result<Value, ApiError> {
        match request {
            ShopRequest::GetCart => to_json(commands::cart::get_cart(&self.cart)),
            ShopRequest::AddToCart { product, quantity } => to_json(commands::cart::add_to_cart(
                &self.catalog,
                &self.cart,
                &product,
                quantity,
            )?),
            ShopRequest::AddLineItem { item } => {
                to_json(commands::cart::add_line_item(&self.cart, item))
            }
            ShopRequest::UpdateCartItem { product, quantity } => to_json(
                commands::cart::update_cart_item(&self.cart, &product, quantity),
            ),
            ShopRequest::RemoveFromCart { product } => {
                to_json(commands::cart::remove_from_cart(&self.cart, &product))
            }
            ShopRequest::ClearCart => to_json(commands::cart::clear_cart(&self.cart)),
            ShopRequest::Checkout => to_json(commands::cart::checkout(&self.cart)),
            ShopRequest::GetCatalog => to_json(commands::catalog::get_catalog(
                &self.catalog,
                &self.config,
            )),
            ShopRequest::GetConfig => to_json(commands::config::get_config(&self.config)),
            ShopRequest::Dispatch { action } => to_json(self.cart.dispatch(&action)),
        }
    }

    /// Decodes and runs one request line.
    pub fn handle_line(&self, line: &str) -> ShopReply {
        let result = serde_json::from_str::<ShopRequest>(line)
            .map_err(ApiError::from)
            .and_then(|request| {
                debug!(?request, "request");
                self.handle(request)
            });

        if let Err(err) = &result {
            warn!(code = ?err.code, message = %err.message, "request failed");
        }
        result.into()
    }
}

fn to_json<T: Serialize>(response: T) -> Result<Value, ApiError> {
    serde_json::to_value(response).map_err(|err| {
        error!("response encoding failed: {}", err);
        ApiError::internal("Response could not be encoded")
    })
}

/// Serves requests until `input` is exhausted.
///
/// Blank lines are skipped. A line that is not UTF-8 gets a `BAD_REQUEST`
/// reply like any other undecodable line. Each reply is flushed as soon as
/// it is written.
pub fn run<R, W>(shop: &Shop, mut input: R, mut output: W) -> io::Result<()>
where
    R: BufRead,
    W: Write,
{
    let mut buf = Vec::new();
    loop {
        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(());
        }

        let reply = match std::str::from_utf8(&buf) {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                shop.handle_line(line)
            }
            Err(err) => {
                warn!(%err, "request line is not UTF-8");
                ShopReply::Error(ApiError::bad_request(format!(
                    "Invalid request: {}",
                    err
                )))
            }
        };

        serde_json::to_writer(&mut output, &reply)?;
        output.write_all(b"\n")?;
        output.flush()?;
    }
}
