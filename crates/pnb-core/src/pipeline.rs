//! The per-message lookup pipeline.
//!
//! Each inbound text message runs one instance of the state machine
//! `Validating → Querying → Formatting → Replied`, with early exits straight
//! to `Replied` on rejection or lookup failure. Instances share nothing but
//! the injected lookup client, so concurrent messages need no locking.

use std::sync::Arc;

use tracing::{error, info, warn};

use crate::{
    config::Config,
    format::{self, ReplyMessage, ReplyStyle},
    lookup::{LookupPort, LookupResult},
    query::PhoneQuery,
    Error,
};

enum Stage {
    Validating { raw: String },
    Querying(PhoneQuery),
    Formatting(PhoneQuery, LookupResult),
    Replied(ReplyMessage),
}

/// Runs the lookup pipeline for inbound messages. Stateless across messages;
/// safe to share behind an `Arc`.
pub struct Pipeline {
    max_query_digits: usize,
    style: ReplyStyle,
    lookup: Arc<dyn LookupPort>,
}

impl Pipeline {
    pub fn new(cfg: &Config, lookup: Arc<dyn LookupPort>) -> Self {
        Self {
            max_query_digits: cfg.max_query_digits,
            style: cfg.reply_style,
            lookup,
        }
    }

    /// Drive one message through the state machine. Always terminates with
    /// exactly one reply; every failure is converted, never propagated.
    pub async fn run(&self, raw: &str) -> ReplyMessage {
        let mut stage = Stage::Validating {
            raw: raw.to_string(),
        };

        loop {
            stage = match stage {
                Stage::Validating { raw } => {
                    match PhoneQuery::parse(&raw, self.max_query_digits) {
                        Ok(query) => Stage::Querying(query),
                        Err(rejection) => {
                            warn!("rejected input ({rejection})");
                            Stage::Replied(format::invalid_input(self.max_query_digits))
                        }
                    }
                }
                Stage::Querying(query) => match self.lookup.lookup(&query).await {
                    Ok(result) => Stage::Formatting(query, result),
                    Err(Error::Remote(message)) => {
                        info!("lookup for {query} reported: {message}");
                        Stage::Replied(format::remote_error(&message, self.style))
                    }
                    Err(Error::Transport(reason)) => {
                        error!("lookup for {query} failed: {reason}");
                        Stage::Replied(format::service_unavailable())
                    }
                    Err(other) => {
                        error!("lookup for {query} failed unexpectedly: {other}");
                        Stage::Replied(format::unexpected_error())
                    }
                },
                Stage::Formatting(query, result) => {
                    Stage::Replied(format::format_reply(&query, &result, self.style))
                }
                Stage::Replied(reply) => return reply,
            };
        }
    }
}
