//! Reply formatting: lookup results → Telegram HTML, plus the fixed texts
//! (welcome, invalid input, failure messages).
//!
//! This module never fails: any `LookupResult`, including an empty one,
//! produces a reply.

use crate::{
    lookup::{FieldValue, LookupResult},
    query::PhoneQuery,
};

/// Whether replies carry decorative icons. Kept out of the fixed texts so the
/// decoration can be turned off without changing any semantics.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReplyStyle {
    Decorated,
    Plain,
}

/// Final text for one outbound message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReplyMessage {
    pub text: String,
    /// Send with Telegram HTML parse mode.
    pub html: bool,
}

impl ReplyMessage {
    fn html(text: String) -> Self {
        Self { text, html: true }
    }

    fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            html: false,
        }
    }
}

/// One rendered line of a lookup reply.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DisplayLine {
    pub label: String,
    pub icon: &'static str,
    pub value: String,
}

/// Escape HTML special characters for Telegram HTML parse mode.
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// A value is worth showing iff its trimmed rendering is non-empty and not a
/// placeholder token. Comparison is case-sensitive: the API uses exactly
/// `NA` / `N/A`, and e.g. a state code `na` must survive.
fn is_meaningful(value: &FieldValue) -> bool {
    let s = value.render();
    let s = s.trim();
    !s.is_empty() && s != "NA" && s != "N/A"
}

/// `sim_count` → `Sim Count`.
fn display_label(key: &str) -> String {
    key.replace('_', " ")
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// Decorative icon by lower-cased field name; unmapped fields get a bullet.
fn icon_for(key: &str) -> &'static str {
    match key.to_lowercase().as_str() {
        "name" => "\u{1F464}",           // 👤
        "address" => "\u{1F3E0}",        // 🏠
        "carrier" | "operator" => "\u{1F4E1}", // 📡
        "country" => "\u{1F30D}",        // 🌍
        "state" | "circle" => "\u{1F4CD}", // 📍
        "email" => "\u{2709}\u{FE0F}",   // ✉️
        _ => "\u{2022}",                 // •
    }
}

/// The meaningful fields of a result, in the order the API sent them.
pub fn display_lines(result: &LookupResult) -> Vec<DisplayLine> {
    result
        .fields()
        .filter(|(_, value)| is_meaningful(value))
        .map(|(key, value)| DisplayLine {
            label: display_label(key),
            icon: icon_for(key),
            value: value.render().trim().to_string(),
        })
        .collect()
}

/// Build the reply for a successful lookup.
pub fn format_reply(query: &PhoneQuery, result: &LookupResult, style: ReplyStyle) -> ReplyMessage {
    let lines = display_lines(result);
    if lines.is_empty() {
        return ReplyMessage::plain(format!("No details found for {query}."));
    }

    let mut text = format!("<b>Info for {}:</b>\n", escape_html(query.as_str()));
    for line in &lines {
        text.push('\n');
        if style == ReplyStyle::Decorated {
            text.push_str(line.icon);
            text.push(' ');
        }
        text.push_str(&format!(
            "<b>{}:</b> {}",
            escape_html(&line.label),
            escape_html(&line.value)
        ));
    }
    ReplyMessage::html(text)
}

pub fn welcome(first_name: Option<&str>) -> ReplyMessage {
    let name = first_name.filter(|n| !n.trim().is_empty()).unwrap_or("there");
    ReplyMessage::plain(format!(
        "Hi {name}!\n\nWelcome to the Phone Number Bot. Just send me any \
         phone number and I'll try to find information about it."
    ))
}

pub fn invalid_input(max_digits: usize) -> ReplyMessage {
    ReplyMessage::plain(format!(
        "That doesn't look like a phone number. Send digits only, up to {max_digits} of them."
    ))
}

pub fn service_unavailable() -> ReplyMessage {
    ReplyMessage::plain("The lookup service seems to be down. Please try again later.")
}

pub fn remote_error(message: &str, style: ReplyStyle) -> ReplyMessage {
    match style {
        ReplyStyle::Decorated => ReplyMessage::plain(format!("\u{26A0}\u{FE0F} Error: {message}")),
        ReplyStyle::Plain => ReplyMessage::plain(format!("Error: {message}")),
    }
}

pub fn unexpected_error() -> ReplyMessage {
    ReplyMessage::plain("An unexpected error happened. I've logged it.")
}

pub fn unknown_command() -> ReplyMessage {
    ReplyMessage::plain("I only know /start and /help. Send a phone number to look it up.")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lookup::LookupResult;
    use serde_json::json;

    fn query(s: &str) -> PhoneQuery {
        PhoneQuery::parse(s, 13).unwrap()
    }

    fn result(v: serde_json::Value) -> LookupResult {
        LookupResult::from_value(&v).unwrap()
    }

    #[test]
    fn filters_placeholders_and_keeps_order() {
        let r = result(json!({
            "name": "Jane Doe",
            "country": "NA",
            "carrier": "Acme",
            "note": "N/A",
            "blank": "   ",
            "missing": null
        }));
        let lines = display_lines(&r);
        let labels: Vec<&str> = lines.iter().map(|l| l.label.as_str()).collect();
        assert_eq!(labels, vec!["Name", "Carrier"]);
    }

    #[test]
    fn placeholder_check_is_case_sensitive() {
        let r = result(json!({"state": "na", "alt": "n/a"}));
        assert_eq!(display_lines(&r).len(), 2);
    }

    #[test]
    fn numbers_are_meaningful_including_zero() {
        let r = result(json!({"sim_count": 0, "age": 41}));
        let lines = display_lines(&r);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].label, "Sim Count");
        assert_eq!(lines[0].value, "0");
    }

    #[test]
    fn empty_and_all_placeholder_results_get_the_fixed_message() {
        let q = query("918123456789");
        let empty = format_reply(&q, &result(json!({})), ReplyStyle::Decorated);
        let placeholders = format_reply(
            &q,
            &result(json!({"a": "NA", "b": "N/A", "c": ""})),
            ReplyStyle::Decorated,
        );
        assert_eq!(empty.text, "No details found for 918123456789.");
        assert_eq!(empty, placeholders);
        assert!(!empty.html);
        // Idempotent on repeated identical calls.
        assert_eq!(empty, format_reply(&q, &result(json!({})), ReplyStyle::Decorated));
    }

    #[test]
    fn reply_frames_lines_with_the_query_header() {
        let q = query("5551234");
        let reply = format_reply(
            &q,
            &result(json!({"name": "Jane", "carrier": "Acme"})),
            ReplyStyle::Plain,
        );
        assert!(reply.html);
        assert_eq!(
            reply.text,
            "<b>Info for 5551234:</b>\n\n<b>Name:</b> Jane\n<b>Carrier:</b> Acme"
        );
    }

    #[test]
    fn decorated_style_prefixes_icons() {
        let q = query("5551234");
        let reply = format_reply(
            &q,
            &result(json!({"name": "Jane", "whatever": "x"})),
            ReplyStyle::Decorated,
        );
        assert!(reply.text.contains("\u{1F464} <b>Name:</b> Jane"));
        assert!(reply.text.contains("\u{2022} <b>Whatever:</b> x"));
    }

    #[test]
    fn values_are_html_escaped() {
        let q = query("5551234");
        let reply = format_reply(
            &q,
            &result(json!({"name": "<b>Jane & co</b>"})),
            ReplyStyle::Plain,
        );
        assert!(reply.text.contains("&lt;b&gt;Jane &amp; co&lt;/b&gt;"));
    }

    #[test]
    fn labels_title_case_underscored_keys() {
        assert_eq!(display_label("sim_count"), "Sim Count");
        assert_eq!(display_label("NAME"), "Name");
        assert_eq!(display_label("last_seen_at"), "Last Seen At");
    }

    #[test]
    fn welcome_personalizes_when_a_name_is_known() {
        assert!(welcome(Some("Jane")).text.starts_with("Hi Jane!"));
        assert!(welcome(None).text.starts_with("Hi there!"));
        assert!(welcome(Some("  ")).text.starts_with("Hi there!"));
    }
}
