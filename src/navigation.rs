//! URLs the pages hand to each other. Query parameter names here are shared
//! with bookmarks and browser history, so they must not change.

use std::collections::HashMap;

use url::form_urlencoded::Serializer;

use crate::services::selection::SelectionState;

pub const PARAM_SEARCH: &str = "search";
pub const PARAM_EXPERIENCE: &str = "expId";
pub const PARAM_SLOT: &str = "slotId";
pub const PARAM_QUANTITY: &str = "qty";
pub const PARAM_REFERENCE: &str = "ref";

fn with_query(path: &str, pairs: &[(&str, &str)]) -> String {
    if pairs.is_empty() {
        return path.to_string();
    }
    let mut query = Serializer::new(String::new());
    for (k, v) in pairs {
        query.append_pair(k, v);
    }
    format!("{path}?{}", query.finish())
}

pub fn list_url(search: &str) -> String {
    if search.is_empty() {
        return "/".to_string();
    }
    with_query("/", &[(PARAM_SEARCH, search)])
}

/// Percent-encodes `s` for use as a single URL path segment.
pub fn encode_segment(s: &str) -> String {
    url::form_urlencoded::byte_serialize(s.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}

pub fn experience_url(id: &str) -> String {
    format!("/experiences/{}", encode_segment(id))
}

/// Detail page URL carrying `selection`, optionally with an action to apply.
pub fn detail_url(experience_id: &str, selection: &SelectionState, action: Option<&str>) -> String {
    let qty = selection.quantity.to_string();
    let mut pairs: Vec<(&str, &str)> = Vec::new();
    if let Some(date) = selection.date.as_deref() {
        pairs.push(("date", date));
    }
    if let Some(slot) = selection.slot_id.as_deref() {
        pairs.push(("slot", slot));
        pairs.push(("qty", &qty));
    }
    if let Some(action) = action {
        pairs.push(("action", action));
    }
    with_query(&experience_url(experience_id), &pairs)
}

pub fn checkout_url(experience_id: &str, slot_id: &str, quantity: u32) -> String {
    let qty = quantity.to_string();
    with_query(
        "/checkout",
        &[
            (PARAM_EXPERIENCE, experience_id),
            (PARAM_SLOT, slot_id),
            (PARAM_QUANTITY, &qty),
        ],
    )
}

pub fn confirmation_url(reference: &str) -> String {
    with_query("/confirmation", &[(PARAM_REFERENCE, reference)])
}

/// What the checkout page needs from the detail page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutParams {
    pub experience_id: String,
    pub slot_id: String,
    pub quantity: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParamError {
    #[error("Missing booking details. Please go back and try again.")]
    Missing,
    #[error("Invalid booking details. Please go back and try again.")]
    Malformed,
}

impl CheckoutParams {
    pub fn parse(params: &HashMap<String, String>) -> Result<Self, ParamError> {
        let get = |key: &str| params.get(key).map(String::as_str).unwrap_or("");
        Self::from_parts(get(PARAM_EXPERIENCE), get(PARAM_SLOT), get(PARAM_QUANTITY))
    }

    /// Validates raw values, e.g. the hidden fields echoed back by the checkout form.
    pub fn from_parts(experience_id: &str, slot_id: &str, qty: &str) -> Result<Self, ParamError> {
        let (experience_id, slot_id, qty) = (experience_id.trim(), slot_id.trim(), qty.trim());
        if experience_id.is_empty() || slot_id.is_empty() || qty.is_empty() {
            return Err(ParamError::Missing);
        }

        let quantity = qty
            .parse::<u32>()
            .ok()
            .filter(|q| *q >= 1)
            .ok_or(ParamError::Malformed)?;

        Ok(Self {
            experience_id: experience_id.to_string(),
            slot_id: slot_id.to_string(),
            quantity,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn test_checkout_url_round_trips_through_parse() {
        let url = checkout_url("exp 1", "slot&2", 3);
        assert_eq!(url, "/checkout?expId=exp+1&slotId=slot%262&qty=3");

        let query = url.split_once('?').unwrap().1;
        let map: HashMap<String, String> = url::form_urlencoded::parse(query.as_bytes()).into_owned().collect();
        let parsed = CheckoutParams::parse(&map).unwrap();
        assert_eq!(parsed.experience_id, "exp 1");
        assert_eq!(parsed.slot_id, "slot&2");
        assert_eq!(parsed.quantity, 3);
    }

    #[test]
    fn test_parse_requires_all_three() {
        assert_eq!(CheckoutParams::parse(&params(&[])), Err(ParamError::Missing));
        assert_eq!(
            CheckoutParams::parse(&params(&[("expId", "e1"), ("slotId", "s1")])),
            Err(ParamError::Missing)
        );
        assert_eq!(
            CheckoutParams::parse(&params(&[("expId", "e1"), ("slotId", ""), ("qty", "2")])),
            Err(ParamError::Missing)
        );
    }

    #[test]
    fn test_parse_rejects_bad_quantity() {
        for qty in ["0", "-1", "two", "1.5"] {
            assert_eq!(
                CheckoutParams::parse(&params(&[("expId", "e1"), ("slotId", "s1"), ("qty", qty)])),
                Err(ParamError::Malformed),
                "qty={qty}"
            );
        }
    }

    #[test]
    fn test_detail_url_only_carries_quantity_with_slot() {
        let mut selection = SelectionState {
            date: Some("Oct 22".to_string()),
            ..SelectionState::default()
        };
        assert_eq!(detail_url("e1", &selection, None), "/experiences/e1?date=Oct+22");

        selection.slot_id = Some("s1".to_string());
        selection.quantity = 2;
        assert_eq!(
            detail_url("e1", &selection, Some("inc")),
            "/experiences/e1?date=Oct+22&slot=s1&qty=2&action=inc"
        );
    }

    #[test]
    fn test_list_and_confirmation_urls() {
        assert_eq!(list_url(""), "/");
        assert_eq!(list_url("goa trip"), "/?search=goa+trip");
        assert_eq!(confirmation_url("HD-1234"), "/confirmation?ref=HD-1234");
        assert_eq!(experience_url("a b/c"), "/experiences/a%20b%2Fc");
    }
}
