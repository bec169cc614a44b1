//! Inbound custom events from the streamed session.
//!
//! Only the stage-open notification changes state here. Everything else is
//! logged and dropped; a malformed event must never take the panel down.

use crate::loading::{LoadingFlag, LoadingState};
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const OPENED_STAGE_RESULT: &str = "openedStageResult";
/// Recipient name the streaming layer uses for messages bound to the scene.
pub const KIT_RECIPIENT: &str = "kit";
/// Recipient name this panel answers to.
pub const PANEL_RECIPIENT: &str = "web";

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct InboundEvent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<Value>,
    #[serde(
        default,
        rename = "messageRecipient",
        skip_serializing_if = "Option::is_none"
    )]
    pub message_recipient: Option<String>,
    /// Nested serialized message, usually a JSON string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl InboundEvent {
    pub fn stage_result(result: &str) -> Self {
        Self {
            event_type: Some(OPENED_STAGE_RESULT.to_owned()),
            payload: Some(serde_json::json!({ "result": result })),
            ..Self::default()
        }
    }

    fn stage_result_value(&self) -> Option<&str> {
        self.payload.as_ref()?.get("result")?.as_str()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// No event was delivered.
    Empty,
    AssetLoaded,
    AssetLoadFailed,
    /// Message addressed to another recipient, seen only for diagnostics.
    Relayed {
        recipient: String,
        event_type: Option<String>,
    },
    Unhandled,
    Malformed,
}

impl DispatchOutcome {
    /// Whether presentation bound to the loading flag may need a refresh.
    #[inline]
    pub fn touches_loading(&self) -> bool {
        matches!(self, Self::AssetLoaded | Self::AssetLoadFailed)
    }
}

#[derive(Debug)]
pub struct Dispatcher {
    loading: LoadingFlag,
    recipient: String,
}

impl Dispatcher {
    pub fn new(initial: LoadingState) -> Self {
        Self::with_recipient(initial, PANEL_RECIPIENT)
    }

    pub fn with_recipient(initial: LoadingState, recipient: impl Into<String>) -> Self {
        Self {
            loading: LoadingFlag::new(initial),
            recipient: recipient.into(),
        }
    }

    #[inline]
    pub fn state(&self) -> LoadingState {
        self.loading.state()
    }

    #[inline]
    pub fn is_loading_asset(&self) -> bool {
        self.loading.is_loading()
    }

    pub fn dispatch(&mut self, event: Option<&InboundEvent>) -> DispatchOutcome {
        let Some(event) = event else {
            return DispatchOutcome::Empty;
        };

        if event.event_type.as_deref() == Some(OPENED_STAGE_RESULT) {
            // Either outcome unblocks the UI; an error must not strand the
            // user behind the splash screen.
            let outcome = match event.stage_result_value() {
                Some("success") => {
                    log::info!("[dispatch] scene reports asset loaded: {:?}", event.payload);
                    DispatchOutcome::AssetLoaded
                }
                _ => {
                    log::error!("[dispatch] scene reports asset load error: {:?}", event.payload);
                    DispatchOutcome::AssetLoadFailed
                }
            };
            self.loading.mark_ready();
            return outcome;
        }

        if let Some(recipient) = event
            .message_recipient
            .as_deref()
            .filter(|r| *r != self.recipient)
        {
            let event_type = match nested_event_type(event.data.as_ref()) {
                Ok(t) => t,
                Err(e) => {
                    log::warn!("[dispatch] undecodable message for {recipient}: {e}");
                    None
                }
            };
            log::info!("[dispatch] message for {recipient}: {event_type:?}");
            return DispatchOutcome::Relayed {
                recipient: recipient.to_owned(),
                event_type,
            };
        }

        log::debug!("[dispatch] unhandled event {:?}", event.event_type);
        DispatchOutcome::Unhandled
    }

    /// Decode a raw JSON event and dispatch it. `null` is an empty delivery.
    pub fn dispatch_json(&mut self, text: &str) -> DispatchOutcome {
        match serde_json::from_str::<Option<InboundEvent>>(text) {
            Ok(event) => self.dispatch(event.as_ref()),
            Err(e) => {
                log::warn!("[dispatch] malformed event ({e}): {text}");
                DispatchOutcome::Malformed
            }
        }
    }
}

fn nested_event_type(data: Option<&Value>) -> Result<Option<String>, serde_json::Error> {
    let parsed;
    let message = match data {
        None => return Ok(None),
        Some(Value::String(s)) => {
            parsed = serde_json::from_str::<Value>(s)?;
            &parsed
        }
        Some(other) => other,
    };
    Ok(message
        .get("event_type")
        .and_then(Value::as_str)
        .map(str::to_owned))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn success_clears_loading() {
        let mut d = Dispatcher::new(LoadingState::Loading);
        let out = d.dispatch(Some(&InboundEvent::stage_result("success")));
        assert_eq!(out, DispatchOutcome::AssetLoaded);
        assert!(!d.is_loading_asset());
    }

    #[test]
    fn error_still_clears_loading() {
        let mut d = Dispatcher::new(LoadingState::Loading);
        let out = d.dispatch(Some(&InboundEvent::stage_result("error")));
        assert_eq!(out, DispatchOutcome::AssetLoadFailed);
        assert_eq!(d.state(), LoadingState::Ready);
    }

    #[test]
    fn stage_result_without_payload_counts_as_failure() {
        let mut d = Dispatcher::new(LoadingState::Loading);
        let out = d.dispatch_json(r#"{"event_type":"openedStageResult"}"#);
        assert_eq!(out, DispatchOutcome::AssetLoadFailed);
        assert!(!d.is_loading_asset());
    }

    #[test]
    fn null_and_absent_are_noops() {
        let mut d = Dispatcher::new(LoadingState::Loading);
        assert_eq!(d.dispatch(None), DispatchOutcome::Empty);
        assert_eq!(d.dispatch_json("null"), DispatchOutcome::Empty);
        assert!(d.is_loading_asset());
    }

    #[test]
    fn foreign_recipient_decodes_nested_type_only() {
        let mut d = Dispatcher::new(LoadingState::Loading);
        let event = InboundEvent {
            message_recipient: Some(KIT_RECIPIENT.into()),
            data: Some(Value::String(
                json!({"event_type": "setDoorsOpen", "payload": {"doors": "All_Open"}}).to_string(),
            )),
            ..InboundEvent::default()
        };
        let out = d.dispatch(Some(&event));
        assert_eq!(
            out,
            DispatchOutcome::Relayed {
                recipient: "kit".into(),
                event_type: Some("setDoorsOpen".into())
            }
        );
        assert!(d.is_loading_asset());
    }

    #[test]
    fn undecodable_nested_data_is_tolerated() {
        let mut d = Dispatcher::new(LoadingState::Loading);
        let out = d.dispatch_json(r#"{"messageRecipient":"kit","data":"{not json"}"#);
        assert_eq!(
            out,
            DispatchOutcome::Relayed {
                recipient: "kit".into(),
                event_type: None
            }
        );
        assert!(d.is_loading_asset());
    }

    #[test]
    fn own_recipient_is_unhandled() {
        let mut d = Dispatcher::new(LoadingState::Loading);
        let out = d.dispatch_json(r#"{"event_type":"ping","messageRecipient":"web"}"#);
        assert_eq!(out, DispatchOutcome::Unhandled);
    }

    #[test]
    fn malformed_json_is_logged_and_ignored() {
        let mut d = Dispatcher::new(LoadingState::Loading);
        assert_eq!(d.dispatch_json("{\"event_type\":"), DispatchOutcome::Malformed);
        assert_eq!(d.dispatch_json("42"), DispatchOutcome::Malformed);
        assert!(d.is_loading_asset());
    }

    #[test]
    fn touches_loading_only_for_stage_results() {
        assert!(DispatchOutcome::AssetLoaded.touches_loading());
        assert!(DispatchOutcome::AssetLoadFailed.touches_loading());
        assert!(!DispatchOutcome::Unhandled.touches_loading());
        assert!(!DispatchOutcome::Empty.touches_loading());
    }
}
