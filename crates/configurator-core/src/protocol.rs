//! Outbound control messages and the channel they travel over.
//!
//! Every message is JSON of the form `{"event_type": ..., "payload": {...}}`.
//! The remote scene matches `event_type` and the payload field names
//! verbatim, so the serde names below are part of the wire contract.

use crate::catalog::{BackgroundOption, DoorOption, PackageOption, WheelOption};
use crate::error::ProtocolError;
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

pub const SET_PACKAGE: &str = "setPackage";
pub const SET_BACKGROUND: &str = "setBackGround";
pub const SET_WHEEL_ORIENTATION: &str = "setWheelOrientation";
pub const SET_DOORS_OPEN: &str = "setDoorsOpen";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackagePayload {
    pub car_paint: String,
    pub wheel_colors: String,
    pub light_strip_color: String,
    pub int_leather: String,
    pub int_leather_dash: String,
    pub int_trim_color: String,
    pub stitch_color: String,
    pub screen_color: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event_type", content = "payload")]
pub enum OutboundMessage {
    #[serde(rename = "setPackage")]
    SetPackage(PackagePayload),
    #[serde(rename = "setBackGround")]
    SetBackground { background: String },
    #[serde(rename = "setWheelOrientation")]
    SetWheelOrientation {
        #[serde(rename = "wheelTurns")]
        wheel_turns: String,
    },
    #[serde(rename = "setDoorsOpen")]
    SetDoorsOpen { doors: String },
}

impl OutboundMessage {
    pub fn event_type(&self) -> &'static str {
        match self {
            Self::SetPackage(_) => SET_PACKAGE,
            Self::SetBackground { .. } => SET_BACKGROUND,
            Self::SetWheelOrientation { .. } => SET_WHEEL_ORIENTATION,
            Self::SetDoorsOpen { .. } => SET_DOORS_OPEN,
        }
    }

    pub fn to_json(&self) -> Result<String, ProtocolError> {
        serde_json::to_string(self).map_err(|source| ProtocolError::Encode {
            event_type: self.event_type(),
            source,
        })
    }
}

/// Options that map onto a control message.
pub trait Encode {
    fn encode(&self) -> OutboundMessage;
}

pub fn encode_package(option: &PackageOption) -> OutboundMessage {
    OutboundMessage::SetPackage(PackagePayload {
        car_paint: option.car_paint.clone(),
        wheel_colors: option.wheel_colors.clone(),
        light_strip_color: option.light_strip_color.clone(),
        int_leather: option.int_leather.clone(),
        int_leather_dash: option.int_leather_dash.clone(),
        int_trim_color: option.int_trim_color.clone(),
        stitch_color: option.stitch_color.clone(),
        screen_color: option.screen_color.clone(),
    })
}

pub fn encode_background(option: &BackgroundOption) -> OutboundMessage {
    OutboundMessage::SetBackground {
        background: option.variant.clone(),
    }
}

pub fn encode_wheel_orientation(option: &WheelOption) -> OutboundMessage {
    OutboundMessage::SetWheelOrientation {
        wheel_turns: option.variant.clone(),
    }
}

pub fn encode_doors(option: &DoorOption) -> OutboundMessage {
    OutboundMessage::SetDoorsOpen {
        doors: option.variant.clone(),
    }
}

impl Encode for PackageOption {
    fn encode(&self) -> OutboundMessage {
        encode_package(self)
    }
}

impl Encode for BackgroundOption {
    fn encode(&self) -> OutboundMessage {
        encode_background(self)
    }
}

impl Encode for WheelOption {
    fn encode(&self) -> OutboundMessage {
        encode_wheel_orientation(self)
    }
}

impl Encode for DoorOption {
    fn encode(&self) -> OutboundMessage {
        encode_doors(self)
    }
}

/// Text conduit to the streamed session. Sending is fire-and-forget.
pub trait Channel {
    fn send_message(&self, text: &str);
}

impl<C: Channel + ?Sized> Channel for Rc<C> {
    fn send_message(&self, text: &str) {
        (**self).send_message(text);
    }
}

impl<C: Channel + ?Sized> Channel for &C {
    fn send_message(&self, text: &str) {
        (**self).send_message(text);
    }
}

/// Channel that holds texts until [`Outbox::flush`].
///
/// The inner channel may call straight back into whoever owns the panel, so
/// selection callbacks post here while the panel is borrowed and the owner
/// flushes once that borrow is released.
pub struct Outbox<C> {
    inner: C,
    queue: RefCell<VecDeque<String>>,
}

impl<C: Channel> Outbox<C> {
    pub fn new(inner: C) -> Self {
        Self {
            inner,
            queue: RefCell::new(VecDeque::new()),
        }
    }

    #[inline]
    pub fn pending(&self) -> usize {
        self.queue.borrow().len()
    }

    /// Send every queued text in order. Texts queued by the inner channel
    /// while flushing go out in the same pass.
    pub fn flush(&self) -> usize {
        let mut sent = 0;
        loop {
            // queue borrow ends before the inner send
            let next = self.queue.borrow_mut().pop_front();
            let Some(text) = next else {
                break;
            };
            self.inner.send_message(&text);
            sent += 1;
        }
        sent
    }
}

impl<C> Channel for Outbox<C> {
    fn send_message(&self, text: &str) {
        self.queue.borrow_mut().push_back(text.to_owned());
    }
}

/// Serialize `message` and hand it to `channel`. Nothing is sent when
/// serialization fails.
pub fn transmit<C: Channel + ?Sized>(
    channel: &C,
    message: &OutboundMessage,
) -> Result<(), ProtocolError> {
    let text = message.to_json()?;
    log::debug!("[protocol] -> {text}");
    channel.send_message(&text);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn doors_message_shape() {
        let msg = encode_doors(&DoorOption::new("Open", "All_Open"));
        let v: serde_json::Value = serde_json::from_str(&msg.to_json().unwrap()).unwrap();
        assert_eq!(
            v,
            json!({"event_type": "setDoorsOpen", "payload": {"doors": "All_Open"}})
        );
    }

    #[test]
    fn background_event_type_keeps_wire_casing() {
        let msg = encode_background(&BackgroundOption::new("Bay Bridge", "Bay_Bridge"));
        assert_eq!(msg.event_type(), "setBackGround");
        assert!(msg.to_json().unwrap().contains("\"setBackGround\""));
    }

    #[test]
    fn wheel_payload_uses_wheel_turns() {
        let msg = encode_wheel_orientation(&WheelOption::new("Left", "Left"));
        let v = serde_json::to_value(&msg).unwrap();
        assert_eq!(v["payload"], json!({"wheelTurns": "Left"}));
    }

    #[derive(Default)]
    struct Sink(RefCell<Vec<String>>);

    impl Channel for Sink {
        fn send_message(&self, text: &str) {
            self.0.borrow_mut().push(text.to_owned());
        }
    }

    #[test]
    fn outbox_holds_texts_until_flushed() {
        let sink = Rc::new(Sink::default());
        let outbox = Outbox::new(sink.clone());
        outbox.send_message("a");
        outbox.send_message("b");
        assert_eq!(outbox.pending(), 2);
        assert!(sink.0.borrow().is_empty());
        assert_eq!(outbox.flush(), 2);
        assert_eq!(*sink.0.borrow(), vec!["a".to_owned(), "b".to_owned()]);
        assert_eq!(outbox.pending(), 0);
        assert_eq!(outbox.flush(), 0);
    }

    #[test]
    fn decodes_what_it_encodes() {
        let text = r#"{"event_type":"setWheelOrientation","payload":{"wheelTurns":"Right"}}"#;
        let msg: OutboundMessage = serde_json::from_str(text).unwrap();
        assert_eq!(
            msg,
            OutboundMessage::SetWheelOrientation {
                wheel_turns: "Right".into()
            }
        );
    }
}
