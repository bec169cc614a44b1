//! The sidebar as a whole: four selectors wired to the channel, plus the
//! loading state driven by inbound events.

use crate::catalog::{
    BackgroundOption, Catalogs, DoorOption, Labeled, PackageOption, WheelOption,
    DEFAULT_BACKGROUND, DEFAULT_DOORS, DEFAULT_PACKAGE, DEFAULT_WHEELS,
};
use crate::config::StreamConfig;
use crate::dispatch::{DispatchOutcome, Dispatcher, InboundEvent};
use crate::error::SelectError;
use crate::loading::LoadingState;
use crate::protocol::{self, Channel, Encode};
use crate::selector::{Selector, SelectorEntry};
use std::rc::Rc;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Control {
    Background,
    Doors,
    Wheels,
    Package,
}

impl Control {
    /// Sidebar order, top to bottom.
    pub const ALL: [Control; 4] = [
        Control::Background,
        Control::Doors,
        Control::Wheels,
        Control::Package,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Control::Background => "background",
            Control::Doors => "doors",
            Control::Wheels => "wheels",
            Control::Package => "packages",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Control::Background => "Background",
            Control::Doors => "Doors",
            Control::Wheels => "Wheels",
            Control::Package => "Packages",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.key() == key)
    }
}

impl std::fmt::Display for Control {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// Selection callback that encodes the picked option and sends it.
fn forward<T: Encode + 'static>(channel: Rc<dyn Channel>) -> impl FnMut(&T) + 'static {
    move |option: &T| {
        if let Err(e) = protocol::transmit(&*channel, &option.encode()) {
            log::error!("[protocol] {e}");
        }
    }
}

fn wired<T: Labeled + Encode + 'static>(
    selector: Selector<T>,
    channel: &Rc<dyn Channel>,
) -> Selector<T> {
    selector.with_on_select(forward::<T>(channel.clone()))
}

pub struct ConfiguratorPanel {
    background: Selector<BackgroundOption>,
    doors: Selector<DoorOption>,
    wheels: Selector<WheelOption>,
    package: Selector<PackageOption>,
    dispatcher: Dispatcher,
}

// Runs `$body` with `$s` bound to the selector behind `$control`.
macro_rules! with_selector {
    (mut $panel:expr, $control:expr, |$s:ident| $body:expr) => {
        match $control {
            Control::Background => {
                let $s = &mut $panel.background;
                $body
            }
            Control::Doors => {
                let $s = &mut $panel.doors;
                $body
            }
            Control::Wheels => {
                let $s = &mut $panel.wheels;
                $body
            }
            Control::Package => {
                let $s = &mut $panel.package;
                $body
            }
        }
    };
    ($panel:expr, $control:expr, |$s:ident| $body:expr) => {
        match $control {
            Control::Background => {
                let $s = &$panel.background;
                $body
            }
            Control::Doors => {
                let $s = &$panel.doors;
                $body
            }
            Control::Wheels => {
                let $s = &$panel.wheels;
                $body
            }
            Control::Package => {
                let $s = &$panel.package;
                $body
            }
        }
    };
}

impl ConfiguratorPanel {
    pub fn new(config: &StreamConfig, catalogs: Catalogs, channel: Rc<dyn Channel>) -> Self {
        let Catalogs {
            backgrounds,
            doors,
            wheels,
            packages,
        } = catalogs;
        let initial = LoadingState::initial(config);
        log::info!(
            "[panel] source={:?} prewarmed={} initial={:?}",
            config.source,
            config.gfn.prewarmed,
            initial
        );
        Self {
            background: wired(Selector::new(backgrounds, DEFAULT_BACKGROUND), &channel),
            doors: wired(Selector::new(doors, DEFAULT_DOORS), &channel),
            wheels: wired(Selector::new(wheels, DEFAULT_WHEELS), &channel),
            package: wired(Selector::new(packages, DEFAULT_PACKAGE), &channel),
            dispatcher: Dispatcher::new(initial),
        }
    }

    pub fn background(&self) -> &Selector<BackgroundOption> {
        &self.background
    }

    pub fn doors(&self) -> &Selector<DoorOption> {
        &self.doors
    }

    pub fn wheels(&self) -> &Selector<WheelOption> {
        &self.wheels
    }

    pub fn package(&self) -> &Selector<PackageOption> {
        &self.package
    }

    pub fn option_count(&self, control: Control) -> usize {
        with_selector!(self, control, |s| s.options().len())
    }

    pub fn selected_index(&self, control: Control) -> Option<usize> {
        with_selector!(self, control, |s| s.selected_index())
    }

    pub fn selected_label(&self, control: Control) -> Option<&str> {
        with_selector!(self, control, |s| s.selected().map(Labeled::label))
    }

    pub fn entries(&self, control: Control) -> Vec<SelectorEntry<'_>> {
        with_selector!(self, control, |s| s.entries().collect())
    }

    /// Apply a user pick by index and transmit the matching message.
    pub fn select(&mut self, control: Control, index: usize) -> Result<(), SelectError> {
        let len = self.option_count(control);
        if index >= len {
            return Err(SelectError::OutOfRange {
                control: control.key(),
                index,
                len,
            });
        }
        let label = with_selector!(mut self, control, |s| s.user_select(index).label().to_owned());
        log::info!("[panel] {control} -> {label}");
        Ok(())
    }

    /// Apply a user pick by label.
    pub fn select_label(&mut self, control: Control, label: &str) -> Result<(), SelectError> {
        let index = with_selector!(self, control, |s| s.lookup(label)).ok_or_else(|| {
            SelectError::UnknownLabel {
                control: control.key(),
                label: label.to_owned(),
            }
        })?;
        self.select(control, index)
    }

    /// Reconcile a selector against the label the scene reports.
    pub fn set_external_label(&mut self, control: Control, label: Option<&str>) -> bool {
        with_selector!(mut self, control, |s| s.set_external_label(label))
    }

    pub fn handle_event(&mut self, event: Option<&InboundEvent>) -> DispatchOutcome {
        self.dispatcher.dispatch(event)
    }

    pub fn handle_event_json(&mut self, text: &str) -> DispatchOutcome {
        self.dispatcher.dispatch_json(text)
    }

    #[inline]
    pub fn loading_state(&self) -> LoadingState {
        self.dispatcher.state()
    }

    #[inline]
    pub fn is_loading_asset(&self) -> bool {
        self.dispatcher.is_loading_asset()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct Recorder(RefCell<Vec<String>>);

    impl Channel for Recorder {
        fn send_message(&self, text: &str) {
            self.0.borrow_mut().push(text.to_owned());
        }
    }

    fn panel() -> (ConfiguratorPanel, Rc<Recorder>) {
        let rec = Rc::new(Recorder::default());
        let p = ConfiguratorPanel::new(
            &StreamConfig::default(),
            Catalogs::builtin().unwrap(),
            rec.clone(),
        );
        (p, rec)
    }

    #[test]
    fn control_keys_round_trip() {
        for c in Control::ALL {
            assert_eq!(Control::from_key(c.key()), Some(c));
        }
        assert_eq!(Control::from_key("paint"), None);
    }

    #[test]
    fn starts_on_named_defaults() {
        let (p, rec) = panel();
        assert_eq!(p.selected_label(Control::Background), Some("Nvidia Green Studio"));
        assert_eq!(p.selected_label(Control::Doors), Some("Closed"));
        assert_eq!(p.selected_label(Control::Wheels), Some("Straight"));
        assert_eq!(p.selected_label(Control::Package), Some("Nvidia Green Black"));
        assert!(rec.0.borrow().is_empty());
    }

    #[test]
    fn select_sends_one_message() {
        let (mut p, rec) = panel();
        p.select(Control::Doors, 0).unwrap();
        assert_eq!(
            *rec.0.borrow(),
            vec![r#"{"event_type":"setDoorsOpen","payload":{"doors":"All_Open"}}"#.to_owned()]
        );
        assert_eq!(p.selected_index(Control::Doors), Some(0));
    }

    #[test]
    fn out_of_range_select_sends_nothing() {
        let (mut p, rec) = panel();
        let err = p.select(Control::Wheels, 3).unwrap_err();
        assert_eq!(
            err,
            SelectError::OutOfRange {
                control: "wheels",
                index: 3,
                len: 3
            }
        );
        assert!(rec.0.borrow().is_empty());
        assert_eq!(p.selected_index(Control::Wheels), Some(0));
    }

    #[test]
    fn select_label_misses_are_reported() {
        let (mut p, _) = panel();
        assert!(matches!(
            p.select_label(Control::Background, "Moon"),
            Err(SelectError::UnknownLabel { .. })
        ));
    }

    #[test]
    fn external_label_does_not_transmit() {
        let (mut p, rec) = panel();
        assert!(p.set_external_label(Control::Package, Some("Vino")));
        assert_eq!(p.selected_label(Control::Package), Some("Vino"));
        assert!(rec.0.borrow().is_empty());
    }
}
