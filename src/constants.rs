// Layout and DOM contract shared with index.html

// Sidebar and header sizing (CSS pixels)
pub const SIDEBAR_WIDTH_PX: u32 = 300;
pub const HEADER_HEIGHT_PX: u32 = 60;

// Element ids the host page provides
pub const SIDEBAR_ID: &str = "sidebar";
pub const SPLASH_ID: &str = "splash-screen";
pub const STREAM_ID: &str = "app-stream";

// Suffixes appended to a control key ("doors" -> "doorsContainer")
pub const CONTAINER_CLASS_SUFFIX: &str = "Container";
pub const HEADER_CLASS_SUFFIX: &str = "Header";
pub const SELECTOR_CONTAINER_CLASS_SUFFIX: &str = "SelectorContainer";
pub const SELECTOR_CLASS_SUFFIX: &str = "Selector";
pub const OPTION_CLASS_SUFFIX: &str = "Option";

#[inline]
pub fn class_for(control_key: &str, suffix: &str) -> String {
    format!("{control_key}{suffix}")
}

#[inline]
pub fn selector_id(control_key: &str) -> String {
    format!("{control_key}-selector")
}

/// Inline style for the stream element, leaving room for header and sidebar.
pub fn stream_style(visible: bool) -> String {
    format!(
        "position:absolute;left:0;top:{HEADER_HEIGHT_PX}px;height:calc(100% - {HEADER_HEIGHT_PX}px);width:calc(100% - {SIDEBAR_WIDTH_PX}px);visibility:{}",
        if visible { "visible" } else { "hidden" }
    )
}
