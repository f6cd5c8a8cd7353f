/// Element ids the widget binds to.
pub const DEFAULT_PICKER_ID: &str = "drop_file";
pub const DEFAULT_LIST_ID: &str = "list";

/// Ids used by the self-hosted panel, distinct from the page widget's.
pub const PANEL_PICKER_ID: &str = "video-panel-picker";
pub const PANEL_LIST_ID: &str = "video-panel-list";

/// Where the widget finds its anchors in the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetConfig {
    pub picker_id: String,
    pub list_id: String,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            picker_id: DEFAULT_PICKER_ID.to_string(),
            list_id: DEFAULT_LIST_ID.to_string(),
        }
    }
}

impl WidgetConfig {
    pub fn picker_id(mut self, id: impl Into<String>) -> Self {
        self.picker_id = id.into();
        self
    }

    pub fn list_id(mut self, id: impl Into<String>) -> Self {
        self.list_id = id.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_page_markup() {
        let config = WidgetConfig::default();
        assert_eq!(config.picker_id, "drop_file");
        assert_eq!(config.list_id, "list");
    }

    #[test]
    fn panel_ids_differ_from_page_ids() {
        assert_ne!(PANEL_PICKER_ID, DEFAULT_PICKER_ID);
        assert_ne!(PANEL_LIST_ID, DEFAULT_LIST_ID);
    }

    #[test]
    fn setters_override_ids() {
        let config = WidgetConfig::default().picker_id("upload").list_id("videos");
        assert_eq!(config.picker_id, "upload");
        assert_eq!(config.list_id, "videos");
    }
}
