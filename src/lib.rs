use wasm_bindgen::prelude::*;

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod model;
pub mod selection;
pub mod widget;

pub use config::WidgetConfig;
pub use error::WidgetError;
pub use widget::{initialize, initialize_with, VideoAddWidget};

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
}

/// Bind the widget to `#drop_file` and `#list`. Throws if either is missing.
#[wasm_bindgen]
pub fn run_app() -> Result<(), JsValue> {
    let config = WidgetConfig::default();
    init_video_widget(&config.picker_id, &config.list_id)
}

/// Same as [`run_app`] with custom ids. Calling it again with the ids of the
/// live widget is a no-op; a list already bound to another picker throws.
#[wasm_bindgen(js_name = initVideoWidget)]
pub fn init_video_widget(picker_id: &str, list_id: &str) -> Result<(), JsValue> {
    let config = WidgetConfig::default().picker_id(picker_id).list_id(list_id);
    if widget::with_active(|active| *active.config() == config).unwrap_or(false) {
        return Ok(());
    }
    widget::initialize_with(&config)?.keep_alive();
    Ok(())
}

#[wasm_bindgen(js_name = addVideoToList)]
pub fn add_video_to_list(video_name: &str) -> Result<(), JsValue> {
    widget::with_active(|widget| widget.add_entry(video_name))?;
    Ok(())
}

/// Render picker and list together inside `#root_id`.
#[wasm_bindgen(js_name = mountVideoPanel)]
pub fn mount_video_panel(root_id: &str) -> Result<(), JsValue> {
    let root = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(root_id))
        .ok_or_else(|| WidgetError::MissingElement {
            id: root_id.to_string(),
        })?;

    yew::Renderer::<components::panel::VideoAddPanel>::with_root(root).render();
    Ok(())
}
