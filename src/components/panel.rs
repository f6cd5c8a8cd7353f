use crate::components::{file_input::FileInput, video_entry::VideoEntryRow};
use crate::config::{PANEL_LIST_ID, PANEL_PICKER_ID};
use crate::model::Entries;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct VideoAddPanelProps {
    #[prop_or_else(default_picker_id)]
    pub picker_id: String,
    #[prop_or_else(default_list_id)]
    pub list_id: String,
}

impl Default for VideoAddPanelProps {
    fn default() -> Self {
        Self {
            picker_id: default_picker_id(),
            list_id: default_list_id(),
        }
    }
}

fn default_picker_id() -> String {
    PANEL_PICKER_ID.to_string()
}

fn default_list_id() -> String {
    PANEL_LIST_ID.to_string()
}

/// Picker and list rendered together, for pages that don't ship the markup.
#[function_component(VideoAddPanel)]
pub fn video_add_panel(props: &VideoAddPanelProps) -> Html {
    let entries = use_reducer(Entries::default);

    let on_file_selected = {
        let entries = entries.clone();
        Callback::from(move |name: String| entries.dispatch(name))
    };

    html! {
        <div class="video-add">
            <FileInput id={props.picker_id.clone()} on_file_selected={on_file_selected} />
            <div id={props.list_id.clone()}>
                {
                    for entries.iter().map(|entry| {
                        html! { <VideoEntryRow name={entry.name.clone()} /> }
                    })
                }
            </div>
        </div>
    }
}
