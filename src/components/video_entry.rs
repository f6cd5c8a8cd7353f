use yew::prelude::*;

pub const ENTRY_STYLE: &str =
    "display: flex; border-radius: 15px; border: 2px; border-color: black; border-style: solid";
pub const NAME_STYLE: &str = "color: black";

#[derive(Properties, PartialEq)]
pub struct VideoEntryProps {
    pub name: String,
}

/// A single row in the video list. The label is left empty for now.
#[function_component(VideoEntryRow)]
pub fn video_entry_row(props: &VideoEntryProps) -> Html {
    html! {
        <div style={ENTRY_STYLE}>
            <p style={NAME_STYLE}>{ &props.name }</p>
            <label></label>
        </div>
    }
}
