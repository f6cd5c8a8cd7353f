use crate::config::DEFAULT_PICKER_ID;
use crate::widget::on_file_change;
use gloo::console::error;
use web_sys::{Event, HtmlInputElement};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct FileInputProps {
    pub on_file_selected: Callback<String>,
    #[prop_or_else(default_picker_id)]
    pub id: String,
    #[prop_or(false)]
    pub disabled: bool,
}

fn default_picker_id() -> String {
    DEFAULT_PICKER_ID.to_string()
}

#[function_component(FileInput)]
pub fn file_input(props: &FileInputProps) -> Html {
    let on_change = {
        let on_file_selected = props.on_file_selected.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            match on_file_change(&input) {
                Ok(name) => on_file_selected.emit(name),
                Err(err) => error!(format!("video picker: {}", err)),
            }
        })
    };

    html! {
        <input
            id={props.id.clone()}
            type="file"
            accept="video/*"
            onchange={on_change}
            disabled={props.disabled}
        />
    }
}
