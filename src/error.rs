use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WidgetError {
    #[error("element #{id} not found in document")]
    MissingElement { id: String },

    #[error("element #{id} is not a {expected}")]
    WrongElementType { id: String, expected: &'static str },

    #[error("element #{id} already hosts a video list")]
    AlreadyBound { id: String },

    #[error("file selection is empty")]
    EmptySelection,

    #[error("video widget has not been initialized")]
    NotInitialized,

    #[error("DOM error: {0}")]
    Js(String),
}

// Convert JsValue to WidgetError
impl From<JsValue> for WidgetError {
    fn from(value: JsValue) -> Self {
        let message = if let Some(msg) = value.as_string() {
            msg
        } else if let Some(msg) = js_sys::Error::from(value).message().as_string() {
            msg
        } else {
            "Unknown error".to_string()
        };

        WidgetError::Js(message)
    }
}

impl From<WidgetError> for JsValue {
    fn from(err: WidgetError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_element_names_the_id() {
        let err = WidgetError::MissingElement { id: "drop_file".to_string() };
        assert_eq!(err.to_string(), "element #drop_file not found in document");
    }

    #[test]
    fn wrong_element_type_names_expected_kind() {
        let err = WidgetError::WrongElementType {
            id: "list".to_string(),
            expected: "file input",
        };
        assert_eq!(err.to_string(), "element #list is not a file input");
    }

    #[test]
    fn already_bound_names_the_list() {
        let err = WidgetError::AlreadyBound { id: "list".to_string() };
        assert_eq!(err.to_string(), "element #list already hosts a video list");
    }

    #[test]
    fn empty_selection_message() {
        assert_eq!(WidgetError::EmptySelection.to_string(), "file selection is empty");
    }
}
