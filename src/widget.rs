use crate::app::{Msg, VideoList, VideoListProps};
use crate::config::WidgetConfig;
use crate::error::WidgetError;
use crate::selection::{first_file_name, Selection};
use gloo::console::{error, log};
use gloo::events::EventListener;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlInputElement};
use yew::html::Scope;

/// A file picker bound to a list container.
///
/// Each `change` on the picker appends one row with the first picked
/// file's name after whatever the container already holds. Dropping the
/// widget removes the `change` subscription; rows already rendered stay in
/// the page and the container stays bound.
pub struct VideoAddWidget {
    config: WidgetConfig,
    list: Element,
    scope: Scope<VideoList>,
    rendered: Rc<Cell<usize>>,
    _listener: EventListener,
}

/// Set on a list container once a widget renders into it.
const BOUND_ATTR: &str = "data-video-widget";

thread_local! {
    static ACTIVE_WIDGET: RefCell<Option<VideoAddWidget>> = RefCell::new(None);
}

/// Bind to the default `#drop_file` picker and `#list` container.
pub fn initialize() -> Result<VideoAddWidget, WidgetError> {
    initialize_with(&WidgetConfig::default())
}

pub fn initialize_with(config: &WidgetConfig) -> Result<VideoAddWidget, WidgetError> {
    let document = document()?;
    let picker = find_file_input(&document, &config.picker_id)?;
    let list = find_element(&document, &config.list_id)?;
    if list.has_attribute(BOUND_ATTR) {
        return Err(WidgetError::AlreadyBound {
            id: config.list_id.clone(),
        });
    }
    list.set_attribute(BOUND_ATTR, "")?;

    // yew clears its root on mount, so the app lives on a detached element
    // and portals its rows into the list.
    let root = document.create_element("div")?;
    let rendered = Rc::new(Cell::new(0));
    let props = VideoListProps {
        host: list.clone(),
        rendered: rendered.clone(),
    };
    let app = yew::Renderer::<VideoList>::with_root_and_props(root, props).render();
    let scope = (*app).clone();

    let listener = {
        let target = picker.clone();
        let scope = scope.clone();
        EventListener::new(&target, "change", move |_event| match on_file_change(&picker) {
            Ok(name) => scope.send_message(Msg::AddEntry(name)),
            Err(err) => error!(format!("video picker #{}: {}", picker.id(), err)),
        })
    };

    log!(format!(
        "Video widget bound to #{} and #{}",
        config.picker_id, config.list_id
    ));

    Ok(VideoAddWidget {
        config: config.clone(),
        list,
        scope,
        rendered,
        _listener: listener,
    })
}

/// Name of the first file currently picked in `input`.
pub fn on_file_change(input: &HtmlInputElement) -> Result<String, WidgetError> {
    match input.files() {
        Some(files) => first_file_name(&files),
        None => Err(WidgetError::EmptySelection),
    }
}

impl VideoAddWidget {
    pub fn add_entry(&self, name: impl Into<String>) {
        self.scope.send_message(Msg::AddEntry(name.into()));
    }

    /// Append the first name of `selection`; an empty selection adds nothing.
    pub fn handle_selection<S: Selection + ?Sized>(
        &self,
        selection: &S,
    ) -> Result<String, WidgetError> {
        let name = first_file_name(selection)?;
        self.add_entry(name.clone());
        Ok(name)
    }

    /// Rows this widget has rendered into the list container.
    ///
    /// Rendering is scheduled by yew, so an entry added in the same tick
    /// may not be counted yet.
    pub fn entry_count(&self) -> usize {
        self.rendered.get()
    }

    pub fn config(&self) -> &WidgetConfig {
        &self.config
    }

    pub fn list(&self) -> &Element {
        &self.list
    }

    /// Keep the subscription alive for the rest of the page's life.
    /// Replaces any widget kept earlier.
    pub fn keep_alive(self) {
        ACTIVE_WIDGET.with(|cell| *cell.borrow_mut() = Some(self));
    }
}

/// Run `f` against the widget stored by [`VideoAddWidget::keep_alive`].
pub fn with_active<R>(f: impl FnOnce(&VideoAddWidget) -> R) -> Result<R, WidgetError> {
    ACTIVE_WIDGET.with(|cell| {
        cell.borrow()
            .as_ref()
            .map(f)
            .ok_or(WidgetError::NotInitialized)
    })
}

fn document() -> Result<Document, WidgetError> {
    web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| WidgetError::Js("no document available".to_string()))
}

fn find_element(document: &Document, id: &str) -> Result<Element, WidgetError> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| WidgetError::MissingElement { id: id.to_string() })
}

fn find_file_input(document: &Document, id: &str) -> Result<HtmlInputElement, WidgetError> {
    let wrong_type = || WidgetError::WrongElementType {
        id: id.to_string(),
        expected: "file input",
    };

    let input = find_element(document, id)?
        .dyn_into::<HtmlInputElement>()
        .map_err(|_| wrong_type())?;
    if input.type_() != "file" {
        return Err(wrong_type());
    }
    Ok(input)
}
