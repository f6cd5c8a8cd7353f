use crate::components::video_entry::VideoEntryRow;
use crate::model::Entries;
use gloo::console::log;
use std::cell::Cell;
use std::rc::Rc;
use web_sys::Element;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct VideoListProps {
    /// Container the rows are appended to. Existing children are left alone.
    pub host: Element,
    /// Number of rows this list has rendered so far.
    #[prop_or_default]
    pub rendered: Rc<Cell<usize>>,
}

/// Owns the rows rendered inside the list container.
pub struct VideoList {
    entries: Entries,
}

pub enum Msg {
    AddEntry(String),
}

impl Component for VideoList {
    type Message = Msg;
    type Properties = VideoListProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            entries: Entries::default(),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::AddEntry(name) => {
                log!(format!("Video added: {}", name));
                self.entries.push(name);
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let rows = html! {
            <>
                {
                    for self.entries.iter().map(|entry| {
                        html! { <VideoEntryRow name={entry.name.clone()} /> }
                    })
                }
            </>
        };
        create_portal(rows, ctx.props().host.clone())
    }

    fn rendered(&mut self, ctx: &Context<Self>, _first_render: bool) {
        ctx.props().rendered.set(self.entries.len());
    }
}
