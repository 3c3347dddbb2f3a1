use crate::components::segment_builder::SegmentBuilderComponent;
use yew::{html, Component, Context, Html};

pub enum Msg {
    OpenBuilder,
    CloseBuilder,
}

/// Page shell: owns whether the segment builder is mounted.
pub struct App {
    is_open: bool,
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self { is_open: false }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        let next = matches!(msg, Msg::OpenBuilder);
        if self.is_open == next {
            return false;
        }
        self.is_open = next;
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        html! {
            <div class="app">
                <div class="header" style="display:flex;align-items:center;gap:8px;padding:16px;background:#39aebc;color:#fff;">
                    <i class="material-icons">{"chevron_left"}</i>
                    <h3 style="margin:0;">{"View Audience"}</h3>
                </div>
                <button
                    class="save-segment"
                    style="margin:32px;padding:10px 16px;border:1px solid #39aebc;background:#fff;color:#39aebc;border-radius:4px;cursor:pointer;"
                    onclick={link.callback(|_| Msg::OpenBuilder)}
                >
                    {"Save segment"}
                </button>
                {
                    if self.is_open {
                        html! {
                            <SegmentBuilderComponent on_close={link.callback(|_| Msg::CloseBuilder)} />
                        }
                    } else {
                        html! {}
                    }
                }
            </div>
        }
    }
}
