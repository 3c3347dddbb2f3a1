//! Segment builder modal: root module wiring the Yew `Component` implementation
//! with submodules for state, update logic, view rendering, and helpers.
//!
//! Responsibilities
//! - Re-export selected types (`Msg`, `SegmentBuilderProps`, `SegmentBuilderComponent`).
//! - Provide the `Component` implementation that delegates to `update::update` and `view::view`.
//!
//! The selection rules themselves live in `common::builder::SegmentDraft`;
//! this module only translates DOM events into draft operations.

use yew::prelude::*;

mod helpers;
mod messages;
mod props;
mod state;
mod styles;
mod update;
mod view;

pub use messages::Msg;
pub use props::SegmentBuilderProps;
pub use state::SegmentBuilderComponent;

impl Component for SegmentBuilderComponent {
    type Message = Msg;
    type Properties = SegmentBuilderProps;

    fn create(_ctx: &Context<Self>) -> Self {
        SegmentBuilderComponent::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
