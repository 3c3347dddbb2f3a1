//! Update function for the segment builder component.
//!
//! Elm-style: receives the component state, the `Context` and a `Msg`, applies
//! the matching draft operation and returns whether the view should re-render.
//! Draft operations already report whether they changed anything, so most arms
//! forward that flag directly.

use yew::prelude::*;

use super::helpers::{ConsoleSaver, ToastSink};
use super::messages::Msg;
use super::state::SegmentBuilderComponent;

pub fn update(
    component: &mut SegmentBuilderComponent,
    ctx: &Context<SegmentBuilderComponent>,
    msg: Msg,
) -> bool {
    let draft = &mut component.draft;
    match msg {
        Msg::SetName(name) => draft.set_name(name),
        Msg::ChoosePending(value) => draft.choose_pending(value),
        Msg::CommitPending => draft.commit_pending(),
        Msg::RemoveSelected(index) => draft.remove_selected(index),
        Msg::ReplaceSelected(index, value) => draft.replace_selected_at(index, &value),
        Msg::Save => {
            let on_close = ctx.props().on_close.clone();
            match draft.save(&ToastSink, &ConsoleSaver, move || on_close.emit(())) {
                Ok(payload) => {
                    log::debug!("segment '{}' handed off", payload.segment_name);
                }
                // Already shown as a toast; the draft stays as it was.
                Err(err) => {
                    log::debug!("save blocked: {}", err);
                }
            }
            false
        }
        Msg::Cancel => {
            let on_close = ctx.props().on_close.clone();
            std::mem::take(draft).cancel(move || on_close.emit(()));
            false
        }
    }
}
