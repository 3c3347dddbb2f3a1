//! View rendering for the segment builder modal.
//!
//! Layout, top to bottom: header with a back button, the segment name input,
//! one dropdown row per selected schema, the "add new" dropdown with its link,
//! and the save/cancel footer.
//!
//! Dropdowns are driven through `selected` on each `<option>` so they always
//! mirror the draft after a re-render.

use super::messages::Msg;
use super::state::SegmentBuilderComponent;
use super::styles::POPUP_CSS;
use crate::components::popup::popup_sheet::PopupSheet;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::html::Scope;
use yew::prelude::*;

pub fn view(component: &SegmentBuilderComponent, ctx: &Context<SegmentBuilderComponent>) -> Html {
    let link = ctx.link();

    html! {
        <PopupSheet>
            <style>{ POPUP_CSS }</style>
            { build_header(link) }
            <div class="popup-inner">
                { build_name_input(component, link) }
                <p>{"To save your segment, you need to add schemas to build the query."}</p>
                { build_legend() }
                <div class="dropdown-box">
                    { build_selected_rows(component, link) }
                </div>
                { build_add_row(component, link) }
            </div>
            { build_footer(link) }
        </PopupSheet>
    }
}

fn build_header(link: &Scope<SegmentBuilderComponent>) -> Html {
    html! {
        <div class="header">
            <button class="back-btn" title="Back" onclick={link.callback(|_| Msg::Cancel)}>
                <i class="material-icons">{"chevron_left"}</i>
            </button>
            <h3 class="title">{"Saving Segment"}</h3>
        </div>
    }
}

fn build_name_input(
    component: &SegmentBuilderComponent,
    link: &Scope<SegmentBuilderComponent>,
) -> Html {
    html! {
        <div class="input-box">
            <label>{"Enter the name of the segment"}</label>
            <input
                type="text"
                placeholder="Name of the segment"
                value={component.draft.name().to_string()}
                oninput={link.callback(|e: InputEvent| {
                    Msg::SetName(e.target_unchecked_into::<HtmlInputElement>().value())
                })}
            />
        </div>
    }
}

/// Static legend shown above the schema rows.
fn build_legend() -> Html {
    html! {
        <div class="tasks">
            <div class="user-task">
                <span class="dot green" />
                {"User Tasks"}
            </div>
            <div class="group-task">
                <span class="dot red" />
                {"Group Tasks"}
            </div>
        </div>
    }
}

/// One row per selected schema. Each dropdown offers the row's own option
/// plus whatever is still available; picking another entry swaps the row.
fn build_selected_rows(
    component: &SegmentBuilderComponent,
    link: &Scope<SegmentBuilderComponent>,
) -> Html {
    component
        .draft
        .selected()
        .iter()
        .enumerate()
        .map(|(index, current)| {
            let options = component
                .draft
                .row_choices(index)
                .into_iter()
                .map(|choice| {
                    html! {
                        <option
                            key={choice.value.clone()}
                            value={choice.value.clone()}
                            selected={choice.value == current.value}
                        >
                            { choice.label.clone() }
                        </option>
                    }
                })
                .collect::<Html>();

            html! {
                <div key={current.value.clone()} class="blue-box-wrapper">
                    <div class="blue-box-control-wrapper">
                        <select
                            class="selected-schema"
                            onchange={link.callback(move |e: Event| {
                                let value = e.target_unchecked_into::<HtmlSelectElement>().value();
                                Msg::ReplaceSelected(index, value)
                            })}
                        >
                            { options }
                        </select>
                    </div>
                    <div class="blue-box-action-wrapper">
                        <button
                            class="remove-btn"
                            title="Remove schema"
                            onclick={link.callback(move |_| Msg::RemoveSelected(index))}
                        >
                            <i class="material-icons">{"remove"}</i>
                        </button>
                    </div>
                </div>
            }
        })
        .collect::<Html>()
}

fn build_add_row(component: &SegmentBuilderComponent, link: &Scope<SegmentBuilderComponent>) -> Html {
    let pending = component.draft.pending();
    let options = component
        .draft
        .available()
        .iter()
        .map(|option| {
            html! {
                <option
                    key={option.value.clone()}
                    value={option.value.clone()}
                    selected={pending == Some(option.value.as_str())}
                >
                    { option.label.clone() }
                </option>
            }
        })
        .collect::<Html>();

    html! {
        <>
            <div class="blue-box-wrapper">
                <div class="blue-box-control-wrapper">
                    <select
                        class="selected-schema"
                        onchange={link.callback(|e: Event| {
                            Msg::ChoosePending(e.target_unchecked_into::<HtmlSelectElement>().value())
                        })}
                    >
                        <option value="" disabled=true selected={pending.is_none()}>
                            {"Add schema to segment"}
                        </option>
                        { options }
                    </select>
                </div>
            </div>
            <div>
                <button class="add-new" onclick={link.callback(|_| Msg::CommitPending)}>
                    {"+ Add new schema"}
                </button>
            </div>
        </>
    }
}

fn build_footer(link: &Scope<SegmentBuilderComponent>) -> Html {
    html! {
        <div class="btns-wrapper">
            <button class="save-btn" onclick={link.callback(|_| Msg::Save)}>
                {"Save the Segment"}
            </button>
            <button class="cancel-btn" onclick={link.callback(|_| Msg::Cancel)}>
                {"Cancel"}
            </button>
        </div>
    }
}
