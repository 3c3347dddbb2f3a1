use uuid::Uuid;
use yew::{html, Component, Context, Html, Properties};

/// Side panel rendered over a dimmed overlay.
///
/// The sheet is shown for as long as it is mounted; the parent controls
/// visibility by mounting and unmounting it.
pub struct PopupSheet {
    pub id: String,
}

#[derive(Properties, PartialEq)]
pub struct Props {
    #[prop_or_default]
    pub children: Html,
}

impl Component for PopupSheet {
    type Message = ();
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            id: format!("id-{}", Uuid::new_v4()),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <>
                <div class="popup-overlay"></div>
                <div class="popup" id={self.id.clone()}>
                    { ctx.props().children.clone() }
                </div>
            </>
        }
    }
}
