use gloo_timers::callback::Timeout;
use uuid::Uuid;
use yew::prelude::*;

/// Delay before toggling the `show` class, so the slide transition runs
/// after the sheet is in the DOM.
const TRANSITION_DELAY_MS: u32 = 50;

/// Modal sheet that slides down from the top of the page.
///
/// Visibility follows the `open` prop: every render re-applies the `show`
/// class accordingly. The ✕ button and a click on the backdrop call
/// `on_close`; the parent decides whether to actually close.
pub struct YwMaterialTopSheet {
    pub id: String,
    node_ref: NodeRef,
}

#[derive(Properties, PartialEq)]
pub struct Props {
    #[prop_or_default]
    pub children: Html,
    pub open: bool,
    pub on_close: Callback<()>,
    #[prop_or_default]
    pub title: AttrValue,
}

impl Component for YwMaterialTopSheet {
    type Message = ();
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            id: format!("id-{}", Uuid::new_v4()),
            node_ref: NodeRef::default(),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let on_close = props.on_close.reform(|_: MouseEvent| ());
        let on_backdrop = props.on_close.reform(|_: MouseEvent| ());

        html! {
            <div class="top-sheet" id={self.id.clone()} ref={self.node_ref.clone()}>
                <div class="top-sheet-backdrop" onclick={on_backdrop} />
                <div class="top-sheet-panel">
                    <div class="top-sheet-header">
                        <span class="top-sheet-title">{ props.title.clone() }</span>
                        <button type="button" class="top-sheet-close" onclick={on_close}>
                            { "✕" }
                        </button>
                    </div>
                    { props.children.clone() }
                </div>
            </div>
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, _first_render: bool) {
        set_top_sheet_visible(self.node_ref.clone(), ctx.props().open);
    }
}

/// Adds or removes the `show` class of the sheet behind `top_sheet_ref`.
pub fn set_top_sheet_visible(top_sheet_ref: NodeRef, visible: bool) {
    if let Some(top_sheet) = top_sheet_ref.cast::<web_sys::HtmlElement>() {
        Timeout::new(TRANSITION_DELAY_MS, move || {
            let classes = top_sheet.class_list();
            let toggled = if visible {
                classes.add_1("show")
            } else {
                classes.remove_1("show")
            };
            if toggled.is_err() {
                log::warn!("could not toggle top sheet {}", top_sheet.id());
            }
        })
        .forget();
    }
}
