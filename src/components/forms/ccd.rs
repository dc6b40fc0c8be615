use yew::prelude::*;

use crate::components::forms::{input_value, number_value, select_value, textarea_value};
use crate::components::modal::ServiceModal;
use crate::models::{CcdPayload, SubmitPayload};

#[derive(Properties, PartialEq)]
pub struct CcdFormProps {
    pub submitting: bool,
    pub on_submit: Callback<SubmitPayload>,
    pub on_close: Callback<()>,
}

#[function_component(CcdForm)]
pub fn ccd_form(props: &CcdFormProps) -> Html {
    let category_ref = use_node_ref();
    let item_ref = use_node_ref();
    let quantity_ref = use_node_ref();
    let size_ref = use_node_ref();
    let instructions_ref = use_node_ref();
    let contact_ref = use_node_ref();

    let on_submit = {
        let category_ref = category_ref.clone();
        let item_ref = item_ref.clone();
        let quantity_ref = quantity_ref.clone();
        let size_ref = size_ref.clone();
        let instructions_ref = instructions_ref.clone();
        let contact_ref = contact_ref.clone();
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit(SubmitPayload::Ccd(CcdPayload {
                category: select_value(&category_ref),
                item: input_value(&item_ref),
                quantity: number_value(&quantity_ref),
                size: select_value(&size_ref),
                instructions: textarea_value(&instructions_ref),
                contact_number: input_value(&contact_ref),
            }));
        })
    };

    html! {
        <ServiceModal title="CCD Order" icon="☕" on_close={props.on_close.clone()}>
            <form onsubmit={on_submit}>
                <div class="form-group">
                    <label for="ccdCategory">{"Category"}</label>
                    <select id="ccdCategory" ref={category_ref.clone()} required=true>
                        <option value="">{"Select category"}</option>
                        <option value="Coffee">{"Coffee"}</option>
                        <option value="Tea">{"Tea"}</option>
                        <option value="Shakes">{"Shakes"}</option>
                        <option value="Snacks">{"Snacks"}</option>
                    </select>
                </div>
                <div class="form-row">
                    <div class="form-group">
                        <label for="ccdItem">{"Item"}</label>
                        <input type="text" id="ccdItem" placeholder="e.g. Cappuccino" ref={item_ref.clone()} required=true />
                    </div>
                    <div class="form-group">
                        <label for="ccdQuantity">{"Quantity"}</label>
                        <input type="number" id="ccdQuantity" min="1" value="1" ref={quantity_ref.clone()} required=true />
                    </div>
                </div>
                <div class="form-group">
                    <label for="ccdSize">{"Size"}</label>
                    <select id="ccdSize" ref={size_ref.clone()} required=true>
                        <option value="">{"Select size"}</option>
                        <option value="Small">{"Small"}</option>
                        <option value="Medium">{"Medium"}</option>
                        <option value="Large">{"Large"}</option>
                    </select>
                </div>
                <div class="form-group">
                    <label for="ccdInstructions">{"Instructions (optional)"}</label>
                    <textarea id="ccdInstructions" rows="3" ref={instructions_ref.clone()} />
                </div>
                <div class="form-group">
                    <label for="ccdContact">{"Contact Number"}</label>
                    <input type="tel" id="ccdContact" ref={contact_ref.clone()} required=true />
                </div>
                <button type="submit" class="btn-primary" disabled={props.submitting}>
                    { if props.submitting { "Ordering..." } else { "Place Order" } }
                </button>
            </form>
        </ServiceModal>
    }
}
