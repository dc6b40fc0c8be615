use yew::prelude::*;

use crate::components::forms::{input_value, number_value, select_value, textarea_value};
use crate::components::modal::ServiceModal;
use crate::models::{StationaryPayload, SubmitPayload};

#[derive(Properties, PartialEq)]
pub struct StationaryFormProps {
    pub submitting: bool,
    pub on_submit: Callback<SubmitPayload>,
    pub on_close: Callback<()>,
}

#[function_component(StationaryForm)]
pub fn stationary_form(props: &StationaryFormProps) -> Html {
    let category_ref = use_node_ref();
    let item_ref = use_node_ref();
    let quantity_ref = use_node_ref();
    let delivery_ref = use_node_ref();
    let instructions_ref = use_node_ref();
    let contact_ref = use_node_ref();

    let on_submit = {
        let category_ref = category_ref.clone();
        let item_ref = item_ref.clone();
        let quantity_ref = quantity_ref.clone();
        let delivery_ref = delivery_ref.clone();
        let instructions_ref = instructions_ref.clone();
        let contact_ref = contact_ref.clone();
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit(SubmitPayload::Stationary(StationaryPayload {
                category: select_value(&category_ref),
                item: input_value(&item_ref),
                quantity: number_value(&quantity_ref),
                delivery_option: select_value(&delivery_ref),
                instructions: textarea_value(&instructions_ref),
                contact_number: input_value(&contact_ref),
            }));
        })
    };

    html! {
        <ServiceModal title="Stationary Order" icon="📝" on_close={props.on_close.clone()}>
            <form onsubmit={on_submit}>
                <div class="form-group">
                    <label for="stationaryCategory">{"Category"}</label>
                    <select id="stationaryCategory" ref={category_ref.clone()} required=true>
                        <option value="">{"Select category"}</option>
                        <option value="Notebooks">{"Notebooks"}</option>
                        <option value="Pens & Pencils">{"Pens & Pencils"}</option>
                        <option value="Drawing Supplies">{"Drawing Supplies"}</option>
                        <option value="Files & Folders">{"Files & Folders"}</option>
                    </select>
                </div>
                <div class="form-row">
                    <div class="form-group">
                        <label for="stationaryItem">{"Item"}</label>
                        <input type="text" id="stationaryItem" placeholder="e.g. A4 notebook" ref={item_ref.clone()} required=true />
                    </div>
                    <div class="form-group">
                        <label for="stationaryQuantity">{"Quantity"}</label>
                        <input type="number" id="stationaryQuantity" min="1" value="1" ref={quantity_ref.clone()} required=true />
                    </div>
                </div>
                <div class="form-group">
                    <label for="stationaryDelivery">{"Delivery Option"}</label>
                    <select id="stationaryDelivery" ref={delivery_ref.clone()} required=true>
                        <option value="">{"Select option"}</option>
                        <option value="Room Delivery">{"Room Delivery"}</option>
                        <option value="Pickup">{"Pickup"}</option>
                    </select>
                </div>
                <div class="form-group">
                    <label for="stationaryInstructions">{"Instructions (optional)"}</label>
                    <textarea id="stationaryInstructions" rows="3" ref={instructions_ref.clone()} />
                </div>
                <div class="form-group">
                    <label for="stationaryContact">{"Contact Number"}</label>
                    <input type="tel" id="stationaryContact" ref={contact_ref.clone()} required=true />
                </div>
                <button type="submit" class="btn-primary" disabled={props.submitting}>
                    { if props.submitting { "Ordering..." } else { "Place Order" } }
                </button>
            </form>
        </ServiceModal>
    }
}
