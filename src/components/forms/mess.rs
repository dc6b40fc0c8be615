use yew::prelude::*;

use crate::components::forms::{input_value, number_value, select_value, textarea_value};
use crate::components::modal::ServiceModal;
use crate::models::{MessPayload, SubmitPayload};

#[derive(Properties, PartialEq)]
pub struct MessFormProps {
    pub submitting: bool,
    pub on_submit: Callback<SubmitPayload>,
    pub on_close: Callback<()>,
}

#[function_component(MessForm)]
pub fn mess_form(props: &MessFormProps) -> Html {
    let meal_type_ref = use_node_ref();
    let meal_date_ref = use_node_ref();
    let quantity_ref = use_node_ref();
    let requests_ref = use_node_ref();

    let on_submit = {
        let meal_type_ref = meal_type_ref.clone();
        let meal_date_ref = meal_date_ref.clone();
        let quantity_ref = quantity_ref.clone();
        let requests_ref = requests_ref.clone();
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit(SubmitPayload::Mess(MessPayload {
                meal_type: select_value(&meal_type_ref),
                meal_date: input_value(&meal_date_ref),
                quantity: number_value(&quantity_ref),
                special_requests: textarea_value(&requests_ref),
            }));
        })
    };

    html! {
        <ServiceModal title="Mess Order" icon="🍽️" on_close={props.on_close.clone()}>
            <form onsubmit={on_submit}>
                <div class="form-group">
                    <label for="messMealType">{"Meal Type"}</label>
                    <select id="messMealType" ref={meal_type_ref.clone()} required=true>
                        <option value="">{"Select meal"}</option>
                        <option value="Breakfast">{"Breakfast"}</option>
                        <option value="Lunch">{"Lunch"}</option>
                        <option value="Dinner">{"Dinner"}</option>
                    </select>
                </div>
                <div class="form-row">
                    <div class="form-group">
                        <label for="messDate">{"Date"}</label>
                        <input type="date" id="messDate" ref={meal_date_ref.clone()} required=true />
                    </div>
                    <div class="form-group">
                        <label for="messQuantity">{"Quantity"}</label>
                        <input type="number" id="messQuantity" min="1" value="1" ref={quantity_ref.clone()} required=true />
                    </div>
                </div>
                <div class="form-group">
                    <label for="messRequests">{"Special Requests (optional)"}</label>
                    <textarea id="messRequests" rows="3" ref={requests_ref.clone()} />
                </div>
                <button type="submit" class="btn-primary" disabled={props.submitting}>
                    { if props.submitting { "Ordering..." } else { "Place Order" } }
                </button>
            </form>
        </ServiceModal>
    }
}
