use yew::prelude::*;

use crate::components::forms::{input_value, number_value, select_value, textarea_value};
use crate::components::modal::ServiceModal;
use crate::models::{SubmitPayload, XeroxPayload};

#[derive(Properties, PartialEq)]
pub struct XeroxFormProps {
    pub submitting: bool,
    pub on_submit: Callback<SubmitPayload>,
    pub on_close: Callback<()>,
}

#[function_component(XeroxForm)]
pub fn xerox_form(props: &XeroxFormProps) -> Html {
    let service_ref = use_node_ref();
    let pages_ref = use_node_ref();
    let delivery_ref = use_node_ref();
    let instructions_ref = use_node_ref();
    let contact_ref = use_node_ref();

    let on_submit = {
        let service_ref = service_ref.clone();
        let pages_ref = pages_ref.clone();
        let delivery_ref = delivery_ref.clone();
        let instructions_ref = instructions_ref.clone();
        let contact_ref = contact_ref.clone();
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit(SubmitPayload::Xerox(XeroxPayload {
                service_type: select_value(&service_ref),
                pages: number_value(&pages_ref),
                delivery_location: select_value(&delivery_ref),
                instructions: textarea_value(&instructions_ref),
                contact_number: input_value(&contact_ref),
            }));
        })
    };

    html! {
        <ServiceModal title="Xerox Order" icon="🖨️" on_close={props.on_close.clone()}>
            <form onsubmit={on_submit}>
                <div class="form-group">
                    <label for="xeroxService">{"Service Type"}</label>
                    <select id="xeroxService" ref={service_ref.clone()} required=true>
                        <option value="">{"Select service"}</option>
                        <option value="Print">{"Print"}</option>
                        <option value="Photocopy">{"Photocopy"}</option>
                        <option value="Scan">{"Scan"}</option>
                        <option value="Binding">{"Binding"}</option>
                    </select>
                </div>
                <div class="form-group">
                    <label for="xeroxPages">{"Pages"}</label>
                    <input type="number" id="xeroxPages" min="1" value="1" ref={pages_ref.clone()} required=true />
                </div>
                <div class="form-group">
                    <label for="xeroxDelivery">{"Delivery Location"}</label>
                    <select id="xeroxDelivery" ref={delivery_ref.clone()} required=true>
                        <option value="">{"Select location"}</option>
                        <option value="Hostel A">{"Hostel A"}</option>
                        <option value="Hostel B">{"Hostel B"}</option>
                        <option value="Library">{"Library"}</option>
                        <option value="Pickup at shop">{"Pickup at shop"}</option>
                    </select>
                </div>
                <div class="form-group">
                    <label for="xeroxInstructions">{"Instructions (optional)"}</label>
                    <textarea id="xeroxInstructions" rows="3" ref={instructions_ref.clone()} />
                </div>
                <div class="form-group">
                    <label for="xeroxContact">{"Contact Number"}</label>
                    <input type="tel" id="xeroxContact" ref={contact_ref.clone()} required=true />
                </div>
                <button type="submit" class="btn-primary" disabled={props.submitting}>
                    { if props.submitting { "Ordering..." } else { "Place Order" } }
                </button>
            </form>
        </ServiceModal>
    }
}
