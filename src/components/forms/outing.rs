use yew::prelude::*;

use crate::components::forms::{input_value, select_value, textarea_value};
use crate::components::modal::ServiceModal;
use crate::models::{OutingPayload, SubmitPayload};

#[derive(Properties, PartialEq)]
pub struct OutingFormProps {
    pub submitting: bool,
    pub on_submit: Callback<SubmitPayload>,
    pub on_close: Callback<()>,
}

#[function_component(OutingForm)]
pub fn outing_form(props: &OutingFormProps) -> Html {
    let outing_date_ref = use_node_ref();
    let return_date_ref = use_node_ref();
    let reason_ref = use_node_ref();
    let details_ref = use_node_ref();
    let emergency_ref = use_node_ref();

    let on_submit = {
        let outing_date_ref = outing_date_ref.clone();
        let return_date_ref = return_date_ref.clone();
        let reason_ref = reason_ref.clone();
        let details_ref = details_ref.clone();
        let emergency_ref = emergency_ref.clone();
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit(SubmitPayload::Outing(OutingPayload {
                outing_date: input_value(&outing_date_ref),
                return_date: input_value(&return_date_ref),
                reason: select_value(&reason_ref),
                details: textarea_value(&details_ref),
                emergency_contact: input_value(&emergency_ref),
            }));
        })
    };

    html! {
        <ServiceModal title="Outing Request" icon="🚶" on_close={props.on_close.clone()}>
            <form onsubmit={on_submit}>
                <div class="form-row">
                    <div class="form-group">
                        <label for="outingDate">{"Outing Date"}</label>
                        <input type="date" id="outingDate" ref={outing_date_ref.clone()} required=true />
                    </div>
                    <div class="form-group">
                        <label for="returnDate">{"Return Date"}</label>
                        <input type="date" id="returnDate" ref={return_date_ref.clone()} required=true />
                    </div>
                </div>
                <div class="form-group">
                    <label for="outingReason">{"Reason"}</label>
                    <select id="outingReason" ref={reason_ref.clone()} required=true>
                        <option value="">{"Select reason"}</option>
                        <option value="Home Visit">{"Home Visit"}</option>
                        <option value="Medical">{"Medical"}</option>
                        <option value="Shopping">{"Shopping"}</option>
                        <option value="Academic">{"Academic"}</option>
                        <option value="Other">{"Other"}</option>
                    </select>
                </div>
                <div class="form-group">
                    <label for="outingDetails">{"Details (optional)"}</label>
                    <textarea id="outingDetails" rows="3" ref={details_ref.clone()} />
                </div>
                <div class="form-group">
                    <label for="outingEmergency">{"Emergency Contact"}</label>
                    <input type="tel" id="outingEmergency" ref={emergency_ref.clone()} required=true />
                </div>
                <button type="submit" class="btn-primary" disabled={props.submitting}>
                    { if props.submitting { "Submitting..." } else { "Submit Request" } }
                </button>
            </form>
        </ServiceModal>
    }
}
