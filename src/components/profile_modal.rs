use yew::prelude::*;

use crate::components::modal::ServiceModal;
use crate::models::Student;

#[derive(Properties, PartialEq)]
pub struct ProfileModalProps {
    pub student: Student,
    pub on_close: Callback<()>,
}

#[function_component(ProfileModal)]
pub fn profile_modal(props: &ProfileModalProps) -> Html {
    let student = &props.student;
    let emergency = student
        .emergency_contact
        .clone()
        .unwrap_or_else(|| "Not provided".to_string());

    let row = |label: &str, value: String| {
        html! {
            <div class="profile-row">
                <span class="profile-label">{label}</span>
                <span class="profile-value">{value}</span>
            </div>
        }
    };

    html! {
        <ServiceModal title="My Profile" icon="👤" on_close={props.on_close.clone()}>
            <div class="profile-details">
                { row("Name", student.name.clone()) }
                { row("Student ID", student.student_id.clone()) }
                { row("Email", student.email.clone()) }
                { row("Phone", student.phone.clone()) }
                { row("Hostel Room", student.hostel_room.clone()) }
                { row("Blood Group", student.blood_group.clone()) }
                { row("Emergency Contact", emergency) }
            </div>
        </ServiceModal>
    }
}
