use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::models::SignupForm;

#[derive(Clone, Copy, PartialEq)]
enum AuthTab {
    Login,
    Signup,
}

#[derive(Properties, PartialEq)]
pub struct AuthScreenProps {
    pub auth_error: Option<String>,
    pub busy: bool,
    pub on_login: Callback<(String, String)>,
    pub on_signup: Callback<SignupForm>,
    pub on_demo: Callback<()>,
    pub on_clear_error: Callback<()>,
}

/// Pantalla de acceso: login / alta de cuenta / cuenta demo
#[function_component(AuthScreen)]
pub fn auth_screen(props: &AuthScreenProps) -> Html {
    let tab = use_state(|| AuthTab::Login);

    let login_id_ref = use_node_ref();
    let password_ref = use_node_ref();

    let first_name_ref = use_node_ref();
    let last_name_ref = use_node_ref();
    let student_id_ref = use_node_ref();
    let email_ref = use_node_ref();
    let phone_ref = use_node_ref();
    let emergency_ref = use_node_ref();
    let hostel_ref = use_node_ref();
    let blood_ref = use_node_ref();
    let signup_password_ref = use_node_ref();
    let confirm_password_ref = use_node_ref();

    let switch_tab = |target: AuthTab| {
        let tab = tab.clone();
        let on_clear_error = props.on_clear_error.clone();
        Callback::from(move |_: MouseEvent| {
            tab.set(target);
            on_clear_error.emit(());
        })
    };

    let on_login_submit = {
        let login_id_ref = login_id_ref.clone();
        let password_ref = password_ref.clone();
        let on_login = props.on_login.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if let (Some(login_id), Some(password)) = (
                login_id_ref.cast::<HtmlInputElement>(),
                password_ref.cast::<HtmlInputElement>(),
            ) {
                on_login.emit((login_id.value(), password.value()));
            }
        })
    };

    let on_signup_submit = {
        let first_name_ref = first_name_ref.clone();
        let last_name_ref = last_name_ref.clone();
        let student_id_ref = student_id_ref.clone();
        let email_ref = email_ref.clone();
        let phone_ref = phone_ref.clone();
        let emergency_ref = emergency_ref.clone();
        let hostel_ref = hostel_ref.clone();
        let blood_ref = blood_ref.clone();
        let signup_password_ref = signup_password_ref.clone();
        let confirm_password_ref = confirm_password_ref.clone();
        let on_signup = props.on_signup.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let input = |node: &NodeRef| {
                node.cast::<HtmlInputElement>()
                    .map(|i| i.value())
                    .unwrap_or_default()
            };
            let select = |node: &NodeRef| {
                node.cast::<HtmlSelectElement>()
                    .map(|s| s.value())
                    .unwrap_or_default()
            };

            // el formulario entero viaja tipado; la validación vive en el core
            on_signup.emit(SignupForm {
                first_name: input(&first_name_ref),
                last_name: input(&last_name_ref),
                student_id: input(&student_id_ref),
                email: input(&email_ref),
                phone: input(&phone_ref),
                emergency_contact: input(&emergency_ref),
                hostel_room: input(&hostel_ref),
                blood_group: select(&blood_ref),
                password: input(&signup_password_ref),
                confirm_password: input(&confirm_password_ref),
            });
        })
    };

    let error_line = match &props.auth_error {
        Some(message) => html! { <div class="auth-error show">{message.clone()}</div> },
        None => html! {},
    };

    let login_form = html! {
        <form class="auth-form" onsubmit={on_login_submit}>
            <div class="form-group">
                <label for="loginId">{"Student ID or Phone"}</label>
                <input type="text" id="loginId" placeholder="e.g. 21CS001" ref={login_id_ref.clone()} required=true />
            </div>
            <div class="form-group">
                <label for="loginPassword">{"Password"}</label>
                <input type="password" id="loginPassword" placeholder="Your password" ref={password_ref.clone()} required=true />
            </div>
            {error_line.clone()}
            <button type="submit" class="btn-primary" disabled={props.busy}>
                { if props.busy { "Logging in..." } else { "Login" } }
            </button>
            <div class="demo-btn-container">
                <button
                    type="button"
                    class="btn-demo"
                    disabled={props.busy}
                    onclick={props.on_demo.reform(|_| ())}
                >
                    {"Try Demo Account"}
                </button>
            </div>
        </form>
    };

    let signup_form = html! {
        <form class="auth-form" onsubmit={on_signup_submit}>
            <div class="form-row">
                <div class="form-group">
                    <label for="firstName">{"First Name"}</label>
                    <input type="text" id="firstName" ref={first_name_ref.clone()} required=true />
                </div>
                <div class="form-group">
                    <label for="lastName">{"Last Name"}</label>
                    <input type="text" id="lastName" ref={last_name_ref.clone()} />
                </div>
            </div>
            <div class="form-group">
                <label for="studentId">{"Student ID"}</label>
                <input type="text" id="studentId" placeholder="e.g. 21CS001" ref={student_id_ref.clone()} required=true />
            </div>
            <div class="form-group">
                <label for="email">{"Email"}</label>
                <input type="email" id="email" ref={email_ref.clone()} required=true />
            </div>
            <div class="form-row">
                <div class="form-group">
                    <label for="phone">{"Phone"}</label>
                    <input type="tel" id="phone" ref={phone_ref.clone()} required=true />
                </div>
                <div class="form-group">
                    <label for="emergencyContact">{"Emergency Contact"}</label>
                    <input type="tel" id="emergencyContact" ref={emergency_ref.clone()} required=true />
                </div>
            </div>
            <div class="form-row">
                <div class="form-group">
                    <label for="hostelRoom">{"Hostel Room"}</label>
                    <input type="text" id="hostelRoom" placeholder="e.g. A-101" ref={hostel_ref.clone()} required=true />
                </div>
                <div class="form-group">
                    <label for="bloodGroup">{"Blood Group"}</label>
                    <select id="bloodGroup" ref={blood_ref.clone()} required=true>
                        <option value="">{"Select"}</option>
                        <option value="A+">{"A+"}</option>
                        <option value="A-">{"A-"}</option>
                        <option value="B+">{"B+"}</option>
                        <option value="B-">{"B-"}</option>
                        <option value="AB+">{"AB+"}</option>
                        <option value="AB-">{"AB-"}</option>
                        <option value="O+">{"O+"}</option>
                        <option value="O-">{"O-"}</option>
                    </select>
                </div>
            </div>
            <div class="form-row">
                <div class="form-group">
                    <label for="signupPassword">{"Password"}</label>
                    <input type="password" id="signupPassword" placeholder="Min. 6 characters" ref={signup_password_ref.clone()} required=true />
                </div>
                <div class="form-group">
                    <label for="confirmPassword">{"Confirm Password"}</label>
                    <input type="password" id="confirmPassword" ref={confirm_password_ref.clone()} required=true />
                </div>
            </div>
            {error_line}
            <button type="submit" class="btn-primary" disabled={props.busy}>
                { if props.busy { "Creating account..." } else { "Create Account" } }
            </button>
        </form>
    };

    html! {
        <div class="auth-screen" id="authScreen">
            <div class="auth-container">
                <div class="auth-header">
                    <div class="auth-logo">{"🎓"}</div>
                    <h1>{"College Portal"}</h1>
                    <p>{"Campus services, one tap away"}</p>
                </div>

                <div class="auth-tabs">
                    <button
                        class={classes!("auth-tab", (*tab == AuthTab::Login).then_some("active"))}
                        onclick={switch_tab(AuthTab::Login)}
                    >
                        {"Login"}
                    </button>
                    <button
                        class={classes!("auth-tab", (*tab == AuthTab::Signup).then_some("active"))}
                        onclick={switch_tab(AuthTab::Signup)}
                    >
                        {"Sign Up"}
                    </button>
                </div>

                { match *tab {
                    AuthTab::Login => login_form,
                    AuthTab::Signup => signup_form,
                } }
            </div>
        </div>
    }
}
