// ============================================================================
// APP - Componente raíz: gate de sesión + dashboard + feed + modales
// ============================================================================

use yew::prelude::*;

use crate::components::auth_screen::AuthScreen;
use crate::components::dashboard::Dashboard;
use crate::components::forms::{
    CcdForm, FivestarForm, MessForm, OutingForm, StationaryForm, XeroxForm,
};
use crate::components::profile_modal::ProfileModal;
use crate::components::request_list::RequestList;
use crate::components::toast::ToastHost;
use crate::config::AppConfig;
use crate::context::Portal;
use crate::hooks::{use_auth, use_feed};
use crate::models::{ServiceKind, SubmitPayload};

fn service_description(kind: ServiceKind) -> &'static str {
    match kind {
        ServiceKind::Outing => "Request permission to leave campus",
        ServiceKind::Xerox => "Print, photocopy and binding",
        ServiceKind::Mess => "Order meals from the mess",
        ServiceKind::Fivestar => "Food from the Five Star restaurant",
        ServiceKind::Ccd => "Coffee and snacks from CCD",
        ServiceKind::Stationary => "Notebooks, pens and supplies",
    }
}

#[function_component(App)]
pub fn app() -> Html {
    // un solo grafo de servicios para toda la vida de la app
    let portal = use_memo((), |_| Portal::new(AppConfig::default()));

    html! {
        <ContextProvider<Portal> context={(*portal).clone()}>
            <PortalApp />
        </ContextProvider<Portal>>
    }
}

#[function_component(PortalApp)]
fn portal_app() -> Html {
    let portal = use_context::<Portal>().expect("Portal context missing");
    let auth = use_auth(&portal);
    let feed = use_feed(&portal, &auth.session);

    let active_modal = use_state(|| None::<ServiceKind>);
    let show_profile = use_state(|| false);
    let submitting = use_state(|| None::<ServiceKind>);

    // Un pipeline para los seis formularios. El hook del feed recarga solo
    // al publicarse el envío exitoso.
    let on_submit: Callback<SubmitPayload> = {
        let portal = portal.clone();
        let active_modal = active_modal.clone();
        let submitting = submitting.clone();
        Callback::from(move |payload: SubmitPayload| {
            let kind = payload.kind();
            let portal = portal.clone();
            let active_modal = active_modal.clone();
            let submitting = submitting.clone();
            wasm_bindgen_futures::spawn_local(async move {
                submitting.set(Some(kind));
                match portal.submit.submit(payload).await {
                    Ok(_) => {
                        portal
                            .toasts
                            .success(format!("{} submitted successfully!", kind.label()));
                        active_modal.set(None);
                    }
                    Err(e) => {
                        // el formulario queda abierto con lo tipeado
                        portal.toasts.error(e.message().to_string());
                    }
                }
                submitting.set(None);
            });
        })
    };

    let close_modal = {
        let active_modal = active_modal.clone();
        Callback::from(move |_| active_modal.set(None))
    };

    // el host de toasts queda montado fijo; las pantallas cambian debajo
    if auth.checking {
        return html! {
            <>
                <div class="app-loading">
                    <div class="loading-spinner" />
                    <p>{"Loading..."}</p>
                </div>
                <ToastHost />
            </>
        };
    }

    if !auth.session.authenticated() {
        return html! {
            <>
                <AuthScreen
                    auth_error={auth.auth_error.clone()}
                    busy={auth.busy}
                    on_login={auth.login.clone()}
                    on_signup={auth.signup.clone()}
                    on_demo={auth.demo_login.clone()}
                    on_clear_error={auth.clear_error.clone()}
                />
                <ToastHost />
            </>
        };
    }

    // desde acá la sesión está autenticada
    let student = auth.session.student.clone().expect("authenticated session");

    let modal = match *active_modal {
        Some(kind) => {
            let is_submitting = *submitting == Some(kind);
            match kind {
                ServiceKind::Outing => html! {
                    <OutingForm submitting={is_submitting} on_submit={on_submit.clone()} on_close={close_modal.clone()} />
                },
                ServiceKind::Xerox => html! {
                    <XeroxForm submitting={is_submitting} on_submit={on_submit.clone()} on_close={close_modal.clone()} />
                },
                ServiceKind::Mess => html! {
                    <MessForm submitting={is_submitting} on_submit={on_submit.clone()} on_close={close_modal.clone()} />
                },
                ServiceKind::Fivestar => html! {
                    <FivestarForm submitting={is_submitting} on_submit={on_submit.clone()} on_close={close_modal.clone()} />
                },
                ServiceKind::Ccd => html! {
                    <CcdForm submitting={is_submitting} on_submit={on_submit.clone()} on_close={close_modal.clone()} />
                },
                ServiceKind::Stationary => html! {
                    <StationaryForm submitting={is_submitting} on_submit={on_submit.clone()} on_close={close_modal.clone()} />
                },
            }
        }
        None => html! {},
    };

    html! {
        <>
        <div class="main-app active" id="mainApp">
            <header class="navbar">
                <div class="nav-brand">
                    <span class="brand-icon">{"🎓"}</span>
                    <span class="brand-name">{"College Portal"}</span>
                </div>
                <div class="nav-user">
                    <button
                        class="user-chip"
                        onclick={{
                            let show_profile = show_profile.clone();
                            Callback::from(move |_| show_profile.set(true))
                        }}
                    >
                        <span id="displayName">{student.name.clone()}</span>
                        <span class="user-id" id="displayId">{student.student_id.clone()}</span>
                    </button>
                    <button class="btn-logout" onclick={auth.logout.reform(|_| ())}>
                        {"Logout"}
                    </button>
                </div>
            </header>

            <main class="content">
                <Dashboard stats={feed.stats.clone()} />

                <section class="services-grid">
                    { for ServiceKind::ALL.iter().map(|kind| {
                        let kind = *kind;
                        let active_modal = active_modal.clone();
                        html! {
                            <div
                                class="service-card"
                                onclick={Callback::from(move |_| active_modal.set(Some(kind)))}
                            >
                                <div class="service-icon">{kind.icon()}</div>
                                <h3>{kind.label()}</h3>
                                <p>{service_description(kind)}</p>
                            </div>
                        }
                    }) }
                </section>

                <RequestList
                    requests={feed.requests.clone()}
                    loading={feed.loading}
                    filter={feed.filter}
                    on_filter={feed.set_filter.clone()}
                    on_reload={feed.reload.clone()}
                />
            </main>

            {modal}

            if *show_profile {
                <ProfileModal
                    student={student.clone()}
                    on_close={{
                        let show_profile = show_profile.clone();
                        Callback::from(move |_| show_profile.set(false))
                    }}
                />
            }
        </div>
        <ToastHost />
        </>
    }
}
