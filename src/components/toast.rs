use gloo_timers::callback::Timeout;
use std::collections::HashSet;
use yew::prelude::*;

use crate::context::Portal;

/// Renderiza la cola de toasts y auto-descarta cada uno a los 5 segundos
#[function_component(ToastHost)]
pub fn toast_host() -> Html {
    let portal = use_context::<Portal>().expect("Portal context missing");
    let update = use_force_update();
    let scheduled = use_mut_ref(HashSet::<u32>::new);

    // Re-render en cada push/dismiss. Se registra UNA sola vez; el host vive
    // tanto como la app.
    {
        let portal = portal.clone();
        use_effect_with((), move |_| {
            portal.toasts.subscribe(move || update.force_update());
            || ()
        });
    }

    let toasts = portal.toasts.current();

    // Programar el auto-dismiss de los toasts nuevos
    for toast in &toasts {
        if scheduled.borrow_mut().insert(toast.id) {
            let bus = portal.toasts.clone();
            let id = toast.id;
            Timeout::new(portal.config.toast_duration_ms, move || {
                bus.dismiss(id);
            })
            .forget();
        }
    }

    html! {
        <div class="toast-container">
            { for toasts.iter().map(|toast| {
                let on_close = {
                    let bus = portal.toasts.clone();
                    let id = toast.id;
                    Callback::from(move |_| bus.dismiss(id))
                };
                html! {
                    <div class={classes!("toast", toast.kind.css_class())} key={toast.id.to_string()}>
                        <span class="toast-icon">{toast.kind.icon()}</span>
                        <span class="toast-message">{toast.message.clone()}</span>
                        <button class="toast-close" onclick={on_close}>{"×"}</button>
                    </div>
                }
            }) }
        </div>
    }
}
