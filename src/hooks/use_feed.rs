use std::rc::Rc;
use yew::prelude::*;

use crate::context::Portal;
use crate::models::{DashboardStats, ServiceRequest, Session};
use crate::services::feed_service::{apply_filter, FeedFilter};

pub struct UseFeedHandle {
    /// Pedidos ya filtrados por la pestaña activa
    pub requests: Vec<ServiceRequest>,
    pub stats: DashboardStats,
    pub loading: bool,
    pub filter: FeedFilter,
    /// Cambia la pestaña: re-filtra en memoria, sin tocar la red
    pub set_filter: Callback<FeedFilter>,
    /// Recarga explícita del feed y las stats
    pub reload: Callback<()>,
}

#[hook]
pub fn use_feed(portal: &Portal, session: &Session) -> UseFeedHandle {
    let all_requests = use_state(Vec::<ServiceRequest>::new);
    let stats = use_state(DashboardStats::default);
    let loading = use_state(|| false);
    let filter = use_state(|| FeedFilter::All);

    let reload_inner: Rc<dyn Fn()> = {
        let portal = portal.clone();
        let all_requests = all_requests.clone();
        let stats = stats.clone();
        let loading = loading.clone();
        Rc::new(move || {
            let Some(student_id) = portal.session.current().student_id() else {
                return;
            };
            let portal = portal.clone();
            let all_requests = all_requests.clone();
            let stats = stats.clone();
            let loading = loading.clone();
            wasm_bindgen_futures::spawn_local(async move {
                loading.set(true);
                // siempre el feed completo; el filtro por pestaña es local
                let feed = portal.feed.load_feed(student_id, FeedFilter::All).await;
                let loaded_stats = portal.feed.load_stats().await;
                all_requests.set(feed);
                stats.set(loaded_stats);
                loading.set(false);
            });
        })
    };

    // Carga inicial en cada login; limpieza en logout
    {
        let reload = reload_inner.clone();
        let all_requests = all_requests.clone();
        use_effect_with(session.clone(), move |session: &Session| {
            if session.authenticated() {
                reload();
            } else {
                all_requests.set(Vec::new());
            }
            || ()
        });
    }

    // Un envío exitoso recarga feed + stats. La suscripción se registra UNA
    // sola vez; el componente raíz no se desmonta.
    {
        let portal = portal.clone();
        let reload = reload_inner.clone();
        use_effect_with((), move |_| {
            portal.submit.on_submitted(move || reload());
            || ()
        });
    }

    let set_filter = {
        let filter = filter.clone();
        Callback::from(move |new_filter: FeedFilter| filter.set(new_filter))
    };

    let reload = {
        let reload_inner = reload_inner.clone();
        Callback::from(move |_| reload_inner())
    };

    UseFeedHandle {
        requests: apply_filter((*all_requests).clone(), *filter),
        stats: (*stats).clone(),
        loading: *loading,
        filter: *filter,
        set_filter,
        reload,
    }
}
