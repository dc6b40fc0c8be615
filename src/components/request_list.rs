use yew::prelude::*;

use crate::models::{ServiceKind, ServiceRequest};
use crate::services::feed_service::FeedFilter;

#[derive(Properties, PartialEq)]
pub struct RequestListProps {
    pub requests: Vec<ServiceRequest>,
    pub loading: bool,
    #[prop_or(FeedFilter::All)]
    pub filter: FeedFilter,
    pub on_filter: Callback<FeedFilter>,
    pub on_reload: Callback<()>,
}

/// Feed agregado con pestañas por servicio. Cambiar de pestaña filtra en
/// memoria; el botón de refresh es la única recarga explícita.
#[function_component(RequestList)]
pub fn request_list(props: &RequestListProps) -> Html {
    let tab = |filter: FeedFilter, label: &str| -> Html {
        let active = props.filter == filter;
        let on_filter = props.on_filter.clone();
        html! {
            <button
                class={classes!("tab-btn", active.then_some("active"))}
                onclick={Callback::from(move |_| on_filter.emit(filter))}
            >
                {label}
            </button>
        }
    };

    let body = if props.loading {
        html! { <div class="loading">{"Loading requests..."}</div> }
    } else if props.requests.is_empty() {
        // estado vacío bien definido, distinto de una falla de carga
        html! {
            <div class="empty-state">
                <div class="empty-state-icon">{"📋"}</div>
                <p>{"No requests found in this category."}</p>
            </div>
        }
    } else {
        html! {
            <>
            { for props.requests.iter().map(|request| {
                let kind = request.kind();
                html! {
                    <div class="status-item fade-in" key={format!("{}-{}", kind.slug(), request.id())}>
                        <div class="status-info">
                            <h4>{format!("{} {}", kind.icon(), kind.label())}</h4>
                            <p>{format!("{} • {}", request.summary(), request.created_display())}</p>
                        </div>
                        <span class={classes!("status-badge", request.status().as_str())}>
                            {request.status().as_str()}
                        </span>
                    </div>
                }
            }) }
            </>
        }
    };

    html! {
        <section class="status-section">
            <div class="status-header">
                <h2>{"My Requests"}</h2>
                <button class="btn-refresh" onclick={props.on_reload.reform(|_| ())}>
                    {"🔄 Refresh"}
                </button>
            </div>
            <div class="status-tabs">
                { tab(FeedFilter::All, "All") }
                { for ServiceKind::ALL.iter().map(|kind| tab(FeedFilter::Only(*kind), kind.label())) }
            </div>
            <div class="status-list" id="status-list">
                {body}
            </div>
        </section>
    }
}
