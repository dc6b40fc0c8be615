use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ServiceModalProps {
    pub title: AttrValue,
    pub icon: AttrValue,
    pub on_close: Callback<()>,
    pub children: Children,
}

/// Overlay + marco común de los modales de pedido
#[function_component(ServiceModal)]
pub fn service_modal(props: &ServiceModalProps) -> Html {
    let on_overlay_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            // cerrar solo con click en el fondo, no dentro del modal
            if let Some(target) = e.target_dyn_into::<web_sys::Element>() {
                if target.class_list().contains("modal-overlay") {
                    on_close.emit(());
                }
            }
        })
    };

    html! {
        <div class="modal-overlay active" onclick={on_overlay_click}>
            <div class="modal">
                <div class="modal-header">
                    <h3>{format!("{} {}", props.icon, props.title)}</h3>
                    <button
                        class="modal-close"
                        onclick={props.on_close.reform(|_| ())}
                    >
                        {"×"}
                    </button>
                </div>
                <div class="modal-body">
                    { for props.children.iter() }
                </div>
            </div>
        </div>
    }
}
