// Formularios de pedido, uno por servicio. Cada uno arma su payload tipado
// una sola vez y lo emite entero; la validación vive en el core.

pub mod outing;
pub mod xerox;
pub mod mess;
pub mod fivestar;
pub mod ccd;
pub mod stationary;

pub use outing::OutingForm;
pub use xerox::XeroxForm;
pub use mess::MessForm;
pub use fivestar::FivestarForm;
pub use ccd::CcdForm;
pub use stationary::StationaryForm;

use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::NodeRef;

pub(crate) fn input_value(node: &NodeRef) -> String {
    node.cast::<HtmlInputElement>()
        .map(|i| i.value())
        .unwrap_or_default()
}

pub(crate) fn select_value(node: &NodeRef) -> String {
    node.cast::<HtmlSelectElement>()
        .map(|s| s.value())
        .unwrap_or_default()
}

pub(crate) fn textarea_value(node: &NodeRef) -> Option<String> {
    let value = node
        .cast::<HtmlTextAreaElement>()
        .map(|t| t.value())
        .unwrap_or_default();
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

pub(crate) fn number_value(node: &NodeRef) -> u32 {
    input_value(node).parse().unwrap_or(1)
}
