use yew::prelude::*;

use crate::models::DashboardStats;

#[derive(Properties, PartialEq)]
pub struct DashboardProps {
    pub stats: DashboardStats,
}

/// Tarjetas de contadores del campus
#[function_component(Dashboard)]
pub fn dashboard(props: &DashboardProps) -> Html {
    let stats = &props.stats;
    let cards = [
        ("👥", stats.total_students, "Total Students"),
        ("🚶", stats.pending_outings, "Pending Outings"),
        ("🖨️", stats.pending_xerox, "Xerox Orders"),
        ("🍽️", stats.pending_mess, "Mess Orders"),
        ("🍕", stats.pending_fivestar, "Five Star Orders"),
        ("☕", stats.pending_ccd, "CCD Orders"),
    ];

    html! {
        <div class="stats-container" id="stats-container">
            { for cards.iter().map(|&(icon, number, label)| html! {
                <div class="stat-card fade-in">
                    <div class="stat-icon">{icon}</div>
                    <div class="stat-number">{number}</div>
                    <div class="stat-label">{label}</div>
                </div>
            }) }
        </div>
    }
}
