//! Public-facing content subsets consumed by the marketing pages. Same
//! record shapes as the admin lists, no auth, active rows only where the
//! kind carries an `isActive` flag.

use axum::extract::State;
use axum::Json;
use chrono::Utc;

use crate::schema::{ExportCategory, PromoPopup, SiteSetting, TeamMember, Testimonial, WorkshopPackage};
use crate::AppState;

pub async fn testimonials(State(state): State<AppState>) -> Json<Vec<Testimonial>> {
    Json(state.storage.testimonials())
}

pub async fn workshop_packages(State(state): State<AppState>) -> Json<Vec<WorkshopPackage>> {
    let packages = state
        .storage
        .workshop_packages()
        .into_iter()
        .filter(|p| p.is_active)
        .collect();
    Json(packages)
}

pub async fn team(State(state): State<AppState>) -> Json<Vec<TeamMember>> {
    let mut members: Vec<TeamMember> = state
        .storage
        .team_members()
        .into_iter()
        .filter(|m| m.is_active)
        .collect();
    members.sort_by_key(|m| m.display_order);
    Json(members)
}

pub async fn export_categories(State(state): State<AppState>) -> Json<Vec<ExportCategory>> {
    let mut categories: Vec<ExportCategory> = state
        .storage
        .export_categories()
        .into_iter()
        .filter(|c| c.is_active)
        .collect();
    categories.sort_by_key(|c| c.display_order);
    Json(categories)
}

pub async fn settings(State(state): State<AppState>) -> Json<Vec<SiteSetting>> {
    Json(state.storage.site_settings())
}

/// Promos eligible for display right now: active flag set and the current
/// time inside the optional start/end window.
pub async fn active_promos(State(state): State<AppState>) -> Json<Vec<PromoPopup>> {
    Json(state.storage.active_promos(Utc::now()))
}
