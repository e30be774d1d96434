//! Page controllers
//!
//! Each controller takes the session context loaded for the request, gates
//! the page, and returns either a redirect decision or a view-model for the
//! front-end to render.

use auth::{AccessDecision, Identity, PageKind, SessionContext};
use chrono::{DateTime, FixedOffset, Timelike, Utc};
use common::ResourceId;
use serde::Serialize;

use crate::{
    collection::CollectionService,
    error::{WardrobeError, WardrobeResult},
    models::{Dress, DressStats, FilterCriteria},
    presentation::{color_badge, format_added_date, greeting, image_url, type_icon},
    query::{apply_filters, compute_statistics},
};

/// What a page load produces
#[derive(Debug, Clone, PartialEq)]
pub enum PageOutcome<T> {
    Redirect(AccessDecision),
    Render(T),
}

impl<T> PageOutcome<T> {
    pub fn view(self) -> Option<T> {
        match self {
            PageOutcome::Render(view) => Some(view),
            PageOutcome::Redirect(_) => None,
        }
    }
}

/// Gate `page` and hand back the identity it needs
fn signed_in(ctx: &SessionContext, page: PageKind) -> Result<&Identity, AccessDecision> {
    match ctx.require(page) {
        AccessDecision::Allow => ctx.identity.as_ref().ok_or(AccessDecision::RedirectToLogin),
        decision => Err(decision),
    }
}

/// Login and register pages
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuthView {
    pub page: PageKind,
}

fn auth_page(ctx: &SessionContext, page: PageKind) -> PageOutcome<AuthView> {
    match ctx.require(page) {
        AccessDecision::Allow => PageOutcome::Render(AuthView { page }),
        decision => PageOutcome::Redirect(decision),
    }
}

pub fn login_page(ctx: &SessionContext) -> PageOutcome<AuthView> {
    auth_page(ctx, PageKind::Login)
}

pub fn register_page(ctx: &SessionContext) -> PageOutcome<AuthView> {
    auth_page(ctx, PageKind::Register)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardView {
    pub user_name: String,
    pub greeting: String,
    pub stats: DressStats,
    pub fetch_failed: bool,
}

/// Dashboard with collection statistics; `now` is the visitor's local time
pub async fn dashboard_page(
    ctx: &SessionContext,
    collection: &CollectionService,
    now: DateTime<FixedOffset>,
) -> PageOutcome<DashboardView> {
    let identity = match signed_in(ctx, PageKind::Dashboard) {
        Ok(identity) => identity,
        Err(decision) => return PageOutcome::Redirect(decision),
    };

    let fetched = collection.fetch_collection(&identity.id).await;
    let stats = compute_statistics(&fetched.items, now.with_timezone(&Utc));

    PageOutcome::Render(DashboardView {
        user_name: identity.name.clone(),
        greeting: format!("{}, {}!", greeting(now.hour()), identity.first_name()),
        stats,
        fetch_failed: fetched.fetch_failed(),
    })
}

/// A dress with its display decorations
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DressCard {
    #[serde(flatten)]
    pub dress: Dress,
    pub image_url: String,
    pub type_icon: &'static str,
    pub color_badge: &'static str,
}

impl From<Dress> for DressCard {
    fn from(dress: Dress) -> Self {
        Self {
            image_url: image_url(&dress),
            type_icon: type_icon(&dress.dress_type),
            color_badge: color_badge(&dress.color),
            dress,
        }
    }
}

/// Which wardrobe listing to show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ListState {
    /// The user owns no dresses
    Empty,
    /// Dresses exist but none pass the filters
    NoMatches,
    Items,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WardrobeView {
    pub state: ListState,
    pub cards: Vec<DressCard>,
    pub total_count: usize,
    pub criteria: FilterCriteria,
    pub fetch_failed: bool,
}

/// Filtered wardrobe listing
///
/// The filter runs on this call's own fetch, so the view never mixes
/// criteria with a different request's results.
pub async fn wardrobe_page(
    ctx: &SessionContext,
    collection: &CollectionService,
    criteria: FilterCriteria,
) -> PageOutcome<WardrobeView> {
    let identity = match signed_in(ctx, PageKind::Wardrobe) {
        Ok(identity) => identity,
        Err(decision) => return PageOutcome::Redirect(decision),
    };

    let fetched = collection.fetch_collection(&identity.id).await;
    let filtered = apply_filters(&fetched.items, &criteria);
    let state = if fetched.items.is_empty() {
        ListState::Empty
    } else if filtered.is_empty() {
        ListState::NoMatches
    } else {
        ListState::Items
    };

    PageOutcome::Render(WardrobeView {
        state,
        cards: filtered.into_iter().map(DressCard::from).collect(),
        total_count: fetched.items.len(),
        criteria,
        fetch_failed: fetched.fetch_failed(),
    })
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddDressView {
    pub user_name: String,
}

pub fn add_dress_page(ctx: &SessionContext) -> PageOutcome<AddDressView> {
    match signed_in(ctx, PageKind::AddDress) {
        Ok(identity) => PageOutcome::Render(AddDressView {
            user_name: identity.name.clone(),
        }),
        Err(decision) => PageOutcome::Redirect(decision),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DressDetailView {
    pub card: DressCard,
    pub added_on: Option<String>,
}

/// Details of one of the user's dresses
pub async fn dress_detail_page(
    ctx: &SessionContext,
    collection: &CollectionService,
    id: Option<&ResourceId>,
) -> WardrobeResult<PageOutcome<DressDetailView>> {
    let identity = match signed_in(ctx, PageKind::DressDetail) {
        Ok(identity) => identity,
        Err(decision) => return Ok(PageOutcome::Redirect(decision)),
    };

    let id = id.ok_or(WardrobeError::NotFound)?;
    let dress = collection.get_item(&identity.id, id).await?;
    let added_on = format_added_date(dress.created_at);

    Ok(PageOutcome::Render(DressDetailView {
        card: DressCard::from(dress),
        added_on,
    }))
}
