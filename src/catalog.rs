// src/catalog.rs
//
// In-memory listing source. Seeded once at start-up; owner edits live only
// for the lifetime of the process.

use crate::domain::draft::{ListingDraft, FORM_AMENITIES, PLACEHOLDER_IMAGES};
use crate::domain::{query, FilterSpec, Listing, Owner};
use crate::errors::ServerError;
use chrono::NaiveDate;
use rand::seq::SliceRandom;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

const SEED_LISTINGS: &str = include_str!("../data/seed_listings.json");

/// Failures loading or growing the catalog itself, as opposed to rejected
/// client input.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid listing data: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("duplicate listing id in seed data: {0}")]
    DuplicateId(String),

    #[error("no listing ids left after listing-{0}")]
    IdsExhausted(u32),
}

impl From<CatalogError> for ServerError {
    fn from(e: CatalogError) -> Self {
        tracing::error!(error = %e, "catalog failure");
        ServerError::InternalError
    }
}

pub struct Catalog {
    listings: RwLock<Vec<Listing>>,
}

impl Catalog {
    pub fn new(listings: Vec<Listing>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for l in &listings {
            if !seen.insert(l.id.as_str()) {
                return Err(CatalogError::DuplicateId(l.id.clone()));
            }
        }
        Ok(Self {
            listings: RwLock::new(listings),
        })
    }

    /// Catalog seeded with the bundled dataset.
    pub fn seeded() -> Result<Self, CatalogError> {
        Self::from_json(SEED_LISTINGS)
    }

    pub fn from_file(path: &Path) -> Result<Self, CatalogError> {
        let raw = std::fs::read_to_string(path).map_err(|source| CatalogError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&raw)
    }

    pub fn from_json(raw: &str) -> Result<Self, CatalogError> {
        let listings: Vec<Listing> = serde_json::from_str(raw)?;
        Self::new(listings)
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Vec<Listing>>, ServerError> {
        self.listings.read().map_err(|_| ServerError::InternalError)
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Vec<Listing>>, ServerError> {
        self.listings.write().map_err(|_| ServerError::InternalError)
    }

    pub fn len(&self) -> Result<usize, ServerError> {
        Ok(self.read()?.len())
    }

    /// Run the query engine over a consistent snapshot.
    pub fn search(&self, spec: &FilterSpec) -> Result<Vec<Listing>, ServerError> {
        let guard = self.read()?;
        let results: Vec<Listing> = query(&guard, spec).into_iter().cloned().collect();
        tracing::debug!(
            total = guard.len(),
            matched = results.len(),
            "listing query"
        );
        Ok(results)
    }

    pub fn get(&self, id: &str) -> Result<Option<Listing>, ServerError> {
        Ok(self.read()?.iter().find(|l| l.id == id).cloned())
    }

    /// Listings whose ids appear in `ids`, in catalog order.
    pub fn get_many(&self, ids: &[String]) -> Result<Vec<Listing>, ServerError> {
        Ok(self
            .read()?
            .iter()
            .filter(|l| ids.contains(&l.id))
            .cloned()
            .collect())
    }

    /// The first `n` listings in catalog order.
    pub fn first(&self, n: usize) -> Result<Vec<Listing>, ServerError> {
        Ok(self.read()?.iter().take(n).cloned().collect())
    }

    pub fn owned_by(&self, owner_id: &str) -> Result<Vec<Listing>, ServerError> {
        Ok(self
            .read()?
            .iter()
            .filter(|l| l.owner.id == owner_id)
            .cloned()
            .collect())
    }

    /// Validate a draft and append it under a fresh `listing-NNN` id.
    pub fn create(
        &self,
        draft: ListingDraft,
        owner: Owner,
        today: NaiveDate,
    ) -> Result<Listing, ServerError> {
        let placeholder = PLACEHOLDER_IMAGES
            .choose(&mut rand::thread_rng())
            .copied()
            .unwrap_or(PLACEHOLDER_IMAGES[0]);

        let mut guard = self.write()?;
        let id = next_listing_id(&guard)?;
        let listing = draft
            .into_listing(id, owner, today, placeholder)
            .map_err(|e| ServerError::BadRequest(e.to_string()))?;

        guard.push(listing.clone());
        tracing::info!(listing_id = %listing.id, owner_id = %listing.owner.id, "listing created");
        Ok(listing)
    }

    /// Replace the editable fields of a listing owned by `owner_id`.
    /// Id, owner, reviews and creation date are kept, as are amenities the
    /// form has no checkbox for.
    pub fn update(
        &self,
        id: &str,
        owner_id: &str,
        draft: ListingDraft,
    ) -> Result<Listing, ServerError> {
        let mut guard = self.write()?;
        let slot = guard
            .iter_mut()
            .find(|l| l.id == id)
            .ok_or(ServerError::NotFound)?;

        if slot.owner.id != owner_id {
            return Err(ServerError::Forbidden("not your listing".into()));
        }

        let placeholder = slot
            .cover_image()
            .unwrap_or(PLACEHOLDER_IMAGES[0])
            .to_string();
        let mut updated = draft
            .into_listing(
                slot.id.clone(),
                slot.owner.clone(),
                slot.created_at,
                &placeholder,
            )
            .map_err(|e| ServerError::BadRequest(e.to_string()))?;
        updated.reviews = std::mem::take(&mut slot.reviews);
        let extra = slot
            .amenities
            .iter()
            .filter(|a| !FORM_AMENITIES.contains(&a.as_str()))
            .filter(|a| !updated.amenities.contains(a))
            .cloned()
            .collect::<Vec<_>>();
        updated.amenities.extend(extra);

        *slot = updated.clone();
        tracing::info!(listing_id = %id, "listing updated");
        Ok(updated)
    }

    pub fn delete(&self, id: &str, owner_id: &str) -> Result<(), ServerError> {
        let mut guard = self.write()?;
        let idx = guard
            .iter()
            .position(|l| l.id == id)
            .ok_or(ServerError::NotFound)?;

        if guard[idx].owner.id != owner_id {
            return Err(ServerError::Forbidden("not your listing".into()));
        }

        guard.remove(idx);
        tracing::info!(listing_id = %id, "listing deleted");
        Ok(())
    }
}

fn next_listing_id(listings: &[Listing]) -> Result<String, CatalogError> {
    let max = listings
        .iter()
        .filter_map(|l| l.id.strip_prefix("listing-"))
        .filter_map(|n| n.parse::<u32>().ok())
        .max()
        .unwrap_or(0);
    let next = max.checked_add(1).ok_or(CatalogError::IdsExhausted(max))?;
    Ok(format!("listing-{next:03}"))
}
