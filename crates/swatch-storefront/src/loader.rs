//! Lazy, once-per-card loading of variant data.
//!
//! A card starts `Uninitialized` and renders optimistically. The first
//! interaction triggers a single fetch; concurrent triggers are skipped while
//! it is in flight. A failed fetch is logged and leaves the card optimistic
//! for the rest of its life.

use std::future::Future;
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::{Mutex, PoisonError, Weak};

use swatch_core::ProductData;
use swatch_engine::{SelectionController, SelectionObserver};

use crate::client::StorefrontClient;
use crate::error::StorefrontError;

/// Anything that can produce normalized product data for a handle.
pub trait ProductSource {
    fn fetch_product(
        &self,
        handle: &str,
    ) -> impl Future<Output = Result<ProductData, StorefrontError>> + Send;
}

/// A [`ProductSource`] backed by one shop's storefront.
pub struct ShopSource {
    client: StorefrontClient,
    shop_url: String,
}

impl ShopSource {
    #[must_use]
    pub fn new(client: StorefrontClient, shop_url: impl Into<String>) -> Self {
        Self {
            client,
            shop_url: shop_url.into(),
        }
    }

    #[must_use]
    pub fn shop_url(&self) -> &str {
        &self.shop_url
    }
}

impl ProductSource for ShopSource {
    fn fetch_product(
        &self,
        handle: &str,
    ) -> impl Future<Output = Result<ProductData, StorefrontError>> + Send {
        self.client.fetch_product_data(&self.shop_url, handle)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum LoaderPhase {
    Idle = 0,
    InFlight = 1,
    Loaded = 2,
    Failed = 3,
}

impl LoaderPhase {
    fn from_u8(raw: u8) -> Self {
        match raw {
            1 => Self::InFlight,
            2 => Self::Loaded,
            3 => Self::Failed,
            _ => Self::Idle,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Data was handed to the card.
    Loaded { variants: usize },
    /// Another trigger already ran or is running.
    Skipped(LoaderPhase),
    /// The card was dropped while the fetch was in flight; the data was
    /// discarded.
    Detached,
    Failed { reason: String },
}

/// Tracks the load lifecycle for one product card.
#[derive(Debug)]
pub struct CardLoader {
    handle: String,
    phase: AtomicU8,
}

impl CardLoader {
    #[must_use]
    pub fn new(handle: impl Into<String>) -> Self {
        Self {
            handle: handle.into(),
            phase: AtomicU8::new(LoaderPhase::Idle as u8),
        }
    }

    #[must_use]
    pub fn handle(&self) -> &str {
        &self.handle
    }

    #[must_use]
    pub fn phase(&self) -> LoaderPhase {
        LoaderPhase::from_u8(self.phase.load(Ordering::Acquire))
    }

    /// Fetches variant data once and hands it to the card.
    ///
    /// Only the first trigger from `Idle` fetches. `card` is held weakly: if
    /// the card is gone by the time the response arrives, the data is dropped
    /// and the loader returns to `Idle`.
    pub async fn trigger<S, O>(
        &self,
        source: &S,
        card: &Weak<Mutex<SelectionController<O>>>,
    ) -> LoadOutcome
    where
        S: ProductSource + ?Sized,
        O: SelectionObserver,
    {
        if let Err(current) = self.phase.compare_exchange(
            LoaderPhase::Idle as u8,
            LoaderPhase::InFlight as u8,
            Ordering::AcqRel,
            Ordering::Acquire,
        ) {
            return LoadOutcome::Skipped(LoaderPhase::from_u8(current));
        }

        let product = match source.fetch_product(&self.handle).await {
            Ok(product) => product,
            Err(e) => {
                tracing::warn!(
                    handle = %self.handle,
                    error = %e,
                    "variant data load failed; card stays optimistic"
                );
                self.set_phase(LoaderPhase::Failed);
                return LoadOutcome::Failed {
                    reason: e.to_string(),
                };
            }
        };

        let Some(card) = card.upgrade() else {
            tracing::debug!(handle = %self.handle, "card dropped before data arrived");
            self.set_phase(LoaderPhase::Idle);
            return LoadOutcome::Detached;
        };

        let variants = product.variants.len();
        card.lock()
            .unwrap_or_else(PoisonError::into_inner)
            .load_variant_data(product.variants);
        self.set_phase(LoaderPhase::Loaded);

        LoadOutcome::Loaded { variants }
    }

    fn set_phase(&self, phase: LoaderPhase) {
        self.phase.store(phase as u8, Ordering::Release);
    }
}
