//! Page-ready mount sequence.

use crate::actions::ShopNow;
use crate::catalog::Catalog;
use crate::config::PageConfig;
use crate::error::{Error, Result};
use crate::grid::{render_products, GridContainer};

/// The page the storefront is mounted into.
pub trait Document {
    type Grid: GridContainer;

    /// Looks up the product grid container; `Ok(None)` when the page has none.
    fn product_grid(&self, selector: &str) -> Result<Option<Self::Grid>>;

    /// Attaches `action` to the hero call-to-action, replacing any handler a
    /// previous mount attached. Returns `false` when the page has no such
    /// element.
    fn bind_hero(&self, selector: &str, action: ShopNow) -> Result<bool>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MountReport {
    pub cards: usize,
    pub hero_bound: bool,
}

#[derive(Debug, Clone, Default)]
pub struct Storefront {
    catalog: Catalog,
    config: PageConfig,
}

impl Storefront {
    pub fn new(catalog: Catalog, config: PageConfig) -> Self {
        Self { catalog, config }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn config(&self) -> &PageConfig {
        &self.config
    }

    /// Renders the grid, then binds the hero button if present.
    ///
    /// A missing grid aborts the mount before anything is bound.
    pub fn mount<D: Document + ?Sized>(&self, doc: &D) -> Result<MountReport> {
        let selector = &self.config.grid_selector;
        let mut grid = doc
            .product_grid(selector)?
            .ok_or_else(|| Error::MissingElement(selector.clone()))?;

        let cards = render_products(&self.catalog, &mut grid)?;
        let hero_bound = doc.bind_hero(&self.config.hero_selector, ShopNow)?;
        if !hero_bound {
            tracing::debug!(selector = %self.config.hero_selector, "no hero button; skipping");
        }

        tracing::info!(cards, hero_bound, "storefront mounted");
        Ok(MountReport { cards, hero_bound })
    }
}
