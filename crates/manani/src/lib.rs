//! # manani
//!
//! Storefront page logic for the Manani product grid, kept independent of the
//! browser so it can be unit-tested on the host.
//!
//! The browser build (`manani_web`) implements the small host traits defined
//! here ([`Host`], [`Cancelable`], [`GridContainer`], [`Document`]) with
//! `web-sys` and calls [`Storefront::mount`] once the page is ready.
//!
//! ## Quick Start
//!
//! ```
//! use manani::prelude::*;
//!
//! let catalog = Catalog::collection();
//! let mut grid = HtmlGrid::new();
//! let cards = render_products(&catalog, &mut grid).unwrap();
//! assert_eq!(cards, 6);
//! assert!(grid.to_html().contains("Chic Skirt"));
//! ```

pub mod actions;
pub mod card;
pub mod catalog;
pub mod config;
pub mod error;
pub mod grid;
pub mod page;

pub use actions::{CartAdd, Cancelable, Host, ShopNow};
pub use card::CardView;
pub use catalog::{Catalog, Price, Product, ProductId};
pub use config::PageConfig;
pub use error::{Error, Result};
pub use grid::{render_products, GridContainer, HtmlGrid};
pub use page::{Document, MountReport, Storefront};

/// Logged once when the page script starts, before page-ready.
pub const SCRIPT_LOADED_MESSAGE: &str = "Manani, Women's Pride script loaded!";

/// Convenient re-exports for typical usage.
pub mod prelude {
    pub use crate::actions::{CartAdd, Cancelable, Host, ShopNow};
    pub use crate::card::CardView;
    pub use crate::catalog::{Catalog, Price, Product, ProductId};
    pub use crate::config::PageConfig;
    pub use crate::error::{Error, Result};
    pub use crate::grid::{render_products, GridContainer, HtmlGrid};
    pub use crate::page::{Document, MountReport, Storefront};
}
