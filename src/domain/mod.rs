// Domain layer - Catalog, filter and preference models
pub mod analytics;
pub mod catalog;
pub mod dashboard;
pub mod facet;
pub mod favorites;
pub mod filter;
pub mod share;
pub mod theme;
pub mod toast;
