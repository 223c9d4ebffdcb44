//! Asynchronous access to the catalog and the war dashboard.
//!
//! This crate wires a [`ContentSource`] into the read paths front-ends use:
//! - [`source`] defines where content comes from (bundled, directory, timeout wrapper)
//! - [`store`] memoizes one validated [`CatalogSnapshot`] and answers list queries
//! - [`lookup`] resolves ids to items, warbonds, and warbond pages
//! - [`dashboard`] joins the major order with active campaigns
//! - [`resource`] tracks one in-flight load for a view
pub mod dashboard;
pub mod error;
pub mod lookup;
pub mod resource;
pub mod source;
pub mod store;

pub use dashboard::{
    Dashboard, WarEffortSort, average_progress, sort_war_efforts, total_helldivers,
};
pub use error::{Result, ServiceError};
pub use lookup::{ItemDetail, LookupService};
pub use resource::{Resource, ResourceState, Ticket};
pub use source::{
    BundledContentSource, ContentSource, DirectoryContentSource, TimeoutContentSource,
};
pub use store::{CatalogSnapshot, CatalogStore};
