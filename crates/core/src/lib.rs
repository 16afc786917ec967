//! Domain layer for the Dana Woodworks site: the project and service
//! catalogs with their queries, contact inquiry validation, and static
//! company content.

pub mod catalog;
pub mod contact;
pub mod error;
pub mod site;
pub mod types;
