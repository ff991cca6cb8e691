//! # Domain Entities
//!
//! Records behind the app's screens.
//!
//! ## Catalog Entities (read-only, seeded)
//!
//! - **Business**: a restaurant customers can order from
//! - **MenuItem**: a dish sold by a business
//! - **TransportHub**: a station or rank in the transport directory
//! - **ServiceGuide**: step-by-step guide for a government service
//! - **DirectoryContact**: an entry in the citizen directory
//!
//! ## Persisted Entities
//!
//! - **Order**: a placed order, stored through [`OrderRepository`]

mod business;
mod menu_item;
mod transport_hub;
mod service_guide;
mod directory_contact;
mod order;

pub use business::Business;
pub use menu_item::MenuItem;
pub use transport_hub::{HubKind, TransportHub};
pub use service_guide::{GuideOffice, ServiceGuide};
pub use directory_contact::DirectoryContact;
pub use order::{Order, OrderLine, OrderRepository, OrderStatus};

#[cfg(test)]
pub use order::MockOrderRepository;
