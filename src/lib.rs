//! # Citizen Services Library
//!
//! Backend for a municipal citizen-services app:
//! - Restaurant catalog, cart pricing and food orders
//! - Transport hubs, government service guides and the staff directory
//! - Bearer tokens issued by an external auth provider
//! - PostgreSQL for orders, Redis for shared rate limits (both optional)
//!
//! ## Architecture
//!
//! The crate follows Clean Architecture principles:
//!
//! - **Domain Layer**: Catalog records, search, cart and order rules
//! - **Application Layer**: Services and DTOs
//! - **Infrastructure Layer**: Seed catalog, repositories, token verifiers, metrics
//! - **Presentation Layer**: HTTP handlers and middleware
//!
//! ## Module Structure
//!
//! ```text
//! citizen_services/
//! +-- config/         Configuration management
//! +-- domain/         Entities, search, cart, repository traits
//! +-- application/    Services and DTOs
//! +-- infrastructure/ Catalog, Postgres, Redis, auth provider, metrics
//! +-- presentation/   HTTP routes, handlers and middleware
//! +-- shared/         Errors and validation helpers
//! ```

// Configuration module
pub mod config;

// Domain layer - Core business logic
pub mod domain;

// Application layer - Business services
pub mod application;

// Infrastructure layer - External implementations
pub mod infrastructure;

// Presentation layer - HTTP handlers
pub mod presentation;

// Shared utilities
pub mod shared;

// Application startup and state management
pub mod startup;

// Telemetry and observability
pub mod telemetry;
