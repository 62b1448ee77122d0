//! Headless admin client for the temple CMS.
//!
//! Each editable section of the site (navbar, hero slider, activities,
//! welcome, services, testimonials, temple info, footer) gets a typed record,
//! change tracking against a baseline snapshot, and the authenticated save
//! workflow the dashboard runs: dirty detection gates the save action,
//! success promotes the record into a new baseline, auth failures clear
//! credentials everywhere and send the navigator to the login route.

pub mod auth;
pub mod config;
pub mod controller;
pub mod diff;
pub mod errors;
pub mod gateway;
pub mod payloads;
pub mod records;
pub mod sections;
pub mod uploads;

pub use auth::{AuthContext, AuthState, CredentialStore, Navigator};
pub use controller::{EditSession, Notice, SaveState};
pub use diff::{Record, is_dirty};
pub use errors::SaveError;
pub use gateway::{Gateway, HttpGateway};
pub use sections::{Section, SectionStatus};
pub use uploads::{AssetKind, ImageField, PendingUpload};
