//! Target API client.
//!
//! [`TargetClient`] is the session: validated credentials, the operation
//! catalog, and a transport, all read-only after construction. Each logical
//! API operation is one async method, grouped by resource:
//!
//! | Module | Operations |
//! |--------|------------|
//! | `activities` | list, AB/XT create/get/update/delete, name/state/priority/schedule, changelog |
//! | `offers` | list, content offer get/create/update/delete |
//! | `audiences` | list, get/create/update/delete |
//! | `resources` | properties, mboxes, profile attributes, environments |
//! | `reports` | performance and orders reports |
//! | `batch` | batch execution |

mod activities;
mod audiences;
mod batch;
pub mod builder;
pub mod core;
pub mod credentials;
mod offers;
mod reports;
mod resources;

pub use builder::TargetClientBuilder;
pub use self::core::TargetClient;
pub use credentials::Credentials;
