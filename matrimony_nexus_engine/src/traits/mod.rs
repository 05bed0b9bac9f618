//! Interface contracts for Matrimony Nexus database backends.
//!
//! Each trait covers one record collection of the platform, and each comes with its own error enum. A backend (the
//! SQLite implementation being the only one at present) implements all of them to act as the persistence gateway for
//! the Matrimony Nexus Server.
//!
//! * [`UserManagement`] - user accounts, roles and the premium flags.
//! * [`BiodataManagement`] - candidate profiles and the filtered search over them.
//! * [`ContactRequestManagement`] - contact-reveal requests and their read-time biodata enrichment.
//! * [`FavoriteManagement`] - per-user biodata bookmarks.
//! * [`PaymentManagement`] - payment records.
//! * [`StatsManagement`] - aggregate dashboard statistics.
//! * [`SuccessStoryManagement`] - testimonials.
mod biodata_management;
mod contact_request_management;
mod data_objects;
mod favorite_management;
mod payment_management;
mod stats_management;
mod success_story_management;
mod user_management;

pub use biodata_management::{BiodataError, BiodataManagement};
pub use contact_request_management::{ContactRequestError, ContactRequestManagement};
pub use data_objects::InsertRecordResult;
pub use favorite_management::{FavoriteError, FavoriteManagement};
pub use payment_management::{PaymentError, PaymentManagement};
pub use stats_management::{StatsError, StatsManagement};
pub use success_story_management::{SuccessStoryError, SuccessStoryManagement};
pub use user_management::{UserAccountError, UserManagement};
