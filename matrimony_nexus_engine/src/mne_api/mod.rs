//! The engine public API.
//!
//! One thin, typed facade per concern. Each facade wraps a backend implementing the corresponding trait from
//! [`crate::traits`] and is what the server stores in its application data.
pub mod biodata_api;
pub mod biodata_objects;
pub mod contact_request_api;
pub mod favorite_api;
pub mod payment_api;
pub mod stats_api;
pub mod success_story_api;
pub mod user_api;

pub use biodata_api::BiodataApi;
pub use contact_request_api::ContactRequestApi;
pub use favorite_api::FavoriteApi;
pub use payment_api::PaymentApi;
pub use stats_api::StatsApi;
pub use success_story_api::SuccessStoryApi;
pub use user_api::UserApi;
