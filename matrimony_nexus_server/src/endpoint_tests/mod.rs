mod auth;
mod biodatas;
mod favorites;
mod helpers;
mod mocks;
mod payments;
mod users;
