//! # Models Module
//!
//! Petstore schema entities instantiated on the [`record`](crate::record)
//! core, one file per entity in the shape an OpenAPI client generator emits
//! them: a descriptor table, one accessor block per field, and the four
//! `Record` methods written field by field.
//!
//! Wire keys follow the schema's external naming convention (`photoUrls`,
//! `petId`, `userStatus`); accessors use the crate's snake_case names. The
//! translation lives entirely in each entity's descriptor consts.

mod api_response;
mod category;
mod order;
mod pet;
mod tag;
mod user;

pub use api_response::ApiResponse;
pub use category::Category;
pub use order::Order;
pub use pet::Pet;
pub use tag::Tag;
pub use user::User;
