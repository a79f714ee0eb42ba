mod access_token;
mod credentials;
mod order;

pub use access_token::AccessToken;
pub use credentials::Credentials;
pub(crate) use credentials::{LoginRequest, UserRequest};
pub use order::{IngredientId, NewOrder, OrderReceipt};
