pub mod config;
pub mod logging;

pub mod auth;
pub mod card;
pub mod dispatch;
pub mod retry;
pub mod transport;

pub use card::CardDocument;
pub use dispatch::{DispatchError, Dispatcher};
pub use transport::{CurlTransport, HttpResponse, Transport};
