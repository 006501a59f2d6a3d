pub mod url;

pub use url::{url_decode, url_encode};
