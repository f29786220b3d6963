//! Runtime support for generated Steam Web API clients.
//!
//! Generated request descriptors borrow a [`Connection`] to transmit
//! themselves: they collect their fields into a [`Parameters`] set and hand
//! it to [`Connection::get`] or [`Connection::post`]. Nothing in this crate
//! knows about any particular interface or method; the shape of every call
//! comes from the generated code.
//!
//! ## Examples
//!
//! ```no_run
//! use steam_webapi_core::{Connection, Parameters};
//!
//! # async fn demo() -> Result<(), steam_webapi_core::WebApiError> {
//! let conn = Connection::new("0123456789abcdef0123456789abcdef", true, false);
//! let mut params = Parameters::new();
//! params.add_string("vanityurl", "gabelogannewell");
//! let body = conn.get("ISteamUser/ResolveVanityURL/v1/", params, true).await?;
//! # let _ = body;
//! # Ok(())
//! # }
//! ```

mod connection;
mod error;
mod params;

pub use connection::Connection;
pub use error::WebApiError;
pub use params::Parameters;

/// Host serving the public Web API.
pub const PUBLIC_HOST: &str = "api.steampowered.com";

/// Host serving the partner Web API. Partner calls always use HTTPS and
/// always carry the API key.
pub const PARTNER_HOST: &str = "partner.steam-api.com";
