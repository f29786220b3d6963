//! Resolves a Steam vanity URL to a 64-bit Steam ID.
//!
//! ```sh
//! cargo run -p steam-webapi-core --example resolve_vanity -- \
//!     --key <32-char key> gabelogannewell
//! ```

use clap::Parser;
use serde::Deserialize;
use steam_webapi_core::{Connection, Parameters, WebApiError};

#[derive(Parser)]
struct Args {
    /// Steam Web API key.
    #[arg(long)]
    key: String,

    /// Vanity name to resolve, the tail of a steamcommunity.com/id/ URL.
    vanity: String,
}

#[derive(Deserialize)]
struct Envelope {
    response: VanityResponse,
}

#[derive(Deserialize)]
struct VanityResponse {
    success: i32,
    steamid: Option<String>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), WebApiError> {
    let args = Args::parse();
    let conn = Connection::new(&args.key, true, false);
    let mut params = Parameters::new();
    params.add_string("vanityurl", &args.vanity);
    let body = conn
        .get("ISteamUser/ResolveVanityURL/v1/", params, true)
        .await?;

    match serde_json::from_slice::<Envelope>(&body) {
        Ok(envelope) if envelope.response.success == 1 => {
            println!(
                "{} => {}",
                args.vanity,
                envelope.response.steamid.unwrap_or_default()
            );
        }
        Ok(_) => eprintln!("no match for vanity name {}", args.vanity),
        Err(err) => eprintln!("unexpected response shape: {err}"),
    }
    Ok(())
}
