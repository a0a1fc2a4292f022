pub mod report;
pub mod status;

use anyhow::Result;
use andon_api::types::Payload;
use serde::Serialize;

/// Prints the body that would be posted, without sending it.
pub fn print_payload<T: Serialize>(org_name: &str, request: &T) -> Result<()> {
    println!(
        "{}",
        serde_json::to_string_pretty(&Payload::new(org_name, request))?
    );
    Ok(())
}
