//! Single-shot HTTP status check.

use std::time::Duration;

use crate::error::{E2eError, E2eResult};

/// Issue one GET and require status 200 exactly.
///
/// The body is not under test and is dropped unread, which cancels the
/// transfer. Transport errors and non-200 statuses are hard failures.
pub async fn expect_ok(url: &str) -> E2eResult<()> {
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(5))
        .build()?;

    let response = client.get(url).send().await?;
    let status = response.status().as_u16();
    if status != 200 {
        return Err(E2eError::HttpStatus {
            url: url.to_string(),
            status,
        });
    }
    Ok(())
}
