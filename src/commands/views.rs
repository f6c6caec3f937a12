//! Views command - list the server's view catalog

use shellpane::api::GetViewSpecsRequest;
use shellpane::output::{OutputMode, ViewListResult};

use super::Connection;

/// List views offered by the server
pub async fn views(connection: &Connection, output_mode: OutputMode) -> anyhow::Result<()> {
    let (client, ctx) = connection.connect()?;
    let rsp = client.get_view_specs(&ctx, &GetViewSpecsRequest).await?;

    ViewListResult::from(&rsp.config).render(output_mode);
    Ok(())
}
