//! Output command - run one step and print what it captured

use shellpane::api::GetStepOutputRequest;
use shellpane::models::EnvOverride;
use shellpane::output::{OutputMode, StepOutputResult};

use super::Connection;

/// Fetch and print a step's output
pub async fn step_output(
    connection: &Connection,
    view: String,
    step: String,
    view_env: Vec<EnvOverride>,
    step_env: Vec<EnvOverride>,
    output_mode: OutputMode,
) -> anyhow::Result<()> {
    let (client, ctx) = connection.connect()?;
    let req = GetStepOutputRequest {
        view_name: view,
        step_name: step,
        view_env,
        step_env,
    };
    let rsp = client.get_step_output(&ctx, &req).await?;

    StepOutputResult::new(&req.view_name, &req.step_name, rsp.output).render(output_mode);
    Ok(())
}
