//! Demo command - load sample tasks

use anyhow::Result;

use super::{get_context, get_logger, log_event, require_session};
use crate::output;
use taskdeck_core::ports::TaskFeedProvider;
use taskdeck_core::LogEvent;

pub fn run(json: bool) -> Result<()> {
    let ctx = get_context()?;
    require_session(&ctx)?;
    let logger = get_logger();

    let provider = ctx.task_feed()?;
    let result = match ctx.demo_service.load(provider.as_ref()) {
        Ok(result) => result,
        Err(e) => {
            log_event(
                &logger,
                LogEvent::new("demo_load_failed")
                    .with_command("demo")
                    .with_provider(provider.name())
                    .with_error(e.to_string()),
            );
            return Err(e.into());
        }
    };

    log_event(
        &logger,
        LogEvent::new("demo_load")
            .with_command("demo")
            .with_provider(&result.provider),
    );

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    output::success(&format!(
        "Loaded {} sample tasks from the {} feed",
        result.loaded, result.provider
    ));
    println!("Run 'td list' to see them.");
    Ok(())
}
