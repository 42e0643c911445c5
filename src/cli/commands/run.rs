//! Run command - the pre-commit format pass

use crate::config::Config;
use crate::error::HookResult;
use crate::runner::{LintRunner, Outcome, NO_FILES_MESSAGE};
use crate::ui::UiContext;
use tracing::debug;

/// Execute the format pass and return the process exit status
pub async fn execute(config: &Config) -> HookResult<u8> {
    let runner = LintRunner::new(config, UiContext::detect());
    let outcome = runner.run().await?;
    report(&outcome);
    debug!("Outcome: {:?}", outcome);
    Ok(outcome.exit_code())
}

/// Print what the user needs to see for `outcome`
fn report(outcome: &Outcome) {
    match outcome {
        Outcome::NoFiles => println!("{}", NO_FILES_MESSAGE),
        Outcome::Reported { output, .. } => {
            print!("{}", output);
            if !output.ends_with('\n') {
                println!();
            }
        }
        Outcome::Clean | Outcome::Failed { .. } => {}
    }
}
