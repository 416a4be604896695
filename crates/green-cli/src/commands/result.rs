use green_core::views::ResultView;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ResultArgs;
use crate::commands::shared::payload::read_analysis;
use crate::output::output;

/// Handle `greencheck result`.
pub fn handle(args: &ResultArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let analysis = args.input.as_deref().map(read_analysis).transpose()?;
    let view = ResultView::open(analysis.as_ref(), None)?;
    output(&view, flags.format)
}
