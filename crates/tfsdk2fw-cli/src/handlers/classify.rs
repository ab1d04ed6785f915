//! Classify command handler

use super::utils::load_source;
use crate::cli::ClassifyArgs;
use crate::config::Config;
use crate::error::Result;
use crate::output::OutputWriter;
use tfsdk2fw_core::migration::classify_tree;

/// Handle the classify command
pub fn handle_classify(args: ClassifyArgs, config: &Config, output: &mut OutputWriter) -> Result<()> {
    let loaded = load_source(&args.source, config)?;

    let classified = classify_tree(&loaded.spec);
    tracing::debug!(
        type_name = %loaded.target.type_name(),
        properties = classified.len(),
        "Classified schema"
    );

    output.classification(&classified)
}
