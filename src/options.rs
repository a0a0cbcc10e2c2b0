use crate::{config::CompilerConfig, filters::OutputFilters};
use std::path::Path;

/// Per-toolchain selection of compiler command-line arguments.
///
/// Implementations are stateless and side-effect free; the invoking pipeline
/// owns process spawning and passes the returned tokens through verbatim, in
/// order.
pub trait OptionStrategy {
    /// Builds the ordered argument list for one compilation request.
    fn options_for_filter(
        &self,
        filters: &OutputFilters,
        output: &Path,
        config: &CompilerConfig,
    ) -> Vec<String>;
}

/// Option selection for the `agbcc` toolchain.
///
/// The output designation always comes first. Intel-syntax tokens are
/// appended only when the toolchain advertises them and the request asks for
/// Intel-syntax assembly text; a binary request suppresses them.
#[derive(Debug, Clone, Copy, Default)]
pub struct Agbcc;

impl OptionStrategy for Agbcc {
    fn options_for_filter(
        &self,
        filters: &OutputFilters,
        output: &Path,
        config: &CompilerConfig,
    ) -> Vec<String> {
        let mut options = vec!["-o".to_owned(), output.to_string_lossy().into_owned()];
        if let Some(intel_asm) = config.intel_asm.as_deref() {
            if !intel_asm.is_empty() && filters.intel && !filters.binary {
                // Split on single spaces; a run of spaces passes empty tokens
                // through unchanged.
                options.extend(intel_asm.split(' ').map(str::to_owned));
            }
        }
        options
    }
}
