/// Output shape requested for a single compilation.
///
/// Only `intel` and `binary` influence the compiler's argument list. The
/// remaining flags describe assembly post-processing performed downstream by
/// the invoking framework and are carried here untouched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OutputFilters {
    /// Emit Intel-syntax assembly instead of the default dialect.
    pub intel: bool,
    /// Produce raw binary output rather than assembly text.
    pub binary: bool,
    /// Keep only referenced labels when post-processing assembly.
    pub labels: bool,
    /// Strip assembler directives when post-processing assembly.
    pub directives: bool,
    /// Strip comment-only lines when post-processing assembly.
    pub comment_only: bool,
    /// Demangle symbol names when post-processing assembly.
    pub demangle: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_no_filtering() {
        let filters = OutputFilters::default();
        assert!(!filters.intel);
        assert!(!filters.binary);
        assert!(!filters.labels);
        assert!(!filters.directives);
        assert!(!filters.comment_only);
        assert!(!filters.demangle);
    }
}
