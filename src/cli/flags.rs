#[derive(Debug, Default)]
pub struct CliFlags {
    pub help: bool,
    pub version: bool,
    pub quiet: bool,
    pub verbose: bool,
    pub clipboard: bool,
    pub saved: bool,
    pub save: bool,
    pub exhaustive: bool,
    pub strict_pairs: bool,
    pub min: Option<usize>,
    pub max: Option<usize>,
    pub number: Option<usize>,
    pub criteria: Option<String>,
    pub wordlist: Option<String>,
    pub output: Option<String>,
}

impl CliFlags {
    /// Anything that changes what gets generated, as opposed to how the
    /// program reports.
    pub fn has_explicit_args(&self) -> bool {
        self.min.is_some()
            || self.max.is_some()
            || self.number.is_some()
            || self.criteria.is_some()
            || self.wordlist.is_some()
            || self.output.is_some()
            || self.exhaustive
            || self.strict_pairs
    }
}
