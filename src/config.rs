//! Configuration of a context.

/// The primary configuration structure.
#[derive(Clone, Debug)]
pub struct Config {
    /// Whether to store each resolvent and record the steps of a refutation.
    pub record_derivation: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            record_derivation: true,
        }
    }
}
