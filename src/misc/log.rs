/*!
Miscelanous items related to [logging](log).

Calls to the log macro are made throughout the library.
These are intended to help follow a refutation step by step.

Note, no log implementation is provided.
For more details, see [log].
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to [parsing](crate::builder)
    pub const PARSE: &str = "parse";

    /// Logs related to [resolution](crate::procedures::resolution)
    pub const RESOLUTION: &str = "resolution";

    /// Logs related to [refutation](crate::procedures::refutation)
    pub const REFUTATION: &str = "refutation";

    /// Logs related to the [clause database](crate::db)
    pub const CLAUSE_DB: &str = "clause_db";
}
