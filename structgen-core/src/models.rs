//! Column metadata produced by schema introspection.

/// One reported table column, normalized across engines.
///
/// `name` and `raw_type` are always populated when a reader returns a row.
/// The remaining fields are engine-dependent and stay empty for engines
/// that do not report them: the PostgreSQL reader fills only `name`,
/// `raw_type` and `comment`.
///
/// Descriptors are constructed fresh per result row, never mutated, and
/// consumed once by the declaration emitter.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ColumnDescriptor {
    /// Column name as reported by the engine
    pub name: String,
    /// Reported type, possibly carrying a parenthesized qualifier
    /// (`varchar(255)`)
    pub raw_type: String,
    /// Nullability flag as reported ("YES"/"NO" on MySQL)
    pub nullable: String,
    /// Key kind ("PRI", "UNI", "MUL" on MySQL)
    pub key: String,
    /// Default value expression
    pub default_value: String,
    /// Extra attributes ("auto_increment" and friends)
    pub extra: String,
    /// Privileges granted to the current user on this column
    pub privileges: String,
    /// Column comment, empty when none is set
    pub comment: String,
}
