//! Mapping from reported column types to emitted member types.

/// Maps a reported column type to the emitted member type name.
///
/// A parenthesized length/precision qualifier is dropped before lookup, so
/// `varchar(255)` maps the same as `varchar`. The lookup is exact-case:
/// both engines report these names lowercase, and case-folding here would
/// silently change generated output for existing schemas. Types without an
/// entry pass through unchanged.
///
/// Total over all inputs; never fails.
pub fn map_type(raw_type: &str) -> &str {
    let base = match raw_type.find('(') {
        Some(idx) => &raw_type[..idx],
        None => raw_type,
    };

    match base {
        "int" => "int",
        "bigint" => "int64",
        "varchar" => "string",
        "timestamp" => "datetime",
        "float" => "float64",
        "text" => "string",
        "integer" => "int64",
        "timestamp without time zone" => "datetime",
        other => other,
    }
}
