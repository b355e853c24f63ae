//! Text helpers shared by the parser, the record writer and name resolution.

/// Replace tab, newline and carriage return with a single space each.
///
/// Every field written to the event log goes through this, so a record line
/// can always be split on `\t` without ambiguity.
pub fn sanitize_field(s: &str) -> String {
    s.replace(['\n', '\r', '\t'], " ")
}
