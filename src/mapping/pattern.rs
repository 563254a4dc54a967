/// Whether a method name matched a getter or a setter naming pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessorKind {
    Getter,
    Setter,
}

/// Extracts a field name from a getter or setter method name.
///
/// `isX` (length > 2) and `getX` (length > 3) classify as getters,
/// `setX` (length > 3) as setters; the first character after the
/// prefix is lower-cased. Anything else is not an accessor.
///
/// Total and deterministic; never fails, only signals "no match".
pub fn extract_field_name(name: &str) -> Option<(String, AccessorKind)> {
    let (rest, kind) = if name.len() > 2 && name.starts_with("is") {
        (&name[2..], AccessorKind::Getter)
    } else if name.len() > 3 && name.starts_with("get") {
        (&name[3..], AccessorKind::Getter)
    } else if name.len() > 3 && name.starts_with("set") {
        (&name[3..], AccessorKind::Setter)
    } else {
        return None;
    };

    let mut chars = rest.chars();
    let first = chars.next()?;
    let mut field = String::with_capacity(rest.len());
    field.extend(first.to_lowercase());
    field.push_str(chars.as_str());
    Some((field, kind))
}
