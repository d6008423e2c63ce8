use crate::field::FieldAccess;

/// True if every whitespace-separated term of `query` occurs, ignoring case,
/// in at least one of `fields`. A blank query matches everything.
pub fn matches_query<T, S>(item: &T, fields: &[S], query: &str) -> bool
where
    T: FieldAccess + ?Sized,
    S: AsRef<str>,
{
    let haystacks: Vec<String> = fields
        .iter()
        .filter_map(|field| item.field(field.as_ref()).to_text())
        .map(|text| text.to_lowercase())
        .collect();

    query
        .split_whitespace()
        .map(str::to_lowercase)
        .all(|term| haystacks.iter().any(|h| h.contains(&term)))
}

/// Borrow the items matching `query`, in input order.
pub fn filter_items<'a, T, S>(items: &'a [T], fields: &[S], query: &str) -> Vec<&'a T>
where
    T: FieldAccess,
    S: AsRef<str>,
{
    if query.trim().is_empty() {
        return items.iter().collect();
    }
    items
        .iter()
        .filter(|item| matches_query(*item, fields, query))
        .collect()
}
