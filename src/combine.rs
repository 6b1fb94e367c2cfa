//! Cross-category combination.
//!
//! Both combiners are lazy; nothing is materialized until the caller
//! collects.

pub(crate) fn join(a: &str, b: &str) -> String {
    let mut out = String::with_capacity(a.len() + b.len());
    out.push_str(a);
    out.push_str(b);
    out
}

/// For every pair of categories `(A, B)` with `A` before `B`: all of `A`,
/// then `a+b` and `b+a` for every `a` in `A` and `b` in `B`.
///
/// `A` is re-emitted once per later category. Duplicates are collapsed by
/// the ranking stage.
pub fn combine(collections: &[Vec<String>]) -> impl Iterator<Item = String> + '_ {
    (0..collections.len()).flat_map(move |i| {
        let outer = &collections[i];
        collections[i + 1..].iter().flat_map(move |inner| {
            outer.iter().cloned().chain(outer.iter().flat_map(move |a| {
                inner.iter().flat_map(move |b| [join(a, b), join(b, a)])
            }))
        })
    })
}

/// Every term of the miscellaneous category against itself, both orders,
/// including each term doubled.
pub fn combine_with_self(terms: &[String]) -> impl Iterator<Item = String> + '_ {
    (0..terms.len()).flat_map(move |k| {
        let first = &terms[k];
        terms[k..]
            .iter()
            .flat_map(move |second| [join(first, second), join(second, first)])
    })
}
