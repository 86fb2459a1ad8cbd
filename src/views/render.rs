//! Diagnostic rendering shared by the views: `ViewName([(a, b), (c,)])`.
//!
//! Not a parseable format. Labels are printed with `Debug`, each key as a
//! plain tuple regardless of whether it is a set or a sequence.

use std::fmt;

/// Labels rendered as a tuple: `(a,)`, `(a, b)`.
pub(crate) struct LabelTuple<'a, L>(pub(crate) &'a [L]);

impl<L: fmt::Debug> fmt::Debug for LabelTuple<'_, L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut t = f.debug_tuple("");
        for label in self.0 {
            t.field(label);
        }
        t.finish()
    }
}

/// Key rendered for error messages.
pub(crate) fn key_string<L: fmt::Debug>(labels: &[L]) -> String {
    format!("{:?}", LabelTuple(labels))
}

/// Write `view(items)` with `items` as a list.
pub(crate) fn write_view<I>(f: &mut fmt::Formatter<'_>, view: &str, items: I) -> fmt::Result
where
    I: IntoIterator,
    I::Item: fmt::Debug,
{
    write!(f, "{view}(")?;
    f.debug_list().entries(items).finish()?;
    f.write_str(")")
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Demo(Vec<Vec<u32>>);

    impl fmt::Display for Demo {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write_view(f, "Demo", self.0.iter().map(|k| LabelTuple(k.as_slice())))
        }
    }

    #[test]
    fn singletons_get_a_trailing_comma() {
        assert_eq!(key_string(&[7]), "(7,)");
        assert_eq!(key_string(&["a", "b"]), r#"("a", "b")"#);
        assert_eq!(Demo(vec![vec![1], vec![1, 2]]).to_string(), "Demo([(1,), (1, 2)])");
        assert_eq!(Demo(Vec::new()).to_string(), "Demo([])");
    }
}
