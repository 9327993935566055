//! Typed Ids

use std::{
    cmp::Ordering,
    fmt::{Debug, Display, Formatter, Result as FmtResult},
    hash::{Hash, Hasher},
    marker::PhantomData,
};

/// Store-assigned integer key tagged with the record type it identifies.
pub struct TypedId<T>(i32, PhantomData<T>);

impl<T> TypedId<T> {
    #[must_use]
    pub const fn from_raw(id: i32) -> Self {
        Self(id, PhantomData)
    }

    #[must_use]
    pub const fn into_raw(self) -> i32 {
        self.0
    }
}

impl<T> Clone for TypedId<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for TypedId<T> {}

impl<T> Debug for TypedId<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        Debug::fmt(&self.0, f)
    }
}

impl<T> Display for TypedId<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        Display::fmt(&self.0, f)
    }
}

impl<T> PartialEq for TypedId<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<T> Eq for TypedId<T> {}

impl<T> Hash for TypedId<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

impl<T> PartialOrd for TypedId<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for TypedId<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

impl<T> From<i32> for TypedId<T> {
    fn from(value: i32) -> Self {
        Self::from_raw(value)
    }
}

impl<T> From<TypedId<T>> for i32 {
    fn from(value: TypedId<T>) -> Self {
        value.into_raw()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Widget;

    type WidgetId = TypedId<Widget>;

    #[test]
    fn displays_as_bare_integer() {
        assert_eq!(WidgetId::from_raw(42).to_string(), "42");
        assert_eq!(format!("{:?}", WidgetId::from_raw(7)), "7");
    }

    #[test]
    fn orders_by_raw_value() {
        let mut ids = vec![WidgetId::from(3), WidgetId::from(1), WidgetId::from(2)];

        ids.sort();

        let raw: Vec<i32> = ids.into_iter().map(Into::into).collect();

        assert_eq!(raw, vec![1, 2, 3]);
    }
}
