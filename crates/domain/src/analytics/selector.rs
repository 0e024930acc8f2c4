use std::{borrow::Cow, fmt, rc::Rc, sync::Arc};

use group_reduce_shared_kernel::GroupKey;
use serde_json::{Map, Value};

/// Records that can look up a named field for grouping.
pub trait FieldAccess {
    /// Key text of the named field, or `None` when the record has no such field.
    fn field_key(&self, name: &str) -> Option<GroupKey>;
}

impl FieldAccess for Map<String, Value> {
    fn field_key(&self, name: &str) -> Option<GroupKey> {
        self.get(name).map(GroupKey::from)
    }
}

/// Non-object values have no fields.
impl FieldAccess for Value {
    fn field_key(&self, name: &str) -> Option<GroupKey> {
        self.as_object().and_then(|fields| fields.field_key(name))
    }
}

impl<T: FieldAccess + ?Sized> FieldAccess for &T {
    fn field_key(&self, name: &str) -> Option<GroupKey> {
        (**self).field_key(name)
    }
}

impl<T: FieldAccess + ?Sized> FieldAccess for Box<T> {
    fn field_key(&self, name: &str) -> Option<GroupKey> {
        (**self).field_key(name)
    }
}

impl<T: FieldAccess + ?Sized> FieldAccess for Rc<T> {
    fn field_key(&self, name: &str) -> Option<GroupKey> {
        (**self).field_key(name)
    }
}

impl<T: FieldAccess + ?Sized> FieldAccess for Arc<T> {
    fn field_key(&self, name: &str) -> Option<GroupKey> {
        (**self).field_key(name)
    }
}

pub type KeyFn<'s, T> = Box<dyn FnMut(&T) -> GroupKey + 's>;

/// Key selector: a closure, or the name of a field to read.
pub enum Selector<'s, T> {
    Func(KeyFn<'s, T>),
    Field(Cow<'s, str>),
}

impl<'s, T> Selector<'s, T> {
    pub fn func<K, F>(mut f: F) -> Self
    where
        K: Into<GroupKey>,
        F: FnMut(&T) -> K + 's,
    {
        Self::Func(Box::new(move |record: &T| f(record).into()))
    }

    pub fn field(name: impl Into<Cow<'s, str>>) -> Self {
        Self::Field(name.into())
    }

    /// Collapses the selector into one callable; absent fields map to `missing`.
    pub fn resolve(self, missing: GroupKey) -> KeyFn<'s, T>
    where
        T: FieldAccess,
    {
        match self {
            Self::Func(f) => f,
            Self::Field(name) => {
                Box::new(move |record: &T| record.field_key(&name).unwrap_or_else(|| missing.clone()))
            }
        }
    }
}

impl<T> fmt::Debug for Selector<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Func(_) => f.write_str("Selector::Func(..)"),
            Self::Field(name) => f.debug_tuple("Selector::Field").field(name).finish(),
        }
    }
}

impl<'s, T> From<&'s str> for Selector<'s, T> {
    fn from(name: &'s str) -> Self {
        Self::Field(Cow::Borrowed(name))
    }
}

impl<T> From<String> for Selector<'_, T> {
    fn from(name: String) -> Self {
        Self::Field(Cow::Owned(name))
    }
}
