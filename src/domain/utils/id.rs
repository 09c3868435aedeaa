use serde::Serialize;
use std::fmt;
use std::marker::PhantomData;

/// Typed string identifier. Ordering and equality are those of the inner string.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Hash, Serialize)]
#[serde(transparent)]
pub struct Id<T> {
    pub id: String,
    #[serde(skip)]
    _marker: PhantomData<T>,
}

impl<T> Id<T> {
    pub fn new(id: impl Into<String>) -> Self {
        Id { id: id.into(), _marker: PhantomData }
    }

    pub fn as_str(&self) -> &str {
        &self.id
    }
}

impl<T> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}

impl<T> From<Id<T>> for String {
    fn from(id_wrapper: Id<T>) -> Self {
        id_wrapper.id
    }
}

impl<T> From<&str> for Id<T> {
    fn from(id: &str) -> Self {
        Id::new(id)
    }
}

impl<T> From<String> for Id<T> {
    fn from(id: String) -> Self {
        Id::new(id)
    }
}

impl<T> fmt::Debug for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let full_name = std::any::type_name::<T>();
        let clean_name = full_name.split("::").last().unwrap_or(full_name);
        let display_name = clean_name.replace("Tag", "Id");

        write!(f, "{}: {:?}", display_name, self.id)
    }
}

#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Hash, Copy)]
pub struct RouterTag;

pub type RouterId = Id<RouterTag>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_router_id_orders_like_strings() {
        let mut ids = vec![RouterId::new("b"), RouterId::new("B"), RouterId::new("a"), RouterId::new("A|"), RouterId::new("AB")];
        ids.sort();
        let names: Vec<&str> = ids.iter().map(|id| id.as_str()).collect();

        assert_eq!(names, vec!["AB", "A|", "B", "a", "b"]);
    }

    #[test]
    fn test_router_id_debug_uses_tag_name() {
        assert_eq!(format!("{:?}", RouterId::new("R1")), "RouterId: \"R1\"");
    }
}
