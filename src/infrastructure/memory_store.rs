use std::sync::RwLock;

use uuid::Uuid;

use crate::domain::errors::DomainError;
use crate::domain::ports::{Record, Repository};

/// Process-local collection kept in insertion order.
pub struct InMemoryStore<T> {
    records: RwLock<Vec<T>>,
}

impl<T: Record> InMemoryStore<T> {
    pub fn new() -> Self {
        Self::with_records(Vec::new())
    }

    pub fn with_records(records: Vec<T>) -> Self {
        Self {
            records: RwLock::new(records),
        }
    }
}

impl<T: Record> Default for InMemoryStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

fn next_id() -> String {
    Uuid::new_v4().simple().to_string()
}

impl<T: Record> Repository<T> for InMemoryStore<T> {
    fn create(&self, draft: T::Draft) -> Result<T, DomainError> {
        let record = T::assemble(next_id(), draft);
        self.records.write()?.push(record.clone());
        Ok(record)
    }

    fn insert(&self, record: T) -> Result<T, DomainError> {
        let mut records = self.records.write()?;
        if records.iter().any(|r| r.id() == record.id()) {
            return Err(DomainError::InvalidInput(format!(
                "Duplicate id: {}",
                record.id()
            )));
        }
        records.push(record.clone());
        Ok(record)
    }

    fn list(&self) -> Result<Vec<T>, DomainError> {
        Ok(self.records.read()?.clone())
    }

    fn find_by_id(&self, id: &str) -> Result<Option<T>, DomainError> {
        Ok(self.records.read()?.iter().find(|r| r.id() == id).cloned())
    }

    fn update(&self, id: &str, draft: T::Draft) -> Result<Option<T>, DomainError> {
        let mut records = self.records.write()?;
        let Some(record) = records.iter_mut().find(|r| r.id() == id) else {
            return Ok(None);
        };
        record.overwrite(draft);
        Ok(Some(record.clone()))
    }

    fn delete(&self, id: &str) -> Result<bool, DomainError> {
        let mut records = self.records.write()?;
        let Some(index) = records.iter().position(|r| r.id() == id) else {
            return Ok(false);
        };
        records.remove(index);
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::dish::{Dish, DishDraft};

    fn draft(name: &str) -> DishDraft {
        DishDraft {
            name: name.to_string(),
            description: "tasty".to_string(),
            price: 5,
            image_url: "https://example.com/dish.png".to_string(),
        }
    }

    #[test]
    fn create_assigns_hex_id_and_find_by_id_roundtrip() {
        let store = InMemoryStore::<Dish>::new();

        let dish = store.create(draft("Taco")).expect("create failed");
        assert_eq!(dish.id.len(), 32);
        assert!(dish.id.chars().all(|c| c.is_ascii_hexdigit()));

        let found = store
            .find_by_id(&dish.id)
            .expect("find failed")
            .expect("dish should exist");
        assert_eq!(found, dish);
    }

    #[test]
    fn ids_are_unique_per_create() {
        let store = InMemoryStore::<Dish>::new();
        let a = store.create(draft("a")).expect("create failed");
        let b = store.create(draft("b")).expect("create failed");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn find_by_id_is_exact_match() {
        let store = InMemoryStore::<Dish>::new();
        let dish = store.create(draft("Taco")).expect("create failed");

        assert!(store.find_by_id(&dish.id[..8]).expect("find").is_none());
        assert!(store
            .find_by_id(&dish.id.to_uppercase())
            .expect("find")
            .is_none());
    }

    #[test]
    fn list_preserves_insertion_order() {
        let store = InMemoryStore::<Dish>::new();
        for name in ["a", "b", "c"] {
            store.create(draft(name)).expect("create failed");
        }
        let names: Vec<String> = store
            .list()
            .expect("list failed")
            .into_iter()
            .map(|d| d.name)
            .collect();
        assert_eq!(names, ["a", "b", "c"]);
    }

    #[test]
    fn update_overwrites_fields_but_keeps_id() {
        let store = InMemoryStore::<Dish>::new();
        let dish = store.create(draft("Taco")).expect("create failed");

        let updated = store
            .update(&dish.id, draft("Burrito"))
            .expect("update failed")
            .expect("dish should exist");

        assert_eq!(updated.id, dish.id);
        assert_eq!(updated.name, "Burrito");
        assert_eq!(store.list().expect("list").len(), 1);
    }

    #[test]
    fn update_unknown_id_returns_none() {
        let store = InMemoryStore::<Dish>::new();
        assert!(store.update("nope", draft("x")).expect("update").is_none());
    }

    #[test]
    fn delete_removes_only_matching_record() {
        let store = InMemoryStore::<Dish>::new();
        let keep = store.create(draft("keep")).expect("create failed");
        let gone = store.create(draft("gone")).expect("create failed");

        assert!(store.delete(&gone.id).expect("delete failed"));
        assert!(!store.delete(&gone.id).expect("delete failed"));
        assert_eq!(store.list().expect("list"), vec![keep]);
    }

    #[test]
    fn insert_rejects_duplicate_ids() {
        let store = InMemoryStore::<Dish>::new();
        let dish = Dish::assemble("fixed".to_string(), draft("Taco"));
        store.insert(dish.clone()).expect("first insert");
        assert!(matches!(
            store.insert(dish),
            Err(DomainError::InvalidInput(_))
        ));
    }
}
