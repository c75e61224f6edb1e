use std::sync::Arc;

use super::errors::DomainError;

/// A stored resource with an immutable identifier.
pub trait Record: Clone + Send + Sync + 'static {
    /// The validated, id-less field set a create or update writes.
    type Draft;

    fn id(&self) -> &str;
    fn assemble(id: String, draft: Self::Draft) -> Self;
    /// Full replacement of every mutable field.
    fn overwrite(&mut self, draft: Self::Draft);
}

pub trait Repository<T: Record>: Send + Sync + 'static {
    fn create(&self, draft: T::Draft) -> Result<T, DomainError>;
    /// Stores a record that already carries its identifier.
    fn insert(&self, record: T) -> Result<T, DomainError>;
    fn list(&self) -> Result<Vec<T>, DomainError>;
    fn find_by_id(&self, id: &str) -> Result<Option<T>, DomainError>;
    fn update(&self, id: &str, draft: T::Draft) -> Result<Option<T>, DomainError>;
    /// Returns whether a record was removed.
    fn delete(&self, id: &str) -> Result<bool, DomainError>;
}

impl<T, R> Repository<T> for Arc<R>
where
    T: Record,
    R: Repository<T> + ?Sized,
{
    fn create(&self, draft: T::Draft) -> Result<T, DomainError> {
        (**self).create(draft)
    }

    fn insert(&self, record: T) -> Result<T, DomainError> {
        (**self).insert(record)
    }

    fn list(&self) -> Result<Vec<T>, DomainError> {
        (**self).list()
    }

    fn find_by_id(&self, id: &str) -> Result<Option<T>, DomainError> {
        (**self).find_by_id(id)
    }

    fn update(&self, id: &str, draft: T::Draft) -> Result<Option<T>, DomainError> {
        (**self).update(id, draft)
    }

    fn delete(&self, id: &str) -> Result<bool, DomainError> {
        (**self).delete(id)
    }
}
