use std::sync::Mutex;

use serde_json::Value;

use crate::domain::dish::{Dish, DishDraft};
use crate::domain::errors::DomainError;
use crate::domain::ports::{Record, Repository};
use crate::domain::validation::{require_existing, Payload, DISH_FIELDS};

const RESOURCE: &str = "Dish";

fn not_found(id: &str) -> DomainError {
    DomainError::NotFound(format!("A dish with an ID of: {} could not be found", id))
}

pub struct DishService<R> {
    repo: R,
    /// Serialises each write chain, validators included.
    writes: Mutex<()>,
}

fn draft_from(payload: &Payload) -> Result<DishDraft, DomainError> {
    payload.require_all(&DISH_FIELDS)?;
    let price = payload.price()?;
    Ok(DishDraft {
        name: payload.text("name")?,
        description: payload.text("description")?,
        price,
        image_url: payload.text("image_url")?,
    })
}

impl<R: Repository<Dish>> DishService<R> {
    pub fn new(repo: R) -> Self {
        Self {
            repo,
            writes: Mutex::new(()),
        }
    }

    /// Validates a `{ data: {...} }` body and stores a dish under a fresh id.
    /// Any client-supplied `id` is ignored.
    pub fn create_dish(&self, body: &Value) -> Result<Dish, DomainError> {
        let _guard = self.writes.lock()?;
        let payload = Payload::from_body(RESOURCE, body);
        let draft = draft_from(&payload).inspect_err(|e| log::debug!("Rejected dish: {}", e))?;

        let dish = self.repo.create(draft)?;
        log::info!("Created dish {}", dish.id);
        Ok(dish)
    }

    /// Stores a seed entry, keeping its `id`.
    pub fn import_dish(&self, entry: &Value) -> Result<Dish, DomainError> {
        let _guard = self.writes.lock()?;
        let payload = Payload::from_data(RESOURCE, entry);
        let id = payload.id()?;
        let draft = draft_from(&payload)?;
        self.repo.insert(Dish::assemble(id, draft))
    }

    pub fn list_dishes(&self) -> Result<Vec<Dish>, DomainError> {
        self.repo.list()
    }

    pub fn get_dish(&self, id: &str) -> Result<Dish, DomainError> {
        require_existing::<Dish, _>(&self.repo, id, not_found)
    }

    /// Full replacement of every field; the route id always wins.
    pub fn update_dish(&self, id: &str, body: &Value) -> Result<Dish, DomainError> {
        let _guard = self.writes.lock()?;
        require_existing::<Dish, _>(&self.repo, id, not_found)?;

        let payload = Payload::from_body(RESOURCE, body);
        let draft = payload
            .require_all(&DISH_FIELDS)
            .and_then(|_| payload.check_route_id(id))
            .and_then(|_| draft_from(&payload))
            .inspect_err(|e| log::debug!("Rejected update of dish {}: {}", id, e))?;

        let dish = self
            .repo
            .update(id, draft)?
            .ok_or_else(|| not_found(id))?;
        log::info!("Updated dish {}", dish.id);
        Ok(dish)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::memory_store::InMemoryStore;
    use serde_json::json;

    fn service() -> DishService<InMemoryStore<Dish>> {
        DishService::new(InMemoryStore::new())
    }

    fn taco() -> Value {
        json!({ "data": {
            "name": "Taco",
            "description": "Corn tortilla, carnitas",
            "price": 5,
            "image_url": "https://example.com/taco.png"
        }})
    }

    #[test]
    fn create_ignores_client_id() {
        let svc = service();
        let mut body = taco();
        body["data"]["id"] = json!("client-chosen");

        let dish = svc.create_dish(&body).expect("create failed");

        assert_ne!(dish.id, "client-chosen");
        assert_eq!(dish.name, "Taco");
        assert_eq!(dish.price, 5);
    }

    #[test]
    fn create_checks_presence_before_price() {
        let svc = service();
        let mut body = taco();
        body["data"]["price"] = json!("5");
        body["data"]["image_url"] = json!("");

        let err = svc.create_dish(&body).unwrap_err();
        assert_eq!(err.to_string(), "Dish must include a image_url");
    }

    #[test]
    fn get_unknown_dish_is_not_found() {
        let err = service().get_dish("missing").unwrap_err();
        assert_eq!(
            err,
            DomainError::NotFound(
                "A dish with an ID of: missing could not be found".to_string()
            )
        );
    }

    #[test]
    fn update_checks_existence_first() {
        let err = service().update_dish("missing", &json!({})).unwrap_err();
        assert!(matches!(err, DomainError::NotFound(_)));
    }

    #[test]
    fn update_checks_presence_before_route_id() {
        let svc = service();
        let dish = svc.create_dish(&taco()).expect("create failed");

        let err = svc
            .update_dish(&dish.id, &json!({ "data": { "id": "other" } }))
            .unwrap_err();
        assert_eq!(err.to_string(), "Dish must include a name");
    }

    #[test]
    fn update_rejects_mismatched_body_id() {
        let svc = service();
        let dish = svc.create_dish(&taco()).expect("create failed");
        let mut body = taco();
        body["data"]["id"] = json!("other");

        let err = svc.update_dish(&dish.id, &body).unwrap_err();
        assert_eq!(
            err.to_string(),
            format!(
                "Dish id does not match route id. Dish: other, Route: {}",
                dish.id
            )
        );
    }

    #[test]
    fn update_replaces_all_fields() {
        let svc = service();
        let dish = svc.create_dish(&taco()).expect("create failed");
        let body = json!({ "data": {
            "id": dish.id,
            "name": "Burrito",
            "description": "Flour tortilla",
            "price": 9,
            "image_url": "https://example.com/burrito.png"
        }});

        let updated = svc.update_dish(&dish.id, &body).expect("update failed");

        assert_eq!(updated.id, dish.id);
        assert_eq!(updated.name, "Burrito");
        assert_eq!(updated.price, 9);
        assert_eq!(svc.get_dish(&dish.id).expect("get"), updated);
    }

    #[test]
    fn import_keeps_seed_id_and_validates() {
        let svc = service();
        let mut entry = taco()["data"].clone();
        entry["id"] = json!("seed-1");

        let dish = svc.import_dish(&entry).expect("import failed");
        assert_eq!(dish.id, "seed-1");

        entry["price"] = json!(0);
        entry["id"] = json!("seed-2");
        assert!(svc.import_dish(&entry).is_err());
        assert_eq!(svc.list_dishes().expect("list").len(), 1);
    }
}
