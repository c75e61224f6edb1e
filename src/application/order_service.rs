use std::sync::{Arc, Mutex};

use serde_json::Value;

use crate::domain::dish::Dish;
use crate::domain::errors::DomainError;
use crate::domain::lifecycle::{ensure_deletable, ensure_editable};
use crate::domain::order::{Order, OrderDraft, OrderLine};
use crate::domain::ports::{Record, Repository};
use crate::domain::validation::{require_existing, Payload, NEW_ORDER_FIELDS, ORDER_FIELDS};

const RESOURCE: &str = "Order";

fn not_found(id: &str) -> DomainError {
    DomainError::NotFound(format!("An order with an ID of {} could not be found.", id))
}

pub struct OrderService<R> {
    repo: R,
    /// Present only when order lines must name stored dishes.
    dishes: Option<Arc<dyn Repository<Dish>>>,
    writes: Mutex<()>,
}

fn new_order_draft(payload: &Payload) -> Result<OrderDraft, DomainError> {
    payload.require_all(&NEW_ORDER_FIELDS)?;
    let deliver_to = payload.text("deliverTo")?;
    let mobile_number = payload.text("mobileNumber")?;
    let dishes = payload.order_lines()?;
    let status = payload.initial_status()?;
    Ok(OrderDraft {
        deliver_to,
        mobile_number,
        dishes,
        status,
    })
}

impl<R: Repository<Order>> OrderService<R> {
    pub fn new(repo: R) -> Self {
        Self {
            repo,
            dishes: None,
            writes: Mutex::new(()),
        }
    }

    /// Rejects order lines whose `dishId` is missing or not a stored dish.
    pub fn verify_dish_references(mut self, dishes: Arc<dyn Repository<Dish>>) -> Self {
        self.dishes = Some(dishes);
        self
    }

    fn check_dish_references(&self, lines: &[OrderLine]) -> Result<(), DomainError> {
        let Some(dishes) = &self.dishes else {
            return Ok(());
        };
        for (i, line) in lines.iter().enumerate() {
            let Some(dish_id) = &line.dish_id else {
                return Err(DomainError::InvalidInput(format!(
                    "Dish {} must include a dishId",
                    i
                )));
            };
            if dishes.find_by_id(dish_id)?.is_none() {
                return Err(DomainError::InvalidInput(format!(
                    "Dish {} references unknown dish {}",
                    i, dish_id
                )));
            }
        }
        Ok(())
    }

    /// New orders start `pending` unless the body names another status.
    pub fn create_order(&self, body: &Value) -> Result<Order, DomainError> {
        let _guard = self.writes.lock()?;
        let payload = Payload::from_body(RESOURCE, body);
        let draft = new_order_draft(&payload)
            .and_then(|draft| self.check_dish_references(&draft.dishes).map(|_| draft))
            .inspect_err(|e| log::debug!("Rejected order: {}", e))?;

        let order = self.repo.create(draft)?;
        log::info!("Created order {} ({})", order.id, order.status);
        Ok(order)
    }

    /// Stores a seed entry, keeping its `id`.
    pub fn import_order(&self, entry: &Value) -> Result<Order, DomainError> {
        let _guard = self.writes.lock()?;
        let payload = Payload::from_data(RESOURCE, entry);
        let id = payload.id()?;
        let draft = new_order_draft(&payload)?;
        self.check_dish_references(&draft.dishes)?;
        self.repo.insert(Order::assemble(id, draft))
    }

    pub fn list_orders(&self) -> Result<Vec<Order>, DomainError> {
        self.repo.list()
    }

    pub fn get_order(&self, id: &str) -> Result<Order, DomainError> {
        require_existing::<Order, _>(&self.repo, id, not_found)
    }

    /// Full replacement of every field, status included. Delivered orders
    /// are frozen; any other status may be set, regressions included.
    pub fn update_order(&self, id: &str, body: &Value) -> Result<Order, DomainError> {
        let _guard = self.writes.lock()?;
        let current = require_existing::<Order, _>(&self.repo, id, not_found)?;

        let payload = Payload::from_body(RESOURCE, body);
        let draft = self
            .update_draft(&payload, &current)
            .inspect_err(|e| log::debug!("Rejected update of order {}: {}", id, e))?;

        let order = self
            .repo
            .update(id, draft)?
            .ok_or_else(|| not_found(id))?;
        log::info!("Updated order {} ({} -> {})", id, current.status, order.status);
        Ok(order)
    }

    fn update_draft(&self, payload: &Payload, current: &Order) -> Result<OrderDraft, DomainError> {
        payload.check_route_id(&current.id)?;
        ensure_editable(current.status)?;
        let status = payload.status()?;
        payload.require_all(&ORDER_FIELDS)?;
        let deliver_to = payload.text("deliverTo")?;
        let mobile_number = payload.text("mobileNumber")?;
        let dishes = payload.order_lines()?;
        self.check_dish_references(&dishes)?;
        Ok(OrderDraft {
            deliver_to,
            mobile_number,
            dishes,
            status,
        })
    }

    /// Only pending orders may be removed.
    pub fn delete_order(&self, id: &str) -> Result<(), DomainError> {
        let _guard = self.writes.lock()?;
        let current = require_existing::<Order, _>(&self.repo, id, not_found)?;
        ensure_deletable(current.status)
            .inspect_err(|e| log::debug!("Rejected delete of order {}: {}", id, e))?;

        if !self.repo.delete(id)? {
            return Err(not_found(id));
        }
        log::info!("Deleted order {}", id);
        Ok(())
    }
}
