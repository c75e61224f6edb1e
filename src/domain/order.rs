use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;

use super::ports::Record;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum OrderStatus {
    #[default]
    Pending,
    Preparing,
    OutForDelivery,
    Delivered,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 4] = [
        OrderStatus::Pending,
        OrderStatus::Preparing,
        OrderStatus::OutForDelivery,
        OrderStatus::Delivered,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Preparing => "preparing",
            OrderStatus::OutForDelivery => "out-for-delivery",
            OrderStatus::Delivered => "delivered",
        }
    }

    /// Exact, case-sensitive match against the wire names.
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == value)
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderLine {
    /// Referenced dish; only checked against the dish collection when
    /// reference verification is enabled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dish_id: Option<String>,
    pub quantity: u64,
    /// Any other attributes the client sent with the line.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub deliver_to: String,
    pub mobile_number: String,
    pub dishes: Vec<OrderLine>,
    pub status: OrderStatus,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderDraft {
    pub deliver_to: String,
    pub mobile_number: String,
    pub dishes: Vec<OrderLine>,
    pub status: OrderStatus,
}

impl Record for Order {
    type Draft = OrderDraft;

    fn id(&self) -> &str {
        &self.id
    }

    fn assemble(id: String, draft: OrderDraft) -> Self {
        Order {
            id,
            deliver_to: draft.deliver_to,
            mobile_number: draft.mobile_number,
            dishes: draft.dishes,
            status: draft.status,
        }
    }

    fn overwrite(&mut self, draft: OrderDraft) {
        self.deliver_to = draft.deliver_to;
        self.mobile_number = draft.mobile_number;
        self.dishes = draft.dishes;
        self.status = draft.status;
    }
}
