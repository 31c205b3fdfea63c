//! Per-user balance, derived on every query and never persisted

use chore_shared::EntityId;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserBalance {
    pub user_id: EntityId,
    /// Sum of values of tasks the user performed
    pub points_generated: f64,
    /// Sum of the shares charged to the user as a beneficiary
    pub points_consumed: f64,
    /// `points_generated - points_consumed`
    pub balance: f64,
}

impl UserBalance {
    pub fn zero(user_id: EntityId) -> Self {
        Self {
            user_id,
            points_generated: 0.0,
            points_consumed: 0.0,
            balance: 0.0,
        }
    }

    pub(crate) fn credit(&mut self, points: f64) {
        self.points_generated += points;
        self.balance += points;
    }

    pub(crate) fn charge(&mut self, points: f64) {
        self.points_consumed += points;
        self.balance -= points;
    }
}
