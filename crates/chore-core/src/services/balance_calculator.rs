// ============================================================================
// Chore Core - Balance Calculator
// File: crates/chore-core/src/services/balance_calculator.rs
// ============================================================================
//! Pure computation of per-user balances.
//!
//! ```text
//! balance(U)   = generated(U) - consumed(U)
//! generated(U) = Σ task.value                    for tasks U performed
//! consumed(U)  = Σ task.value / nb_beneficiaries for tasks U benefited from
//! ```
//!
//! Every point a task generates is charged back in full to its beneficiaries,
//! so balances over a complete roster always sum to zero (up to float error).

use std::collections::HashMap;

use chore_shared::constants::BALANCE_EPSILON;
use chore_shared::EntityId;
use tracing::debug;

use crate::domain::{Task, User, UserBalance};

/// Stateless; every call builds its own map from the arguments only.
#[derive(Debug, Clone, Copy, Default)]
pub struct BalanceCalculator;

impl BalanceCalculator {
    pub fn new() -> Self {
        Self
    }

    /// Compute a balance for every user of the roster in one pass over the
    /// tasks. Users without activity get a zero balance.
    ///
    /// Doer or beneficiary ids that are not in `users` are skipped: the
    /// contribution for that id is dropped and nothing is raised. Membership is
    /// checked when a task is recorded, not here.
    pub fn compute_balances(&self, users: &[User], tasks: &[Task]) -> HashMap<EntityId, UserBalance> {
        let mut balances: HashMap<EntityId, UserBalance> = users
            .iter()
            .map(|user| (user.id, UserBalance::zero(user.id)))
            .collect();

        for task in tasks {
            match balances.get_mut(&task.doer_id()) {
                Some(doer) => doer.credit(task.value()),
                None => debug!(
                    "Skipping generated points of task {}: unknown doer {}",
                    task.id(),
                    task.doer_id()
                ),
            }

            let cost = task.cost_per_beneficiary();
            for beneficiary_id in task.beneficiary_ids() {
                match balances.get_mut(beneficiary_id) {
                    Some(beneficiary) => beneficiary.charge(cost),
                    None => debug!(
                        "Skipping share of task {}: unknown beneficiary {}",
                        task.id(),
                        beneficiary_id
                    ),
                }
            }
        }

        balances
    }

    /// The user with the lowest balance, i.e. the one who owes the most effort.
    ///
    /// Ties go to the first such user in `users` order. Returns `None` only
    /// when `users` is empty.
    pub fn suggest_next_doer<'a>(&self, users: &'a [User], tasks: &[Task]) -> Option<&'a User> {
        if users.is_empty() {
            return None;
        }

        let balances = self.compute_balances(users, tasks);
        let mut lowest: Option<(&User, f64)> = None;

        for user in users {
            let Some(user_balance) = balances.get(&user.id) else {
                continue;
            };
            // strict comparison keeps the earliest user among ties
            if lowest.map_or(true, |(_, min)| user_balance.balance < min) {
                lowest = Some((user, user_balance.balance));
            }
        }

        lowest.map(|(user, _)| user)
    }
}

/// Sum of all balances; zero for a consistent ledger.
pub fn total_balance(balances: &HashMap<EntityId, UserBalance>) -> f64 {
    balances.values().map(|b| b.balance).sum()
}

/// Whether the balances sum to zero within `BALANCE_EPSILON`, scaled by the
/// points generated in the group once those exceed 1.
pub fn is_balanced(balances: &HashMap<EntityId, UserBalance>) -> bool {
    let moved: f64 = balances.values().map(|b| b.points_generated).sum();
    total_balance(balances).abs() <= BALANCE_EPSILON * moved.max(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn user(name: &str) -> User {
        User::new(name.to_string(), format!("{}@test.com", name)).unwrap()
    }

    fn task(value: f64, doer: &User, beneficiaries: &[&User]) -> Task {
        Task::new(
            Uuid::new_v4(),
            value,
            doer.id,
            beneficiaries.iter().map(|u| u.id).collect(),
            Uuid::new_v4(),
            None,
            None,
        )
        .unwrap()
    }

    fn balance_of(id: EntityId, balance: f64) -> (EntityId, UserBalance) {
        let mut b = UserBalance::zero(id);
        b.balance = balance;
        if balance > 0.0 {
            b.points_generated = balance;
        } else {
            b.points_consumed = -balance;
        }
        (id, b)
    }

    fn assert_sum_is_zero(balances: &HashMap<EntityId, UserBalance>) {
        let sum = total_balance(balances);
        assert!(sum.abs() < 1e-10, "balances sum to {}", sum);
        assert!(is_balanced(balances));
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-10,
            "expected {}, got {}",
            expected,
            actual
        );
    }

    #[test]
    fn test_single_task_two_beneficiaries() {
        let alice = user("alice");
        let bob = user("bob");
        let users = vec![alice.clone(), bob.clone()];
        let tasks = vec![task(10.0, &alice, &[&alice, &bob])];

        let balances = BalanceCalculator::new().compute_balances(&users, &tasks);

        let a = balances[&alice.id];
        assert_eq!(a.points_generated, 10.0);
        assert_eq!(a.points_consumed, 5.0);
        assert_eq!(a.balance, 5.0);

        let b = balances[&bob.id];
        assert_eq!(b.points_generated, 0.0);
        assert_eq!(b.points_consumed, 5.0);
        assert_eq!(b.balance, -5.0);

        assert_sum_is_zero(&balances);
    }

    #[test]
    fn test_three_way_split() {
        let alice = user("alice");
        let bob = user("bob");
        let charlie = user("charlie");
        let users = vec![alice.clone(), bob.clone(), charlie.clone()];
        let tasks = vec![task(30.0, &bob, &[&alice, &bob, &charlie])];

        let balances = BalanceCalculator::new().compute_balances(&users, &tasks);

        assert_eq!(balances[&alice.id].balance, -10.0);
        assert_eq!(balances[&bob.id].balance, 20.0);
        assert_eq!(balances[&charlie.id].balance, -10.0);
        assert_sum_is_zero(&balances);
    }

    #[test]
    fn test_absent_user_pays_nothing() {
        let alice = user("alice");
        let bob = user("bob");
        let charlie = user("charlie");
        let users = vec![alice.clone(), bob.clone(), charlie.clone()];
        let tasks = vec![task(20.0, &alice, &[&alice, &bob])];

        let balances = BalanceCalculator::new().compute_balances(&users, &tasks);

        assert_eq!(balances[&alice.id].points_consumed, 10.0);
        assert_eq!(balances[&alice.id].balance, 10.0);
        assert_eq!(balances[&bob.id].points_consumed, 10.0);
        assert_eq!(balances[&bob.id].balance, -10.0);
        assert_eq!(balances[&charlie.id], UserBalance::zero(charlie.id));
        assert_sum_is_zero(&balances);
    }

    #[test]
    fn test_self_task_nets_to_zero() {
        let alice = user("alice");
        let users = vec![alice.clone()];
        let tasks = vec![task(50.0, &alice, &[&alice])];

        let balances = BalanceCalculator::new().compute_balances(&users, &tasks);

        let a = balances[&alice.id];
        assert_eq!(a.points_generated, 50.0);
        assert_eq!(a.points_consumed, 50.0);
        assert_eq!(a.balance, 0.0);
    }

    #[test]
    fn test_doer_excluded_from_beneficiaries() {
        let alice = user("alice");
        let bob = user("bob");
        let charlie = user("charlie");
        let users = vec![alice.clone(), bob.clone(), charlie.clone()];
        let tasks = vec![task(20.0, &alice, &[&bob, &charlie])];

        let balances = BalanceCalculator::new().compute_balances(&users, &tasks);

        assert_eq!(balances[&alice.id].balance, 20.0);
        assert_eq!(balances[&alice.id].points_consumed, 0.0);
        assert_eq!(balances[&bob.id].balance, -10.0);
        assert_eq!(balances[&charlie.id].balance, -10.0);
        assert_sum_is_zero(&balances);
    }

    #[test]
    fn test_zero_sum_without_tasks() {
        let users = vec![user("alice"), user("bob")];
        let balances = BalanceCalculator::new().compute_balances(&users, &[]);
        assert_eq!(balances.len(), 2);
        assert_sum_is_zero(&balances);
    }

    #[test]
    fn test_zero_sum_with_uneven_split() {
        let a = user("a");
        let b = user("b");
        let c = user("c");
        let users = vec![a.clone(), b.clone(), c.clone()];
        let tasks = vec![task(10.0, &a, &[&a, &b, &c])];

        let balances = BalanceCalculator::new().compute_balances(&users, &tasks);

        assert_close(balances[&b.id].points_consumed, 10.0 / 3.0);
        assert_sum_is_zero(&balances);
    }

    #[test]
    fn test_zero_sum_over_task_chain() {
        let alice = user("alice");
        let bob = user("bob");
        let charlie = user("charlie");
        let users = vec![alice.clone(), bob.clone(), charlie.clone()];
        let tasks = vec![
            task(10.0, &alice, &[&alice, &bob, &charlie]),
            task(20.0, &bob, &[&alice, &bob]),
            task(15.0, &charlie, &[&bob, &charlie]),
            task(25.0, &alice, &[&alice, &bob, &charlie]),
            task(5.0, &bob, &[&charlie]),
        ];

        let balances = BalanceCalculator::new().compute_balances(&users, &tasks);
        assert_sum_is_zero(&balances);
    }

    #[test]
    fn test_shared_flat_week() {
        let alice = user("alice");
        let bob = user("bob");
        let charlie = user("charlie");
        let users = vec![alice.clone(), bob.clone(), charlie.clone()];
        let tasks = vec![
            // monday: dishes, everyone home
            task(10.0, &alice, &[&alice, &bob, &charlie]),
            // tuesday: cooking, everyone home
            task(20.0, &bob, &[&alice, &bob, &charlie]),
            // wednesday: vacuuming, alice away
            task(15.0, &charlie, &[&bob, &charlie]),
            // thursday: cooking, charlie away
            task(20.0, &alice, &[&alice, &bob]),
            // friday: trash
            task(5.0, &bob, &[&alice, &bob]),
        ];

        let balances = BalanceCalculator::new().compute_balances(&users, &tasks);

        let a = balances[&alice.id];
        assert_eq!(a.points_generated, 30.0);
        assert_close(a.points_consumed, 22.5);
        assert_close(a.balance, 7.5);

        let b = balances[&bob.id];
        assert_eq!(b.points_generated, 25.0);
        assert_close(b.points_consumed, 30.0);
        assert_close(b.balance, -5.0);

        let c = balances[&charlie.id];
        assert_eq!(c.points_generated, 15.0);
        assert_close(c.points_consumed, 17.5);
        assert_close(c.balance, -2.5);

        assert_sum_is_zero(&balances);
    }

    #[test]
    fn test_task_order_does_not_matter() {
        let alice = user("alice");
        let bob = user("bob");
        let users = vec![alice.clone(), bob.clone()];
        let mut tasks = vec![
            task(7.0, &alice, &[&alice, &bob]),
            task(3.0, &bob, &[&bob]),
            task(11.0, &bob, &[&alice]),
        ];

        let calculator = BalanceCalculator::new();
        let forward = calculator.compute_balances(&users, &tasks);
        tasks.reverse();
        let backward = calculator.compute_balances(&users, &tasks);

        for id in [alice.id, bob.id] {
            assert_close(forward[&id].balance, backward[&id].balance);
        }
    }

    #[test]
    fn test_empty_input() {
        let calculator = BalanceCalculator::new();
        assert!(calculator.compute_balances(&[], &[]).is_empty());
        assert!(calculator.suggest_next_doer(&[], &[]).is_none());
    }

    #[test]
    fn test_zero_value_task_contributes_nothing() {
        let alice = user("alice");
        let bob = user("bob");
        let users = vec![alice.clone(), bob.clone()];
        let tasks = vec![task(0.0, &alice, &[&alice, &bob])];

        let balances = BalanceCalculator::new().compute_balances(&users, &tasks);

        assert_eq!(balances[&alice.id].balance, 0.0);
        assert_eq!(balances[&bob.id].balance, 0.0);
        assert_sum_is_zero(&balances);
    }

    #[test]
    fn test_unknown_ids_are_skipped() {
        let alice = user("alice");
        let stranger = user("stranger");
        let users = vec![alice.clone()];
        let tasks = vec![
            task(10.0, &stranger, &[&alice, &stranger]),
            task(4.0, &alice, &[&stranger]),
        ];

        let balances = BalanceCalculator::new().compute_balances(&users, &tasks);

        assert_eq!(balances.len(), 1);
        assert_eq!(balances[&alice.id].points_generated, 4.0);
        assert_eq!(balances[&alice.id].points_consumed, 5.0);
        assert!(!balances.contains_key(&stranger.id));
    }

    #[test]
    fn test_suggests_lowest_balance() {
        let alice = user("alice");
        let bob = user("bob");
        let charlie = user("charlie");
        let users = vec![alice.clone(), bob.clone(), charlie.clone()];
        let tasks = vec![
            task(30.0, &alice, &[&alice, &bob, &charlie]),
            task(6.0, &bob, &[&bob, &charlie]),
        ];

        let suggested = BalanceCalculator::new().suggest_next_doer(&users, &tasks).unwrap();
        assert_eq!(suggested.id, charlie.id);
    }

    #[test]
    fn test_suggestion_with_ties_returns_a_minimum() {
        let alice = user("alice");
        let bob = user("bob");
        let charlie = user("charlie");
        let users = vec![alice.clone(), bob.clone(), charlie.clone()];
        let tasks = vec![task(30.0, &alice, &[&alice, &bob, &charlie])];

        let calculator = BalanceCalculator::new();
        let balances = calculator.compute_balances(&users, &tasks);
        let min = balances.values().map(|b| b.balance).fold(f64::INFINITY, f64::min);

        let suggested = calculator.suggest_next_doer(&users, &tasks).unwrap();
        assert_eq!(balances[&suggested.id].balance, min);
        assert_ne!(suggested.id, alice.id);
        // first in roster order among the tied users
        assert_eq!(suggested.id, bob.id);
    }

    #[test]
    fn test_suggestion_without_tasks_is_first_user() {
        let users = vec![user("alice"), user("bob")];
        let suggested = BalanceCalculator::new().suggest_next_doer(&users, &[]).unwrap();
        assert_eq!(suggested.id, users[0].id);
    }

    #[test]
    fn test_duplicate_beneficiary_charged_per_occurrence() {
        let alice = user("alice");
        let bob = user("bob");
        let users = vec![alice.clone(), bob.clone()];
        let tasks = vec![task(9.0, &alice, &[&bob, &bob, &alice])];

        let balances = BalanceCalculator::new().compute_balances(&users, &tasks);

        assert_eq!(tasks[0].beneficiary_count(), 3);
        assert_eq!(balances[&bob.id].points_consumed, 6.0);
        assert_eq!(balances[&bob.id].balance, -6.0);
        assert_eq!(balances[&alice.id].points_consumed, 3.0);
        assert_eq!(balances[&alice.id].balance, 6.0);
        assert_sum_is_zero(&balances);
    }

    #[test]
    fn test_large_totals_stay_balanced() {
        let users: Vec<User> = ["a", "b", "c", "d", "e", "f", "g"].iter().map(|n| user(n)).collect();
        let everyone: Vec<&User> = users.iter().collect();
        let tasks: Vec<Task> = (0..200)
            .map(|i| {
                let doer = &users[i % users.len()];
                let present = &everyone[..1 + i % everyone.len()];
                task(1_234_567.89 + i as f64 * 0.37, doer, present)
            })
            .collect();

        let balances = BalanceCalculator::new().compute_balances(&users, &tasks);
        assert!(is_balanced(&balances), "sum {}", total_balance(&balances));
    }

    #[test]
    fn test_real_drift_is_not_balanced() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();

        let balances = HashMap::from([balance_of(a, 1_000_000.0), balance_of(b, -999_999.0)]);
        assert!(!is_balanced(&balances));

        let balances = HashMap::from([balance_of(a, 0.5), balance_of(b, -0.4)]);
        assert!(!is_balanced(&balances));
    }
}
