//! Concurrency tests for the grants table
//!
//! The engine promises lock-free parallel reads and per-record
//! serialization of writes. These tests drive it from multiple threads.

#[cfg(test)]
mod tests {
    use crate::common::AccessDecisionAssertions;
    use std::sync::Arc;
    use std::thread;
    use workforce_authz::{Action, AuthzEngine, Module, Permission, RoleName};

    fn assert_send_sync<T: Send + Sync>() {}

    /// The engine must be shareable across threads as-is
    #[test]
    fn test_engine_is_send_and_sync() {
        assert_send_sync::<AuthzEngine>();
        assert_send_sync::<Arc<AuthzEngine>>();
    }

    /// Concurrent assigns of distinct roles to one record all land
    #[test]
    fn test_concurrent_assigns_on_same_record() {
        let engine = AuthzEngine::with_defaults();
        let roles = [
            RoleName::Employee,
            RoleName::Manager,
            RoleName::Viewer,
            RoleName::Contractor,
        ];

        thread::scope(|scope| {
            for role in roles {
                let engine = &engine;
                scope.spawn(move || {
                    engine.assign_role("u1", "t1", role, "stress").unwrap();
                });
            }
        });

        let assigned = engine.user_roles("u1", "t1");
        assert_eq!(assigned.len(), roles.len(), "lost a concurrent assign");
        for role in roles {
            assert!(assigned.contains(&role), "missing role {}", role);
        }
    }

    /// Repeated concurrent assigns of the same role never duplicate it
    #[test]
    fn test_repeated_assigns_stay_idempotent_under_contention() {
        let engine = AuthzEngine::with_defaults();

        thread::scope(|scope| {
            for _ in 0..8 {
                let engine = &engine;
                scope.spawn(move || {
                    for _ in 0..100 {
                        engine.assign_role("u1", "t1", RoleName::Viewer, "stress").unwrap();
                    }
                });
            }
        });

        assert_eq!(engine.user_roles("u1", "t1"), vec![RoleName::Viewer]);
    }

    /// Readers keep getting consistent decisions while another record churns
    #[test]
    fn test_checks_run_in_parallel_with_mutations() {
        let engine = AuthzEngine::with_defaults();
        engine
            .assign_role("reader", "t1", RoleName::Employee, "setup")
            .unwrap();

        thread::scope(|scope| {
            // Churn an unrelated record
            let writer_engine = &engine;
            scope.spawn(move || {
                for _ in 0..200 {
                    writer_engine
                        .assign_role("writer", "t1", RoleName::Manager, "stress")
                        .unwrap();
                    writer_engine.remove_role("writer", "t1", RoleName::Manager);
                }
            });

            for _ in 0..4 {
                let engine = &engine;
                scope.spawn(move || {
                    for _ in 0..200 {
                        let decision = engine.check_permission(
                            "reader",
                            "t1",
                            Module::Employees,
                            "own_profile",
                            Action::Read,
                            None,
                        );
                        decision.assert_allowed_via("emp_profile_read");
                    }
                });
            }
        });
    }

    /// Mutations on different records never interfere
    #[test]
    fn test_mutations_on_distinct_records() {
        let engine = AuthzEngine::with_defaults();

        thread::scope(|scope| {
            for worker in 0..8 {
                let engine = &engine;
                scope.spawn(move || {
                    let user_id = format!("user-{}", worker);
                    engine
                        .assign_role(&user_id, "t1", RoleName::Employee, "stress")
                        .unwrap();
                    engine
                        .assign_role(&user_id, "t1", RoleName::Viewer, "stress")
                        .unwrap();
                    engine.grant_custom_permission(
                        &user_id,
                        "t1",
                        Permission::new(
                            format!("grant-{}", worker),
                            Module::Reports,
                            "headcount",
                            Action::Export,
                        ),
                    );
                });
            }
        });

        for worker in 0..8 {
            let user_id = format!("user-{}", worker);
            let record = engine.user_permission(&user_id, "t1").unwrap();
            assert_eq!(record.roles, vec![RoleName::Employee, RoleName::Viewer]);
            assert_eq!(record.custom_permissions.len(), 1);
            assert_eq!(record.custom_permissions[0].id, format!("grant-{}", worker));
        }
    }

    /// An engine behind an Arc serves checks from many threads
    #[test]
    fn test_shared_engine_behind_arc() {
        let engine = Arc::new(AuthzEngine::with_defaults());
        engine
            .assign_role("u1", "t1", RoleName::SuperAdmin, "setup")
            .unwrap();

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let engine = Arc::clone(&engine);
                thread::spawn(move || {
                    for _ in 0..100 {
                        let decision = engine.check_permission(
                            "u1",
                            "t1",
                            Module::System,
                            "maintenance",
                            Action::Execute,
                            None,
                        );
                        assert!(decision.allowed);
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }
    }
}
