//! Built-in role catalogue

use super::types::{Action, Module, Permission, Role, RoleName, WILDCARD_RESOURCE};

/// Built-in roles shipped with the engine
///
/// Inheritance: `hr_manager -> manager -> employee` and
/// `payroll_manager -> employee`.
pub(super) fn default_roles() -> Vec<Role> {
    vec![
        // Super admin - platform-level, every check short-circuits to allow
        Role {
            id: "role_super_admin".to_string(),
            name: RoleName::SuperAdmin,
            display_name: "Super Administrator".to_string(),
            description: "Platform administrator with unrestricted access".to_string(),
            permissions: vec![
                Permission::new(
                    "sa_system_execute",
                    Module::System,
                    WILDCARD_RESOURCE,
                    Action::Execute,
                ),
                Permission::new(
                    "sa_admin_execute",
                    Module::Admin,
                    WILDCARD_RESOURCE,
                    Action::Execute,
                ),
            ],
            is_system_role: true,
            tenant_scoped: false,
            inherit_from: vec![],
        },
        // Admin - full tenant administration
        Role {
            id: "role_admin".to_string(),
            name: RoleName::Admin,
            display_name: "Administrator".to_string(),
            description: "Tenant administrator with broad access".to_string(),
            permissions: vec![
                Permission::new(
                    "adm_employees_create",
                    Module::Employees,
                    WILDCARD_RESOURCE,
                    Action::Create,
                ),
                Permission::new(
                    "adm_employees_read",
                    Module::Employees,
                    WILDCARD_RESOURCE,
                    Action::Read,
                ),
                Permission::new(
                    "adm_employees_update",
                    Module::Employees,
                    WILDCARD_RESOURCE,
                    Action::Update,
                ),
                Permission::new(
                    "adm_employees_delete",
                    Module::Employees,
                    WILDCARD_RESOURCE,
                    Action::Delete,
                ),
                Permission::new(
                    "adm_payroll_read",
                    Module::Payroll,
                    WILDCARD_RESOURCE,
                    Action::Read,
                ),
                Permission::new(
                    "adm_payroll_approve",
                    Module::Payroll,
                    WILDCARD_RESOURCE,
                    Action::Approve,
                ),
                Permission::new(
                    "adm_payroll_export",
                    Module::Payroll,
                    WILDCARD_RESOURCE,
                    Action::Export,
                ),
                Permission::new(
                    "adm_benefits_create",
                    Module::Benefits,
                    WILDCARD_RESOURCE,
                    Action::Create,
                ),
                Permission::new(
                    "adm_benefits_read",
                    Module::Benefits,
                    WILDCARD_RESOURCE,
                    Action::Read,
                ),
                Permission::new(
                    "adm_benefits_update",
                    Module::Benefits,
                    WILDCARD_RESOURCE,
                    Action::Update,
                ),
                Permission::new(
                    "adm_benefits_delete",
                    Module::Benefits,
                    WILDCARD_RESOURCE,
                    Action::Delete,
                ),
                Permission::new(
                    "adm_time_read",
                    Module::TimeTracking,
                    WILDCARD_RESOURCE,
                    Action::Read,
                ),
                Permission::new(
                    "adm_time_approve",
                    Module::TimeTracking,
                    WILDCARD_RESOURCE,
                    Action::Approve,
                ),
                Permission::new(
                    "adm_compliance_read",
                    Module::Compliance,
                    WILDCARD_RESOURCE,
                    Action::Read,
                ),
                Permission::new(
                    "adm_compliance_export",
                    Module::Compliance,
                    WILDCARD_RESOURCE,
                    Action::Export,
                ),
                Permission::new(
                    "adm_reports_read",
                    Module::Reports,
                    WILDCARD_RESOURCE,
                    Action::Read,
                ),
                Permission::new(
                    "adm_reports_export",
                    Module::Reports,
                    WILDCARD_RESOURCE,
                    Action::Export,
                ),
                Permission::new(
                    "adm_admin_create",
                    Module::Admin,
                    WILDCARD_RESOURCE,
                    Action::Create,
                ),
                Permission::new(
                    "adm_admin_read",
                    Module::Admin,
                    WILDCARD_RESOURCE,
                    Action::Read,
                ),
                Permission::new(
                    "adm_admin_update",
                    Module::Admin,
                    WILDCARD_RESOURCE,
                    Action::Update,
                ),
                Permission::new(
                    "adm_admin_delete",
                    Module::Admin,
                    WILDCARD_RESOURCE,
                    Action::Delete,
                ),
                Permission::new(
                    "adm_admin_execute",
                    Module::Admin,
                    WILDCARD_RESOURCE,
                    Action::Execute,
                ),
            ],
            is_system_role: true,
            tenant_scoped: true,
            inherit_from: vec![],
        },
        // Payroll manager - payroll operations plus everything an employee has
        Role {
            id: "role_payroll_manager".to_string(),
            name: RoleName::PayrollManager,
            display_name: "Payroll Manager".to_string(),
            description: "Runs and approves payroll for the tenant".to_string(),
            permissions: vec![
                Permission::new(
                    "pm_payroll_read",
                    Module::Payroll,
                    WILDCARD_RESOURCE,
                    Action::Read,
                ),
                Permission::new(
                    "pm_payroll_execute",
                    Module::Payroll,
                    "payroll_run",
                    Action::Execute,
                ),
                Permission::new(
                    "pm_payroll_approve",
                    Module::Payroll,
                    "payroll_run",
                    Action::Approve,
                ),
                Permission::new(
                    "pm_offcycle_create",
                    Module::Payroll,
                    "off_cycle_run",
                    Action::Create,
                ),
                Permission::new(
                    "pm_offcycle_execute",
                    Module::Payroll,
                    "off_cycle_run",
                    Action::Execute,
                ),
                Permission::new(
                    "pm_payroll_export",
                    Module::Payroll,
                    WILDCARD_RESOURCE,
                    Action::Export,
                ),
                Permission::new(
                    "pm_gl_import",
                    Module::Payroll,
                    "general_ledger",
                    Action::Import,
                ),
                Permission::new(
                    "pm_compensation_read",
                    Module::Employees,
                    "compensation",
                    Action::Read,
                ),
                Permission::new(
                    "pm_reports_read",
                    Module::Reports,
                    "payroll_summary",
                    Action::Read,
                ),
                Permission::new(
                    "pm_reports_export",
                    Module::Reports,
                    "payroll_summary",
                    Action::Export,
                ),
            ],
            is_system_role: true,
            tenant_scoped: true,
            inherit_from: vec![RoleName::Employee],
        },
        // HR manager - people operations, builds on manager
        Role {
            id: "role_hr_manager".to_string(),
            name: RoleName::HrManager,
            display_name: "HR Manager".to_string(),
            description: "Manages employee records and benefits".to_string(),
            permissions: vec![
                Permission::new(
                    "hr_employees_create",
                    Module::Employees,
                    WILDCARD_RESOURCE,
                    Action::Create,
                ),
                Permission::new(
                    "hr_employees_read",
                    Module::Employees,
                    WILDCARD_RESOURCE,
                    Action::Read,
                ),
                Permission::new(
                    "hr_employees_update",
                    Module::Employees,
                    WILDCARD_RESOURCE,
                    Action::Update,
                ),
                Permission::new(
                    "hr_onboarding_execute",
                    Module::Employees,
                    "onboarding",
                    Action::Execute,
                ),
                Permission::new(
                    "hr_benefits_read",
                    Module::Benefits,
                    WILDCARD_RESOURCE,
                    Action::Read,
                ),
                Permission::new(
                    "hr_benefits_update",
                    Module::Benefits,
                    "enrollment",
                    Action::Update,
                ),
                Permission::new(
                    "hr_benefits_approve",
                    Module::Benefits,
                    "enrollment",
                    Action::Approve,
                ),
                Permission::new(
                    "hr_compliance_read",
                    Module::Compliance,
                    WILDCARD_RESOURCE,
                    Action::Read,
                ),
                Permission::new(
                    "hr_reports_read",
                    Module::Reports,
                    "headcount",
                    Action::Read,
                ),
            ],
            is_system_role: true,
            tenant_scoped: true,
            inherit_from: vec![RoleName::Manager],
        },
        // Manager - direct-report oversight, builds on employee
        Role {
            id: "role_manager".to_string(),
            name: RoleName::Manager,
            display_name: "Manager".to_string(),
            description: "People manager with direct-report access".to_string(),
            permissions: vec![
                Permission::new(
                    "mgr_reports_read",
                    Module::Employees,
                    "direct_reports",
                    Action::Read,
                ),
                Permission::new(
                    "mgr_reports_update",
                    Module::Employees,
                    "direct_reports",
                    Action::Update,
                ),
                Permission::new(
                    "mgr_team_time_read",
                    Module::TimeTracking,
                    "team_timesheet",
                    Action::Read,
                ),
                Permission::new(
                    "mgr_timesheet_approve",
                    Module::TimeTracking,
                    "timesheet",
                    Action::Approve,
                ),
                Permission::new(
                    "mgr_timesheet_reject",
                    Module::TimeTracking,
                    "timesheet",
                    Action::Reject,
                ),
                Permission::new(
                    "mgr_team_summary_read",
                    Module::Reports,
                    "team_summary",
                    Action::Read,
                ),
            ],
            is_system_role: true,
            tenant_scoped: true,
            inherit_from: vec![RoleName::Employee],
        },
        // Employee - self-service baseline
        Role {
            id: "role_employee".to_string(),
            name: RoleName::Employee,
            display_name: "Employee".to_string(),
            description: "Self-service access to own records".to_string(),
            permissions: vec![
                Permission::new(
                    "emp_profile_read",
                    Module::Employees,
                    "own_profile",
                    Action::Read,
                ),
                Permission::new(
                    "emp_profile_update",
                    Module::Employees,
                    "own_profile",
                    Action::Update,
                ),
                Permission::new(
                    "emp_paystub_read",
                    Module::Payroll,
                    "own_paystub",
                    Action::Read,
                ),
                Permission::new(
                    "emp_timesheet_create",
                    Module::TimeTracking,
                    "own_timesheet",
                    Action::Create,
                ),
                Permission::new(
                    "emp_timesheet_read",
                    Module::TimeTracking,
                    "own_timesheet",
                    Action::Read,
                ),
                Permission::new(
                    "emp_timesheet_update",
                    Module::TimeTracking,
                    "own_timesheet",
                    Action::Update,
                ),
                Permission::new(
                    "emp_benefits_read",
                    Module::Benefits,
                    "own_enrollment",
                    Action::Read,
                ),
            ],
            is_system_role: true,
            tenant_scoped: true,
            inherit_from: vec![],
        },
        // Viewer - read-only directory and reports
        Role {
            id: "role_viewer".to_string(),
            name: RoleName::Viewer,
            display_name: "Viewer".to_string(),
            description: "Read-only access to directory and reports".to_string(),
            permissions: vec![
                Permission::new(
                    "vw_directory_read",
                    Module::Employees,
                    "directory",
                    Action::Read,
                ),
                Permission::new(
                    "vw_reports_read",
                    Module::Reports,
                    WILDCARD_RESOURCE,
                    Action::Read,
                ),
            ],
            is_system_role: true,
            tenant_scoped: true,
            inherit_from: vec![],
        },
        // Contractor - external worker, invoice submission is conditioned
        Role {
            id: "role_contractor".to_string(),
            name: RoleName::Contractor,
            display_name: "Contractor".to_string(),
            description: "External contractor with limited self-service".to_string(),
            permissions: vec![
                Permission::new(
                    "ctr_profile_read",
                    Module::Employees,
                    "own_profile",
                    Action::Read,
                ),
                Permission::new(
                    "ctr_timesheet_create",
                    Module::TimeTracking,
                    "own_timesheet",
                    Action::Create,
                ),
                Permission::new(
                    "ctr_timesheet_read",
                    Module::TimeTracking,
                    "own_timesheet",
                    Action::Read,
                ),
                Permission::new(
                    "ctr_invoice_create",
                    Module::Payroll,
                    "contractor_invoice",
                    Action::Create,
                )
                .with_conditions([("worker_type", "contractor")]),
            ],
            is_system_role: true,
            tenant_scoped: true,
            inherit_from: vec![],
        },
    ]
}
