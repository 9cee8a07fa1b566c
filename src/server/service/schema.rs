//! Idempotent schema reconciliation.
//!
//! Versioned migrations create the schema, but databases that predate multi-tenancy may
//! still lack the tenancy columns. The reconciler checks each required column and adds
//! whatever is missing. It runs at boot and inside every health check, so it must be
//! cheap when nothing is missing and must survive two processes racing on the same
//! column. Foreign keys already listed in `information_schema` are never re-created, and
//! a constraint that cannot be added is reported instead of failing the pass.

use std::collections::HashSet;

use migration::SchemaManager;
use sea_orm::{
    sea_query::{Alias, ColumnDef, ForeignKey, ForeignKeyAction, Table},
    DatabaseConnection, DbBackend, DbErr, FromQueryResult, Statement,
};

/// Tables partitioned by tenant.
const TENANT_TABLES: &[&str] = &[
    "branches",
    "roles",
    "users",
    "table_groups",
    "restaurant_tables",
    "menu_items",
    "orders",
    "order_items",
    "order_feedback",
    "ingredients",
    "recipe_items",
    "waste_log",
    "staff",
    "support_tickets",
];

/// Tables further partitioned by branch.
const BRANCH_TABLES: &[&str] = &[
    "menu_items",
    "restaurant_tables",
    "orders",
    "ingredients",
    "users",
    "staff",
];

/// Tables whose company reference is not already constrained by their migration.
const COMPANY_FK_TABLES: &[&str] = &[
    "table_groups",
    "restaurant_tables",
    "menu_items",
    "orders",
    "ingredients",
    "staff",
];

/// Error fragments raised when another process added the same definition first.
const DUPLICATE_DEFINITION_MARKERS: &[&str] = &[
    "duplicate column name",
    "already exists",
    "duplicate column",
    "er_dup_fieldname",
    "er_fk_dup_name",
];

#[derive(Debug, Clone, Copy)]
enum ColumnKind {
    Integer,
    Text,
    Varchar,
}

struct RequiredColumn {
    table: &'static str,
    column: &'static str,
    kind: ColumnKind,
}

impl RequiredColumn {
    fn definition(&self) -> ColumnDef {
        let mut def = ColumnDef::new(Alias::new(self.column));
        match self.kind {
            ColumnKind::Integer => def.integer(),
            ColumnKind::Text => def.text(),
            ColumnKind::Varchar => def.string(),
        };
        def.null();
        def
    }
}

struct RequiredForeignKey {
    name: String,
    table: &'static str,
    column: &'static str,
    references: &'static str,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ReconcileReport {
    /// `table.column` entries added by this pass.
    pub added_columns: Vec<String>,
    /// Constraint names added by this pass.
    pub added_constraints: Vec<String>,
    /// Definitions that raced with another process or could not be added.
    pub tolerated: Vec<String>,
}

impl ReconcileReport {
    pub fn is_noop(&self) -> bool {
        self.added_columns.is_empty() && self.added_constraints.is_empty()
    }
}

/// Whether a database error only says the definition exists already.
pub fn is_duplicate_definition(message: &str) -> bool {
    let message = message.to_lowercase();
    DUPLICATE_DEFINITION_MARKERS
        .iter()
        .any(|marker| message.contains(marker))
}

fn required_columns() -> Vec<RequiredColumn> {
    let mut columns: Vec<RequiredColumn> = TENANT_TABLES
        .iter()
        .copied()
        .map(|table| RequiredColumn {
            table,
            column: "company_id",
            kind: ColumnKind::Integer,
        })
        .collect();

    columns.extend(BRANCH_TABLES.iter().copied().map(|table| RequiredColumn {
        table,
        column: "branch_id",
        kind: ColumnKind::Integer,
    }));

    columns.extend([
        RequiredColumn {
            table: "menu_items",
            column: "nutritional_info",
            kind: ColumnKind::Text,
        },
        RequiredColumn {
            table: "menu_items",
            column: "vitamins",
            kind: ColumnKind::Text,
        },
        RequiredColumn {
            table: "users",
            column: "phone",
            kind: ColumnKind::Varchar,
        },
        RequiredColumn {
            table: "users",
            column: "role_id",
            kind: ColumnKind::Integer,
        },
    ]);

    columns
}

#[derive(Debug, FromQueryResult)]
struct ConstraintName {
    constraint_name: String,
}

fn required_foreign_keys() -> Vec<RequiredForeignKey> {
    let company = COMPANY_FK_TABLES.iter().copied().map(|table| RequiredForeignKey {
        name: format!("fk_{}_company", table),
        table,
        column: "company_id",
        references: "companies",
    });
    let branch = BRANCH_TABLES.iter().copied().map(|table| RequiredForeignKey {
        name: format!("fk_{}_branch", table),
        table,
        column: "branch_id",
        references: "branches",
    });

    company.chain(branch).collect()
}

/// Required foreign keys whose name is not in `existing`.
fn missing_foreign_keys(existing: &HashSet<String>) -> Vec<RequiredForeignKey> {
    required_foreign_keys()
        .into_iter()
        .filter(|fk| !existing.contains(&fk.name))
        .collect()
}

/// Files the outcome of one `ADD CONSTRAINT` into the report. Never fails.
fn record_constraint(report: &mut ReconcileReport, name: String, outcome: Result<(), DbErr>) {
    match outcome {
        Ok(()) => {
            tracing::info!("Added constraint {}", name);
            report.added_constraints.push(name);
        }
        Err(e) if is_duplicate_definition(&e.to_string()) => {
            tracing::debug!("Constraint {} already present", name);
            report.tolerated.push(name);
        }
        Err(e) => {
            tracing::warn!("Could not add constraint {}: {}", name, e);
            report.tolerated.push(name);
        }
    }
}

pub struct SchemaReconciler<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SchemaReconciler<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Adds missing tenancy columns and, where the backend supports it, their foreign keys.
    ///
    /// # Returns
    /// - `Ok(ReconcileReport)` - What was added and what was tolerated
    /// - `Err(DbErr)` - A column could not be added, or the constraint listing failed
    pub async fn reconcile(&self) -> Result<ReconcileReport, DbErr> {
        let manager = SchemaManager::new(self.db);
        let mut report = ReconcileReport::default();

        for required in required_columns() {
            if manager.has_column(required.table, required.column).await? {
                continue;
            }

            let label = format!("{}.{}", required.table, required.column);
            let stmt = Table::alter()
                .table(Alias::new(required.table))
                .add_column(required.definition())
                .to_owned();

            match manager.alter_table(stmt).await {
                Ok(()) => {
                    tracing::info!("Added column {}", label);
                    report.added_columns.push(label);
                }
                Err(e) if is_duplicate_definition(&e.to_string()) => {
                    tracing::warn!("Column {} was added concurrently: {}", label, e);
                    report.tolerated.push(label);
                }
                Err(e) => return Err(e),
            }
        }

        if manager.get_database_backend() == DbBackend::Sqlite {
            tracing::debug!("Skipping foreign key reconciliation on SQLite");
            return Ok(report);
        }

        let existing = self.foreign_key_names(manager.get_database_backend()).await?;
        for fk in missing_foreign_keys(&existing) {
            let stmt = ForeignKey::create()
                .name(fk.name.as_str())
                .from(Alias::new(fk.table), Alias::new(fk.column))
                .to(Alias::new(fk.references), Alias::new("id"))
                .on_delete(ForeignKeyAction::SetNull)
                .on_update(ForeignKeyAction::Cascade)
                .to_owned();

            let outcome = manager.create_foreign_key(stmt).await;
            record_constraint(&mut report, fk.name, outcome);
        }

        Ok(report)
    }

    /// Names of the foreign keys in the current schema.
    async fn foreign_key_names(&self, backend: DbBackend) -> Result<HashSet<String>, DbErr> {
        let schema = match backend {
            DbBackend::MySql => "DATABASE()",
            _ => "current_schema()",
        };
        let sql = format!(
            "SELECT constraint_name FROM information_schema.table_constraints \
             WHERE constraint_type = 'FOREIGN KEY' AND table_schema = {}",
            schema
        );

        let rows = ConstraintName::find_by_statement(Statement::from_string(backend, sql))
            .all(self.db)
            .await?;

        Ok(rows.into_iter().map(|row| row.constraint_name).collect())
    }
}
