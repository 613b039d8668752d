//! Capability flags grouped by feature family.
//!
//! Every dialect carries one [`Capabilities`] record, the [`crate::Dialect`] trait exposes a
//! `supports_*` query per flag and the feature renderers consult them before emitting syntax
//! that only some backends understand.

/// Common table expressions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CteCapabilities {
    /// `WITH name AS (...)`, default `true`.
    pub basic: bool,
    /// `WITH RECURSIVE`, default `true`.
    pub recursive: bool,
    /// `AS [NOT] MATERIALIZED` hints, default `false`.
    pub materialized: bool,
    /// Data modifying statements inside `WITH`, default `false`.
    pub in_dml: bool,
}

impl Default for CteCapabilities {
    fn default() -> Self {
        Self {
            basic: true,
            recursive: true,
            materialized: false,
            in_dml: false,
        }
    }
}

/// Join kinds, inner/left/cross/natural default to `true`, right/full to `false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JoinCapabilities {
    pub inner: bool,
    pub left: bool,
    pub right: bool,
    pub full: bool,
    pub cross: bool,
    pub natural: bool,
}

impl Default for JoinCapabilities {
    fn default() -> Self {
        Self {
            inner: true,
            left: true,
            right: false,
            full: false,
            cross: true,
            natural: true,
        }
    }
}

/// `LATERAL` derived tables, default `false`.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct LateralCapabilities {
    pub lateral: bool,
}

/// JSON support, everything defaults to `false`.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct JsonCapabilities {
    /// Native JSON column type.
    pub json_type: bool,
    /// Path extraction through `->` / `->>` (or the dialect equivalent).
    pub arrow_operators: bool,
    /// `JSON_TABLE(...)` table source.
    pub json_table: bool,
}

/// Array columns and operators, default `false`. Array construction never gates.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArrayCapabilities {
    pub array_type: bool,
    /// `@>`, `<@`, `&&`, `= ANY(...)`.
    pub operators: bool,
}

/// Advanced `GROUP BY` forms, default `false`.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupingCapabilities {
    pub rollup: bool,
    pub cube: bool,
    pub grouping_sets: bool,
}

/// Window functions default to `true`, aggregate `FILTER (WHERE ...)` to `false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowCapabilities {
    pub window_functions: bool,
    pub filter_clause: bool,
}

impl Default for WindowCapabilities {
    fn default() -> Self {
        Self {
            window_functions: true,
            filter_clause: false,
        }
    }
}

/// Compound queries, default `true`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetOperationCapabilities {
    pub union: bool,
    pub intersect: bool,
    pub except: bool,
}

impl Default for SetOperationCapabilities {
    fn default() -> Self {
        Self {
            union: true,
            intersect: true,
            except: true,
        }
    }
}

/// `RETURNING` on data modifying statements, default `false`.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReturningCapabilities {
    pub returning: bool,
}

/// Syntax family used for insert-or-update.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertStyle {
    #[default]
    None,
    /// `ON CONFLICT (...) DO UPDATE SET ... | DO NOTHING`
    OnConflict,
    /// `ON DUPLICATE KEY UPDATE ...`
    OnDuplicateKey,
}

/// Upsert support, default [`UpsertStyle::None`].
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpsertCapabilities {
    pub style: UpsertStyle,
}

/// Wildcards, table qualified `"t".*` defaults to `true`. Formatting never gates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WildcardCapabilities {
    pub qualified: bool,
}

impl Default for WildcardCapabilities {
    fn default() -> Self {
        Self { qualified: true }
    }
}

/// `TRUNCATE TABLE`, every flag defaults to `true`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TruncateCapabilities {
    pub statement: bool,
    pub restart_identity: bool,
    pub cascade: bool,
}

impl Default for TruncateCapabilities {
    fn default() -> Self {
        Self {
            statement: true,
            restart_identity: true,
            cascade: true,
        }
    }
}

/// `MERGE INTO`, default `false`.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct MergeCapabilities {
    pub merge: bool,
}

/// Transaction control, savepoints default to `true`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransactionCapabilities {
    pub savepoint: bool,
}

impl Default for TransactionCapabilities {
    fn default() -> Self {
        Self { savepoint: true }
    }
}

/// Full capability record of a dialect.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
    pub cte: CteCapabilities,
    pub join: JoinCapabilities,
    pub lateral: LateralCapabilities,
    pub json: JsonCapabilities,
    pub array: ArrayCapabilities,
    pub grouping: GroupingCapabilities,
    pub window: WindowCapabilities,
    pub set_operation: SetOperationCapabilities,
    pub returning: ReturningCapabilities,
    pub upsert: UpsertCapabilities,
    pub wildcard: WildcardCapabilities,
    pub truncate: TruncateCapabilities,
    pub merge: MergeCapabilities,
    pub transaction: TransactionCapabilities,
}

impl Capabilities {
    /// Every feature switched on, upsert through `ON CONFLICT`.
    pub fn all() -> Self {
        Self {
            cte: CteCapabilities {
                basic: true,
                recursive: true,
                materialized: true,
                in_dml: true,
            },
            join: JoinCapabilities {
                inner: true,
                left: true,
                right: true,
                full: true,
                cross: true,
                natural: true,
            },
            lateral: LateralCapabilities { lateral: true },
            json: JsonCapabilities {
                json_type: true,
                arrow_operators: true,
                json_table: true,
            },
            array: ArrayCapabilities {
                array_type: true,
                operators: true,
            },
            grouping: GroupingCapabilities {
                rollup: true,
                cube: true,
                grouping_sets: true,
            },
            window: WindowCapabilities {
                window_functions: true,
                filter_clause: true,
            },
            set_operation: SetOperationCapabilities::default(),
            returning: ReturningCapabilities { returning: true },
            upsert: UpsertCapabilities {
                style: UpsertStyle::OnConflict,
            },
            wildcard: WildcardCapabilities::default(),
            truncate: TruncateCapabilities::default(),
            merge: MergeCapabilities { merge: true },
            transaction: TransactionCapabilities::default(),
        }
    }

    /// Nothing beyond plain SELECT/INSERT/UPDATE/DELETE with inner and left joins.
    pub fn minimal() -> Self {
        Self {
            cte: CteCapabilities {
                basic: false,
                recursive: false,
                materialized: false,
                in_dml: false,
            },
            join: JoinCapabilities {
                inner: true,
                left: true,
                right: false,
                full: false,
                cross: false,
                natural: false,
            },
            window: WindowCapabilities {
                window_functions: false,
                filter_clause: false,
            },
            set_operation: SetOperationCapabilities {
                union: true,
                intersect: false,
                except: false,
            },
            truncate: TruncateCapabilities {
                statement: false,
                restart_identity: false,
                cascade: false,
            },
            transaction: TransactionCapabilities { savepoint: false },
            ..Default::default()
        }
    }
}
