//! FILENAME: core/aggregation-wizard/src/grouping/model.rs
//! Editable groupings.
//!
//! A grouping is the identity-bearing, editable counterpart of a pivot.
//! Its kind (date or values) is fixed when it is created; switching kind
//! replaces the grouping with a new one instead of reshaping it.

use std::fmt;

use serde::{Deserialize, Serialize};
use widget_config::{Interval, PivotType};

use crate::error::ConversionError;
use crate::identity::{GroupingId, IdGenerator};
use crate::log_debug;
use crate::settings::WizardSettings;

use super::validation::validate_grouping;

// ============================================================================
// DIRECTION & KIND
// ============================================================================

/// The display axis a grouping contributes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Row,
    Column,
}

impl Default for Direction {
    fn default() -> Self {
        Direction::Row
    }
}

/// Bucketing kind of a grouping; serialized as the pivot type name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupingKind {
    Time,
    Values,
}

impl GroupingKind {
    pub fn pivot_type(self) -> PivotType {
        match self {
            GroupingKind::Time => PivotType::Time,
            GroupingKind::Values => PivotType::Values,
        }
    }
}

impl fmt::Display for GroupingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.pivot_type().as_str())
    }
}

// ============================================================================
// GROUPING VARIANTS
// ============================================================================

/// Time bucketing over a field.
#[derive(Debug, Clone, PartialEq)]
pub struct DateGrouping {
    id: GroupingId,
    pub direction: Direction,
    /// Unset only while the user has not picked a field yet.
    pub field: Option<String>,
    pub interval: Interval,
}

impl DateGrouping {
    pub fn new(
        id: GroupingId,
        direction: Direction,
        field: Option<String>,
        interval: Interval,
    ) -> Self {
        DateGrouping {
            id,
            direction,
            field,
            interval,
        }
    }

    pub fn id(&self) -> &GroupingId {
        &self.id
    }
}

/// Top-N value bucketing over a field.
#[derive(Debug, Clone, PartialEq)]
pub struct ValuesGrouping {
    id: GroupingId,
    pub direction: Direction,
    /// Unset only while the user has not picked a field yet.
    pub field: Option<String>,
    /// Unset while the user has cleared the input.
    pub limit: Option<i64>,
}

impl ValuesGrouping {
    pub fn new(
        id: GroupingId,
        direction: Direction,
        field: Option<String>,
        limit: Option<i64>,
    ) -> Self {
        ValuesGrouping {
            id,
            direction,
            field,
            limit,
        }
    }

    pub fn id(&self) -> &GroupingId {
        &self.id
    }
}

/// One entry of the editable group-by list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(into = "GroupingRepr", try_from = "GroupingRepr")]
pub enum Grouping {
    Date(DateGrouping),
    Values(ValuesGrouping),
}

impl From<DateGrouping> for Grouping {
    fn from(grouping: DateGrouping) -> Self {
        Grouping::Date(grouping)
    }
}

impl From<ValuesGrouping> for Grouping {
    fn from(grouping: ValuesGrouping) -> Self {
        Grouping::Values(grouping)
    }
}

impl Grouping {
    pub fn id(&self) -> &GroupingId {
        match self {
            Grouping::Date(g) => &g.id,
            Grouping::Values(g) => &g.id,
        }
    }

    pub fn kind(&self) -> GroupingKind {
        match self {
            Grouping::Date(_) => GroupingKind::Time,
            Grouping::Values(_) => GroupingKind::Values,
        }
    }

    pub fn direction(&self) -> Direction {
        match self {
            Grouping::Date(g) => g.direction,
            Grouping::Values(g) => g.direction,
        }
    }

    pub fn set_direction(&mut self, direction: Direction) {
        match self {
            Grouping::Date(g) => g.direction = direction,
            Grouping::Values(g) => g.direction = direction,
        }
    }

    pub fn field_name(&self) -> Option<&str> {
        match self {
            Grouping::Date(g) => g.field.as_deref(),
            Grouping::Values(g) => g.field.as_deref(),
        }
    }

    pub fn set_field_name(&mut self, field: Option<String>) {
        match self {
            Grouping::Date(g) => g.field = field,
            Grouping::Values(g) => g.field = field,
        }
    }

    /// Replaces this grouping by one of `kind`.
    ///
    /// Direction and field name carry over, kind parameters start from the
    /// settings defaults and the replacement gets a fresh identity. A
    /// grouping that already has `kind` is returned as is.
    pub fn with_kind(
        self,
        kind: GroupingKind,
        settings: &WizardSettings,
        ids: &dyn IdGenerator,
    ) -> Grouping {
        if self.kind() == kind {
            return self;
        }

        let direction = self.direction();
        let field = self.field_name().map(str::to_string);
        let replacement: Grouping = match kind {
            GroupingKind::Time => DateGrouping::new(
                ids.next_id(),
                direction,
                field,
                Interval::auto(settings.default_auto_scaling),
            )
            .into(),
            GroupingKind::Values => ValuesGrouping::new(
                ids.next_id(),
                direction,
                field,
                Some(settings.default_limit),
            )
            .into(),
        };

        log_debug!(
            "GROUPBY",
            "replaced grouping id={} by id={} kind={}",
            self.id(),
            replacement.id(),
            kind
        );
        replacement
    }
}

// ============================================================================
// WIRE SHAPE
// ============================================================================

/// `{ id, direction, field: { field, type }, interval? | limit? }`
#[derive(Serialize, Deserialize)]
struct GroupingRepr {
    id: GroupingId,
    direction: Direction,
    field: FieldRepr,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    interval: Option<Interval>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    limit: Option<i64>,
}

#[derive(Serialize, Deserialize)]
struct FieldRepr {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    field: Option<String>,
    #[serde(rename = "type")]
    kind: GroupingKind,
}

impl From<Grouping> for GroupingRepr {
    fn from(grouping: Grouping) -> Self {
        match grouping {
            Grouping::Date(g) => GroupingRepr {
                id: g.id,
                direction: g.direction,
                field: FieldRepr {
                    field: g.field,
                    kind: GroupingKind::Time,
                },
                interval: Some(g.interval),
                limit: None,
            },
            Grouping::Values(g) => GroupingRepr {
                id: g.id,
                direction: g.direction,
                field: FieldRepr {
                    field: g.field,
                    kind: GroupingKind::Values,
                },
                interval: None,
                limit: g.limit,
            },
        }
    }
}

impl TryFrom<GroupingRepr> for Grouping {
    type Error = ConversionError;

    fn try_from(repr: GroupingRepr) -> Result<Self, Self::Error> {
        match (repr.field.kind, repr.interval, repr.limit) {
            (GroupingKind::Time, Some(interval), None) => Ok(DateGrouping::new(
                repr.id,
                repr.direction,
                repr.field.field,
                interval,
            )
            .into()),
            (GroupingKind::Values, None, limit) => Ok(ValuesGrouping::new(
                repr.id,
                repr.direction,
                repr.field.field,
                limit,
            )
            .into()),
            (kind, _, _) => Err(ConversionError::MismatchedGrouping {
                id: repr.id.to_string(),
                kind: kind.to_string(),
            }),
        }
    }
}

// ============================================================================
// FORM VALUES
// ============================================================================

/// The whole editable group-by state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupByFormValues {
    /// Only meaningful with column groupings, but always stored.
    pub column_rollup: bool,
    pub groupings: Vec<Grouping>,
}

impl GroupByFormValues {
    pub fn position(&self, id: &GroupingId) -> Option<usize> {
        self.groupings.iter().position(|g| g.id() == id)
    }

    pub fn grouping(&self, id: &GroupingId) -> Option<&Grouping> {
        self.groupings.iter().find(|g| g.id() == id)
    }

    pub fn grouping_mut(&mut self, id: &GroupingId) -> Option<&mut Grouping> {
        self.groupings.iter_mut().find(|g| g.id() == id)
    }

    /// Removes a grouping by identity, which stays correct across reorders.
    pub fn remove_grouping(&mut self, id: &GroupingId) -> Option<Grouping> {
        let index = self.position(id)?;
        Some(self.groupings.remove(index))
    }

    /// Moves the grouping at `from` to position `to`. Returns false when
    /// either position is out of range.
    pub fn move_grouping(&mut self, from: usize, to: usize) -> bool {
        let len = self.groupings.len();
        if from >= len || to >= len {
            return false;
        }
        let grouping = self.groupings.remove(from);
        self.groupings.insert(to, grouping);
        true
    }

    /// Replaces the grouping `id` in place by one of `kind`, see
    /// [`Grouping::with_kind`]. Returns the identity now at that position.
    pub fn change_kind(
        &mut self,
        id: &GroupingId,
        kind: GroupingKind,
        settings: &WizardSettings,
        ids: &dyn IdGenerator,
    ) -> Option<GroupingId> {
        let index = self.position(id)?;
        let replacement = self.groupings.remove(index).with_kind(kind, settings, ids);
        let new_id = replacement.id().clone();
        self.groupings.insert(index, replacement);
        Some(new_id)
    }

    pub fn has_column_groupings(&self) -> bool {
        self.groupings
            .iter()
            .any(|g| g.direction() == Direction::Column)
    }
}

/// Externally visible state of the group-by editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupByState {
    NotStarted,
    Invalid,
    Valid,
}

impl GroupByState {
    pub fn of(group_by: Option<&GroupByFormValues>) -> Self {
        match group_by {
            None => GroupByState::NotStarted,
            Some(values) => {
                let invalid = values
                    .groupings
                    .iter()
                    .any(|g| !validate_grouping(g).is_empty());
                if invalid {
                    GroupByState::Invalid
                } else {
                    GroupByState::Valid
                }
            }
        }
    }
}

// ============================================================================
// CREATION
// ============================================================================

/// A new, not yet configured values grouping: row axis, no field, limit 15.
pub fn create_default_grouping(ids: &dyn IdGenerator) -> ValuesGrouping {
    create_default_grouping_with(&WizardSettings::default(), ids)
}

pub fn create_default_grouping_with(
    settings: &WizardSettings,
    ids: &dyn IdGenerator,
) -> ValuesGrouping {
    let grouping = ValuesGrouping::new(
        ids.next_id(),
        settings.default_direction,
        None,
        Some(settings.default_limit),
    );
    log_debug!("GROUPBY", "created default grouping id={}", grouping.id());
    grouping
}
