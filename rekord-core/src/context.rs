use crate::Value;
use std::ops::{Deref, DerefMut};

/// Clause currently being written, dialects use it to decide what is legal at that position.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fragment {
    #[default]
    None,
    CreateTable,
    DeleteFrom,
    DeleteFromWhere,
    InsertInto,
    InsertIntoOnConflict,
    InsertIntoValues,
    Join,
    JoinOn,
    Merge,
    MergeOn,
    /// Function argument, tuple item or operator operand.
    Operand,
    Returning,
    Select,
    SelectFrom,
    SelectGroupBy,
    SelectHaving,
    SelectLimit,
    SelectOrderBy,
    SelectWhere,
    Truncate,
    Update,
    UpdateSet,
    UpdateWhere,
    Window,
    With,
}

/// Mutable state threaded through one rendering pass.
///
/// The parameter list lives here: writing a placeholder appends exactly one value, so the
/// N-th placeholder in the output always corresponds to `params[N - 1]`.
#[derive(Default, Debug, Clone, PartialEq)]
pub struct Context {
    pub fragment: Fragment,
    pub params: Vec<Value>,
}

impl Context {
    pub fn new(fragment: Fragment) -> Self {
        Self {
            fragment,
            params: Vec::new(),
        }
    }

    /// Switch to `fragment` until the returned guard is dropped.
    pub fn switch_fragment<'s>(&'s mut self, fragment: Fragment) -> ContextUpdater<'s> {
        let previous = std::mem::replace(&mut self.fragment, fragment);
        ContextUpdater {
            current: self,
            previous,
        }
    }

    /// Whether an alias declared at this position is emitted (`expr AS "alias"`).
    pub fn alias_declaration(&self) -> bool {
        matches!(
            self.fragment,
            Fragment::None
                | Fragment::Select
                | Fragment::SelectFrom
                | Fragment::Join
                | Fragment::Returning
                | Fragment::Merge
        )
    }
}

pub struct ContextUpdater<'a> {
    current: &'a mut Context,
    previous: Fragment,
}

impl<'a> Deref for ContextUpdater<'a> {
    type Target = Context;
    fn deref(&self) -> &Self::Target {
        self.current
    }
}

impl<'a> DerefMut for ContextUpdater<'a> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.current
    }
}

impl<'a> Drop for ContextUpdater<'a> {
    fn drop(&mut self) {
        self.current.fragment = self.previous;
    }
}
