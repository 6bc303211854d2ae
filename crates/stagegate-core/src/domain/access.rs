//! Access Control Gate - 行（role）ごとの閲覧・操作可否
//!
//! # ルール
//! - ユーザーなし: 何もできない
//! - super-admin: 全行で active かつ操作可能
//! - それ以外: 自分の role の行のみ
//!
//! 依存関係のチェックはここでは行いません（UnlockEvaluator の担当）。

use serde::{Deserialize, Serialize};

use super::errors::ParseRoleError;
use super::role::Role;

/// Authenticated user as supplied by the auth collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub role: Role,
}

impl User {
    pub const fn new(role: Role) -> Self {
        Self { role }
    }

    pub fn from_role_name(role: &str) -> Result<Self, ParseRoleError> {
        Ok(Self { role: role.parse()? })
    }

    pub const fn is_privileged(&self) -> bool {
        self.role.is_privileged()
    }
}

/// Result of the gate for one row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RowAccess {
    pub is_active: bool,
    pub can_interact: bool,
}

impl RowAccess {
    pub fn evaluate(user: Option<&User>, row: Role) -> Self {
        let Some(user) = user else {
            return Self::default();
        };
        if user.is_privileged() {
            return Self {
                is_active: true,
                can_interact: true,
            };
        }
        let own_row = user.role == row;
        Self {
            is_active: own_row,
            can_interact: own_row,
        }
    }
}

/// Why an interaction was ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Denial {
    /// No authenticated user.
    SignedOut,
    /// The row belongs to another role.
    NotRowOwner,
    /// At least one prerequisite is not completed for the row's role.
    Locked,
}

/// Outcome of a user-initiated action.
///
/// A denied action changes nothing and is not an error; the presentation
/// layer is expected to hide the affordance in the first place.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub enum Interaction<T = ()> {
    Applied(T),
    Denied(Denial),
}

impl<T> Interaction<T> {
    pub fn is_applied(&self) -> bool {
        matches!(self, Interaction::Applied(_))
    }

    pub fn applied(self) -> Option<T> {
        match self {
            Interaction::Applied(value) => Some(value),
            Interaction::Denied(_) => None,
        }
    }

    pub fn denial(&self) -> Option<Denial> {
        match self {
            Interaction::Applied(_) => None,
            Interaction::Denied(reason) => Some(*reason),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::own_row(Role::AlphaSales, true)]
    #[case::ssc_row(Role::AlphaSsc, false)]
    #[case::studies_row(Role::TestankStudies, false)]
    fn sales_user_interacts_only_with_sales_row(#[case] row: Role, #[case] expected: bool) {
        let user = User::new(Role::AlphaSales);
        let access = RowAccess::evaluate(Some(&user), row);
        assert_eq!(access.can_interact, expected);
        assert_eq!(access.is_active, expected);
    }

    #[test]
    fn super_admin_interacts_with_every_row() {
        let admin = User::new(Role::SuperAdmin);
        for row in Role::ROWS {
            let access = RowAccess::evaluate(Some(&admin), row);
            assert!(access.is_active && access.can_interact, "row {row}");
        }
    }

    #[test]
    fn absent_user_interacts_with_nothing() {
        for row in Role::ROWS {
            assert_eq!(RowAccess::evaluate(None, row), RowAccess::default());
        }
    }

    #[test]
    fn user_from_unknown_role_name_fails() {
        assert!(User::from_role_name("guest").is_err());
        assert_eq!(
            User::from_role_name("espora-production").unwrap().role,
            Role::EsporaProduction
        );
    }

    #[test]
    fn interaction_accessors() {
        let ok: Interaction<u8> = Interaction::Applied(3);
        assert!(ok.is_applied());
        assert_eq!(ok.applied(), Some(3));

        let denied: Interaction<u8> = Interaction::Denied(Denial::Locked);
        assert_eq!(denied.denial(), Some(Denial::Locked));
        assert_eq!(denied.applied(), None);
    }
}
