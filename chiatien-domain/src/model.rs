use std::{
    fmt,
    iter::Sum,
    ops::{Add, AddAssign, Neg, Sub, SubAssign},
};

use chrono::NaiveDateTime;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    pub const ZERO: Self = Self(Decimal::ZERO);

    pub fn new(num: i64, scale: u32) -> Self {
        Self(Decimal::new(num, scale))
    }

    pub fn from_i64(value: i64) -> Self {
        Self(Decimal::from(value))
    }

    pub fn from_u64(value: u64) -> Self {
        Self(Decimal::from(value))
    }

    pub const fn from_decimal(value: Decimal) -> Self {
        Self(value)
    }

    pub fn as_decimal(self) -> Decimal {
        self.0
    }

    pub fn abs(self) -> Self {
        Self(self.0.abs())
    }

    pub fn is_zero(self) -> bool {
        self.0.is_zero()
    }

    pub fn is_negative(self) -> bool {
        self.0.is_sign_negative() && !self.0.is_zero()
    }

    /// Rounds to whole units, halves away from zero.
    pub fn round_to_unit(self) -> Self {
        self.round_dp(0)
    }

    pub fn round_dp(self, dp: u32) -> Self {
        Self(
            self.0
                .round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero)
                .normalize(),
        )
    }

    /// Splits the amount evenly into `parts`. Returns `None` when `parts` is zero.
    pub fn split_evenly(self, parts: usize) -> Option<Self> {
        let divisor = Decimal::from(u64::try_from(parts).ok()?);
        self.0.checked_div(divisor).map(Self)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.normalize())
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

/// A recorded spending: `name` paid `amount` on behalf of `participants`.
///
/// `participants == None` means the expense is shared by every member.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    pub id: u64,
    pub name: String,
    pub amount: Money,
    pub purpose: String,
    pub date: NaiveDateTime,
    pub last_updated: Option<NaiveDateTime>,
    #[serde(default)]
    pub participants: Option<Vec<String>>,
}

impl Expense {
    pub fn participants(&self) -> Option<&[String]> {
        match &self.participants {
            Some(list) if !list.is_empty() => Some(list),
            _ => None,
        }
    }
}

/// Aggregated paid/share totals of one person.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PersonBalance<'a> {
    pub name: &'a str,
    pub paid: Money,
    pub share: Money,
}

impl<'a> PersonBalance<'a> {
    pub fn new(name: &'a str, paid: Money, share: Money) -> Self {
        Self { name, paid, share }
    }

    /// Positive: owed money. Negative: owes money.
    pub fn balance(&self) -> Money {
        self.paid - self.share
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transfer<'a> {
    pub from: &'a str,
    pub to: &'a str,
    pub amount: Money,
}

/// Per-person statistics derived from the expense list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PersonTotals<'e> {
    pub name: &'e str,
    pub paid: Money,
    pub count: usize,
    pub share: Money,
    pub expenses: Vec<&'e Expense>,
}

impl<'e> PersonTotals<'e> {
    pub fn new(name: &'e str) -> Self {
        Self {
            name,
            paid: Money::ZERO,
            count: 0,
            share: Money::ZERO,
            expenses: Vec::new(),
        }
    }
}
