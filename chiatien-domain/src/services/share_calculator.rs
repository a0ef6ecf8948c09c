use crate::model::{Expense, PersonTotals};
use indexmap::IndexMap;

/// Aggregates paid and share totals per person from the expense list.
pub struct ShareCalculator;

impl ShareCalculator {
    /// Members are every payer plus every named participant, in first-seen order.
    /// An expense without participants is split among all members. The result is
    /// sorted by amount paid, largest first; ties keep first-seen order.
    pub fn calculate(expenses: &[Expense]) -> Vec<PersonTotals<'_>> {
        if expenses.is_empty() {
            return Vec::new();
        }

        let mut people: IndexMap<&str, PersonTotals<'_>> = IndexMap::new();
        for expense in expenses {
            let names = std::iter::once(expense.name.as_str())
                .chain(expense.participants().unwrap_or_default().iter().map(String::as_str));
            for name in names {
                people
                    .entry(name)
                    .or_insert_with(|| PersonTotals::new(name));
            }
        }

        let all_members: Vec<&str> = people.keys().copied().collect();

        for expense in expenses {
            if let Some(payer) = people.get_mut(expense.name.as_str()) {
                payer.paid += expense.amount;
                payer.count += 1;
                payer.expenses.push(expense);
            }

            let participants: Vec<&str> = match expense.participants() {
                Some(list) => list.iter().map(String::as_str).collect(),
                None => all_members.clone(),
            };
            let Some(share) = expense.amount.split_evenly(participants.len()) else {
                continue;
            };

            for participant in participants {
                if let Some(totals) = people.get_mut(participant) {
                    totals.share += share;
                }
            }
        }

        let mut result: Vec<PersonTotals<'_>> = people.into_values().collect();
        result.sort_by(|lhs, rhs| rhs.paid.cmp(&lhs.paid));
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Money;
    use chrono::NaiveDate;

    fn expense(id: u64, name: &str, amount: i64, participants: Option<&[&str]>) -> Expense {
        let date = NaiveDate::from_ymd_opt(2024, 3, 1)
            .and_then(|day| day.and_hms_opt(12, 0, 0))
            .expect("valid timestamp");
        Expense {
            id,
            name: name.to_string(),
            amount: Money::from_i64(amount),
            purpose: format!("expense {id}"),
            date,
            last_updated: Some(date),
            participants: participants
                .map(|list| list.iter().map(|name| name.to_string()).collect()),
        }
    }

    #[test]
    fn no_expenses_yield_no_people() {
        assert!(ShareCalculator::calculate(&[]).is_empty());
    }

    #[test]
    fn expense_without_participants_is_split_among_everyone() {
        let expenses = [
            expense(1, "An", 3000, None),
            expense(2, "Binh", 0, Some(&["Binh", "Chi"])),
        ];

        let people = ShareCalculator::calculate(&expenses);

        let names: Vec<&str> = people.iter().map(|person| person.name).collect();
        assert_eq!(names, vec!["An", "Binh", "Chi"]);
        for person in &people {
            assert_eq!(person.share, Money::from_i64(1000));
        }
        assert_eq!(people[0].paid, Money::from_i64(3000));
        assert_eq!(people[0].count, 1);
        assert_eq!(people[2].count, 0);
    }

    #[test]
    fn explicit_participants_carry_the_whole_share() {
        let expenses = [
            expense(1, "An", 600, Some(&["Binh", "Chi"])),
            expense(2, "Dung", 900, None),
        ];

        let people = ShareCalculator::calculate(&expenses);
        let share_of = |name: &str| {
            people
                .iter()
                .find(|person| person.name == name)
                .map(|person| person.share)
                .expect("person present")
        };

        assert_eq!(share_of("An"), Money::from_i64(225));
        assert_eq!(share_of("Binh"), Money::from_i64(525));
        assert_eq!(share_of("Chi"), Money::from_i64(525));
        assert_eq!(share_of("Dung"), Money::from_i64(225));
    }

    #[test]
    fn sorted_by_paid_descending_with_stable_ties() {
        let expenses = [
            expense(1, "An", 100, None),
            expense(2, "Binh", 500, None),
            expense(3, "Chi", 100, None),
        ];

        let people = ShareCalculator::calculate(&expenses);

        let names: Vec<&str> = people.iter().map(|person| person.name).collect();
        assert_eq!(names, vec!["Binh", "An", "Chi"]);
        assert_eq!(people[0].expenses.len(), 1);
        assert_eq!(people[0].expenses[0].id, 2);
    }
}
