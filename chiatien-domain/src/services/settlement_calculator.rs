use crate::model::{Money, PersonBalance, Transfer};
use rust_decimal::Decimal;

/// Balances whose magnitude is at or below this amount count as settled.
///
/// The same threshold drives [`BalanceClassifier`](crate::services::BalanceClassifier),
/// so the displayed status never disagrees with the transfer list.
pub const SETTLEMENT_TOLERANCE: Money = Money::from_decimal(Decimal::ONE_HUNDRED);

struct OpenAmount<'a> {
    name: &'a str,
    amount: Money,
}

/// Settlement calculation service
///
/// Matches the largest remaining debtor with the largest remaining creditor until
/// either side runs out. This is a heuristic: it keeps the transfer count low for
/// the usual handful of large imbalances but does not search for the minimum.
pub struct SettlementCalculator;

impl SettlementCalculator {
    /// Calculate the transfers that settle the given balances
    ///
    /// # Arguments
    /// * `people` - Paid/share totals per person. Iteration order breaks ties
    ///   between equal amounts.
    ///
    /// # Returns
    /// Transfers from debtors to creditors, amounts rounded to whole units
    pub fn calculate<'a, I>(&self, people: I) -> Vec<Transfer<'a>>
    where
        I: IntoIterator<Item = PersonBalance<'a>>,
    {
        let mut debtors = Vec::new();
        let mut creditors = Vec::new();

        for person in people {
            let balance = person.balance();
            if balance < -SETTLEMENT_TOLERANCE {
                debtors.push(OpenAmount {
                    name: person.name,
                    amount: balance.abs(),
                });
            } else if balance > SETTLEMENT_TOLERANCE {
                creditors.push(OpenAmount {
                    name: person.name,
                    amount: balance,
                });
            }
        }

        // `sort_by` is stable: equal amounts keep their input order.
        debtors.sort_by(|lhs, rhs| rhs.amount.cmp(&lhs.amount));
        creditors.sort_by(|lhs, rhs| rhs.amount.cmp(&lhs.amount));

        let mut transfers = Vec::new();
        let (mut i, mut j) = (0, 0);

        while i < debtors.len() && j < creditors.len() {
            let debtor = &mut debtors[i];
            let creditor = &mut creditors[j];
            let amount = debtor.amount.min(creditor.amount);

            if amount > SETTLEMENT_TOLERANCE {
                transfers.push(Transfer {
                    from: debtor.name,
                    to: creditor.name,
                    amount: amount.round_to_unit(),
                });
            }

            // Subtract the unrounded amount so rounding never accumulates.
            debtor.amount -= amount;
            creditor.amount -= amount;

            if debtor.amount < SETTLEMENT_TOLERANCE {
                i += 1;
            }
            if creditor.amount < SETTLEMENT_TOLERANCE {
                j += 1;
            }
        }

        tracing::debug!(
            debtor_count = debtors.len(),
            creditor_count = creditors.len(),
            transfer_count = transfers.len(),
            "Settlement calculated"
        );

        transfers
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn calculator() -> SettlementCalculator {
        SettlementCalculator
    }

    fn person(name: &'static str, paid: i64, share: i64) -> PersonBalance<'static> {
        PersonBalance::new(name, Money::from_i64(paid), Money::from_i64(share))
    }

    #[rstest]
    #[case::empty(vec![], vec![])]
    #[case::single_creditor_single_debtor(
        vec![person("A", 1000, 0), person("B", 0, 1000)],
        vec![("B", "A", 1000)]
    )]
    #[case::three_way_split_keeps_input_order(
        vec![person("A", 3000, 1000), person("B", 0, 1000), person("C", 0, 1000)],
        vec![("B", "A", 1000), ("C", "A", 1000)]
    )]
    #[case::all_within_tolerance(
        vec![person("A", 1100, 1000), person("B", 900, 1000), person("C", 1000, 1000)],
        vec![]
    )]
    #[case::tolerance_boundary_is_settled(
        vec![person("A", 100, 0), person("B", 0, 100)],
        vec![]
    )]
    #[case::largest_debtor_pays_largest_creditor_first(
        vec![
            person("A", 500, 0),
            person("B", 0, 200),
            person("C", 1500, 0),
            person("D", 0, 1800),
        ],
        vec![("D", "C", 1500), ("D", "A", 300), ("B", "A", 200)]
    )]
    #[case::exact_match_advances_both_cursors(
        vec![
            person("A", 400, 0),
            person("B", 0, 400),
            person("C", 300, 0),
            person("D", 0, 300),
        ],
        vec![("B", "A", 400), ("D", "C", 300)]
    )]
    #[case::settled_person_is_excluded(
        vec![person("A", 1000, 0), person("B", 0, 950), person("C", 0, 50)],
        vec![("B", "A", 950)]
    )]
    fn settlement_calculator_cases(
        calculator: SettlementCalculator,
        #[case] people: Vec<PersonBalance<'static>>,
        #[case] expected_transfers: Vec<(&'static str, &'static str, i64)>,
    ) {
        let result = calculator.calculate(people);

        let expected: Vec<Transfer> = expected_transfers
            .into_iter()
            .map(|(from, to, amount)| Transfer {
                from,
                to,
                amount: Money::from_i64(amount),
            })
            .collect();
        assert_eq!(result, expected);
    }

    #[rstest]
    fn rounds_only_the_emitted_amount(calculator: SettlementCalculator) {
        let people = [
            PersonBalance::new("A", Money::new(10006, 1), Money::ZERO),
            PersonBalance::new("B", Money::ZERO, Money::new(5004, 1)),
            PersonBalance::new("C", Money::ZERO, Money::new(5002, 1)),
        ];

        let result = calculator.calculate(people);

        assert_eq!(
            result,
            vec![
                Transfer {
                    from: "B",
                    to: "A",
                    amount: Money::from_i64(500),
                },
                Transfer {
                    from: "C",
                    to: "A",
                    amount: Money::from_i64(500),
                },
            ]
        );
    }

    #[rstest]
    fn transfer_of_exactly_the_tolerance_is_skipped(calculator: SettlementCalculator) {
        // B covers 150 of A's 250, leaving exactly 100 for C, which is not emitted.
        let people = [
            person("A", 250, 0),
            person("B", 0, 150),
            person("C", 0, 150),
            person("D", 50, 0),
        ];

        let result = calculator.calculate(people);

        assert_eq!(
            result,
            vec![Transfer {
                from: "B",
                to: "A",
                amount: Money::from_i64(150),
            }]
        );
    }

    #[rstest]
    fn unmatched_tail_is_left_unsettled(calculator: SettlementCalculator) {
        let people = [
            person("A", 199, 0),
            person("B", 199, 0),
            person("C", 199, 0),
            person("D", 0, 294),
            person("E", 0, 101),
            person("F", 0, 101),
            person("G", 0, 101),
        ];

        let result = calculator.calculate(people);

        assert_eq!(result.len(), 3);
        assert!(result.iter().all(|transfer| transfer.from != "G"));
    }
}
