use super::expense::{Category, Expense};

/// Accumulated sum and record count for one category.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CategoryTotal {
    pub sum: f64,
    pub count: usize,
}

/// Aggregate report over a non-empty set of records.
#[derive(Debug, Clone, PartialEq)]
pub struct LedgerStats {
    pub total: f64,
    pub count: usize,
    pub average: f64,
    /// Per-category totals in declaration order; absent categories are
    /// omitted rather than listed with zero.
    pub per_category: Vec<(Category, CategoryTotal)>,
    /// Category with the largest summed amount. Ties go to the earliest
    /// variant in declaration order.
    pub max_category: Category,
    /// Record with the largest single amount. Ties go to the first
    /// occurrence in the current record order.
    pub max_single: Expense,
}

impl LedgerStats {
    /// Computes the report, or `None` when there is nothing to aggregate.
    pub fn compute(records: &[Expense]) -> Option<LedgerStats> {
        if records.is_empty() {
            return None;
        }

        let mut totals = [CategoryTotal { sum: 0.0, count: 0 }; Category::ALL.len()];
        let mut total = 0.0;
        for record in records {
            let slot = &mut totals[record.category.index() as usize];
            slot.sum += record.amount;
            slot.count += 1;
            total += record.amount;
        }

        let per_category: Vec<(Category, CategoryTotal)> = Category::ALL
            .iter()
            .map(|category| (*category, totals[category.index() as usize]))
            .filter(|(_, totals)| totals.count > 0)
            .collect();

        let mut max_category = per_category[0].0;
        let mut max_sum = per_category[0].1.sum;
        for (category, totals) in per_category.iter().skip(1) {
            if totals.sum > max_sum {
                max_category = *category;
                max_sum = totals.sum;
            }
        }

        let mut max_single = &records[0];
        for record in records.iter().skip(1) {
            if record.amount > max_single.amount {
                max_single = record;
            }
        }

        let count = records.len();
        Some(LedgerStats {
            total,
            count,
            average: total / count as f64,
            per_category,
            max_category,
            max_single: max_single.clone(),
        })
    }
}
