use chrono::{NaiveDate, TimeZone, Utc};
use financai_core::{
    assemble, compose_prompt, AssembleOptions, BudgetPeriod, BudgetRecord, Category,
    ExpenseCategory, GoalRecord, IncomeCategory, Money, TransactionRecord,
};
use uuid::Uuid;

fn fixture() -> (
    Vec<TransactionRecord>,
    Vec<BudgetRecord>,
    Vec<GoalRecord>,
    NaiveDate,
) {
    let transactions = vec![
        TransactionRecord {
            id: Uuid::from_u128(7),
            kind: financai_core::TransactionKind::Expense,
            category: Category::Expense(ExpenseCategory::Groceries),
            amount: Money::from_cents(54_20),
            description: "Weekly shop".into(),
            occurred_at: Utc.with_ymd_and_hms(2024, 2, 10, 18, 30, 0).unwrap(),
        },
        TransactionRecord {
            id: Uuid::from_u128(3),
            kind: financai_core::TransactionKind::Income,
            category: Category::Income(IncomeCategory::Salary),
            amount: Money::from_cents(3_500_00),
            description: "February pay".into(),
            occurred_at: Utc.with_ymd_and_hms(2024, 2, 1, 9, 0, 0).unwrap(),
        },
    ];
    let budgets = vec![BudgetRecord {
        id: Uuid::from_u128(11),
        category: ExpenseCategory::Groceries,
        limit: Money::from_cents(300_00),
        period: BudgetPeriod::Monthly,
    }];
    let goals = vec![GoalRecord {
        id: Uuid::from_u128(21),
        name: "Emergency Fund".into(),
        target_amount: Money::from_cents(5_000_00),
        current_amount: Money::from_cents(1_200_00),
        target_date: NaiveDate::from_ymd_opt(2024, 12, 31).unwrap(),
    }];
    let reference = NaiveDate::from_ymd_opt(2024, 2, 20).unwrap();
    (transactions, budgets, goals, reference)
}

#[test]
fn identical_inputs_produce_identical_text() {
    let (transactions, budgets, goals, reference) = fixture();
    let options = AssembleOptions::default();
    let first = assemble(&transactions, &budgets, &goals, reference, &options);
    let second = assemble(&transactions, &budgets, &goals, reference, &options);
    assert_eq!(first, second);
    assert_eq!(first.prompt_context(), second.prompt_context());
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[test]
fn equal_timestamps_break_ties_by_id() {
    let instant = Utc.with_ymd_and_hms(2024, 2, 10, 12, 0, 0).unwrap();
    let mut a = TransactionRecord::new(
        Category::Expense(ExpenseCategory::Shopping),
        Money::from_cents(10_00),
        "first by id",
        instant,
    );
    a.id = Uuid::from_u128(1);
    let mut b = TransactionRecord::new(
        Category::Expense(ExpenseCategory::Shopping),
        Money::from_cents(20_00),
        "second by id",
        instant,
    );
    b.id = Uuid::from_u128(2);

    let reference = NaiveDate::from_ymd_opt(2024, 2, 20).unwrap();
    let options = AssembleOptions::default();
    let forward = assemble(&[a.clone(), b.clone()], &[], &[], reference, &options);
    let reversed = assemble(&[b, a], &[], &[], reference, &options);
    assert_eq!(forward.recent_transactions, reversed.recent_transactions);
    assert_eq!(forward.recent_transactions[0].description, "first by id");
}

#[test]
fn default_limit_is_fifty_most_recent() {
    let mut transactions = Vec::new();
    for day_offset in 0..60u32 {
        let mut record = TransactionRecord::new(
            Category::Expense(ExpenseCategory::Other),
            Money::from_cents(1_00),
            format!("entry {day_offset}"),
            Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
                + chrono::Duration::hours(day_offset as i64),
        );
        record.id = Uuid::from_u128(day_offset as u128);
        transactions.push(record);
    }
    let reference = NaiveDate::from_ymd_opt(2024, 2, 1).unwrap();
    let summary = assemble(
        &transactions,
        &[],
        &[],
        reference,
        &AssembleOptions::default(),
    );
    assert_eq!(summary.recent_transactions.len(), 50);
    assert_eq!(summary.recent_transactions[0].description, "entry 59");
    // Aggregates still cover all sixty records.
    assert_eq!(summary.metrics.total_expense, Money::from_cents(60_00));
}

#[test]
fn prompt_context_lines_match_wire_format() {
    let (transactions, budgets, goals, reference) = fixture();
    let summary = assemble(
        &transactions,
        &budgets,
        &goals,
        reference,
        &AssembleOptions::default(),
    );
    let context = summary.prompt_context();
    let expected = "**Recent Transactions:**\n\
                    - 2024-02-10: Weekly shop (expense) - 54.20\n\
                    - 2024-02-01: February pay (income) - 3500.00\n\
                    \n**Budgets:**\n\
                    - Groceries: 300.00/monthly\n\
                    \n**Financial Goals:**\n\
                    - Emergency Fund: target 5000.00, current 1200.00, due 2024-12-31\n";
    assert_eq!(context, expected);
}

#[test]
fn composed_prompt_is_stable() {
    let (transactions, budgets, goals, reference) = fixture();
    let options = AssembleOptions::default();
    let summary = assemble(&transactions, &budgets, &goals, reference, &options);
    let question = "Can I afford a $500 monthly car payment?";
    assert_eq!(
        compose_prompt(&summary, question),
        compose_prompt(&summary, question)
    );
    assert!(compose_prompt(&summary, question).contains(question));
}
