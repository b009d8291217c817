//! Record CLI commands
//!
//! Adding, listing and removing expenses, incomes and budgets.

use chrono::NaiveDate;
use clap::{Subcommand, ValueEnum};

use crate::config::Settings;
use crate::display::{format_budget_table, format_expense_table, format_income_table};
use crate::error::{PocketError, PocketResult};
use crate::models::{Budget, Expense, Income, Money, RecordKind};
use crate::services::RecordService;
use crate::storage::Storage;

/// Which record kinds a command covers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum KindFilter {
    #[default]
    All,
    Expenses,
    Incomes,
    Budgets,
}

impl KindFilter {
    /// Record kinds selected by this filter
    pub fn kinds(&self) -> Vec<RecordKind> {
        match self {
            Self::All => vec![RecordKind::Expense, RecordKind::Income, RecordKind::Budget],
            Self::Expenses => vec![RecordKind::Expense],
            Self::Incomes => vec![RecordKind::Income],
            Self::Budgets => vec![RecordKind::Budget],
        }
    }
}

/// Add subcommands
#[derive(Subcommand)]
pub enum AddCommands {
    /// Record an expense
    Expense {
        /// Amount spent (e.g., "12.33")
        amount: String,
        /// What the money was spent on
        description: String,
        /// Spending category
        #[arg(short, long)]
        category: Option<String>,
        /// Card or account used
        #[arg(long)]
        card: Option<String>,
        /// Date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
        /// Notes
        #[arg(short, long)]
        notes: Option<String>,
    },
    /// Record an income
    Income {
        /// Amount received
        amount: String,
        /// Who paid
        source: String,
        /// Date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
        /// Notes
        #[arg(short, long)]
        notes: Option<String>,
    },
    /// Create a budget for a period
    Budget {
        /// Budget name
        name: String,
        /// Spending limit for the period
        limit: String,
        /// First day (YYYY-MM-DD)
        #[arg(long)]
        start: String,
        /// Last day, inclusive (YYYY-MM-DD)
        #[arg(long)]
        end: String,
        /// Category the budget applies to
        #[arg(short, long)]
        category: Option<String>,
    },
}

/// Handle an add command
pub fn handle_add_command(storage: &Storage, settings: &Settings, cmd: AddCommands) -> PocketResult<()> {
    let service = RecordService::new(storage);
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        AddCommands::Expense {
            amount,
            description,
            category,
            card,
            date,
            notes,
        } => {
            let mut expense = Expense::new(parse_date_or_today(date)?, parse_amount(&amount)?, description);
            if let Some(category) = category {
                expense = expense.with_category(category);
            }
            if let Some(card) = card {
                expense = expense.with_card(card);
            }
            if let Some(notes) = notes {
                expense = expense.with_notes(notes);
            }

            let expense = service.add_expense(expense)?;
            println!("Added expense {}", expense.id);
            println!("  Date:   {}", expense.date.format(&settings.date_format));
            println!("  Amount: {}", expense.amount.format_with_symbol(symbol));
            println!("  What:   {}", expense.description);
        }

        AddCommands::Income {
            amount,
            source,
            date,
            notes,
        } => {
            let mut income = Income::new(parse_date_or_today(date)?, parse_amount(&amount)?, source);
            if let Some(notes) = notes {
                income = income.with_notes(notes);
            }

            let income = service.add_income(income)?;
            println!("Added income {}", income.id);
            println!("  Date:   {}", income.date.format(&settings.date_format));
            println!("  Amount: {}", income.amount.format_with_symbol(symbol));
            println!("  From:   {}", income.source);
        }

        AddCommands::Budget {
            name,
            limit,
            start,
            end,
            category,
        } => {
            let mut budget = Budget::new(name, parse_amount(&limit)?, parse_date(&start)?, parse_date(&end)?);
            if let Some(category) = category {
                budget = budget.with_category(category);
            }

            let budget = service.add_budget(budget)?;
            println!("Added budget {}", budget.id);
            println!("  Name:   {}", budget.name);
            println!("  Limit:  {}", budget.limit.format_with_symbol(symbol));
            println!(
                "  Period: {} - {} ({} days)",
                budget.start.format(&settings.date_format),
                budget.end.format(&settings.date_format),
                budget.num_days()
            );
        }
    }

    Ok(())
}

/// Handle the list command
pub fn handle_list_command(storage: &Storage, settings: &Settings, kind: KindFilter) -> PocketResult<()> {
    for record_kind in kind.kinds() {
        println!("{}", record_kind.plural());
        match record_kind {
            RecordKind::Expense => {
                let all = storage.expenses.get_all()?;
                print!("{}", format_expense_table(&all.iter().collect::<Vec<_>>(), settings));
            }
            RecordKind::Income => {
                let all = storage.incomes.get_all()?;
                print!("{}", format_income_table(&all.iter().collect::<Vec<_>>(), settings));
            }
            RecordKind::Budget => {
                let all = storage.budgets.get_all()?;
                print!("{}", format_budget_table(&all.iter().collect::<Vec<_>>(), settings));
            }
        }
        println!();
    }
    Ok(())
}

/// Handle the remove command
pub fn handle_remove_command(storage: &Storage, id: &str) -> PocketResult<()> {
    let kind = storage.remove(id)?;
    println!("Removed {} {}", kind.label(), id);
    Ok(())
}

fn parse_amount(amount: &str) -> PocketResult<Money> {
    Money::parse(amount).map_err(|e| {
        PocketError::Validation(format!(
            "Invalid amount format: '{}'. Use format like '12.33'. Error: {}",
            amount, e
        ))
    })
}

fn parse_date(date: &str) -> PocketResult<NaiveDate> {
    NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d").map_err(|_| {
        PocketError::Validation(format!("Invalid date format: '{}'. Use YYYY-MM-DD", date))
    })
}

fn parse_date_or_today(date: Option<String>) -> PocketResult<NaiveDate> {
    match date {
        Some(date) => parse_date(&date),
        None => Ok(chrono::Local::now().date_naive()),
    }
}
