use std::{error::Error, fs, path::PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use expense_tracker::{
    Category, ChartPolicy, Dashboard, HttpTransactionApi, Notification, TransactionId,
    chart_page, series_chart,
};

/// A command line dashboard for the expense tracker.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The base URL of the expense tracker server.
    #[arg(long, env = "EXPENSES_SERVER_URL", default_value = "http://127.0.0.1:3000")]
    server_url: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show every transaction, newest first.
    List,
    /// Add a transaction.
    Add {
        /// The amount spent.
        #[arg(long, allow_hyphen_values = true)]
        amount: String,
        /// What the money was spent on.
        #[arg(long, default_value = "")]
        description: String,
        /// One of groceries, food, entertainment, travel or others.
        #[arg(long)]
        category: Option<Category>,
    },
    /// Change a transaction.
    Edit {
        /// The transaction to change.
        id: TransactionId,
        /// The new amount. Keeps the current one if omitted.
        #[arg(long, allow_hyphen_values = true)]
        amount: Option<String>,
        /// The new description. Keeps the current one if omitted.
        #[arg(long)]
        description: Option<String>,
        /// The new category. Keeps the current one if omitted.
        #[arg(long)]
        category: Option<Category>,
    },
    /// Delete a transaction.
    Delete {
        /// The transaction to delete.
        id: TransactionId,
    },
    /// Write the spending chart to an HTML file.
    Chart {
        /// Which values to plot.
        #[arg(long, value_enum, default_value_t = PolicyArg::RunningTotal)]
        policy: PolicyArg,
        /// How many transactions `recent` plots.
        #[arg(long, default_value_t = 10)]
        limit: usize,
        /// Where to write the page.
        #[arg(long, default_value = "chart.html")]
        output: PathBuf,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy)]
enum PolicyArg {
    RunningTotal,
    Recent,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let args = Args::parse();
    let mut dashboard = Dashboard::new(HttpTransactionApi::new(&args.server_url));
    dashboard.load().await;

    match args.command {
        Command::List => print_transactions(&dashboard),
        Command::Add {
            amount,
            description,
            category,
        } => {
            dashboard.open_create_form();
            let draft = dashboard.draft_mut();
            draft.amount = amount;
            draft.description = description;
            draft.category = category;
            dashboard.submit().await;
            print_transactions(&dashboard);
        }
        Command::Edit {
            id,
            amount,
            description,
            category,
        } => {
            dashboard.open_edit_form(id);
            if dashboard.editing() == Some(id) {
                let draft = dashboard.draft_mut();
                if let Some(amount) = amount {
                    draft.amount = amount;
                }
                if let Some(description) = description {
                    draft.description = description;
                }
                if category.is_some() {
                    draft.category = category;
                }
                dashboard.submit().await;
                print_transactions(&dashboard);
            }
        }
        Command::Delete { id } => {
            dashboard.remove(id).await;
            print_transactions(&dashboard);
        }
        Command::Chart {
            policy,
            limit,
            output,
        } => {
            let policy = match policy {
                PolicyArg::RunningTotal => ChartPolicy::RunningTotal,
                PolicyArg::Recent => ChartPolicy::Recent(limit),
            };
            let chart = series_chart(&dashboard.series(policy), policy);
            fs::write(&output, chart_page(&chart).into_string())?;
            println!("Wrote chart to {}", output.display());
        }
    }

    let notifications = dashboard.take_notifications();
    print_notifications(&notifications);

    if notifications.iter().any(Notification::is_error) {
        std::process::exit(1);
    }

    Ok(())
}

fn print_transactions(dashboard: &Dashboard<HttpTransactionApi>) {
    if dashboard.transactions().is_empty() {
        println!("No transactions yet.");
        return;
    }

    println!(
        "{:>6}  {:>10}  {:<13}  {:<10}  Description",
        "ID", "Amount", "Category", "Date"
    );
    for transaction in dashboard.transactions() {
        println!(
            "{:>6}  {:>10.2}  {:<13}  {:<10}  {}",
            transaction.id,
            transaction.amount,
            transaction.category,
            transaction.created_at.date().to_string(),
            transaction.description
        );
    }
}

fn print_notifications(notifications: &[Notification]) {
    for notification in notifications {
        if notification.is_error() {
            eprintln!("{notification}");
        } else {
            println!("{notification}");
        }
    }
}
