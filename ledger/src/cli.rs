//! Command-line view layer
//!
//! Parses operator commands, turns them into record manager calls, and
//! renders the results as plain text.

use clap::{Parser, Subcommand};
use std::fmt::Write as _;
use std::path::PathBuf;

use shared::{
    Aggregates, BoostOrder, Component, OrderDraft, OrderId, OrderReplacement, OrderStatus, Progress,
    ProgressChange, Rank, Region, SearchQuery, ledger_warn, logging,
};

use crate::error::{LedgerError, LedgerResult};
use crate::manager::RecordManager;
use crate::services::DEFAULT_SLOT;
use crate::traits::{Clock, OrderStore};

/// Boost order ledger
#[derive(Parser, Debug)]
#[command(name = "ledger")]
#[command(about = "Tracks boost orders: accounts, ranks, assignment and progress")]
pub struct Args {
    /// Directory holding the order slot
    #[arg(long, env = "LEDGER_STORE_DIR", default_value = "./data")]
    pub store_dir: PathBuf,

    /// Slot key (file name stem) inside the store directory
    #[arg(long, env = "LEDGER_SLOT", default_value = DEFAULT_SLOT)]
    pub slot: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "LEDGER_LOG_LEVEL", default_value = "warn")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Record a new order
    Add {
        #[arg(long)]
        username: String,
        #[arg(long)]
        password: String,
        #[arg(long, default_value = "")]
        region: String,
        #[arg(long, default_value = "")]
        current_rank: String,
        #[arg(long, default_value = "")]
        target_rank: String,
        #[arg(long, default_value = "")]
        price: String,
    },

    /// Delete an order permanently
    Delete { id: OrderId },

    /// Assign an available order to a worker
    Assign { id: OrderId, worker: String },

    /// Change progress of an order in progress
    Progress {
        id: OrderId,
        /// Absolute progress value
        #[arg(long, allow_negative_numbers = true, conflicts_with = "by")]
        set: Option<i64>,
        /// Signed step added to the current progress
        #[arg(long, allow_negative_numbers = true, required_unless_present = "set")]
        by: Option<i64>,
    },

    /// Replace an order record; unspecified fields keep their current values
    Edit {
        id: OrderId,
        #[arg(long)]
        username: Option<String>,
        #[arg(long)]
        password: Option<String>,
        #[arg(long)]
        region: Option<String>,
        #[arg(long)]
        current_rank: Option<String>,
        #[arg(long)]
        target_rank: Option<String>,
        #[arg(long)]
        price: Option<String>,
        #[arg(long)]
        assigned_to: Option<String>,
        #[arg(long)]
        estimated_completion: Option<String>,
        #[arg(long)]
        progress: Option<Progress>,
    },

    /// List orders, optionally filtered
    List {
        /// Case-insensitive match on username or region
        term: Option<String>,
        #[arg(long)]
        status: Option<OrderStatus>,
        #[arg(long)]
        region: Option<String>,
    },

    /// Show every field of one order
    Show { id: OrderId },

    /// Show active and completed counts
    Stats,
}

impl Command {
    /// Order the command addresses by id, if any
    pub fn target(&self) -> Option<OrderId> {
        match self {
            Command::Delete { id }
            | Command::Assign { id, .. }
            | Command::Progress { id, .. }
            | Command::Edit { id, .. }
            | Command::Show { id } => Some(*id),
            Command::Add { .. } | Command::List { .. } | Command::Stats => None,
        }
    }
}

/// Run one command, retrying the save once if it fails
///
/// The process exits after one command, so a change that was applied but not
/// saved would be lost. One `flush` is attempted before giving up; if that
/// also fails the original error is returned.
pub async fn run<S, C>(manager: &mut RecordManager<S, C>, command: Command) -> LedgerResult<String>
where
    S: OrderStore + Send + Sync + 'static,
    C: Clock + Send + Sync + 'static,
{
    let target = command.target();
    let is_add = matches!(command, Command::Add { .. });

    match execute(manager, command).await {
        Err(e) if e.is_persistence_failure() && manager.has_unsaved_changes() => {
            ledger_warn!(Component::Cli, "💾 Save failed, retrying once: {}", e);
            if let Err(retry) = manager.flush().await {
                logging::log_error(Component::Cli, "Retrying save", &retry);
                return Err(e);
            }

            let subject = match target {
                Some(id) => manager.get(id),
                None if is_add => manager.orders().last(),
                None => None,
            };
            let mut out = String::from("Saved on second attempt\n");
            if let Some(order) = subject {
                out.push_str(&render_details(order));
            }
            Ok(out)
        }
        other => other,
    }
}

/// Run one command against the manager and render its result
pub async fn execute<S, C>(manager: &mut RecordManager<S, C>, command: Command) -> LedgerResult<String>
where
    S: OrderStore + Send + Sync + 'static,
    C: Clock + Send + Sync + 'static,
{
    match command {
        Command::Add {
            username,
            password,
            region,
            current_rank,
            target_rank,
            price,
        } => {
            let draft = OrderDraft {
                username,
                password,
                region: region_arg(region),
                current_rank: rank_arg(current_rank),
                target_rank: rank_arg(target_rank),
                price,
            };
            let created = manager.create(draft).await?;
            Ok(format!(
                "Created order {} for '{}' ({})",
                created.id, created.username, created.region
            ))
        }

        Command::Delete { id } => Ok(match manager.delete(id).await? {
            Some(removed) => format!("Deleted order {} ('{}')", id, removed.username),
            None => format!("No order {id}; nothing deleted"),
        }),

        Command::Assign { id, worker } => {
            let order = manager.assign(id, &worker).await?;
            Ok(format!(
                "Order {} assigned to {} on {}",
                order.id, order.assigned_to, order.start_date
            ))
        }

        Command::Progress { id, set, by } => {
            let change = match (set, by) {
                (Some(value), _) => ProgressChange::Set(value),
                (None, Some(delta)) => ProgressChange::By(delta),
                (None, None) => return Err(LedgerError::config("progress needs --set or --by")),
            };
            let order = manager.update_progress(id, change).await?;
            Ok(format!("Order {}: {} ({})", order.id, order.progress, status_badge(order.status)))
        }

        Command::Edit {
            id,
            username,
            password,
            region,
            current_rank,
            target_rank,
            price,
            assigned_to,
            estimated_completion,
            progress,
        } => {
            let current = manager.get(id).ok_or(LedgerError::NotFound { id })?;

            let mut replacement = OrderReplacement::from_current(current);
            if let Some(username) = username {
                replacement = replacement.with_username(username);
            }
            if let Some(password) = password {
                replacement = replacement.with_password(password);
            }
            if let Some(region) = region {
                replacement = replacement.with_region(region_arg(region));
            }
            if let Some(rank) = current_rank {
                replacement = replacement.with_current_rank(rank_arg(rank));
            }
            if let Some(rank) = target_rank {
                replacement = replacement.with_target_rank(rank_arg(rank));
            }
            if let Some(price) = price {
                replacement = replacement.with_price(price);
            }
            if let Some(worker) = assigned_to {
                replacement = replacement.with_assigned_to(worker);
            }
            if let Some(estimate) = estimated_completion {
                replacement = replacement.with_estimated_completion(estimate);
            }
            if let Some(progress) = progress {
                replacement = replacement.with_progress(progress);
            }

            let edited = manager.edit(id, replacement).await?;
            Ok(format!("Updated order {}\n{}", edited.id, render_details(&edited)))
        }

        Command::List {
            term,
            status,
            region,
        } => {
            let query = SearchQuery {
                term: term.unwrap_or_default(),
                status,
                region: region.map(region_arg),
            };
            let view = manager.search(&query);

            let mut out = String::new();
            for order in view.iter() {
                let _ = writeln!(out, "{}", render_row(order));
            }
            if view.is_empty() {
                out.push_str("No orders match\n");
            }
            out.push_str(&render_aggregates(&manager.aggregates()));
            Ok(out)
        }

        Command::Show { id } => manager
            .get(id)
            .map(render_details)
            .ok_or(LedgerError::NotFound { id }),

        Command::Stats => Ok(render_aggregates(&manager.aggregates())),
    }
}

/// Known region typed in any case, otherwise the text as given
fn region_arg(raw: String) -> Region {
    Region::known()
        .into_iter()
        .find(|region| region.as_str().eq_ignore_ascii_case(raw.trim()))
        .unwrap_or_else(|| Region::from(raw))
}

/// Known tier typed in any case, otherwise the text as given
fn rank_arg(raw: String) -> Rank {
    Rank::TIERS
        .iter()
        .find(|tier| tier.as_str().eq_ignore_ascii_case(raw.trim()))
        .cloned()
        .unwrap_or_else(|| Rank::from(raw))
}

pub fn status_badge(status: OrderStatus) -> &'static str {
    match status {
        OrderStatus::Available => "🟢 Available",
        OrderStatus::InProgress => "🟡 In Progress",
        OrderStatus::Completed => "✅ Completed",
    }
}

/// One-line summary used by `list`
pub fn render_row(order: &BoostOrder) -> String {
    let mut row = format!(
        "{}  {:<16} {:<4} {} -> {}  ${}  {}",
        order.id,
        order.username,
        order.region,
        order.current_rank.label(),
        order.target_rank.label(),
        order.price,
        status_badge(order.status)
    );
    if order.status == OrderStatus::InProgress {
        let _ = write!(row, "  [{} {}]", order.assigned_to, order.progress);
    }
    row
}

/// Full record, as shown by `show` and after an edit
pub fn render_details(order: &BoostOrder) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Order {}", order.id);
    let _ = writeln!(out, "  Username:      {}", order.username);
    let _ = writeln!(out, "  Password:      {}", order.password);
    let _ = writeln!(out, "  Region:        {}", order.region.display_name());
    let _ = writeln!(out, "  Price:         ${}", order.price);
    let _ = writeln!(out, "  Current Rank:  {}", order.current_rank.label());
    let _ = writeln!(out, "  Target Rank:   {}", order.target_rank.label());
    let _ = writeln!(out, "  Status:        {}", status_badge(order.status));

    if order.status != OrderStatus::Available {
        let _ = writeln!(out, "  Assigned To:   {}", order.assigned_to);
        let _ = writeln!(out, "  Start Date:    {}", order.start_date);
        let _ = writeln!(out, "  Progress:      {}", order.progress);
    }
    if !order.estimated_completion.is_empty() {
        let _ = writeln!(out, "  Est. Complete: {}", order.estimated_completion);
    }
    if order.current_rank.is_climb_to(&order.target_rank) == Some(false) {
        out.push_str("  Note: target rank is not above current rank\n");
    }
    out
}

pub fn render_aggregates(aggregates: &Aggregates) -> String {
    format!(
        "Active boosts: {}\nCompleted boosts: {}\nAvailable: {}\nTotal: {}\n",
        aggregates.active, aggregates.completed, aggregates.available, aggregates.total
    )
}
