use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use chrono::Local;
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use costledger::estimate::{breakdown, estimate, UnitSlots};
use costledger::export::{export_filename, export_workbook};
use costledger::ledger::{Category, CostEntry, CostLedger, EntryId};

#[derive(Parser, Debug)]
#[command(name = "costledger")]
#[command(version)]
#[command(about = "Manage a cost price list, run live estimates, export breakdowns")]
struct Cli {
    /// Path of the persisted cost table
    #[arg(long, global = true, default_value = "cost_data.csv")]
    data_file: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show the current cost table
    List,
    /// Add a new entry to the table
    Add {
        /// Resource display name
        resource: String,
        /// Category: Course Creation, Studio, Talent, or Animation
        category: String,
        /// Internal cost rate per unit
        internal_cost: f64,
        /// Client-facing rate per unit
        billing_price: f64,
    },
    /// Replace an existing row, addressed by position or by id
    Update {
        resource: String,
        category: String,
        internal_cost: f64,
        billing_price: f64,
        /// Row position (as shown by `list`)
        #[arg(long, required_unless_present = "id", conflicts_with = "id")]
        index: Option<usize>,
        /// Stable row id (survives deletes of earlier rows)
        #[arg(long)]
        id: Option<String>,
    },
    /// Delete a row, addressed by position or by id
    Delete {
        /// Row position (as shown by `list`)
        #[arg(required_unless_present = "id")]
        index: Option<usize>,
        /// Stable row id (survives deletes of earlier rows)
        #[arg(long)]
        id: Option<String>,
    },
    /// Compute the live estimate for one resource
    Estimate {
        /// Category of the resource
        category: String,
        /// Resource name within that category
        resource: String,
        /// Units or hours
        units: u64,
        /// Print the estimate as JSON
        #[arg(long)]
        json: bool,
    },
    /// Compute the internal-cost breakdown across the table
    Breakdown {
        #[command(flatten)]
        slots: SlotArgs,
        /// Print the breakdown as JSON
        #[arg(long)]
        json: bool,
    },
    /// Export the breakdown (and optionally an estimate) as a spreadsheet
    Export {
        /// Client name used in the filename
        #[arg(long, default_value = "Client")]
        client: String,
        /// Project name used in the filename
        #[arg(long, default_value = "Project")]
        project: String,
        /// Directory the spreadsheet is written to
        #[arg(long, default_value = ".")]
        output: PathBuf,
        /// Include a live estimate sheet: category, resource, units
        #[arg(long, num_args = 3, value_names = ["CATEGORY", "RESOURCE", "UNITS"])]
        estimate: Option<Vec<String>>,
        #[command(flatten)]
        slots: SlotArgs,
    },
}

/// The nine named unit-count inputs; every slot defaults to 1.
#[derive(Args, Debug)]
struct SlotArgs {
    /// Number of courses (SME)
    #[arg(long, default_value_t = 1)]
    sme: u64,
    /// Number of courses (PM)
    #[arg(long, default_value_t = 1)]
    pm: u64,
    /// Number of courses (Research & LO)
    #[arg(long, default_value_t = 1)]
    research_lo: u64,
    /// Number of courses (Coursewriting)
    #[arg(long, default_value_t = 1)]
    coursewriting: u64,
    /// Number of courses (Scriptwriting)
    #[arg(long, default_value_t = 1)]
    scripts: u64,
    /// Number of courses (Graphic Design)
    #[arg(long, default_value_t = 1)]
    graphic_design: u64,
    /// Number of filming days (Studio Hire)
    #[arg(long, default_value_t = 1)]
    studio_hire: u64,
    /// Talent days per person, total
    #[arg(long, default_value_t = 1)]
    talent: u64,
    /// Seconds of animation
    #[arg(long, default_value_t = 1)]
    animation: u64,
}

impl SlotArgs {
    fn to_slots(&self) -> UnitSlots {
        UnitSlots {
            sme: self.sme,
            pm: self.pm,
            research_lo: self.research_lo,
            coursewriting: self.coursewriting,
            scripts: self.scripts,
            graphic_design: self.graphic_design,
            studio_hire: self.studio_hire,
            talent: self.talent,
            animation: self.animation,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    run(cli)
}

fn run(cli: Cli) -> Result<()> {
    let mut ledger = CostLedger::open(&cli.data_file)
        .with_context(|| format!("failed to open {}", cli.data_file.display()))?;

    match cli.command {
        Command::List => list(&ledger),
        Command::Add {
            resource,
            category,
            internal_cost,
            billing_price,
        } => {
            let entry =
                CostEntry::new(resource.as_str(), category.parse()?, internal_cost, billing_price);
            ledger.add(entry)?;
            println!("{}", format!("Added {} to cost data.", resource).green());
        }
        Command::Update {
            index,
            resource,
            category,
            internal_cost,
            billing_price,
            id,
        } => {
            let entry =
                CostEntry::new(resource.as_str(), category.parse()?, internal_cost, billing_price);
            match id {
                Some(id) => ledger.update_by_id(id.parse::<EntryId>()?, entry)?,
                // required_unless_present guarantees index is set here
                None => ledger.update(index.context("row index required")?, entry)?,
            }
            println!("{}", "Entry updated.".green());
        }
        Command::Delete { index, id } => {
            let removed = match id {
                Some(id) => ledger.delete_by_id(id.parse::<EntryId>()?)?,
                None => ledger.delete(index.context("row index required")?)?,
            };
            println!("{}", format!("Entry deleted: {}.", removed.resource).green());
        }
        Command::Estimate {
            category,
            resource,
            units,
            json,
        } => {
            let category: Category = category.parse()?;
            let Some(result) = estimate(ledger.table(), category, &resource, units) else {
                bail!("no entry named '{}' under category {}", resource, category);
            };
            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                println!("Billing Rate: ${:.2}", result.billing_rate);
                println!("Total Estimated Cost: ${:.2}", result.total);
            }
        }
        Command::Breakdown { slots, json } => {
            let rows = breakdown(ledger.table(), &slots.to_slots());
            if json {
                println!("{}", serde_json::to_string_pretty(&rows)?);
            } else if rows.is_empty() {
                println!("{}", "No resources covered by the breakdown.".yellow());
            } else {
                println!(
                    "{:<24} {:>14} {:>14} {:>20} {:>14}",
                    "Resource", "Internal Cost", "Units / Hours", "Total Internal Cost", "Billing Price"
                );
                for row in &rows {
                    println!(
                        "{:<24} {:>14.2} {:>14} {:>20.2} {:>14.2}",
                        row.resource, row.internal_cost, row.units, row.total_internal, row.billing_price
                    );
                }
            }
        }
        Command::Export {
            client,
            project,
            output,
            estimate: estimate_args,
            slots,
        } => {
            let rows = breakdown(ledger.table(), &slots.to_slots());

            let live = match estimate_args {
                Some(args) => {
                    let category: Category = args[0].parse()?;
                    let units: u64 = args[2]
                        .parse()
                        .with_context(|| format!("'{}' is not a unit count", args[2]))?;
                    let Some(result) = estimate(ledger.table(), category, &args[1], units) else {
                        bail!("no entry named '{}' under category {}", args[1], category);
                    };
                    Some(result)
                }
                None => None,
            };

            let bytes = export_workbook(&rows, live.as_ref())?;
            let filename = export_filename(&client, &project, Local::now().date_naive());
            let path = output.join(&filename);
            fs::write(&path, bytes)
                .with_context(|| format!("failed to write {}", path.display()))?;
            println!("{}", format!("Exported {}", path.display()).green());
        }
    }

    Ok(())
}

fn list(ledger: &CostLedger) {
    let table = ledger.table();
    if table.is_empty() {
        println!("{}", "Cost table is empty.".yellow());
        return;
    }

    println!(
        "{:>3}  {:<36}  {:<24} {:<16} {:>14} {:>14}",
        "#", "Id", "Resource", "Category", "Internal Cost", "Billing Price"
    );
    for (index, row) in table.rows().enumerate() {
        println!(
            "{:>3}  {:<36}  {:<24} {:<16} {:>14.2} {:>14.2}",
            index,
            row.id.to_string(),
            row.entry.resource,
            row.entry.category,
            row.entry.internal_cost,
            row.entry.billing_price
        );
    }
}
