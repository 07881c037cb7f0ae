#![deny(
    clippy::expect_used,
    clippy::panic,
    clippy::todo,
    clippy::unimplemented,
    clippy::unwrap_used
)]
#![allow(clippy::print_stdout)]

use std::sync::Arc;

use ahorros_client::{
    api::ApiClient,
    config::Config,
    display::{format_amount, member_name, payment_date},
    view_model::{PlanDetailSession, PlanDetailState, PlanDetailViewModel, PlansViewModel},
};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "ahorros", version, about = "Group savings plans from the terminal")]
struct Cli {
    /// Path to the YAML configuration file
    #[arg(long, default_value = "config.yaml")]
    config: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List every savings plan
    Plans,
    /// Show a plan with its members, payments and progress
    Show { plan_id: String },
    /// Add a member to a plan
    AddMember {
        plan_id: String,
        #[arg(long)]
        name: String,
        /// Monthly contribution
        #[arg(long)]
        contribution: i64,
    },
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    let cli = Cli::parse();

    // Load and validate configuration first (fail-fast)
    let config = Config::load_from(&cli.config).map_err(|e| anyhow::anyhow!("{e}"))?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.level))
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(
        version = env!("CARGO_PKG_VERSION"),
        base_url = %config.api.base_url,
        "ahorros starting up"
    );

    let api = Arc::new(ApiClient::from_config(&config.api)?);

    match cli.command {
        Command::Plans => list_plans(&api).await,
        Command::Show { plan_id } => {
            let mut session = PlanDetailSession::new(Arc::new(PlanDetailViewModel::from_api(&api)));
            session.load(plan_id);
            session.wait_idle().await;
            let state = session.state().borrow().clone();
            print_plan_detail(&state)
        }
        Command::AddMember {
            plan_id,
            name,
            contribution,
        } => {
            let mut session = PlanDetailSession::new(Arc::new(PlanDetailViewModel::from_api(&api)));
            session.load(plan_id);
            session.wait_idle().await;
            session.create_member(name, contribution);
            session.wait_idle().await;

            let state = session.state().borrow().clone();
            if let Some(error) = state.member_creation_error() {
                anyhow::bail!("could not add member: {error}");
            }
            if state.member_creation_succeeded() {
                println!("Member added.");
            }
            session.clear_member_creation_state();
            print_plan_detail(&state)
        }
    }
}

async fn list_plans(api: &Arc<ApiClient>) -> Result<(), anyhow::Error> {
    let view_model = PlansViewModel::from_api(api);
    view_model.load_plans().await;
    let state = view_model.snapshot();

    if let Some(error) = state.error {
        anyhow::bail!("{error}");
    }
    if state.is_empty() {
        println!("No savings plans yet. Create one to start saving!");
        return Ok(());
    }

    for plan in &state.plans {
        println!(
            "{}  {}  target {} over {} months",
            plan.id,
            plan.name,
            format_amount(plan.target_amount),
            plan.months
        );
    }
    Ok(())
}

fn print_plan_detail(state: &PlanDetailState) -> Result<(), anyhow::Error> {
    if let Some(error) = &state.error {
        anyhow::bail!("{error}");
    }
    let Some(plan) = &state.plan else {
        anyhow::bail!("plan not loaded");
    };

    println!("{}", plan.name);
    if let Some(motive) = &plan.motive {
        println!("  {motive}");
    }
    println!(
        "  {} of {} ({}%), {} to go, {} months",
        format_amount(state.total_collected()),
        format_amount(plan.target_amount),
        state.progress_percent_rounded(),
        format_amount(state.remaining_amount()),
        plan.months
    );

    println!("\nMembers ({})", state.members.len());
    for member in &state.members {
        println!(
            "  {}  {}/month",
            member.name,
            format_amount(member.contribution_per_month)
        );
    }

    println!("\nPayments ({})", state.payments.len());
    if state.payments.is_empty() {
        println!("  No payments recorded");
    }
    for payment in &state.payments {
        println!(
            "  {}  {}  {}",
            payment_date(&payment.date),
            member_name(&state.members, &payment.member_id),
            format_amount(payment.amount)
        );
    }
    Ok(())
}
