use std::sync::Arc;

use anyhow::Context;
use dotenvy::dotenv;
use tracing::info;
use tracing_appender::rolling;

use comercia::auth::{AccessDecision, check_access};
use comercia::config::Config;
use comercia::model::Role;
use comercia::storage::FileStorage;
use comercia::store::Store;
use comercia::{reports, seed};

/// Demo driver mirroring the app's first load: open the store, seed it if
/// empty, sign in as the bundled admin and log the dashboard figures.
fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let config = Config::from_env();

    // Rolling daily log
    let file_appender = rolling::daily(&config.log_dir, "app.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .with_target(false)
        .with_level(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .init();

    info!(data_dir = %config.data_dir, "starting");

    let storage = FileStorage::open(&config.data_dir)
        .with_context(|| format!("opening data directory {}", config.data_dir))?;
    let store = Store::new(Arc::new(storage));

    seed::initialize(&store).context("seeding collections")?;

    store
        .login("admin", "admin123")
        .context("admin login")?
        .context("seeded admin account is missing")?;

    match check_access(&store, Some(&[Role::Admin]))? {
        AccessDecision::Granted(account) => {
            info!(username = %account.username, "admin dashboard unlocked");
        }
        other => anyhow::bail!("expected admin access, got {other:?}"),
    }

    let dashboard = reports::admin_dashboard(&store)?;
    info!(
        active = dashboard.active_employees,
        total = dashboard.total_employees,
        absences = dashboard.total_absences,
        avg_performance = dashboard.avg_performance,
        avg_ranking = dashboard.avg_ranking,
        "employee overview"
    );

    let summary = reports::client_summary(&store, "client-1")?;
    info!(
        income = summary.income,
        expenses = summary.expenses,
        balance = summary.balance,
        pending_invoices = summary.pending_invoices,
        "client-1 overview"
    );

    store.logout()?;
    Ok(())
}
