use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use business_directory::{Account, Contact, DirectoryService, VERSION};

/// JSON view printed at the end of a run
#[derive(Serialize)]
struct Snapshot<'a> {
    version: &'static str,
    accounts: Vec<AccountSummary<'a>>,
}

#[derive(Serialize)]
struct AccountSummary<'a> {
    account: &'a Account,
    finance_percentage: f64,
    main_contact: Option<&'a Contact>,
}

fn main() -> Result<()> {
    init_logger();

    info!("Business Directory v{}", VERSION);

    let mut directory = DirectoryService::new();
    run_scenario(&mut directory)?;
    print_snapshot(&directory)?;

    Ok(())
}

fn init_logger() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("business_directory=info,directory=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(false).compact())
        .init();
}

/// Build one account, staff it, then elect its main contact
fn run_scenario(directory: &mut DirectoryService) -> Result<()> {
    let account_id = directory.create_account("FinanceInc", 102).id;
    info!(account_id, "account created");

    let staff = [
        ("Fin", "One", "Mr.", "Finance", 5),
        ("Ops", "Two", "Ms.", "Operational Manager", 3),
        ("Fin", "Three", "Mx.", "Finance", 1),
        ("Admin", "Four", "Dr.", "Administrative", 7),
        ("CEO", "Five", "Mr.", "CEO", 10),
        ("Temp", "Six", "Mx.", "Intern", 0),
    ];

    for (first, last, salutation, rank, years) in staff {
        match directory.create_contact(account_id, first, last, salutation, rank, years) {
            Some(contact) => info!("✓ {}", contact),
            None => warn!(rank, "✗ skipped {} {}", first, last),
        }
    }

    let account = directory
        .get_account(account_id)
        .context("scenario account disappeared")?;
    info!(
        total = account.total_number_of_contacts(),
        finance = account.number_of_finance_employees(),
        "finance share {:.1}%",
        account.get_percentage_of_finance_employees()
    );

    if let Some(main) = directory.set_main_contact_on_account(account_id) {
        info!("main contact: {}", main.full_name());
    }

    Ok(())
}

fn print_snapshot(directory: &DirectoryService) -> Result<()> {
    let snapshot = Snapshot {
        version: VERSION,
        accounts: directory
            .all_accounts()
            .into_iter()
            .map(|account| AccountSummary {
                account,
                finance_percentage: account.get_percentage_of_finance_employees(),
                main_contact: directory.main_contact(account.id),
            })
            .collect(),
    };

    let json = serde_json::to_string_pretty(&snapshot).context("Failed to render snapshot")?;
    println!("{}", json);

    Ok(())
}
