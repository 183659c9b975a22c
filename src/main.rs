//! Command-line interface for crm-seed
//!
//! # Usage Examples
//!
//! ```bash
//! # Generate an association graph and export the denormalized CSV
//! crm-seed generate graph \
//!   --companies 650 --contacts 2500 --min-deals 10000 \
//!   --kinds full,company-contacts --seed 42 -o ./out
//!
//! # Customer pipeline: generate, post, then attach contacts
//! crm-seed generate customers -o ./out
//! crm-seed post customers --file ./out/customers.json \
//!   --endpoint https://crm.example/api
//! crm-seed generate contacts \
//!   --customers-file ./out/customers_updated.json -o ./out
//! crm-seed post contacts --file ./out/customer_contacts.json \
//!   --endpoint https://crm.example/api
//!
//! # Clean up a posted batch
//! crm-seed delete customers --file ./out/customers_updated.json \
//!   --endpoint https://crm.example/api
//! ```

use clap::{Parser, Subcommand};
use crm_seed::args::{ContactsArgs, CustomersArgs, GraphArgs, OpportunitiesArgs, RemoteArgs};
use crm_seed::workflow;

#[derive(Parser)]
#[command(name = "crm-seed")]
#[command(about = "Synthetic CRM record generator with controlled relationship cardinalities")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate entities locally and write JSON/CSV files
    Generate {
        #[command(subcommand)]
        target: GenerateTarget,
    },

    /// Post a generated batch to the remote CRM
    Post {
        #[command(subcommand)]
        target: PostTarget,
    },

    /// Delete a posted batch from the remote CRM
    Delete {
        #[command(subcommand)]
        target: DeleteTarget,
    },
}

#[derive(Subcommand)]
enum GenerateTarget {
    /// Company/contact/deal association graph with CSV exports
    Graph {
        #[command(flatten)]
        args: GraphArgs,
    },
    /// Shaped customer records for the remote CRM
    Customers {
        #[command(flatten)]
        args: CustomersArgs,
    },
    /// Contact people for already-posted customers
    Contacts {
        #[command(flatten)]
        args: ContactsArgs,
    },
    /// Opportunities for already-posted customers
    Opportunities {
        #[command(flatten)]
        args: OpportunitiesArgs,
    },
}

#[derive(Subcommand)]
enum PostTarget {
    Customers {
        #[command(flatten)]
        args: RemoteArgs,
    },
    Contacts {
        #[command(flatten)]
        args: RemoteArgs,
    },
    Opportunities {
        #[command(flatten)]
        args: RemoteArgs,
    },
}

#[derive(Subcommand)]
enum DeleteTarget {
    Customers {
        #[command(flatten)]
        args: RemoteArgs,
    },
    Contacts {
        #[command(flatten)]
        args: RemoteArgs,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Err(e) = run().await {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}

async fn run() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate { target } => match target {
            GenerateTarget::Graph { args } => workflow::generate_graph(&args)?,
            GenerateTarget::Customers { args } => {
                workflow::generate_customers(&args)?;
            }
            GenerateTarget::Contacts { args } => {
                workflow::generate_contacts(&args)?;
            }
            GenerateTarget::Opportunities { args } => {
                workflow::generate_opportunities(&args)?;
            }
        },
        Commands::Post { target } => match target {
            PostTarget::Customers { args } => {
                workflow::post_customers(&args).await?;
            }
            PostTarget::Contacts { args } => {
                workflow::post_contacts(&args).await?;
            }
            PostTarget::Opportunities { args } => {
                workflow::post_opportunities(&args).await?;
            }
        },
        Commands::Delete { target } => match target {
            DeleteTarget::Customers { args } => workflow::delete_customers(&args).await?,
            DeleteTarget::Contacts { args } => workflow::delete_contacts(&args).await?,
        },
    }

    Ok(())
}
