//! Subcommands of the ledger CLI

use std::sync::Arc;

use anyhow::Result;
use clap::Subcommand;
use tracing::info;
use uuid::Uuid;

use chore_core::repositories::{TaskRepository, UserRepository};
use chore_core::services::{
    CatalogService, CreateCatalogItemInput, CreateTaskInput, DashboardService, DashboardSettings,
    SuggestedDoer, TaskService,
};
use chore_core::BalanceCalculator;
use chore_infrastructure::{LedgerStore, MemoryCatalogRepository, MemoryTaskRepository, MemoryUserRepository};

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the dashboard of a group as JSON
    Dashboard {
        #[arg(long)]
        group: Uuid,
    },

    /// Print who should do the next task
    Suggest {
        #[arg(long)]
        group: Uuid,
    },

    /// Record a task and save the ledger
    AddTask {
        #[arg(long)]
        group: Uuid,

        #[arg(long)]
        doer: Uuid,

        /// Member present for the task (repeat for each)
        #[arg(long = "beneficiary", required = true)]
        beneficiaries: Vec<Uuid>,

        /// Points; taken from the catalog item when omitted
        #[arg(long)]
        value: Option<f64>,

        #[arg(long)]
        catalog: Option<Uuid>,
    },

    /// Add a task template to the group catalog and save the ledger
    AddCatalogItem {
        #[arg(long)]
        group: Uuid,

        #[arg(long)]
        name: String,

        #[arg(long)]
        value: f64,

        #[arg(long, default_value = "✅")]
        icon: String,
    },
}

pub struct Ledger {
    store: Arc<LedgerStore>,
    users: Arc<MemoryUserRepository>,
    tasks: Arc<MemoryTaskRepository>,
    task_service: TaskService<MemoryUserRepository, MemoryTaskRepository, MemoryCatalogRepository>,
    catalog_service: CatalogService<MemoryCatalogRepository>,
    dashboard_service: DashboardService<MemoryUserRepository, MemoryTaskRepository, MemoryCatalogRepository>,
}

impl Ledger {
    pub fn new(store: Arc<LedgerStore>, settings: DashboardSettings) -> Self {
        let users = Arc::new(MemoryUserRepository::new(store.clone()));
        let tasks = Arc::new(MemoryTaskRepository::new(store.clone()));
        let catalog = Arc::new(MemoryCatalogRepository::new(store.clone()));

        Self {
            task_service: TaskService::new(users.clone(), tasks.clone(), catalog.clone()),
            catalog_service: CatalogService::new(catalog.clone()),
            dashboard_service: DashboardService::new(users.clone(), tasks.clone(), catalog, settings),
            store,
            users,
            tasks,
        }
    }

    /// Run a command and return what should be printed
    pub async fn run(&self, command: Command) -> Result<String> {
        match command {
            Command::Dashboard { group } => {
                let dashboard = self.dashboard_service.get_group_dashboard(&group).await?;
                Ok(serde_json::to_string_pretty(&dashboard)?)
            }
            Command::Suggest { group } => {
                let (users, tasks) = tokio::try_join!(
                    self.users.find_by_group_id(&group),
                    self.tasks.find_by_group_id(&group),
                )?;
                match BalanceCalculator::new().suggest_next_doer(&users, &tasks) {
                    Some(user) => Ok(serde_json::to_string_pretty(&SuggestedDoer::from(user))?),
                    None => Ok(format!("No members in group {}", group)),
                }
            }
            Command::AddTask {
                group,
                doer,
                beneficiaries,
                value,
                catalog,
            } => {
                let created = self
                    .task_service
                    .create_task(CreateTaskInput {
                        group_id: group,
                        doer_id: doer,
                        catalog_id: catalog,
                        value,
                        beneficiary_ids: beneficiaries,
                    })
                    .await?;
                self.store.persist().await?;

                info!("Task {} added to group {}", created.id, group);
                Ok(serde_json::to_string_pretty(&created)?)
            }
            Command::AddCatalogItem {
                group,
                name,
                value,
                icon,
            } => {
                let item = self
                    .catalog_service
                    .create_item(CreateCatalogItemInput {
                        group_id: group,
                        name,
                        default_value: value,
                        icon,
                    })
                    .await?;
                self.store.persist().await?;

                Ok(serde_json::to_string_pretty(&item)?)
            }
        }
    }
}
