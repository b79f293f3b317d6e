//! # freshservice
//!
//! An async client for the FreshService ITSM REST API (v2).
//!
//! ## Features
//!
//! - **Resources**: tickets, changes, problems, releases, assets, agents,
//!   requesters, contracts, software, the knowledge base, custom objects and
//!   more, each behind a typed service
//! - **Retries**: 429 and 5xx responses are retried with `Retry-After` or
//!   linear jittered backoff
//! - **Cancellation**: every call observes a [`Context`] carrying an
//!   optional deadline and cancellation signal
//! - **Security**: the API key is never logged and is scrubbed from error
//!   messages
//!
//! ## Architecture
//!
//! - [`config`] - Configuration from code or environment variables
//! - [`error`] - Error taxonomy with message sanitization
//! - [`client`] - Authenticated HTTP transport with the retry loop
//! - [`retry`] - Retry predicate and backoff schedule
//! - [`context`] - Cancellation and deadlines
//! - [`models`] - Request and response types
//! - [`services`] - One service per resource family
//!
//! [`Freshservice`] ties them together.
//!
//! ## Configuration
//!
//! [`Config::from_env`] reads:
//!
//! - `FRESHSERVICE_DOMAIN`: account sub-domain (`acme` for `acme.freshservice.com`)
//! - `FRESHSERVICE_API_KEY`: agent API key
//! - `FRESHSERVICE_USER_AGENT` (optional)
//!
//! ## Example
//!
//! ```ignore
//! use freshservice::{Config, Freshservice};
//! use freshservice::models::{tickets, CreateTicketModel, ListTicketsOptions};
//!
//! async fn example() -> Result<(), freshservice::FreshserviceError> {
//!     let fs = Freshservice::new(&Config::from_env()?)?;
//!
//!     let opts = ListTicketsOptions::new().with_page(1, 10);
//!     for ticket in fs.tickets().list(Some(&opts)).await?.data.tickets {
//!         println!("#{} [{}] {}", ticket.id, ticket.status_label(), ticket.subject.unwrap_or_default());
//!     }
//!
//!     let ticket = CreateTicketModel::new("user@example.com", "VPN down", "Cannot connect since 9am")
//!         .with_priority(tickets::priority::HIGH);
//!     let created = fs.tickets().create(&ticket).await?.into_data();
//!     println!("raised #{}", created.id);
//!
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod client;
pub mod config;
pub mod context;
pub mod error;
pub mod models;
pub mod retry;
pub mod services;

pub use client::{Client, Response, Result};
pub use config::Config;
pub use context::{CancelHandle, Context};
pub use error::FreshserviceError;
pub use retry::RetryPolicy;

use services::{
    AgentService, AnnouncementService, AssetService, BusinessHoursService, ChangeService, ContractService,
    CustomObjectService, DepartmentService, LocationService, ProblemService, ProductService, PurchaseOrderService,
    ReleaseService, RequesterService, ServiceCatalogService, SlaPolicyService, SoftwareService, SolutionService,
    TicketService, VendorService,
};

/// Entry point: one configured client and an accessor per resource service.
///
/// Cloning is cheap. Use [`with_context`](Self::with_context) to bind a
/// deadline or cancellation signal to a group of calls.
///
/// ```ignore
/// let (ctx, cancel) = Context::background().with_timeout(Duration::from_secs(5)).with_cancel();
/// let scoped = fs.with_context(ctx);
/// let agents = scoped.agents().list(None).await?;
/// ```
#[derive(Debug, Clone)]
pub struct Freshservice {
    client: Client,
}

impl Freshservice {
    /// Builds the client from validated configuration.
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Self {
            client: Client::new(config)?,
        })
    }

    /// Builds the client from `FRESHSERVICE_*` environment variables.
    pub fn from_env() -> Result<Self> {
        Self::new(&Config::from_env()?)
    }

    /// Wraps an existing transport.
    pub fn from_client(client: Client) -> Self {
        Self { client }
    }

    /// Returns a handle whose calls observe `ctx`.
    pub fn with_context(&self, ctx: Context) -> Self {
        Self {
            client: self.client.with_context(ctx),
        }
    }

    /// The underlying transport, for endpoints without a typed service.
    pub fn client(&self) -> &Client {
        &self.client
    }

    /// Agents and roles.
    pub fn agents(&self) -> AgentService<'_> {
        AgentService::new(&self.client)
    }

    /// Announcements.
    pub fn announcements(&self) -> AnnouncementService<'_> {
        AnnouncementService::new(&self.client)
    }

    /// Assets and asset types.
    pub fn assets(&self) -> AssetService<'_> {
        AssetService::new(&self.client)
    }

    /// Business hours.
    pub fn business_hours(&self) -> BusinessHoursService<'_> {
        BusinessHoursService::new(&self.client)
    }

    /// Changes.
    pub fn changes(&self) -> ChangeService<'_> {
        ChangeService::new(&self.client)
    }

    /// Contracts.
    pub fn contracts(&self) -> ContractService<'_> {
        ContractService::new(&self.client)
    }

    /// Custom objects.
    pub fn custom_objects(&self) -> CustomObjectService<'_> {
        CustomObjectService::new(&self.client)
    }

    /// Departments.
    pub fn departments(&self) -> DepartmentService<'_> {
        DepartmentService::new(&self.client)
    }

    /// Locations.
    pub fn locations(&self) -> LocationService<'_> {
        LocationService::new(&self.client)
    }

    /// Problems.
    pub fn problems(&self) -> ProblemService<'_> {
        ProblemService::new(&self.client)
    }

    /// Products.
    pub fn products(&self) -> ProductService<'_> {
        ProductService::new(&self.client)
    }

    /// Purchase orders.
    pub fn purchase_orders(&self) -> PurchaseOrderService<'_> {
        PurchaseOrderService::new(&self.client)
    }

    /// Releases.
    pub fn releases(&self) -> ReleaseService<'_> {
        ReleaseService::new(&self.client)
    }

    /// Requesters.
    pub fn requesters(&self) -> RequesterService<'_> {
        RequesterService::new(&self.client)
    }

    /// Service catalog.
    pub fn service_catalog(&self) -> ServiceCatalogService<'_> {
        ServiceCatalogService::new(&self.client)
    }

    /// SLA policies.
    pub fn sla_policies(&self) -> SlaPolicyService<'_> {
        SlaPolicyService::new(&self.client)
    }

    /// Software applications.
    pub fn software(&self) -> SoftwareService<'_> {
        SoftwareService::new(&self.client)
    }

    /// Knowledge base.
    pub fn solutions(&self) -> SolutionService<'_> {
        SolutionService::new(&self.client)
    }

    /// Tickets.
    pub fn tickets(&self) -> TicketService<'_> {
        TicketService::new(&self.client)
    }

    /// Vendors.
    pub fn vendors(&self) -> VendorService<'_> {
        VendorService::new(&self.client)
    }
}
